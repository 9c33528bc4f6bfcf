//! World aggregate - everything the playing screen simulates.
//!
//! The world owns the player, the obstacle track, the score and the RNG used
//! for gap placement. Resetting is one explicit call; screens never poke at
//! the parts individually to start a new round.

use crate::collision::check_collision;
use crate::obstacles::ObstacleTrack;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::score::Score;
use crate::types::*;

/// Tunable world constants. `Default` matches the shipped game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub tick_rate: u32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    pub obstacle_speed: f32,
    pub spawn_distance: f32,
    pub gap_margin: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tick_rate: TICK_RATE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_distance: SPAWN_DISTANCE,
            gap_margin: GAP_MARGIN,
        }
    }
}

impl WorldConfig {
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate.max(1);
        self
    }

    /// Inclusive range for the height of a pair's top rectangle.
    ///
    /// Keeps both rectangles at least `gap_margin` tall. If the world is too
    /// short for that, the range collapses to its lower end.
    pub fn gap_top_range(&self) -> (u32, u32) {
        let lo = self.gap_margin;
        let hi = (self.height - self.obstacle_gap - self.gap_margin as f32).floor();
        let hi = if hi < lo as f32 { lo } else { hi as u32 };
        (lo, hi)
    }
}

/// Result of one simulated tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Alive,
    Crashed,
}

#[derive(Debug, Clone)]
pub struct World {
    config: WorldConfig,
    pub player: Player,
    pub track: ObstacleTrack,
    pub score: Score,
    rng: SimpleRng,
}

impl World {
    pub fn new(config: WorldConfig, seed: u32) -> Self {
        Self {
            config,
            player: Player::new(&config),
            track: ObstacleTrack::new(&config),
            score: Score::new(config.tick_rate),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Start a fresh round: centered still player, empty track, zero score.
    ///
    /// The RNG keeps running so consecutive rounds get different courses.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.track.clear();
        self.score.reset();
    }

    /// Advance the simulation by one tick.
    ///
    /// Order: gravity, position, obstacle scroll, spawn, collision. The score
    /// only grows on ticks that end without a collision.
    pub fn step(&mut self) -> StepOutcome {
        self.player.apply_gravity();
        self.player.integrate();
        self.track.advance();
        self.track.maybe_spawn(&mut self.rng);

        if check_collision(&self.player.bounds(), &self.track, self.config.height) {
            return StepOutcome::Crashed;
        }
        self.score.tick();
        StepOutcome::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gap_range() {
        assert_eq!(WorldConfig::default().gap_top_range(), (100, 320));
    }

    #[test]
    fn test_gap_range_collapses_on_short_world() {
        let cfg = WorldConfig {
            height: 300.0,
            ..WorldConfig::default()
        };
        assert_eq!(cfg.gap_top_range(), (100, 100));
    }

    #[test]
    fn test_first_step_spawns_and_scores() {
        let mut w = World::new(WorldConfig::default(), 1);
        assert_eq!(w.step(), StepOutcome::Alive);
        assert_eq!(w.track.len(), 1);
        assert_eq!(w.player.velocity, 0.5);
        assert_eq!(w.player.y, 300.5);
        assert!(w.score.value() > 0.0);
    }

    #[test]
    fn test_free_fall_ends_in_crash() {
        let mut w = World::new(WorldConfig::default(), 1);
        let mut ticks = 0;
        while w.step() == StepOutcome::Alive {
            ticks += 1;
            assert!(ticks < 200, "player never hit anything");
        }
        // Whatever was hit, the crash tick did not score.
        assert!((w.score.value() - ticks as f64 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_crash_tick_does_not_score() {
        let mut w = World::new(WorldConfig::default(), 1);
        w.track.spawn_at(40.0, 100.0);
        assert_eq!(w.step(), StepOutcome::Crashed);
        assert_eq!(w.score.value(), 0.0);
    }

    #[test]
    fn test_reset_restores_round_start() {
        let mut w = World::new(WorldConfig::default(), 3);
        for _ in 0..30 {
            w.step();
        }
        w.player.jump();
        w.reset();
        assert_eq!(w.player.y, 300.0);
        assert_eq!(w.player.velocity, 0.0);
        assert!(w.track.is_empty());
        assert_eq!(w.score.value(), 0.0);
    }

    #[test]
    fn test_tick_rate_sets_score_delta() {
        let cfg = WorldConfig::default().with_tick_rate(30);
        let mut w = World::new(cfg, 1);
        w.step();
        assert!((w.score.value() - 1.0 / 30.0).abs() < 1e-12);
    }
}
