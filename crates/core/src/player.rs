//! Player body - vertical physics of the controlled box.

use crate::types::Rect;
use crate::world::WorldConfig;

/// The player-controlled box.
///
/// Only `y` and `velocity` change during play; `x` stays where the world
/// placed it. Nothing here clamps the position: leaving the screen is a
/// collision, detected elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
    gravity: f32,
    impulse: f32,
}

impl Player {
    /// Create a player resting at the vertical center of the world.
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.height / 2.0,
            velocity: 0.0,
            width: config.player_width,
            height: config.player_height,
            gravity: config.gravity,
            impulse: config.jump_impulse,
        }
    }

    pub fn apply_gravity(&mut self) {
        self.velocity += self.gravity;
    }

    pub fn integrate(&mut self) {
        self.y += self.velocity;
    }

    /// Overwrite the velocity with the jump impulse.
    pub fn jump(&mut self) {
        self.velocity = self.impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered_and_still() {
        let cfg = WorldConfig::default();
        let p = Player::new(&cfg);
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 300.0);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_gravity_then_integrate_order() {
        let mut p = Player::new(&WorldConfig::default());
        p.velocity = 2.0;
        p.apply_gravity();
        p.integrate();
        assert_eq!(p.velocity, 2.5);
        assert_eq!(p.y, 302.5);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut p = Player::new(&WorldConfig::default());
        p.velocity = 7.5;
        p.jump();
        assert_eq!(p.velocity, -10.0);

        // A second jump does not stack.
        p.jump();
        assert_eq!(p.velocity, -10.0);

        p.velocity = -3.0;
        p.jump();
        assert_eq!(p.velocity, -10.0);
    }

    #[test]
    fn test_x_never_moves() {
        let mut p = Player::new(&WorldConfig::default());
        for _ in 0..50 {
            p.apply_gravity();
            p.integrate();
        }
        p.jump();
        p.integrate();
        assert_eq!(p.x, 50.0);
    }

    #[test]
    fn test_bounds_track_position() {
        let mut p = Player::new(&WorldConfig::default());
        p.y = 12.0;
        assert_eq!(p.bounds(), Rect::new(50.0, 12.0, 40.0, 30.0));
    }
}
