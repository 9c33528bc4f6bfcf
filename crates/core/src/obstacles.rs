//! Obstacle track - the stream of gapped obstacle pairs
//!
//! Pairs enter at the right edge of the world, scroll left at a constant
//! speed and are retired once their right edge reaches the left boundary.
//! All pairs share the same speed and spawn position, so the track is always
//! ordered by x: the oldest (leftmost) pair sits at the front of the deque and
//! is the only candidate for removal.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::Rect;
use crate::world::WorldConfig;

/// A top and bottom rectangle with a fixed opening between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    pub top: Rect,
    pub bottom: Rect,
}

impl ObstaclePair {
    /// Build a pair at `x` whose opening starts at `gap_top`.
    pub fn new(x: f32, gap_top: f32, width: f32, gap: f32, world_height: f32) -> Self {
        let bottom_y = gap_top + gap;
        Self {
            top: Rect::new(x, 0.0, width, gap_top),
            bottom: Rect::new(x, bottom_y, width, world_height - bottom_y),
        }
    }

    pub fn x(&self) -> f32 {
        self.top.x
    }

    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Height of the top rectangle (where the opening begins).
    pub fn gap_top(&self) -> f32 {
        self.top.h
    }

    pub fn rects(&self) -> [Rect; 2] {
        [self.top, self.bottom]
    }

    fn shift_left(&mut self, dx: f32) {
        self.top.x -= dx;
        self.bottom.x -= dx;
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleTrack {
    pairs: VecDeque<ObstaclePair>,
    world_width: f32,
    world_height: f32,
    pair_width: f32,
    gap: f32,
    speed: f32,
    spawn_distance: f32,
    gap_top_min: u32,
    gap_top_max: u32,
}

impl ObstacleTrack {
    pub fn new(config: &WorldConfig) -> Self {
        let (gap_top_min, gap_top_max) = config.gap_top_range();
        Self {
            pairs: VecDeque::with_capacity(8),
            world_width: config.width,
            world_height: config.height,
            pair_width: config.obstacle_width,
            gap: config.obstacle_gap,
            speed: config.obstacle_speed,
            spawn_distance: config.spawn_distance,
            gap_top_min,
            gap_top_max,
        }
    }

    /// Spawn one pair at the right edge with a uniformly drawn opening.
    pub fn spawn(&mut self, rng: &mut SimpleRng) {
        let gap_top = rng.next_range_inclusive(self.gap_top_min, self.gap_top_max);
        self.spawn_at(self.world_width, gap_top as f32);
    }

    /// Push a pair at an explicit position.
    ///
    /// Pairs must be pushed in non-decreasing x order; `advance` only ever
    /// retires pairs from the front.
    pub fn spawn_at(&mut self, x: f32, gap_top: f32) {
        self.pairs.push_back(ObstaclePair::new(
            x,
            gap_top,
            self.pair_width,
            self.gap,
            self.world_height,
        ));
    }

    /// Scroll every pair left, then retire pairs that left the screen.
    pub fn advance(&mut self) {
        for pair in self.pairs.iter_mut() {
            pair.shift_left(self.speed);
        }
        while self.pairs.front().is_some_and(|p| p.right() <= 0.0) {
            self.pairs.pop_front();
        }
    }

    /// True when the track is empty or the newest pair has travelled far
    /// enough from the right edge.
    pub fn should_spawn(&self) -> bool {
        match self.pairs.back() {
            None => true,
            Some(newest) => newest.x() < self.world_width - self.spawn_distance,
        }
    }

    /// Spawn a pair if the distance policy asks for one. Returns whether it did.
    pub fn maybe_spawn(&mut self, rng: &mut SimpleRng) -> bool {
        if !self.should_spawn() {
            return false;
        }
        self.spawn(rng);
        true
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn newest(&self) -> Option<&ObstaclePair> {
        self.pairs.back()
    }

    /// Pairs in spawn order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a ObstacleTrack {
    type Item = &'a ObstaclePair;
    type IntoIter = std::collections::vec_deque::Iter<'a, ObstaclePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
