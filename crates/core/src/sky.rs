//! Background color cycle (day → sunset → night → day).
//!
//! The phase advances a little every tick on every screen. Each 100 units of
//! phase blend linearly from one palette color into the next.

use crate::types::palette::{NIGHT_BLUE, SKY_BLUE, SUNSET_ORANGE};
use crate::types::{Rgb, SKY_SPEED};

const SEGMENT: f32 = 100.0;
const CYCLE: f32 = 3.0 * SEGMENT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    phase: f32,
    speed: f32,
}

impl Sky {
    pub fn new(speed: f32) -> Self {
        Self { phase: 0.0, speed }
    }

    /// Step the phase, wrapped to one full cycle.
    pub fn advance(&mut self) {
        self.phase = (self.phase + self.speed).rem_euclid(CYCLE);
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn color(&self) -> Rgb {
        color_at(self.phase)
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self::new(SKY_SPEED)
    }
}

/// Background color for an arbitrary phase.
pub fn color_at(phase: f32) -> Rgb {
    let segment = (phase / SEGMENT).floor() as i64;
    let t = phase.rem_euclid(SEGMENT) / SEGMENT;
    let (from, to) = match segment.rem_euclid(3) {
        0 => (SKY_BLUE, SUNSET_ORANGE),
        1 => (SUNSET_ORANGE, NIGHT_BLUE),
        _ => (NIGHT_BLUE, SKY_BLUE),
    };
    Rgb::lerp(from, to, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_starts() {
        assert_eq!(color_at(0.0), SKY_BLUE);
        assert_eq!(color_at(100.0), SUNSET_ORANGE);
        assert_eq!(color_at(200.0), NIGHT_BLUE);
        assert_eq!(color_at(300.0), SKY_BLUE);
    }

    #[test]
    fn test_midpoint_blends() {
        let c = color_at(50.0);
        assert_eq!(c, Rgb::new(194, 211, 206));
    }

    #[test]
    fn test_advance_moves_phase() {
        let mut sky = Sky::new(0.5);
        for _ in 0..4 {
            sky.advance();
        }
        assert_eq!(sky.phase(), 2.0);
        assert_ne!(sky.color(), Rgb::default());
    }

    #[test]
    fn test_phase_wraps_and_keeps_its_step() {
        let mut sky = Sky::new(0.03);
        // Five hours at 60 frames per second.
        for _ in 0..(5 * 3600 * 60) {
            sky.advance();
        }
        assert!(sky.phase() >= 0.0 && sky.phase() < CYCLE);

        let before = sky.phase();
        sky.advance();
        let step = (sky.phase() - before).rem_euclid(CYCLE);
        assert!((step - 0.03).abs() < 1e-4, "step {}", step);
    }

    #[test]
    fn test_wrap_crosses_back_to_blue() {
        let mut sky = Sky::new(1.0);
        for _ in 0..300 {
            sky.advance();
        }
        assert!(sky.phase() < 1e-3);
        assert_eq!(sky.color(), SKY_BLUE);
    }
}
