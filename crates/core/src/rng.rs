//! RNG module - deterministic gap placement
//!
//! Obstacle gaps are drawn from a small seeded LCG so that a given seed always
//! produces the same obstacle course (useful for tests and benchmarks).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the LCG output; the low bits of a power-of-two
    /// modulus LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [lo, hi] (both inclusive)
    ///
    /// Returns `lo` when the range is empty or inverted.
    pub fn next_range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range(hi - lo + 1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_inclusive_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_range_inclusive(100, 320);
            assert!((100..=320).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = SimpleRng::new(42);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..20_000 {
            match rng.next_range_inclusive(0, 3) {
                0 => seen_lo = true,
                3 => seen_hi = true,
                _ => {}
            }
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range_inclusive(5, 5), 5);
        assert_eq!(rng.next_range_inclusive(9, 2), 9);
    }
}
