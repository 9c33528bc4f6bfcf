//! Survival score: approximately the number of seconds spent playing.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    value: f64,
    per_tick: f64,
}

impl Score {
    /// Create a zeroed score that gains `1 / tick_rate` per tick.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            value: 0.0,
            per_tick: 1.0 / tick_rate.max(1) as f64,
        }
    }

    pub fn tick(&mut self) {
        self.value += self.per_tick;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Score as displayed: truncated to whole seconds.
    pub fn whole(&self) -> u32 {
        self.value as u32
    }
}
