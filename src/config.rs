//! Run configuration read from the environment.
//!
//! - `FLAPPY_SEED`: RNG seed for obstacle gaps (default: derived from the clock)
//! - `FLAPPY_FPS`: frame driver rate, clamped to 1..=240 (default: 60)
//! - `FLAPPY_LOG_PATH`: append logs to this file (default: logging off)

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::WorldConfig;
use crate::types::TICK_RATE;

pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub fps: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            fps: TICK_RATE,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value lookup. Unset and blank values fall back to
    /// defaults; values that are set but malformed are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("FLAPPY_SEED") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| anyhow!("config: invalid FLAPPY_SEED value: {}", v))?,
            None => clock_seed(),
        };

        let fps = match get("FLAPPY_FPS") {
            Some(v) => {
                let fps = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("config: invalid FLAPPY_FPS value: {}", v))?;
                fps.clamp(1, MAX_FPS)
            }
            None => TICK_RATE,
        };

        let log_path = get("FLAPPY_LOG_PATH").map(PathBuf::from);

        Ok(Self {
            seed,
            fps,
            log_path,
        })
    }

    /// Wall-clock length of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    pub fn world_config(&self) -> WorldConfig {
        WorldConfig::default().with_tick_rate(self.fps)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
