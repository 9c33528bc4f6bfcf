//! Logging setup.
//!
//! The game owns the terminal, so log lines never go to stdout/stderr. When a
//! log path is configured, `tracing` output is appended to that file using
//! the `RUST_LOG` filter (default `info`); otherwise no subscriber is
//! installed and the `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns whether logging is active.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("logging: cannot open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("logging: {}", e))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_means_no_subscriber() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn test_unopenable_path_is_an_error() {
        let dir = std::env::temp_dir().join("tui-flappy-no-such-dir").join("x");
        let err = init(Some(&dir.join("log.txt"))).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }
}
