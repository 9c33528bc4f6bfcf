//! TUI Flappy (workspace facade crate).
//!
//! This package exposes `tui_flappy::{core,input,term,types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`. It also
//! hosts the pieces only the binary needs: run configuration and logging.

pub mod config;
pub mod logging;

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;

pub use config::RunConfig;
