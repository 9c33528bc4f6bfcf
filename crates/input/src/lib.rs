//! Terminal input module (engine-facing).
//!
//! This module is independent of the game logic. It maps `crossterm` key
//! events into [`crate::types::InputEvent`] and drains everything queued since
//! the previous frame into a fixed-capacity buffer, so the frame driver can
//! hand one frame's worth of input to the state machine.

pub mod drain;
pub mod map;

pub use tui_flappy_types as types;

pub use drain::{
    drain_events, CrosstermEvents, DrainReport, EventSource, FrameInput, MAX_EVENTS_PER_FRAME,
};
pub use map::{is_quit_signal, map_key_event};
