//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead projects the game's world
//! units onto a framebuffer of character cells that is then diff-flushed to
//! the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Fit the 2:3 world into any terminal while compensating for the ~1:2
//!   aspect of terminal glyphs
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, ViewCanvas, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
