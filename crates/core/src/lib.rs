//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the screen state machine and the
//! simulation of the playing screen. It has **zero dependencies** on
//! terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same obstacle course
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Anything implementing [`Canvas`] can present it
//!
//! # Module Structure
//!
//! - [`player`]: vertical physics of the player box (gravity, jump impulse)
//! - [`obstacles`]: gapped obstacle pairs scrolling right to left
//! - [`collision`]: strict box overlap plus vertical world bounds
//! - [`score`]: survival time in seconds
//! - [`world`]: aggregate of the above with an explicit reset
//! - [`menu`]: wrapping main-menu selection
//! - [`screens`]: per-screen key handling and drawing
//! - [`game_state`]: the frame-level state machine
//! - [`canvas`]: draw-command seam used by every screen
//! - [`sky`]: background color cycle
//! - [`rng`]: seeded LCG for gap placement
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::{Flow, Game, WorldConfig};
//! use tui_flappy_types::{InputEvent, Key, Screen};
//!
//! let mut game = Game::new(WorldConfig::default(), 12345);
//!
//! // Menu -> instructions -> play.
//! game.tick(&[InputEvent::Key(Key::Confirm)]);
//! assert_eq!(game.screen(), Screen::Controls);
//! game.tick(&[InputEvent::Key(Key::Other)]);
//! assert_eq!(game.screen(), Screen::Playing);
//!
//! // Flap once, then let the simulation run.
//! assert_eq!(game.tick(&[InputEvent::Key(Key::Jump)]), Flow::Continue);
//! assert!(game.world().player.velocity < 0.0);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: one [`Game::tick`] per frame at
//! [`types::TICK_RATE`] frames per second. All physics constants are per tick.

pub mod canvas;
pub mod collision;
pub mod game_state;
pub mod menu;
pub mod obstacles;
pub mod player;
pub mod rng;
pub mod score;
pub mod screens;
pub mod sky;
pub mod world;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, DrawCommand, DrawList};
pub use collision::check_collision;
pub use game_state::{Flow, Game};
pub use menu::Menu;
pub use obstacles::{ObstaclePair, ObstacleTrack};
pub use player::Player;
pub use rng::SimpleRng;
pub use score::Score;
pub use screens::{ScreenHandler, Transition};
pub use sky::Sky;
pub use world::{StepOutcome, World, WorldConfig};
