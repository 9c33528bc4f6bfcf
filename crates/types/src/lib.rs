//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # World Dimensions
//!
//! The simulation runs in abstract "world units", independent of the terminal
//! size. The renderer projects world units onto terminal cells.
//!
//! - **Width**: 400 units
//! - **Height**: 600 units
//! - **Player**: 40x30 box at a fixed x of 50
//!
//! # Simulation Constants
//!
//! All per-tick values assume one simulation step per frame:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE` | 60 | Frame driver rate (ticks per second) |
//! | `GRAVITY` | 0.5 | Added to vertical velocity every tick |
//! | `JUMP_IMPULSE` | -10.0 | Velocity assigned by a jump |
//! | `OBSTACLE_SPEED` | 4.0 | Leftward obstacle movement per tick |
//! | `OBSTACLE_GAP` | 180.0 | Vertical opening of every obstacle pair |
//! | `SPAWN_DISTANCE` | 200.0 | Newest pair must travel this far before the next spawn |
//! | `GAP_MARGIN` | 100 | Minimum height of either obstacle rectangle |
//! | `SKY_SPEED` | 0.03 | Background phase advance per tick |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Key, MenuOption, Rect, Screen, WORLD_HEIGHT, WORLD_WIDTH};
//!
//! // Menu options cycle in a fixed order.
//! assert_eq!(MenuOption::from_index(0), MenuOption::Play);
//! assert_eq!(MenuOption::COUNT, 3);
//!
//! // Rectangles overlap only when their interiors intersect.
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
//! assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
//!
//! assert_eq!(Screen::Menu.as_str(), "menu");
//! assert_eq!(Key::from_char(' '), Key::Jump);
//! assert_eq!((WORLD_WIDTH, WORLD_HEIGHT), (400.0, 600.0));
//! ```

/// World width in units
pub const WORLD_WIDTH: f32 = 400.0;

/// World height in units
pub const WORLD_HEIGHT: f32 = 600.0;

/// Frame driver rate in ticks per second (60 ≈ 16.6ms per tick)
pub const TICK_RATE: u32 = 60;

/// Player box width
pub const PLAYER_WIDTH: f32 = 40.0;

/// Player box height
pub const PLAYER_HEIGHT: f32 = 30.0;

/// Fixed horizontal position of the player
pub const PLAYER_X: f32 = 50.0;

/// Gravity added to the vertical velocity once per tick
pub const GRAVITY: f32 = 0.5;

/// Velocity assigned on jump (negative is upward)
pub const JUMP_IMPULSE: f32 = -10.0;

/// Obstacle rectangle width
pub const OBSTACLE_WIDTH: f32 = 60.0;

/// Vertical opening between the top and bottom rectangle of a pair
pub const OBSTACLE_GAP: f32 = 180.0;

/// Leftward obstacle movement per tick
pub const OBSTACLE_SPEED: f32 = 4.0;

/// Distance the newest pair travels from the right edge before the next spawn
pub const SPAWN_DISTANCE: f32 = 200.0;

/// Minimum height of either rectangle in a pair
pub const GAP_MARGIN: u32 = 100;

/// Background phase advance per tick
pub const SKY_SPEED: f32 = 0.03;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    ///
    /// Channels are truncated toward zero.
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t) as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

/// Palette used by the screens.
pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const SKY_BLUE: Rgb = Rgb::new(135, 206, 235);
    pub const SUNSET_ORANGE: Rgb = Rgb::new(254, 216, 177);
    pub const NIGHT_BLUE: Rgb = Rgb::new(25, 25, 112);
}

/// Axis-aligned rectangle in world units.
///
/// `x`/`y` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: the interiors must intersect on both axes.
    ///
    /// Rectangles that only share an edge do not intersect, and a rectangle
    /// without area never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The four screens of the game.
///
/// The cycle is: Menu → Controls → Playing → GameOver → (Playing | Menu)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Controls,
    Playing,
    GameOver,
}

impl Screen {
    /// Convert to lowercase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Controls => "controls",
            Screen::Playing => "playing",
            Screen::GameOver => "game_over",
        }
    }
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Play,
    Scores,
    Exit,
}

impl MenuOption {
    pub const COUNT: usize = 3;

    pub const ALL: [MenuOption; MenuOption::COUNT] =
        [MenuOption::Play, MenuOption::Scores, MenuOption::Exit];

    /// Option at `index`, wrapping modulo [`MenuOption::COUNT`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Play => "Play",
            MenuOption::Scores => "Scores",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Logical keys the game reacts to.
///
/// Any key press the game has no binding for is reported as [`Key::Other`];
/// the instructions screen still treats it as "any key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Jump,
    Retry,
    Escape,
    MenuReturn,
    Other,
}

impl Key {
    /// Map a printable character to a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::Key;
    ///
    /// assert_eq!(Key::from_char('r'), Key::Retry);
    /// assert_eq!(Key::from_char('M'), Key::MenuReturn);
    /// assert_eq!(Key::from_char('x'), Key::Other);
    /// ```
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => Key::Jump,
            'r' | 'R' => Key::Retry,
            'm' | 'M' => Key::MenuReturn,
            'k' | 'K' | 'w' | 'W' => Key::Up,
            'j' | 'J' | 's' | 'S' => Key::Down,
            _ => Key::Other,
        }
    }
}

/// One drained input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A key was pressed
    Key(Key),
    /// Window-close equivalent; ends the process from any screen
    Quit,
}
