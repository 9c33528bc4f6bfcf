//! Draw-command seam between the game and whatever presents it.
//!
//! Screens describe a frame in world units through [`Canvas`]. The terminal
//! view implements it by projecting onto character cells; [`DrawList`]
//! records the commands so rendering can be inspected without a terminal.

use crate::types::{Rect, Rgb};

pub trait Canvas {
    /// Width of the drawable area in world units.
    fn world_width(&self) -> f32;

    /// Paint the whole drawable area.
    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw text with its top-left corner at (`x`, `y`).
    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb);

    /// Width `text` occupies when drawn, in world units.
    fn text_width(&self, text: &str) -> f32;

    /// Height of one line of text, in world units.
    fn line_height(&self) -> f32;

    /// Draw text horizontally centered; returns the left x it was drawn at.
    fn text_centered(&mut self, y: f32, text: &str, color: Rgb) -> f32 {
        let x = (self.world_width() - self.text_width(text)) / 2.0;
        self.text(x, y, text, color);
        x
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Rgb),
    Rect(Rect, Rgb),
    Text { x: f32, y: f32, text: String, color: Rgb },
}

/// A canvas that only records what was drawn.
///
/// Text metrics are a fixed advance per character and a fixed line height.
#[derive(Debug, Clone)]
pub struct DrawList {
    width: f32,
    char_width: f32,
    line_height: f32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            char_width: 10.0,
            line_height: 20.0,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgb)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect(r, color) => Some((r, color)),
            _ => None,
        })
    }

    /// Color of the first text command whose content equals `text`.
    pub fn text_color(&self, text: &str) -> Option<Rgb> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text: t, color, .. } if t == text => Some(*color),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn world_width(&self) -> f32 {
        self.width
    }

    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
