//! GameView: projects the game's world units into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Canvas, Game};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, WORLD_HEIGHT, WORLD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the playfield sits in the viewport and how big a cell is.
///
/// `origin_x`/`origin_y` is the first cell inside the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cols: u16,
    pub rows: u16,
    /// World units covered by one column.
    pub unit_x: f32,
    /// World units covered by one row.
    pub unit_y: f32,
}

impl Layout {
    /// Frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (self.cols + 2, self.rows + 2)
    }

    /// Half-open column span covered by `[x0, x1)` in world units.
    fn col_span(&self, x0: f32, x1: f32) -> Option<(u16, u16)> {
        span(x0, x1, self.unit_x, self.cols)
    }

    fn row_span(&self, y0: f32, y1: f32) -> Option<(u16, u16)> {
        span(y0, y1, self.unit_y, self.rows)
    }

    fn col_at(&self, x: f32) -> u16 {
        ((x / self.unit_x).round().max(0.0) as u16).min(self.cols.saturating_sub(1))
    }

    fn row_at(&self, y: f32) -> u16 {
        ((y / self.unit_y).round().max(0.0) as u16).min(self.rows.saturating_sub(1))
    }
}

/// Cells whose centers fall inside `[a, b)`; a non-empty interval that
/// covers no center still gets one cell so thin shapes stay visible.
fn span(a: f32, b: f32, unit: f32, count: u16) -> Option<(u16, u16)> {
    let extent = count as f32 * unit;
    if b <= a || b <= 0.0 || a >= extent {
        return None;
    }
    let start = (a / unit).round().clamp(0.0, count as f32) as u16;
    let mut end = (b / unit).round().clamp(0.0, count as f32) as u16;
    if end <= start {
        if start >= count {
            return Some((count - 1, count));
        }
        end = start + 1;
    }
    Some((start, end))
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Height of a terminal glyph relative to its width.
    cell_aspect: f32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 roughly matches typical terminal glyphs.
        Self {
            cell_aspect: 2.0,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Fit the world into `viewport`, or `None` if there is no room for even
    /// a single cell inside the border.
    pub fn layout(&self, viewport: Viewport) -> Option<Layout> {
        let avail_cols = viewport.width.saturating_sub(2);
        let avail_rows = viewport.height.saturating_sub(2);
        if avail_cols == 0 || avail_rows == 0 {
            return None;
        }

        // Vertical world units per row, large enough to fit both axes.
        let wide = WORLD_WIDTH * self.cell_aspect;
        let unit = (WORLD_HEIGHT / avail_rows as f32).max(wide / avail_cols as f32);

        let rows = ((WORLD_HEIGHT / unit - 1e-3).ceil() as u16).clamp(1, avail_rows);
        let cols = ((wide / unit - 1e-3).ceil() as u16).clamp(1, avail_cols);

        let (frame_w, frame_h) = (cols + 2, rows + 2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Some(Layout {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cols,
            rows,
            unit_x: WORLD_WIDTH / cols as f32,
            unit_y: WORLD_HEIGHT / rows as f32,
        })
    }

    /// Render the current frame of `game` into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the viewport size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let Some(layout) = self.layout(viewport) else {
            return;
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (frame_w, frame_h) = layout.frame_size();
        draw_border(
            fb,
            layout.origin_x - 1,
            layout.origin_y - 1,
            frame_w,
            frame_h,
            border,
        );

        let mut canvas = ViewCanvas::new(fb, layout);
        game.render(&mut canvas);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// [`Canvas`] over the playfield area of a framebuffer.
pub struct ViewCanvas<'a> {
    fb: &'a mut FrameBuffer,
    layout: Layout,
}

impl<'a> ViewCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, layout: Layout) -> Self {
        Self { fb, layout }
    }
}

impl Canvas for ViewCanvas<'_> {
    fn world_width(&self) -> f32 {
        WORLD_WIDTH
    }

    fn fill(&mut self, color: Rgb) {
        let l = self.layout;
        let cell = Cell::new(' ', CellStyle::solid(color));
        self.fb.fill_rect(l.origin_x, l.origin_y, l.cols, l.rows, cell);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let l = self.layout;
        let (Some((c0, c1)), Some((r0, r1))) = (
            l.col_span(rect.x, rect.right()),
            l.row_span(rect.y, rect.bottom()),
        ) else {
            return;
        };
        let cell = Cell::new(' ', CellStyle::solid(color));
        self.fb
            .fill_rect(l.origin_x + c0, l.origin_y + r0, c1 - c0, r1 - r0, cell);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        let l = self.layout;
        let col = l.origin_x + l.col_at(x);
        let row = l.origin_y + l.row_at(y);
        self.fb
            .print_over(col, row, l.origin_x + l.cols, text, color);
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.layout.unit_x
    }

    fn line_height(&self) -> f32 {
        self.layout.unit_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_small_viewport() {
        let l = GameView::default().layout(Viewport::new(22, 22)).unwrap();
        assert_eq!((l.cols, l.rows), (20, 15));
        assert_eq!((l.origin_x, l.origin_y), (1, 3));
        assert_eq!(l.unit_x, 20.0);
        assert_eq!(l.unit_y, 40.0);
    }

    #[test]
    fn test_layout_is_height_bound_on_wide_terminals() {
        let l = GameView::default().layout(Viewport::new(80, 24)).unwrap();
        assert_eq!(l.rows, 22);
        assert_eq!(l.cols, 30);
        assert_eq!(l.origin_y, 1);
        assert_eq!(l.origin_x, 25);
    }

    #[test]
    fn test_layout_needs_room_inside_border() {
        let view = GameView::default();
        assert!(view.layout(Viewport::new(2, 40)).is_none());
        assert!(view.layout(Viewport::new(40, 1)).is_none());
        assert!(view.layout(Viewport::new(3, 3)).is_some());
    }

    #[test]
    fn test_span_rounds_to_cell_centers() {
        // Units of 20: [50, 90) covers cells 3..5 (centers 70 and 90 round in).
        assert_eq!(span(50.0, 90.0, 20.0, 20), Some((3, 5)));
        // Thin interval still gets a cell.
        assert_eq!(span(275.0, 277.0, 40.0, 15), Some((7, 8)));
        // Entirely off to either side.
        assert_eq!(span(-60.0, 0.0, 20.0, 20), None);
        assert_eq!(span(400.0, 460.0, 20.0, 20), None);
        // Partially off the left edge is clipped.
        assert_eq!(span(-30.0, 30.0, 20.0, 20), Some((0, 2)));
    }

    #[test]
    fn test_anchor_top() {
        let l = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .layout(Viewport::new(22, 30))
            .unwrap();
        assert_eq!(l.origin_y, 1);
    }
}
