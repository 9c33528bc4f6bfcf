//! Framebuffer and style types for terminal rendering.

pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// A cell that shows nothing but its background color.
    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Write `s` starting at (`x`, `y`), stopping at `max_x` (exclusive) or
    /// the buffer edge. Each glyph keeps the background already in its cell,
    /// so text floats over whatever was drawn underneath.
    pub fn print_over(&mut self, x: u16, y: u16, max_x: u16, s: &str, fg: Rgb) {
        let end = max_x.min(self.width);
        for (cx, ch) in (x..end).zip(s.chars()) {
            let bg = self.get(cx, y).map(|c| c.style.bg).unwrap_or_default();
            let style = CellStyle { fg, bg };
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, cell: Cell) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), cell);
            }
        }
    }

    /// The characters of row `y` (empty if out of range).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }

    /// All rows joined with newlines.
    pub fn to_text(&self) -> String {
        let mut all = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            all.push_str(&self.row_text(y));
            all.push('\n');
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'x', CellStyle::default());
        fb.put_char(0, 2, 'x', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_print_over_keeps_background_and_clips() {
        let mut fb = FrameBuffer::new(6, 1);
        let blue = Rgb::new(0, 0, 200);
        fb.fill_rect(0, 0, 6, 1, Cell::new(' ', CellStyle::solid(blue)));
        fb.print_over(1, 0, 4, "hello", Rgb::new(255, 255, 255));

        assert_eq!(fb.row_text(0), " hel  ");
        let c = fb.get(2, 0).unwrap();
        assert_eq!(c.style.bg, blue);
        assert_eq!(c.style.fg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_resize_then_text_dump() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.resize(3, 2);
        fb.put_char(2, 1, 'z', CellStyle::default());
        assert_eq!(fb.to_text(), "   \n  z\n");
    }
}
