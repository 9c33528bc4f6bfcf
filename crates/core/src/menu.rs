//! Main menu selection.

use crate::types::MenuOption;

/// Highlighted entry of the main menu. Wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(&mut self) {
        self.selected = (self.selected + MenuOption::COUNT - 1) % MenuOption::COUNT;
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::COUNT;
    }

    pub fn index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::from_index(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_play() {
        assert_eq!(Menu::new().selected(), MenuOption::Play);
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let mut m = Menu::new();
        m.up();
        assert_eq!(m.index(), MenuOption::COUNT - 1);
        assert_eq!(m.selected(), MenuOption::Exit);
    }

    #[test]
    fn test_down_from_last_wraps_to_first() {
        let mut m = Menu::new();
        m.down();
        m.down();
        assert_eq!(m.selected(), MenuOption::Exit);
        m.down();
        assert_eq!(m.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut m = Menu::new();
        for _ in 0..MenuOption::COUNT {
            m.down();
        }
        assert_eq!(m.index(), 0);
        for _ in 0..MenuOption::COUNT {
            m.up();
        }
        assert_eq!(m.index(), 0);
    }
}
