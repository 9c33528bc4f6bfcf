//! Key mapping from terminal events to game input.

use crate::types::{InputEvent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to game input.
///
/// Only presses count; auto-repeat and release events are dropped. Every
/// other press maps to some key (possibly [`Key::Other`]) because the
/// instructions screen advances on any key.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_quit_signal(key) {
        return Some(InputEvent::Quit);
    }

    let mapped = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::from_char(c),
        _ => Key::Other,
    };
    Some(InputEvent::Key(mapped))
}

/// Ctrl+C stands in for closing the window.
pub fn is_quit_signal(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Option<InputEvent> {
        map_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(press(KeyCode::Up), Some(InputEvent::Key(Key::Up)));
        assert_eq!(press(KeyCode::Down), Some(InputEvent::Key(Key::Down)));
        assert_eq!(press(KeyCode::Char('k')), Some(InputEvent::Key(Key::Up)));
        assert_eq!(press(KeyCode::Char('J')), Some(InputEvent::Key(Key::Down)));
        assert_eq!(press(KeyCode::Enter), Some(InputEvent::Key(Key::Confirm)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(InputEvent::Key(Key::Jump)));
        assert_eq!(press(KeyCode::Char('r')), Some(InputEvent::Key(Key::Retry)));
        assert_eq!(press(KeyCode::Char('R')), Some(InputEvent::Key(Key::Retry)));
        assert_eq!(press(KeyCode::Char('m')), Some(InputEvent::Key(Key::MenuReturn)));
        assert_eq!(press(KeyCode::Esc), Some(InputEvent::Key(Key::Escape)));
    }

    #[test]
    fn test_unbound_keys_are_other() {
        assert_eq!(press(KeyCode::Char('x')), Some(InputEvent::Key(Key::Other)));
        assert_eq!(press(KeyCode::Tab), Some(InputEvent::Key(Key::Other)));
        assert_eq!(press(KeyCode::F(5)), Some(InputEvent::Key(Key::Other)));
    }

    #[test]
    fn test_quit_signal() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_quit_signal(ctrl_c));
        assert_eq!(map_key_event(ctrl_c), Some(InputEvent::Quit));

        // Plain 'c' and 'q' are ordinary keys.
        assert!(!is_quit_signal(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(press(KeyCode::Char('q')), Some(InputEvent::Key(Key::Other)));
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        assert_eq!(map_key_event(release), None);
        assert_eq!(map_key_event(repeat), None);
    }
}
