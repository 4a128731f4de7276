use crossterm::event::{KeyCode, KeyEvent};
use snapdeck_core::gesture::Key;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Key for the keyboard channel of the navigator
    Section(Key),
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// Follow the highlighted menu link
    MenuSelect,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, menu_open: bool, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    let mapped = keymap.get(&binding).copied().unwrap_or(Action::None);

    if !menu_open {
        return match mapped {
            Action::CloseMenu => Action::None,
            other => other,
        };
    }

    // The open menu takes over vertical movement
    match (key.code, mapped) {
        (KeyCode::Enter, _) => Action::MenuSelect,
        (_, Action::Section(Key::ArrowDown)) => Action::MenuDown,
        (_, Action::Section(Key::ArrowUp)) => Action::MenuUp,
        (_, Action::Section(_)) => Action::None,
        (_, Action::ToggleMenu) | (_, Action::CloseMenu) => Action::CloseMenu,
        (_, other) => other,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::PageDown), false, &keymap),
            Action::Section(Key::PageDown)
        );
        assert_eq!(handle_key_event(press(KeyCode::Esc), false, &keymap), Action::None);
        assert_eq!(handle_key_event(press(KeyCode::Char('x')), false, &keymap), Action::None);
    }

    #[test]
    fn test_menu_mode_keys() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Down), true, &keymap), Action::MenuDown);
        assert_eq!(handle_key_event(press(KeyCode::Char('k')), true, &keymap), Action::MenuUp);
        assert_eq!(handle_key_event(press(KeyCode::Enter), true, &keymap), Action::MenuSelect);
        assert_eq!(handle_key_event(press(KeyCode::Char('m')), true, &keymap), Action::CloseMenu);
        assert_eq!(handle_key_event(press(KeyCode::End), true, &keymap), Action::None);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), true, &keymap), Action::Quit);
    }
}
