use crate::clock::Clock;
use crate::navigator::{Direction, Navigator, ScrollHost};

use super::Disposition;

/// Keys the keyboard channel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "PageDown" => Key::PageDown,
            "PageUp" => Key::PageUp,
            " " | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// Keyboard channel
///
/// Unlike wheel and touch, the keyboard checks the busy flag itself and
/// ignores every key, including Home and End, while a transition settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAdapter;

impl KeyboardAdapter {
    pub fn handle<S: ScrollHost, C: Clock>(
        &self,
        key: Key,
        navigator: &mut Navigator<S, C>,
    ) -> Disposition {
        if navigator.is_busy() {
            return Disposition::PassThrough;
        }

        match key {
            Key::ArrowDown | Key::Space | Key::PageDown => {
                navigator.advance(Direction::Forward);
            }
            Key::ArrowUp | Key::PageUp => {
                navigator.advance(Direction::Backward);
            }
            Key::Home => navigator.go_to(0),
            Key::End => navigator.go_to(navigator.section_count() - 1),
            Key::Other => return Disposition::PassThrough,
        }
        Disposition::Suppress
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::navigator;

    #[test]
    fn test_dom_names() {
        assert_eq!(Key::from_dom_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom_name(" "), Key::Space);
        assert_eq!(Key::from_dom_name("End"), Key::End);
        assert_eq!(Key::from_dom_name("a"), Key::Other);
    }

    #[test]
    fn test_forward_and_backward_keys() {
        let (mut nav, host, clock) = navigator(5);
        let keyboard = KeyboardAdapter;
        let settle = Duration::from_millis(800);

        for key in [Key::ArrowDown, Key::Space, Key::PageDown] {
            assert!(keyboard.handle(key, &mut nav).is_suppressed());
            clock.advance(settle);
        }
        assert_eq!(nav.current_index(), 3);

        for key in [Key::ArrowUp, Key::PageUp] {
            keyboard.handle(key, &mut nav);
            clock.advance(settle);
        }
        assert_eq!(nav.current_index(), 1);
        assert_eq!(host.scrolled(), vec![1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_home_and_end_jump() {
        let (mut nav, _, clock) = navigator(5);
        let keyboard = KeyboardAdapter;

        keyboard.handle(Key::End, &mut nav);
        assert_eq!(nav.current_index(), 4);
        clock.advance(Duration::from_millis(800));
        keyboard.handle(Key::Home, &mut nav);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_unhandled_key_passes_through() {
        let (mut nav, host, _) = navigator(5);
        assert_eq!(KeyboardAdapter.handle(Key::Other, &mut nav), Disposition::PassThrough);
        assert!(host.scrolled().is_empty());
    }

    #[test]
    fn test_busy_skips_everything_including_end() {
        let (mut nav, host, _) = navigator(5);
        let keyboard = KeyboardAdapter;
        keyboard.handle(Key::ArrowDown, &mut nav);

        assert_eq!(keyboard.handle(Key::End, &mut nav), Disposition::PassThrough);
        assert_eq!(keyboard.handle(Key::Space, &mut nav), Disposition::PassThrough);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(host.scrolled(), vec![1]);
    }

    #[test]
    fn test_arrow_up_at_top_still_suppressed() {
        let (mut nav, host, _) = navigator(5);
        assert!(KeyboardAdapter.handle(Key::ArrowUp, &mut nav).is_suppressed());
        assert!(host.scrolled().is_empty());
    }
}
