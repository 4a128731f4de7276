use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use snapdeck_core::config::KeymapConfig;
use snapdeck_core::gesture::Key;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        // Browser-style keys are fixed and always present
        for (code, key) in [
            (KeyCode::Down, Key::ArrowDown),
            (KeyCode::Up, Key::ArrowUp),
            (KeyCode::PageDown, Key::PageDown),
            (KeyCode::PageUp, Key::PageUp),
            (KeyCode::Char(' '), Key::Space),
            (KeyCode::Home, Key::Home),
            (KeyCode::End, Key::End),
        ] {
            bindings.insert(KeyBinding::simple(code), Action::Section(key));
        }
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::CloseMenu);

        let mut add_binding = |key_str: &str, action: Action| match parse_key_binding(key_str) {
            Some(binding) => {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            }
            None => warn!("Invalid key binding: '{}', ignoring", key_str),
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.toggle_menu, Action::ToggleMenu);
        add_binding(&config.next_section, Action::Section(Key::ArrowDown));
        add_binding(&config.prev_section, Action::Section(Key::ArrowUp));
        add_binding(&config.first_section, Action::Section(Key::Home));
        add_binding(&config.last_section, Action::Section(Key::End));

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "m", "q"
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-n>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Up>", "<Down>", "<Home>", "<End>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}
