//! Keybinding system
//!
//! This module provides the keybinding infrastructure that maps keyboard input
//! to commands. It supports single keys and modifier combinations.
//!
//! # Design
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `KeyPattern`: Textual representation of keys (e.g., "ctrl+k", "esc")
//! - `Keymap`: Collection of bindings with matching logic
//!
//! Key patterns are textual and serializable, allowing future configuration via files.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+k", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+K"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "a", "1", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+p", "shift+tab", "ctrl+shift+c"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down", "left", "right"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // For single characters, preserve case (e.g., "G" vs "g")
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    // For everything else (modifiers, special keys), lowercase for matching
    let pattern_lower = pattern.to_lowercase();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    // Extract modifiers
    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        // Special keys
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        // Function keys
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        // Single character
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings; unparsable patterns are dropped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                pattern.code == key.code
                    && key_modifiers_match(key.code, pattern.modifiers, key.modifiers)
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Display hint of the first binding for a command
    pub fn hint_for(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.command == command)
            .map(|(binding, _)| binding.hint.as_str())
    }
}

/// Shift is implied by the case of a character, so it only counts for
/// non-character keys
fn key_modifiers_match(code: KeyCode, expected: KeyModifiers, actual: KeyModifiers) -> bool {
    let mask = match code {
        KeyCode::Char(_) => KeyModifiers::CONTROL | KeyModifiers::ALT,
        _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
    };
    (expected & mask) == (actual & mask)
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Command palette
        KeyBinding::new("ctrl+k", "Ctrl+K", CommandPaletteOpen),
        KeyBinding::new("ctrl+p", "Ctrl+P", CommandPaletteOpen),
        // Playground
        KeyBinding::new("f", "f", FontDialogOpen),
        KeyBinding::new("ctrl+s", "Ctrl+S", PlaygroundSync),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_key_pattern() {
        assert_eq!(
            parse_key_pattern("ctrl+k"),
            Some(ParsedKeyPattern {
                code: KeyCode::Char('k'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT,
            })
        );
        assert_eq!(
            parse_key_pattern("shift+tab"),
            Some(ParsedKeyPattern {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::SHIFT,
            })
        );
        assert_eq!(parse_key_pattern("ctrl+nonsense"), None);
    }

    #[test]
    fn test_default_keymap_matches() {
        let keymap = default_keymap();

        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            vec![CommandId::CommandPaletteOpen]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            vec![CommandId::PlaygroundSync]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            vec![CommandId::GlobalClose]
        );
        // Plain 'k' is not bound
        assert!(keymap
            .match_key(&key(KeyCode::Char('k'), KeyModifiers::NONE))
            .is_empty());
    }

    #[test]
    fn test_uppercase_matches_with_shift() {
        let keymap = Keymap::new(vec![KeyBinding::new("G", "G", CommandId::GlobalQuit)]);
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            vec![CommandId::GlobalQuit]
        );
    }

    #[test]
    fn test_hint_for() {
        let keymap = default_keymap();
        assert_eq!(keymap.hint_for(CommandId::CommandPaletteOpen), Some("Ctrl+K"));
        assert_eq!(keymap.hint_for(CommandId::PlaygroundSync), Some("Ctrl+S"));
    }
}
