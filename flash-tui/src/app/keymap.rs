//! Keybindings
//!
//! Translates raw terminal keys into the discrete keys the state machine
//! understands. Anything unbound is [`BoundKey::Other`] and, while the
//! input is active, goes to the text field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKey {
    /// Enter
    Confirm,
    /// `q` (reviewing only)
    Quit,
    /// Ctrl+C, in every mode
    ForceQuit,
    /// `n`
    Next,
    /// `c`
    EditStart,
    /// Esc
    Back,
    Other,
}

/// Classify a key press
pub fn classify(key: &KeyEvent) -> BoundKey {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => BoundKey::ForceQuit,
        (KeyCode::Enter, _) => BoundKey::Confirm,
        (KeyCode::Esc, _) => BoundKey::Back,
        (KeyCode::Char('q'), KeyModifiers::NONE) => BoundKey::Quit,
        (KeyCode::Char('n'), KeyModifiers::NONE) => BoundKey::Next,
        (KeyCode::Char('c'), KeyModifiers::NONE) => BoundKey::EditStart,
        _ => BoundKey::Other,
    }
}

/// Help line for reviewing
pub const REVIEW_HELP: &str = "enter: flip • n: next • c: add question • esc: dismiss • q: quit";

/// Help line while the input is active
pub const EDIT_HELP: &str = "enter: confirm • esc: back • ctrl+c: quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(classify(&key(KeyCode::Enter, KeyModifiers::NONE)), BoundKey::Confirm);
        assert_eq!(classify(&key(KeyCode::Esc, KeyModifiers::NONE)), BoundKey::Back);
        assert_eq!(classify(&key(KeyCode::Char('q'), KeyModifiers::NONE)), BoundKey::Quit);
        assert_eq!(classify(&key(KeyCode::Char('n'), KeyModifiers::NONE)), BoundKey::Next);
        assert_eq!(classify(&key(KeyCode::Char('c'), KeyModifiers::NONE)), BoundKey::EditStart);
        assert_eq!(
            classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            BoundKey::ForceQuit
        );
    }

    #[test]
    fn test_shifted_letters_are_unbound() {
        assert_eq!(classify(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), BoundKey::Other);
        assert_eq!(classify(&key(KeyCode::Char('x'), KeyModifiers::NONE)), BoundKey::Other);
    }
}
