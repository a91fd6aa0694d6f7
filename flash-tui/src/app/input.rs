//! Input capture for new cards
//!
//! A single-line `tui-textarea` editor plus the prompt it is collecting
//! for. Owned by [`super::SessionState`] and driven only by the reducer.

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{Input, Key, TextArea};

/// What the input is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Question,
    Answer,
}

impl InputTarget {
    pub fn prompt(self) -> &'static str {
        match self {
            InputTarget::Question => "Question: ",
            InputTarget::Answer => "Answer: ",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            InputTarget::Question => "your question here...",
            InputTarget::Answer => "your answer here...",
        }
    }
}

#[derive(Clone)]
pub struct InputCapture {
    textarea: TextArea<'static>,
    target: InputTarget,
    active: bool,
    char_limit: usize,
}

impl std::fmt::Debug for InputCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputCapture")
            .field("target", &self.target)
            .field("active", &self.active)
            .field("text", &self.text())
            .field("char_limit", &self.char_limit)
            .finish()
    }
}

impl InputCapture {
    pub fn new(char_limit: usize) -> Self {
        Self {
            textarea: blank(InputTarget::Question),
            target: InputTarget::Question,
            active: false,
            char_limit,
        }
    }

    /// Start collecting `target` with an empty buffer
    pub fn activate(&mut self, target: InputTarget) {
        self.textarea = blank(target);
        self.target = target;
        self.active = true;
    }

    /// Stop collecting and clear the buffer
    pub fn deactivate(&mut self) {
        self.textarea = blank(InputTarget::Question);
        self.target = InputTarget::Question;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> InputTarget {
        self.target
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Current buffer contents
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Feed a key to the editor
    ///
    /// Returns whether the key was consumed. Ignored when inactive; line
    /// breaks and characters past the limit are refused.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if !self.active {
            return false;
        }

        let input: Input = key.into();
        match input {
            Input { key: Key::Enter, .. } => return false,
            Input {
                key: Key::Char('m' | 'j'),
                ctrl: true,
                ..
            } => return false,
            Input {
                key: Key::Char(_),
                ctrl: false,
                alt: false,
                ..
            } if self.text().chars().count() >= self.char_limit => return false,
            _ => {}
        }

        self.textarea.input(input)
    }

    /// Replace the buffer (used by tests and paste handling)
    pub fn set_text(&mut self, text: &str) {
        self.textarea = blank(self.target);
        let limited: String = text
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .take(self.char_limit)
            .collect();
        self.textarea.insert_str(limited);
    }
}

impl Default for InputCapture {
    fn default() -> Self {
        Self::new(250)
    }
}

fn blank(target: InputTarget) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(target.placeholder());
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_str(input: &mut InputCapture, text: &str) {
        for c in text.chars() {
            input.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_inactive_ignores_keys() {
        let mut input = InputCapture::new(250);
        assert!(!input.input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputCapture::new(250);
        input.activate(InputTarget::Question);

        type_str(&mut input, "3+34");
        input.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));

        assert_eq!(input.text(), "3+3");
    }

    #[test]
    fn test_enter_never_inserts_newline() {
        let mut input = InputCapture::new(250);
        input.activate(InputTarget::Answer);
        type_str(&mut input, "six");

        assert!(!input.input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(input.textarea().lines().len(), 1);
        assert_eq!(input.text(), "six");
    }

    #[test]
    fn test_char_limit() {
        let mut input = InputCapture::new(3);
        input.activate(InputTarget::Question);
        type_str(&mut input, "abcdef");

        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_activate_clears_and_relabels() {
        let mut input = InputCapture::new(250);
        input.activate(InputTarget::Question);
        type_str(&mut input, "what?");

        input.activate(InputTarget::Answer);
        assert_eq!(input.text(), "");
        assert_eq!(input.target().prompt(), "Answer: ");

        input.deactivate();
        assert!(!input.is_active());
        assert_eq!(input.target(), InputTarget::Question);
    }

    #[test]
    fn test_set_text_strips_newlines_and_limits() {
        let mut input = InputCapture::new(5);
        input.activate(InputTarget::Question);
        input.set_text("ab\ncdefg");

        assert_eq!(input.text(), "abcde");
    }
}
