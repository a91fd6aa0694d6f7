//! What the screen shows, as plain data
//!
//! [`view`] projects a [`SessionState`] onto the handful of strings the
//! renderer draws. It is pure, so tests can check the display without a
//! terminal.

use libflashcards::NO_QUESTIONS;

use crate::app::keymap::{EDIT_HELP, REVIEW_HELP};
use crate::app::{Mode, ReviewStage, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Text inside the card box
    pub current_text: String,
    pub help_line: &'static str,
    pub input_active: bool,
    pub input_prompt: &'static str,
    pub input_text: String,
    pub status: Option<String>,
    pub error: Option<String>,
}

pub fn view(state: &SessionState) -> View {
    View {
        current_text: current_text(state),
        help_line: match state.mode {
            Mode::Reviewing => REVIEW_HELP,
            Mode::Editing => EDIT_HELP,
        },
        input_active: state.input.is_active(),
        input_prompt: state.input.target().prompt(),
        input_text: state.input.text(),
        status: state.status.message.clone(),
        error: state.last_error.as_ref().map(|e| e.to_string()),
    }
}

fn current_text(state: &SessionState) -> String {
    if let (Mode::Editing, Some(pending)) = (state.mode, &state.pending_question) {
        return pending.clone();
    }

    match (state.stage, &state.current_question) {
        (_, None) => NO_QUESTIONS.to_string(),
        (ReviewStage::ShowingQuestion, Some(question)) => question.clone(),
        (ReviewStage::ShowingAnswer, Some(_)) => state.current_answer.clone().unwrap_or_default(),
    }
}
