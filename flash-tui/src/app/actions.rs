//! Actions for the reducer pattern
//!
//! Everything the state machine reacts to is an [`Action`]: terminal
//! input, intents derived from keybindings, and the outcomes of
//! background commands. Both kinds arrive on the same ordered stream.

use crossterm::event::KeyEvent;
use libflashcards::{Answer, Question, StoreError};

use super::commands::CommandKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Intents ===
    /// Quit the application
    Quit,

    /// Toggle between question and answer
    Flip,

    /// Ask for another random question
    NextQuestion,

    /// Open the input to add a card
    StartEditing,

    /// Confirm the current input
    SubmitInput,

    /// Leave editing without saving the pending text
    CancelEditing,

    /// Clear the error indicator
    DismissError,

    // === Command outcomes ===
    /// A fresh key snapshot
    KeysRefreshed(Vec<Question>),

    /// A question/answer pair to show; `None` when the store is empty
    CardLoaded {
        question: Option<Question>,
        answer: Answer,
    },

    /// A write finished
    CardSaved { question: Question },

    /// A command failed
    CommandFailed { command: CommandKind, error: StoreError },
}

impl Action {
    /// Whether this action is the outcome of a background command
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            Action::KeysRefreshed(_)
                | Action::CardLoaded { .. }
                | Action::CardSaved { .. }
                | Action::CommandFailed { .. }
        )
    }
}
