//! Session state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`), which returns a new value every time.

use libflashcards::{Answer, Question, StoreError};

use super::input::InputCapture;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Reviewing,
    Editing,
}

/// Which side of the card is shown while reviewing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStage {
    ShowingQuestion,
    ShowingAnswer,
}

/// The four states of the machine, derived from [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ShowingQuestion,
    ShowingAnswer,
    AwaitingQuestionText,
    AwaitingAnswerText,
}

/// Root application state
///
/// This is the single source of truth for the session. Exactly one value
/// is live at a time; the event loop replaces it after every action.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Should the application quit?
    pub should_quit: bool,

    pub mode: Mode,

    pub stage: ReviewStage,

    /// Question under review; `None` when the store had no questions
    pub current_question: Option<Question>,

    pub current_answer: Option<Answer>,

    /// Question already written while the answer is being typed
    pub pending_question: Option<Question>,

    /// Most recent command failure, shown as an indicator
    pub last_error: Option<StoreError>,

    /// Last known key snapshot, replaced wholesale on refresh
    pub keys: Vec<Question>,

    /// Text input, active exactly while editing
    pub input: InputCapture,

    /// Status bar state
    pub status: StatusBarState,
}

/// Status bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: Mode::Reviewing,
            stage: ReviewStage::ShowingQuestion,
            current_question: None,
            current_answer: None,
            pending_question: None,
            last_error: None,
            keys: Vec::new(),
            input: InputCapture::default(),
            status: StatusBarState::default(),
        }
    }
}

impl SessionState {
    /// Create new session state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state showing `question` picked from `keys`
    pub fn with_card(keys: Vec<Question>, question: Option<Question>, answer: Answer) -> Self {
        Self {
            keys,
            current_question: question,
            current_answer: Some(answer),
            ..Self::default()
        }
    }

    /// Use `char_limit` for the card input
    pub fn with_input_limit(self, char_limit: usize) -> Self {
        Self {
            input: InputCapture::new(char_limit),
            ..self
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.mode, self.stage, &self.pending_question) {
            (Mode::Editing, _, None) => Phase::AwaitingQuestionText,
            (Mode::Editing, _, Some(_)) => Phase::AwaitingAnswerText,
            (Mode::Reviewing, ReviewStage::ShowingQuestion, _) => Phase::ShowingQuestion,
            (Mode::Reviewing, ReviewStage::ShowingAnswer, _) => Phase::ShowingAnswer,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }
}
