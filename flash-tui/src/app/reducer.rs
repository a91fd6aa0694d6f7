//! Reducer: `(State, Action) -> (State, Commands)`
//!
//! The reducer computes the next state and the commands to run. It does
//! no I/O; store work is described by [`Command`] values that the executor
//! runs in the background, and their outcomes come back as actions.
//!
//! Every rule here is independent of the order in which concurrently
//! issued commands complete.

use crossterm::event::KeyEvent;

use super::actions::Action;
use super::commands::Command;
use super::input::InputTarget;
use super::keymap::{classify, BoundKey};
use super::state::{Mode, ReviewStage, SessionState, StatusBarState};

/// Next state plus the commands to dispatch
pub type Transition = (SessionState, Vec<Command>);

/// Apply one action
///
/// Matches every [`Action`] variant explicitly so a new variant fails to
/// compile until it is handled here.
#[deny(clippy::wildcard_enum_match_arm)]
pub fn reduce(state: SessionState, action: Action) -> Transition {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => (state, Vec::new()),
        Action::Resize(_, _) => (state, Vec::new()),

        // === Intents ===
        Action::Quit => (
            SessionState {
                should_quit: true,
                ..state
            },
            Vec::new(),
        ),
        Action::Flip => flip(state),
        Action::NextQuestion => next_question(state),
        Action::StartEditing => start_editing(state),
        Action::SubmitInput => submit_input(state),
        Action::CancelEditing => cancel_editing(state),
        Action::DismissError => (
            SessionState {
                last_error: None,
                ..state
            },
            Vec::new(),
        ),

        // === Command outcomes ===
        Action::KeysRefreshed(keys) => (SessionState { keys, ..state }, Vec::new()),

        // Only touches reviewing fields, so a late arrival during editing is harmless
        Action::CardLoaded { question, answer } => (
            SessionState {
                current_question: question,
                current_answer: Some(answer),
                stage: ReviewStage::ShowingQuestion,
                ..state
            },
            Vec::new(),
        ),

        Action::CardSaved { question } => (
            SessionState {
                status: StatusBarState {
                    message: Some(format!("Saved: {}", question)),
                },
                ..state
            },
            Vec::new(),
        ),

        Action::CommandFailed { command, error } => {
            tracing::debug!("Recording failure of {}: {}", command, error);
            (
                SessionState {
                    last_error: Some(error),
                    ..state
                },
                Vec::new(),
            )
        }
    }
}

/// Handle keyboard input
///
/// Maps keys to intents. While editing, unbound keys go to the input.
fn handle_key(state: SessionState, key: KeyEvent) -> Transition {
    let bound = classify(&key);

    // Global keybindings (work everywhere)
    if bound == BoundKey::ForceQuit {
        return reduce(state, Action::Quit);
    }

    match state.mode {
        Mode::Editing => match bound {
            BoundKey::Confirm => reduce(state, Action::SubmitInput),
            BoundKey::Back => reduce(state, Action::CancelEditing),
            _ => {
                let mut input = state.input;
                input.input(key);
                (SessionState { input, ..state }, Vec::new())
            }
        },
        Mode::Reviewing => match bound {
            BoundKey::Quit => reduce(state, Action::Quit),
            BoundKey::Confirm => reduce(state, Action::Flip),
            BoundKey::Next => reduce(state, Action::NextQuestion),
            BoundKey::EditStart => reduce(state, Action::StartEditing),
            BoundKey::Back if state.last_error.is_some() => reduce(state, Action::DismissError),
            _ => (state, Vec::new()),
        },
    }
}

fn flip(state: SessionState) -> Transition {
    // The answer side needs a question that exists in the store
    if state.mode != Mode::Reviewing || state.current_question.is_none() {
        return (state, Vec::new());
    }

    let stage = match state.stage {
        ReviewStage::ShowingQuestion => ReviewStage::ShowingAnswer,
        ReviewStage::ShowingAnswer => ReviewStage::ShowingQuestion,
    };
    (SessionState { stage, ..state }, Vec::new())
}

fn next_question(state: SessionState) -> Transition {
    if state.mode != Mode::Reviewing {
        return (state, Vec::new());
    }

    let command = Command::PickQuestion {
        keys: state.keys.clone(),
        previous: state.current_question.clone(),
    };
    (
        SessionState {
            stage: ReviewStage::ShowingQuestion,
            ..state
        },
        vec![command],
    )
}

fn start_editing(state: SessionState) -> Transition {
    if state.mode != Mode::Reviewing {
        return (state, Vec::new());
    }

    let mut input = state.input;
    input.activate(InputTarget::Question);
    (
        SessionState {
            mode: Mode::Editing,
            pending_question: None,
            input,
            ..state
        },
        Vec::new(),
    )
}

fn submit_input(state: SessionState) -> Transition {
    if state.mode != Mode::Editing {
        return (state, Vec::new());
    }

    // Stored as typed; trimming only decides whether a question is blank
    let text = state.input.text();
    let mut input = state.input;

    match state.pending_question {
        None => {
            if text.trim().is_empty() {
                return (SessionState { input, ..state }, Vec::new());
            }

            input.activate(InputTarget::Answer);
            (
                SessionState {
                    pending_question: Some(text.clone()),
                    input,
                    ..state
                },
                vec![Command::SaveQuestion { question: text }],
            )
        }
        Some(question) => {
            input.deactivate();
            (
                SessionState {
                    mode: Mode::Reviewing,
                    stage: ReviewStage::ShowingQuestion,
                    pending_question: None,
                    input,
                    ..state
                },
                vec![
                    Command::SaveAnswer {
                        question,
                        answer: text,
                    },
                    Command::RefreshKeys,
                ],
            )
        }
    }
}

fn cancel_editing(state: SessionState) -> Transition {
    if state.mode != Mode::Editing {
        return (state, Vec::new());
    }

    // A question written before the cancel stays, with an empty answer
    let commands = if state.pending_question.is_some() {
        vec![Command::RefreshKeys]
    } else {
        Vec::new()
    };

    let mut input = state.input;
    input.deactivate();
    (
        SessionState {
            mode: Mode::Reviewing,
            stage: ReviewStage::ShowingQuestion,
            pending_question: None,
            input,
            ..state
        },
        commands,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;
    use libflashcards::StoreError;

    fn reviewing(question: &str, answer: &str) -> SessionState {
        SessionState::with_card(
            vec![question.to_string()],
            Some(question.to_string()),
            answer.to_string(),
        )
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = SessionState::new();
        let before = state.clone();

        let (new_state, commands) = reduce(
            before.clone(),
            Action::CardSaved {
                question: "q".to_string(),
            },
        );

        // Original state unchanged
        assert!(before.status.message.is_none());
        assert!(commands.is_empty());

        // New state has the change
        assert_eq!(new_state.status.message.as_deref(), Some("Saved: q"));
    }

    #[test]
    fn test_quit_action() {
        let (state, commands) = reduce(SessionState::new(), Action::Quit);
        assert!(state.should_quit);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_flip_twice_returns_to_question() {
        let state = reviewing("2+2", "4");

        let (state, _) = reduce(state, Action::Flip);
        assert_eq!(state.phase(), Phase::ShowingAnswer);

        let (state, _) = reduce(state, Action::Flip);
        assert_eq!(state.phase(), Phase::ShowingQuestion);
    }

    #[test]
    fn test_flip_without_question_is_noop() {
        let (state, _) = reduce(SessionState::new(), Action::Flip);
        assert_eq!(state.phase(), Phase::ShowingQuestion);
    }

    #[test]
    fn test_next_question_uses_snapshot_and_previous() {
        let state = reviewing("2+2", "4");
        let (state, _) = reduce(state, Action::Flip);

        let (state, commands) = reduce(state, Action::NextQuestion);

        assert_eq!(state.stage, ReviewStage::ShowingQuestion);
        assert_eq!(
            commands,
            vec![Command::PickQuestion {
                keys: vec!["2+2".to_string()],
                previous: Some("2+2".to_string()),
            }]
        );
    }

    #[test]
    fn test_submit_empty_question_is_ignored() {
        let (state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);
        let (state, commands) = reduce(state, Action::SubmitInput);

        assert!(commands.is_empty());
        assert_eq!(state.phase(), Phase::AwaitingQuestionText);
    }

    #[test]
    fn test_whitespace_question_is_ignored() {
        let (mut state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);
        state.input.set_text("   ");

        let (state, commands) = reduce(state, Action::SubmitInput);
        assert!(commands.is_empty());
        assert_eq!(state.phase(), Phase::AwaitingQuestionText);
    }

    #[test]
    fn test_input_is_saved_as_typed() {
        let (mut state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);
        state.input.set_text(" 3+3 ");
        let (mut state, commands) = reduce(state, Action::SubmitInput);
        assert_eq!(
            commands,
            vec![Command::SaveQuestion {
                question: " 3+3 ".to_string()
            }]
        );

        state.input.set_text("  six  ");
        let (_, commands) = reduce(state, Action::SubmitInput);
        assert_eq!(
            commands[0],
            Command::SaveAnswer {
                question: " 3+3 ".to_string(),
                answer: "  six  ".to_string()
            }
        );
    }

    #[test]
    fn test_submit_question_then_answer() {
        let (mut state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);
        state.input.set_text("3+3");

        let (mut state, commands) = reduce(state, Action::SubmitInput);
        assert_eq!(
            commands,
            vec![Command::SaveQuestion {
                question: "3+3".to_string()
            }]
        );
        assert_eq!(state.phase(), Phase::AwaitingAnswerText);
        assert_eq!(state.input.text(), "");

        state.input.set_text("6");
        let (state, commands) = reduce(state, Action::SubmitInput);
        assert_eq!(
            commands,
            vec![
                Command::SaveAnswer {
                    question: "3+3".to_string(),
                    answer: "6".to_string()
                },
                Command::RefreshKeys,
            ]
        );
        assert_eq!(state.phase(), Phase::ShowingQuestion);
        assert!(!state.input.is_active());
    }

    #[test]
    fn test_cancel_after_question_refreshes_keys() {
        let (mut state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);
        state.input.set_text("3+3");
        let (state, _) = reduce(state, Action::SubmitInput);

        let (state, commands) = reduce(state, Action::CancelEditing);
        assert_eq!(commands, vec![Command::RefreshKeys]);
        assert_eq!(state.mode, Mode::Reviewing);
        assert!(state.pending_question.is_none());
    }

    #[test]
    fn test_late_card_loaded_during_editing_keeps_mode() {
        let (state, _) = reduce(reviewing("2+2", "4"), Action::StartEditing);

        let (state, _) = reduce(
            state,
            Action::CardLoaded {
                question: Some("other".to_string()),
                answer: "x".to_string(),
            },
        );

        assert_eq!(state.phase(), Phase::AwaitingQuestionText);
        assert_eq!(state.current_question.as_deref(), Some("other"));
        assert!(state.input.is_active());
    }

    #[test]
    fn test_command_failed_records_error_only() {
        let state = reviewing("2+2", "4");
        let (state, commands) = reduce(
            state,
            Action::CommandFailed {
                command: crate::app::commands::CommandKind::RefreshKeys,
                error: StoreError::StorageFault("io".to_string()),
            },
        );

        assert!(commands.is_empty());
        assert_eq!(
            state.last_error,
            Some(StoreError::StorageFault("io".to_string()))
        );
        assert_eq!(state.current_answer.as_deref(), Some("4"));

        let (state, _) = reduce(state, Action::DismissError);
        assert!(state.last_error.is_none());
    }
}
