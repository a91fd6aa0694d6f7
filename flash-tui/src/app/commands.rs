//! Commands: deferred store work requested by the reducer
//!
//! The reducer never performs I/O. It returns commands, the executor runs
//! them off the render path, and each one resolves to exactly one
//! [`Action`] fed back into the reducer.

use libflashcards::{Answer, FlashcardStore, Question, QuestionSelector, Selection};

use super::actions::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a random question from `keys` and look up its answer
    PickQuestion {
        keys: Vec<Question>,
        previous: Option<Question>,
    },

    /// Store a new question with an empty answer
    SaveQuestion { question: Question },

    /// Store the answer for a question
    SaveAnswer { question: Question, answer: Answer },

    /// Sync the store and list its keys
    RefreshKeys,
}

/// Command discriminant, carried by failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    PickQuestion,
    SaveQuestion,
    SaveAnswer,
    RefreshKeys,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandKind::PickQuestion => "pick question",
            CommandKind::SaveQuestion => "save question",
            CommandKind::SaveAnswer => "save answer",
            CommandKind::RefreshKeys => "refresh keys",
        };
        f.write_str(name)
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::PickQuestion { .. } => CommandKind::PickQuestion,
            Command::SaveQuestion { .. } => CommandKind::SaveQuestion,
            Command::SaveAnswer { .. } => CommandKind::SaveAnswer,
            Command::RefreshKeys => CommandKind::RefreshKeys,
        }
    }

    /// Run the command to completion
    ///
    /// Store failures become [`Action::CommandFailed`]; a missing answer
    /// reads as empty.
    pub async fn run(self, store: &dyn FlashcardStore, selector: &QuestionSelector) -> Action {
        let kind = self.kind();
        let outcome = match self {
            Command::PickQuestion { keys, previous } => {
                match selector.pick(&keys, previous.as_deref()) {
                    Selection::Question(question) => store
                        .answer_or_empty(&question)
                        .await
                        .map(|answer| Action::CardLoaded {
                            question: Some(question),
                            answer,
                        }),
                    Selection::Empty => Ok(Action::CardLoaded {
                        question: None,
                        answer: Answer::new(),
                    }),
                }
            }
            Command::SaveQuestion { question } => store
                .set(&question, "")
                .await
                .map(|()| Action::CardSaved { question }),
            Command::SaveAnswer { question, answer } => store
                .set(&question, &answer)
                .await
                .map(|()| Action::CardSaved { question }),
            Command::RefreshKeys => match store.sync().await {
                Ok(()) => store.list_keys().await.map(Action::KeysRefreshed),
                Err(e) => Err(e),
            },
        };

        outcome.unwrap_or_else(|error| {
            tracing::warn!("Command {} failed: {}", kind, error);
            Action::CommandFailed {
                command: kind,
                error,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libflashcards::{MemoryStore, StoreError};

    fn selector() -> QuestionSelector {
        QuestionSelector::with_seed(5, true)
    }

    #[tokio::test]
    async fn test_pick_loads_answer() {
        let store = MemoryStore::with_cards([("2+2", "4")]);
        let action = Command::PickQuestion {
            keys: vec!["2+2".to_string()],
            previous: Some("2+2".to_string()),
        }
        .run(&store, &selector())
        .await;

        match action {
            Action::CardLoaded { question, answer } => {
                assert_eq!(question.as_deref(), Some("2+2"));
                assert_eq!(answer, "4");
            }
            other => panic!("Expected CardLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pick_with_stale_key_swallows_not_found() {
        let store = MemoryStore::new();
        let action = Command::PickQuestion {
            keys: vec!["deleted elsewhere".to_string()],
            previous: None,
        }
        .run(&store, &selector())
        .await;

        match action {
            Action::CardLoaded { question, answer } => {
                assert_eq!(question.as_deref(), Some("deleted elsewhere"));
                assert_eq!(answer, "");
            }
            other => panic!("Expected CardLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pick_empty_keys_is_sentinel() {
        let store = MemoryStore::new();
        let action = Command::PickQuestion {
            keys: Vec::new(),
            previous: None,
        }
        .run(&store, &selector())
        .await;

        assert!(matches!(
            action,
            Action::CardLoaded { question: None, ref answer } if answer.is_empty()
        ));
        assert_eq!(store.call_counts().get, 0);
    }

    #[tokio::test]
    async fn test_save_question_writes_empty_answer() {
        let store = MemoryStore::new();
        let action = Command::SaveQuestion {
            question: "3+3".to_string(),
        }
        .run(&store, &selector())
        .await;

        assert!(matches!(action, Action::CardSaved { ref question } if question == "3+3"));
        assert_eq!(store.get("3+3").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_refresh_syncs_before_listing() {
        let store = MemoryStore::with_cards([("a", "1"), ("b", "2")]);
        let action = Command::RefreshKeys.run(&store, &selector()).await;

        match action {
            Action::KeysRefreshed(keys) => assert_eq!(keys, vec!["a", "b"]),
            other => panic!("Expected KeysRefreshed, got {:?}", other),
        }
        let calls = store.call_counts();
        assert_eq!((calls.sync, calls.list_keys), (1, 1));
    }

    #[tokio::test]
    async fn test_failures_become_command_failed() {
        let store = MemoryStore::new();
        store.fail_with("disk gone");

        let action = Command::SaveAnswer {
            question: "q".to_string(),
            answer: "a".to_string(),
        }
        .run(&store, &selector())
        .await;

        match action {
            Action::CommandFailed { command, error } => {
                assert_eq!(command, CommandKind::SaveAnswer);
                assert_eq!(error, StoreError::StorageFault("disk gone".to_string()));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }

        let action = Command::RefreshKeys.run(&store, &selector()).await;
        assert!(matches!(
            action,
            Action::CommandFailed { command: CommandKind::RefreshKeys, .. }
        ));
        assert_eq!(store.call_counts().list_keys, 0);
    }
}
