//! Test the event loop against an in-memory store
//!
//! Actions are queued on the executor's inbox the same way the input
//! thread sends them, then the loop runs until it reads a quit.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flash_tui::app::{Action, Phase, SessionState};
use flash_tui::session;
use flash_tui::ui::view;
use flash_tui::CommandExecutor;
use libflashcards::store::CallCounts;
use libflashcards::{MemoryStore, QuestionSelector};

fn executor(store: &MemoryStore) -> CommandExecutor {
    CommandExecutor::with_store(
        Arc::new(store.clone()),
        Arc::new(QuestionSelector::with_seed(5, true)),
    )
    .unwrap()
}

fn key(c: char) -> Action {
    Action::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn enter() -> Action {
    Action::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
}

#[test]
fn test_outcome_queued_before_key_is_reduced_first() {
    let store = MemoryStore::with_cards([("a", "1"), ("b", "2")]);
    let executor = executor(&store);
    let state = SessionState::with_card(vec!["a".into(), "b".into()], Some("a".into()), "1".into());

    let inbox = executor.inbox();
    inbox
        .send(Action::CardLoaded {
            question: Some("b".into()),
            answer: "2".into(),
        })
        .unwrap();
    inbox.send(enter()).unwrap();
    inbox.send(key('q')).unwrap();

    let state = session::run(state, &executor, |_| Ok(())).unwrap();

    // The flip lands on the freshly loaded card
    assert!(state.should_quit);
    assert_eq!(state.current_question.as_deref(), Some("b"));
    assert_eq!(state.phase(), Phase::ShowingAnswer);
    assert_eq!(view(&state).current_text, "2");

    executor.shutdown();
}

#[test]
fn test_quit_dispatches_nothing_and_shuts_down() {
    let store = MemoryStore::with_cards([("a", "1")]);
    let executor = executor(&store);
    let state = SessionState::with_card(vec!["a".into()], Some("a".into()), "1".into());

    let inbox = executor.inbox();
    inbox.send(key('q')).unwrap();
    inbox.send(key('n')).unwrap();

    let state = session::run(state, &executor, |_| Ok(())).unwrap();
    assert!(state.should_quit);

    executor.shutdown();
    assert_eq!(store.call_counts(), CallCounts::default());
}

#[test]
fn test_draws_initial_state_and_after_each_action() {
    let executor = executor(&MemoryStore::new());

    let inbox = executor.inbox();
    inbox.send(Action::Tick).unwrap();
    inbox.send(Action::Resize(80, 24)).unwrap();
    inbox.send(key('q')).unwrap();

    let mut draws = 0;
    session::run(SessionState::new(), &executor, |_| {
        draws += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(draws, 3);
    executor.shutdown();
}

#[test]
fn test_add_card_through_the_loop() {
    let store = MemoryStore::with_cards([("2+2", "4")]);
    let executor = executor(&store);
    let state = SessionState::with_card(vec!["2+2".into()], Some("2+2".into()), "4".into());

    let inbox = executor.inbox();
    for action in [key('c'), key('3'), key('+'), key('3'), enter(), key('6'), enter()] {
        inbox.send(action).unwrap();
    }

    // Quit once the refreshed keys include the new card
    let quit = executor.inbox();
    let mut sent = false;
    let state = session::run(state, &executor, |state| {
        if !sent && state.keys.iter().any(|k| k == "3+3") {
            sent = true;
            quit.send(key('q')).unwrap();
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(state.phase(), Phase::ShowingQuestion);
    assert_eq!(view(&state).status.as_deref(), Some("Saved: 3+3"));
    assert_eq!(store.snapshot().get("3+3").map(String::as_str), Some("6"));

    executor.shutdown();
}
