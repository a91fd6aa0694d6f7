//! The event loop
//!
//! Terminal input and command outcomes share the executor's channel, so
//! the state machine sees one stream and reduces it strictly in arrival
//! order. The loop is independent of the terminal: drawing is a callback.

use crate::app::{reduce, Action, SessionState};
use crate::error::Result;
use crate::executor::CommandExecutor;

/// Reduce one action and dispatch the commands it produced
///
/// Nothing is dispatched once the state asks to quit.
pub fn step(state: SessionState, action: Action, executor: &CommandExecutor) -> SessionState {
    if action.is_outcome() {
        tracing::debug!("Outcome: {:?}", action);
    }

    let (state, commands) = reduce(state, action);
    if state.should_quit {
        return state;
    }

    executor.dispatch_all(commands);
    state
}

/// Run until quit, drawing the initial state and after every action
///
/// Returns the final state.
pub fn run<F>(
    mut state: SessionState,
    executor: &CommandExecutor,
    mut draw: F,
) -> Result<SessionState>
where
    F: FnMut(&SessionState) -> std::io::Result<()>,
{
    draw(&state)?;

    while let Some(action) = executor.next_action() {
        state = step(state, action, executor);
        if state.should_quit {
            tracing::info!("Quit requested");
            break;
        }
        draw(&state)?;
    }

    Ok(state)
}
