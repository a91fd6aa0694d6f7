//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - Commands: Store work the reducer asks for
//! - State: What is true right now
//! - Reducer: `(State, Action) -> (State, Commands)`

pub mod actions;
pub mod commands;
pub mod event;
pub mod input;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use commands::{Command, CommandKind};
pub use input::{InputCapture, InputTarget};
pub use reducer::{reduce, Transition};
pub use state::{Mode, Phase, ReviewStage, SessionState, StatusBarState};
