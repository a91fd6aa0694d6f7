//! flash-tui library
//!
//! Exports the state machine, command executor and rendering for the
//! binary and for tests.

pub mod app;
pub mod error;
pub mod executor;
pub mod session;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, Command, Mode, Phase, ReviewStage, SessionState};
pub use error::{Result, TuiError};
pub use executor::CommandExecutor;
