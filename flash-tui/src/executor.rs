//! Command executor
//!
//! Bridges the synchronous event loop and async store work, following the
//! same shape as the rest of the TUI: a tokio runtime runs commands, and
//! their outcomes come back on a crossbeam channel. Terminal input is sent
//! into the same channel, so the event loop reads a single ordered stream.
//!
//! # Architecture
//!
//! - `dispatch` returns immediately; the command is queued for a worker
//! - One worker drains the queue in submission order, so a save followed
//!   by a key refresh always observes the save
//! - Each command yields exactly one [`Action`], including when it panics
//!
//! # Example
//!
//! ```no_run
//! use flash_tui::{Command, CommandExecutor};
//! use libflashcards::Config;
//!
//! # fn example() -> flash_tui::Result<()> {
//! let executor = CommandExecutor::open(&Config::default())?;
//! executor.dispatch(Command::RefreshKeys);
//!
//! // Input and outcomes arrive on one stream
//! while let Some(action) = executor.next_action() {
//!     // reduce(state, action)
//! }
//! # Ok(())
//! # }
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::FutureExt;
use libflashcards::{
    Config, FlashcardStore, QuestionSelector, SqliteStore, StoreError, StoreResult,
};
use tokio::sync::mpsc;

use crate::app::{Action, Command, SessionState};
use crate::error::{Result, TuiError};

/// Name of the threads commands run on
pub const WORKER_THREAD_NAME: &str = "flash-worker";

/// Runs commands off the render path
pub struct CommandExecutor {
    runtime: tokio::runtime::Runtime,
    store: Arc<dyn FlashcardStore>,
    selector: Arc<QuestionSelector>,
    queue: mpsc::UnboundedSender<Command>,
    outcome_tx: Sender<Action>,
    outcome_rx: Receiver<Action>,
}

impl CommandExecutor {
    /// Open the configured SQLite store and start the worker
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be created or the store
    /// cannot be opened.
    pub fn open(config: &Config) -> Result<Self> {
        let runtime = build_runtime()?;
        let path = config.database_path();
        let store = runtime.block_on(SqliteStore::open(&path.to_string_lossy()))?;
        tracing::info!("Using flashcard store at {}", store.location());

        let selector = QuestionSelector::new(config.review.avoid_repeat);
        tracing::debug!("Repeat avoidance: {}", selector.avoid_repeat());
        Ok(Self::start(runtime, Arc::new(store), Arc::new(selector)))
    }

    /// Start a worker over an existing store
    pub fn with_store(
        store: Arc<dyn FlashcardStore>,
        selector: Arc<QuestionSelector>,
    ) -> Result<Self> {
        Ok(Self::start(build_runtime()?, store, selector))
    }

    fn start(
        runtime: tokio::runtime::Runtime,
        store: Arc<dyn FlashcardStore>,
        selector: Arc<QuestionSelector>,
    ) -> Self {
        let (queue, mut commands) = mpsc::unbounded_channel::<Command>();
        let (outcome_tx, outcome_rx) = unbounded();

        let worker_store = Arc::clone(&store);
        let worker_selector = Arc::clone(&selector);
        let worker_tx = outcome_tx.clone();
        runtime.spawn(async move {
            while let Some(command) = commands.recv().await {
                let action = execute(command, worker_store.as_ref(), &worker_selector).await;
                if worker_tx.send(action).is_err() {
                    // Receiver dropped, stop
                    break;
                }
            }
        });

        Self {
            runtime,
            store,
            selector,
            queue,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Queue a command; never blocks
    pub fn dispatch(&self, command: Command) {
        tracing::debug!("Dispatching {:?}", command);
        let kind = command.kind();
        if self.queue.send(command).is_err() {
            let _ = self.outcome_tx.send(Action::CommandFailed {
                command: kind,
                error: StoreError::StorageFault("command worker stopped".to_string()),
            });
        }
    }

    /// Queue several commands in order
    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Block until the next action arrives
    ///
    /// The executor holds a sender itself, so this only returns `None` if
    /// the channel is torn down underneath it.
    pub fn next_action(&self) -> Option<Action> {
        self.outcome_rx.recv().ok()
    }

    /// Sender into the action stream, for other producers such as terminal input
    ///
    /// Everything sent here is received in arrival order, interleaved with
    /// command outcomes.
    pub fn inbox(&self) -> Sender<Action> {
        self.outcome_tx.clone()
    }

    /// Wait up to `timeout` for the next outcome
    pub fn next_timeout(&self, timeout: Duration) -> Option<Action> {
        self.outcome_rx.recv_timeout(timeout).ok()
    }

    pub fn store(&self) -> Arc<dyn FlashcardStore> {
        Arc::clone(&self.store)
    }

    /// Run store work to completion on the executor's runtime
    ///
    /// Only for startup; the event loop must use [`CommandExecutor::dispatch`].
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Build the initial state: list the keys once and pick a question
    pub fn bootstrap(&self, char_limit: usize) -> StoreResult<SessionState> {
        let store = self.store.as_ref();
        let selector = self.selector.as_ref();

        self.runtime.block_on(async move {
            let keys = store.list_keys().await?;
            let question = selector.pick_random(&keys).into_question();
            let answer = match question {
                Some(ref q) => store.answer_or_empty(q).await?,
                None => String::new(),
            };

            tracing::debug!("Bootstrapped with {} cards", keys.len());
            Ok::<_, StoreError>(
                SessionState::with_card(keys, question, answer).with_input_limit(char_limit),
            )
        })
    }

    /// Close the store and stop the runtime without waiting on stragglers
    pub fn shutdown(self) {
        let store = Arc::clone(&self.store);

        // The timer must be created inside the runtime
        let closed = self.runtime.block_on(async move {
            tokio::time::timeout(Duration::from_millis(500), store.close()).await
        });
        if closed.is_err() {
            tracing::warn!("Store did not close within 500ms");
        }
        self.runtime.shutdown_timeout(Duration::from_millis(500));
    }
}

/// Run one command, turning a panic into a failure outcome
async fn execute(command: Command, store: &dyn FlashcardStore, selector: &QuestionSelector) -> Action {
    let kind = command.kind();
    match AssertUnwindSafe(command.run(store, selector)).catch_unwind().await {
        Ok(action) => action,
        Err(_) => {
            tracing::warn!("Command {} panicked", kind);
            Action::CommandFailed {
                command: kind,
                error: StoreError::StorageFault(format!("{} panicked", kind)),
            }
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name(WORKER_THREAD_NAME)
        .enable_all()
        .build()
        .map_err(TuiError::Terminal)
}
