//! Terminal event polling
//!
//! Turns crossterm input into [`TuiEvent`]s, producing a tick whenever
//! nothing arrives within the tick rate. [`EventHandler::spawn`] moves the
//! polling onto its own thread and sends the results into the same stream
//! that carries command outcomes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event, blocking up to the tick rate
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Key releases and repeats are reported on some platforms
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }

    /// Poll on a background thread, sending every event to `sink` as an [`Action`]
    ///
    /// A read error is logged and sent as [`Action::Quit`], which also ends
    /// the thread.
    pub fn spawn(self, sink: Sender<Action>) -> std::io::Result<InputPump> {
        tracing::debug!("Polling terminal input every {:?}", self.tick_rate());

        let stop = Arc::new(AtomicBool::new(false));
        let stopped = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("flash-input".to_string())
            .spawn(move || {
                while !stopped.load(Ordering::Relaxed) {
                    let action = match self.next() {
                        Ok(event) => Action::from(event),
                        Err(e) => {
                            tracing::error!("Terminal input failed: {}", e);
                            Action::Quit
                        }
                    };

                    let quit = action == Action::Quit;
                    if sink.send(action).is_err() || quit {
                        break;
                    }
                }
            })?;

        Ok(InputPump {
            stop,
            handle: Some(handle),
        })
    }
}

/// Handle to the thread started by [`EventHandler::spawn`]
pub struct InputPump {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputPump {
    /// Stop polling and wait for the thread, at most about one tick
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
