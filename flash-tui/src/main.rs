//! flash-tui - Terminal flashcards
//!
//! Shows a random question from the local deck, flips it to reveal the
//! answer, and collects new cards inline.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flash_tui::{
    app::{event::EventHandler, SessionState},
    executor::CommandExecutor,
    session,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, Theme},
    TuiError,
};
use libflashcards::{
    demo::seed_demo_deck,
    logging::{self, LogFormat},
    Config, FlashcardError,
};

#[derive(Parser, Debug)]
#[command(name = "flash-tui")]
#[command(about = "Review and add flashcards in the terminal", long_about = None)]
struct Cli {
    /// Database file (overrides the config file and FLASHCARDS_DB)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Config file (defaults to FLASHCARDS_CONFIG, then ~/.config/flashcards/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Add a few sample cards before starting
    #[arg(long)]
    demo: bool,

    /// Write logs to this file (logging is off without one)
    #[arg(long, value_name = "PATH", env = "FLASHCARDS_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log format (text, json or pretty)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli)?;
    let config = load_config(&cli)?;

    let executor = CommandExecutor::open(&config).with_context(|| {
        format!(
            "Failed to open flashcard store at {}",
            config.database_path().display()
        )
    })?;

    if cli.demo {
        let store = executor.store();
        let seeded = executor
            .block_on(seed_demo_deck(store.as_ref()))
            .map_err(TuiError::from)?;
        if seeded == 0 {
            tracing::info!("Store already has cards, skipping demo deck");
        }
    }

    let state = executor
        .bootstrap(config.ui.input_char_limit)
        .map_err(TuiError::from)
        .context("Failed to load questions")?;
    let theme = Theme::from_config(&config.ui);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, state, &executor, &theme, config.ui.tick_rate_ms);

    let restored = restore_terminal(terminal);
    executor.shutdown();
    tracing::info!("Session ended");

    result?;
    restored?;
    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let mut logging = logging::from_env();
    if let Some(ref path) = cli.log_file {
        logging = logging.with_file(path);
    }
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    logging.verbose = cli.verbose;

    let installed = logging
        .init()
        .map_err(|e| TuiError::Application(format!("Failed to initialize logging: {}", e)))?;
    if installed {
        tracing::debug!("Logging to {:?} as {}", logging.file, logging.format);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match cli.config {
        // An explicit path must exist
        Some(ref path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };

    if let Some(ref db) = cli.db {
        if db.as_os_str().is_empty() {
            return Err(FlashcardError::InvalidInput("--db path cannot be empty".to_string()).into());
        }
        config.storage.path = db.to_string_lossy().into_owned();
    }

    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn run_app(
    terminal: &mut Tui,
    state: SessionState,
    executor: &CommandExecutor,
    theme: &Theme,
    tick_rate_ms: u64,
) -> flash_tui::Result<()> {
    // Terminal input joins command outcomes in one ordered stream
    let input = EventHandler::new(tick_rate_ms).spawn(executor.inbox())?;

    let result = session::run(state, executor, |state| {
        terminal
            .draw(|frame| ui::render(frame, state, theme))
            .map(|_| ())
    });

    input.stop();
    result.map(|_| ())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<FlashcardError>() {
        return e.exit_code();
    }
    1
}
