//! `todos` - a terminal client for a remote todo list
//!
//! ```sh
//! TODOS_API_URL=http://localhost:3000 todos
//! todos --api-url http://localhost:3000 --log-file todos.log
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use todos_core::{Config, HttpRemote, TodosStore, API_URL_ENV};
use todos_tui::{TodosRuntime, TodosUi, UiAction};
use tracing_subscriber::EnvFilter;

/// Keep a remote todo list in sync from the terminal
#[derive(Parser, Debug)]
#[command(name = "todos")]
struct Args {
    /// Base URL of the todo API (defaults to $TODOS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &PathBuf) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = match &args.api_url {
        Some(url) => Config::new(url),
        None => Config::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Pass --api-url or set {API_URL_ENV}, e.g. http://localhost:3000");
            std::process::exit(1);
        }
    };
    tracing::info!(url = %config.base_url(), "Starting");

    let store = TodosStore::new(Arc::new(HttpRemote::new(config)));
    let mut runtime = TodosRuntime::new(store);
    runtime.enqueue(UiAction::Refresh);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut ui = TodosUi::new();
    let result = runtime.run(&mut terminal, &mut ui).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(todos = runtime.todos().todos.len(), "Exiting");
    result
}
