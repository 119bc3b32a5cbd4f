use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Documentation Index Explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Docs root: a directory or an http(s) base URL
    #[arg(short = 'r', long)]
    docs_root: Option<String>,

    /// Path to config file (default: platform config dir, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging to the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k movement, g/G jumps)
    #[arg(long)]
    vim: bool,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::DocsClient;
use config::Config;
use doctui::{ActiveTab, SortKey};
use model::Model;
use services::{FetchRequest, FetchResponse};

pub(crate) fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: Model,

    fetch_tx: tokio::sync::mpsc::UnboundedSender<FetchRequest>,
    fetch_rx: tokio::sync::mpsc::UnboundedReceiver<FetchResponse>,

    /// Search recomputation delay
    debounce: Duration,
}

impl App {
    fn new(config: Config) -> Self {
        let client = DocsClient::new(&config.docs_root);
        let (fetch_tx, fetch_rx) = services::fetch::spawn_fetch_service(client, config.index_file);

        // Kick off the index load; the response lands in the main loop
        if fetch_tx.send(FetchRequest::Index).is_err() {
            log_debug("Fetch service unavailable at startup");
        }

        App {
            model: Model::new(config.vim_mode),
            fetch_tx,
            fetch_rx,
            debounce: Duration::from_millis(config.debounce_ms),
        }
    }

    /// Handle a completed background fetch
    /// Delegated to handlers::fetch module
    fn handle_fetch_response(&mut self, response: FetchResponse) {
        handlers::handle_fetch_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        handlers::handle_key_event(self, key);
    }
}

/// Determine the config file path: the CLI flag must exist if given; the
/// platform config dir is optional.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("doctui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration; defaults apply when no config file exists
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", path));
            }
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if let Some(docs_root) = args.docs_root {
        config.docs_root = docs_root;
    }
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.should_quit {
            break;
        }

        // Process fetch responses (non-blocking)
        while let Ok(response) = app.fetch_rx.try_recv() {
            app.handle_fetch_response(response);
        }

        // Apply a debounced search recomputation once the delay has elapsed
        app.tick_search_debounce();

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
