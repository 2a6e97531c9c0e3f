//! JSON Explorer TUI - Terminal User Interface for exploring JSON documents
//!
//! A Ratatui-based TUI that shows a JSON file pretty-printed and reports
//! load failures in a modal error dialog.

mod app;
mod config;
mod diagnostics;
mod document;
mod error;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use diagnostics::TracingSink;
use document::FileSource;
use error::ErrorInfo;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll timeout
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "json-explorer", version, about = "Explore JSON documents in the terminal")]
struct Args {
    /// JSON file to open (defaults to the last opened document)
    path: Option<PathBuf>,

    /// Maximum width of the error dialog
    #[arg(long)]
    dialog_width: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| diagnostics::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (mut config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            (TuiConfig::default(), Some(err))
        }
    };

    let mut settings = config.clone();
    if let Some(width) = args.dialog_width {
        settings.dialog_max_width = Some(width);
    }
    let path = args.path.or_else(|| config.last_document.clone());

    let mut app = App::new(
        Box::new(FileSource),
        Box::new(TracingSink),
        path,
        &settings,
    );
    if let Some(err) = config_error {
        app.push_error(ErrorInfo::from_error(&*err).kind("config"));
    }

    if app.load_document().await {
        config.last_document = app.document_path().map(|p| p.to_path_buf());
        if let Err(err) = config.save() {
            tracing::warn!("Failed to save config: {err:#}");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Remember the frame area for mouse hit-testing
        let size = terminal.size()?;
        app.frame_area = Rect::new(0, 0, size.width, size.height);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C, even with the error dialog open
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse)?;
                }
                Event::Resize(_width, _height) => {
                    // Dialog and pane sizes are recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
