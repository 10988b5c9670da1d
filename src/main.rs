//! Storefront TUI - terminal dashboard for storefront operations
//!
//! A Ratatui-based TUI showing sales metrics at a glance, with a
//! support page for sending problem reports.

mod app;
mod config;
mod data;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::View;
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load config; a broken config file is not fatal
    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config: {err:#}");
        TuiConfig::default()
    });

    // Write a default config on first run so users have a file to edit
    if !TuiConfig::exists() {
        if let Err(err) = config.save() {
            tracing::warn!("failed to write default config: {err:#}");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
    // View whose page metadata was last applied to the terminal window
    let mut titled_view: Option<View> = None;

    loop {
        // Advance time-based state before drawing
        app.tick(Instant::now());

        // Apply page metadata when the view changes; last write wins
        let current = app.state.current_view;
        if titled_view != Some(current) {
            let meta = current.page_meta();
            execute!(io::stdout(), SetTitle(meta.title))?;
            tracing::debug!(
                title = meta.title,
                description = meta.description,
                "page metadata applied"
            );
            titled_view = Some(current);
        }

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(app.poll_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    // Handle key event
                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Terminal was resized - next draw picks up the new size
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
