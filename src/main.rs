// ABOUTME: Main entry point for the dashterm TUI client

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{io, path::PathBuf, time::Duration};

use dashterm::app::{App, AppState, EventHandler};
use dashterm::components::LayoutComponent;
use dashterm::config::AppConfig;
use dashterm::session::Framing;

#[derive(Debug, Parser)]
#[command(name = "dashterm", version, about = "Remote line terminal with a dashboard menu")]
struct Cli {
    /// Server WebSocket URL (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Wire framing of named events
    #[arg(long, value_enum)]
    framing: Option<Framing>,

    /// Config file (default: <config dir>/dashterm/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    setup_panic_handler();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = cli.url {
        config.server.url = url;
    }
    if let Some(framing) = cli.framing {
        config.server.framing = framing;
    }
    if cli.no_mouse {
        config.terminal.mouse = false;
    }
    config.validate()?;

    let mut app = App::new(AppState::from_config(&config));
    app.connect(config.server.framing);
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout, &config).await;
    app.shutdown();
    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, config: &AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.terminal.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.terminal.tick_rate_ms);

    let result = event_loop(&mut terminal, app, layout, tick_rate).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.terminal.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    layout: &mut LayoutComponent,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if event::poll(tick_rate)? {
            let app_event = match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    EventHandler::handle_key_event(key_event, &mut app.state)
                }
                Event::Mouse(mouse_event) => {
                    EventHandler::handle_mouse_event(mouse_event, &app.state, layout.sidebar_area())
                }
                _ => None,
            };
            if let Some(app_event) = app_event {
                EventHandler::process_event(app_event, &mut app.state);
            }
        }

        // Socket events and queued submissions
        app.tick();

        if app.state.should_quit {
            break;
        }

        // Let the socket tasks run between polls
        tokio::task::yield_now().await;
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".dashterm").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".dashterm/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "dashterm-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashterm=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
