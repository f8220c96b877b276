// ABOUTME: Main entry point for the PDF chat TUI application

use std::{
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use tracing::{error, info};

use pdf_chat::api::ApiClient;
use pdf_chat::app::{App, EventHandler};
use pdf_chat::components::LayoutComponent;
use pdf_chat::config::Config;

/// Chat with an AI about the contents of a PDF.
#[derive(Debug, Parser)]
#[command(name = "pdf-chat", version, about)]
struct Cli {
    /// Backend base URL, overriding config and environment
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Upload this PDF as soon as the interface starts
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?
        .with_backend_url(cli.backend_url)
        .with_timeout(cli.timeout);

    setup_logging(&config)?;
    setup_panic_handler();
    info!("Starting pdf-chat against {}", config.backend_url);

    let client = ApiClient::new(&config).context("Failed to build HTTP client")?;
    let mut app = App::new(client);
    app.init(cli.file).await;
    let mut layout = LayoutComponent::new();

    run_tui(&mut app, &mut layout)
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(app, layout, &mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        // Completions, the modal timer and newly queued requests run every pass
        app.tick();

        if app.state.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

fn setup_logging(config: &Config) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "pdf-chat-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Mutex::new(file))
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_chat=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting, or the message is lost in the alternate screen
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
