use std::io;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use omnibar::app::App;
use omnibar::cli::Cli;
use omnibar::config;
use omnibar::service::{ServiceClient, spawn_worker};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging goes to stderr, which the alternate screen hides; only
    // wired up in debug builds.
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.service.base_url = url;
    }

    // The service worker owns the HTTP client; the UI talks to it
    // over channels and never blocks on the network.
    let client = ServiceClient::new(&config.service)?;
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx);

    let mut app = App::new();
    app.set_service_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    // Short poll tick so worker responses show up without a keypress
    const TICK: Duration = Duration::from_millis(50);

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(TICK)? {
            app.handle_event(event::read()?);
        }

        // Apply any service answers that arrived since the last tick
        app.poll_service();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
