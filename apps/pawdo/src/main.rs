//! pawdo: a to-do list for the terminal.
//!
//! Configuration comes from `PAWDO_*` environment variables. Logs go to the
//! file named by `PAWDO_LOG_FILE`, never to the terminal the UI draws on.

use anyhow::Context;
use pawdo::{App, AppConfig, AppError, logging, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    logging::init(&config.log).context("initializing logging")?;
    tracing::info!(?config, "Starting pawdo");

    let mut app = App::from_config(&config)?;

    terminal::install_panic_hook(config.mouse);
    terminal::enter(&mut io::stdout(), config.mouse).context("preparing the terminal")?;

    let result = run(&mut app);

    // Restore terminal even if the app failed
    let restored = terminal::restore(&mut io::stdout(), config.mouse);

    if let Err(err) = &result {
        tracing::error!(error = %err, "pawdo exited with an error");
    }
    result.context("running the screen")?;
    restored.context("restoring the terminal")
}

fn run(app: &mut App) -> Result<(), AppError> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    app.run(&mut terminal)
}
