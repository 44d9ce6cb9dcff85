//! MemberDash: a terminal dashboard for insurance-member records.

mod app;
mod config;
mod error;
mod events;
mod logging;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::app::App;
use crate::config::Config;
use crate::events::EventHandler;
use crate::ui::theme::BackgroundTheme;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "memberdash", version, about = "Terminal member dashboard")]
struct Cli {
    /// Background theme to start with (overrides the config file).
    #[arg(long)]
    theme: Option<String>,

    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init().context("failed to initialize logging")?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path).context("failed to load config")?,
        None => Config::load_or_default(),
    };

    if let Some(name) = &cli.theme {
        match BackgroundTheme::from_name(name) {
            Some(theme) => config.settings.theme = theme.name().to_string(),
            None => anyhow::bail!("unknown theme: {name}"),
        }
    }

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run(&mut terminal, config, cli.config);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    if let Err(e) = &result {
        error!(error = %e, "Application error");
    }
    logging::shutdown();
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut app = App::with_config(config);
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next().context("failed to read terminal event")?;
        app.update(event);
    }

    // Persist theme and layout choices. Losing them is not worth an
    // error at exit.
    let saved = match &config_path {
        Some(path) => app.config().save_to(path),
        None => app.config().save(),
    };
    if let Err(e) = saved {
        error!(error = %e, "Failed to save config");
    }

    info!("Shutting down");
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restore the terminal before the default panic output so the
    // message is readable.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
