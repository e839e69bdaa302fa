// Sortty: step-by-step sorting visualizer for the terminal

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use sortty::cli::Cli;
use sortty::logging::init_file_logging;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();

    // Reject bad settings before touching the terminal
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    init_file_logging(&config.log_file)?;
    info!(
        count = config.element_count,
        fps = config.fps,
        seed = ?config.seed,
        "sortty starting"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "UI loop failed");
        eprintln!("Error: {}", err);
    }
    info!("sortty exiting");

    Ok(())
}
