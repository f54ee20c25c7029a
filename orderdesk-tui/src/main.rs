use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use orderdesk_core::DeskConfig;
use orderdesk_tui::cli::{run_check, run_schema, Cli, Commands};
use orderdesk_tui::tracing_setup::{self, TracingConfig};
use orderdesk_tui::{App, UI};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DeskConfig::load_from(path)?,
        None => DeskConfig::load()?,
    };
    if let Some(file) = cli.file.clone() {
        config.order_file = file;
    }

    // The interactive UI owns the terminal, so it logs to a file
    tracing_setup::init_or_disable(&TracingConfig {
        debug: cli.debug,
        default_level: config.log_level.clone(),
        log_file: cli.command.is_none().then(|| config.log_path()),
    });

    match cli.command {
        Some(Commands::Check) => run_check(&config.order_file),
        Some(Commands::Schema) => {
            run_schema();
            Ok(())
        }
        None => run_tui(config.order_file),
    }
}

fn run_tui(order_file: PathBuf) -> Result<()> {
    info!(order_file = %order_file.display(), "starting orderdesk");

    // Create app state
    let mut app = App::new(order_file);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create UI
    let mut ui = UI::new();

    // Main event loop
    let res = run_event_loop(&mut terminal, &mut app, &mut ui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("orderdesk exited");
    Ok(())
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut UI,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui.render(f, app))?;

        // Poll with a timeout so the clock keeps ticking
        if let Some(Event::Key(key)) = App::poll_event(Duration::from_millis(250))? {
            if key.kind == KeyEventKind::Press {
                app.handle_key_event(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
