//! deskcalc binary: terminal setup and the event loop.
//!
//! ```bash
//! deskcalc                      # state under the user config directory
//! deskcalc --state-file s.json  # explicit state location
//! deskcalc --no-persist         # keep everything in memory
//! RUST_LOG=deskcalc=debug deskcalc
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use deskcalc::session::Action;
use deskcalc::store::{JsonFileStore, MemoryStore, StateStore};
use deskcalc::tui::{render, CalculatorApp, InputHandler, KeyAction};

/// Command-line options
#[derive(Debug, Parser)]
#[command(
    name = "deskcalc",
    version,
    about = "Keypad-style terminal calculator with history and themes"
)]
struct Cli {
    /// Path of the state file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Keep history and theme in memory only
    #[arg(long)]
    no_persist: bool,

    /// Start in the light theme (persisted like the theme toggle)
    #[arg(long)]
    light: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = if cli.no_persist {
        run(CalculatorApp::new(MemoryStore::new()), &cli)
    } else {
        let path = cli
            .state_file
            .clone()
            .unwrap_or_else(JsonFileStore::default_path);
        run(CalculatorApp::new(JsonFileStore::open(path)), &cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<S: StateStore>(
    mut app: CalculatorApp<S>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.light && !app.session().theme().is_light() {
        app.apply(KeyAction::Session(Action::ToggleTheme));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| render(app, frame))?;

        match event::read()? {
            Event::Key(key) => {
                let action = input.handle_key(key, app.session().history_open());
                app.apply(action);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
