//! Cave Escape
//!
//! Main entry point for the game.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use cave_core::dungeon::MapDescription;
use cave_core::world::GameConfig;
use cave_tui::{App, CrosstermEvents, PlainUi, TerminalChooser, Theme};

/// Escape the cave before you run out of steps
#[derive(Parser, Debug)]
#[command(name = "cave-escape")]
#[command(author, version, about = "Cave Escape - find the way out!", long_about = None)]
struct Args {
    /// Configuration file (TOML); missing file means defaults
    #[arg(short = 'c', long = "config", default_value = "cave.toml")]
    config: PathBuf,

    /// Map file, overrides the configuration
    #[arg(short = 'm', long = "map")]
    map: Option<PathBuf>,

    /// Steps per round, overrides the configuration
    #[arg(short = 's', long = "steps")]
    steps: Option<u32>,

    /// Line-oriented console mode instead of the full-screen interface
    #[arg(long = "plain")]
    plain: bool,

    /// Log file, overrides the configuration
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut config = match GameConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    apply_overrides(&mut config, &args);

    init_logging(&config, &args);
    log::info!("cave-escape {} starting", env!("CARGO_PKG_VERSION"));
    log::debug!("config: {:?}", config);

    let map = match MapDescription::load_or_default(&config.map_path) {
        Ok(map) => map,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if args.plain {
        let stdin = io::stdin();
        let mut ui = PlainUi::new(stdin.lock(), io::stdout());
        return ui.run(&config, &map);
    }

    let theme = if args.light { Theme::light() } else { Theme::detect() };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(config, map, theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Command-line flags win over the configuration file
fn apply_overrides(config: &mut GameConfig, args: &Args) {
    if let Some(map) = &args.map {
        config.map_path = map.clone();
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file = Some(log_file.clone());
    }
}

/// Draw, read a key, run the command; until the player leaves
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        let backdrop = terminal.draw(|frame| app.render(frame))?.buffer.clone();

        let event = event::read()?;
        if let Some(command) = app.handle_event(event) {
            let mut chooser = TerminalChooser::new(terminal, CrosstermEvents, backdrop, app.theme());
            app.execute(command, &mut chooser);
        }

        if app.should_quit() {
            log::info!("leaving after {} rounds", app.rounds());
            return Ok(());
        }
    }
}

/// env_logger to the log file when one is configured.
///
/// Plain mode falls back to stderr; the full-screen mode stays silent so the
/// alternate screen is not scribbled over. `RUST_LOG` overrides `-v`.
fn init_logging(config: &GameConfig, args: &Args) {
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();

    match &config.log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
                builder.write_style(env_logger::WriteStyle::Never);
            }
            Err(e) => {
                eprintln!("cannot open log file {}: {}", path.display(), e);
                if !args.plain {
                    return;
                }
            }
        },
        None if !args.plain => return,
        None => {}
    }

    if let Err(e) = builder.try_init() {
        eprintln!("logger already initialised: {}", e);
    }
}
