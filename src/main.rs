mod app;
mod button;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod menu;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use lexopt::{Arg, Parser};
use ratatui::DefaultTerminal;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: classnake [--config <path>]

Classic Snake with difficulty levels, in the terminal

Options:
  -c, --config <path>  Read configuration from the given file
  -h, --help           Show this help and exit
  -V, --version        Show the program version and exit";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config }) => report(run(config)),
        Ok(Arguments::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("classnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, warning) = load_config(config_path)?;
    let globals = Globals {
        difficulty: config.game.difficulty,
        high_score: 0,
    };
    let terminal = ratatui::init();
    let r = play(terminal, config, globals, warning);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Load the configuration file.  Problems with an explicitly requested file
/// are fatal; problems with the default file become a warning shown at
/// startup.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<(Config, Option<Warning>)> {
    if let Some(p) = path {
        let config = Config::load(&p, false)
            .with_context(|| format!("failed to load configuration from {}", p.display()))?;
        return Ok((config, None));
    }
    match Config::default_path().and_then(|p| Config::load(&p, true)) {
        Ok(config) => Ok((config, None)),
        Err(e) => {
            let warning = Warning::new("Could not load the configuration file; using defaults", &e);
            Ok((Config::default(), Some(warning)))
        }
    }
}

fn play(
    terminal: DefaultTerminal,
    config: Config,
    globals: Globals,
    warning: Option<Warning>,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mouse = config.interface.mouse;
    execute!(stdout, EnableFocusChange)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let r = App::new(globals, warning).run(terminal);
    let cleanup = if mouse {
        execute!(stdout, DisableMouseCapture, DisableFocusChange)
    } else {
        execute!(stdout, DisableFocusChange)
    };
    r.and(cleanup)
}

fn report(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("classnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    })
}
