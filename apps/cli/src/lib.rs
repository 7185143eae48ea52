pub mod cli;
pub mod library;
pub mod modes;
pub mod terminal;

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use vocab_core::Config;

use crate::cli::{Cli, Command, USAGE};
use crate::terminal::{stdin_source, LineSource, TerminalConsole};

/// Set up logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Colours are used only when stderr is a terminal.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(log_layer(io::stderr, io::stderr().is_terminal()))
        .init();
}

fn log_layer<S, M>(writer: M, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
}

/// Turn a run result into the process exit code, printing the error chain.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut stdout = io::stdout().lock();
    run_from(std::env::args_os(), &mut stdout)
}

/// Parse `args` (program name first) and run the command, writing to `out`.
///
/// Drill modes read answers from stdin.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args).unwrap_or_else(|err| err.exit());
    let config_flag = cli.config.as_deref();

    let outcome = match cli.command {
        None => {
            write!(out, "{USAGE}")?;
            return Ok(());
        }
        Some(Command::Unknown(args)) => {
            writeln!(out, "unknown command: {}", args.first().map_or("", String::as_str))?;
            return Ok(());
        }
        Some(Command::List) => {
            let config = settings(config_flag)?;
            for name in library::list_dictionaries(&config.vocabulary_dir)? {
                writeln!(out, "{name}")?;
            }
            return Ok(());
        }
        Some(Command::Look { dictionaries }) => {
            let config = settings(config_flag)?;
            let vocabulary = library::load_vocabulary(&config, &dictionaries)?;
            modes::look(&vocabulary, &mut console(&config, out), &mut rand::rng())?
        }
        Some(Command::Learn { dictionaries }) => {
            let config = settings(config_flag)?;
            let vocabulary = library::load_vocabulary(&config, &dictionaries)?;
            modes::learn(&config, &vocabulary, &mut console(&config, out), &mut rand::rng())?
        }
        Some(Command::Test { dictionaries }) => {
            let config = settings(config_flag)?;
            let vocabulary = library::load_vocabulary(&config, &dictionaries)?;
            modes::test(&vocabulary, &mut console(&config, out), &mut rand::rng())?
        }
    };

    tracing::debug!(?outcome, "session over");
    Ok(())
}

fn settings(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = library::locate_config(explicit)?;
    tracing::info!(path = %path.display(), "using config");
    library::load_config(&path)
}

fn console<W: Write>(config: &Config, out: W) -> TerminalConsole<W, Box<dyn LineSource>> {
    TerminalConsole::new(out, stdin_source())
        .with_option_separator(config.option_separator)
        .with_delay(config.look_delay())
}
