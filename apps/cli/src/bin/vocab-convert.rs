//! Convert dictionaries between the line-pair and the delimited format.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use vocab_core::{Delimiter, Direction};
use vocab_trainer::library::convert_file;

#[derive(Debug, Parser)]
#[command(
    name = "vocab-convert",
    version,
    about = "Convert a dictionary from the line-pair format to the delimited format"
)]
struct Args {
    /// Dictionary to convert
    input: PathBuf,

    /// Where to write the result (defaults to the input with a .out extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert from the delimited format to line pairs instead
    #[arg(long)]
    reverse: bool,

    /// Field separator: tab, comma, semicolon, pipe, space or a single character
    #[arg(long, default_value = "tab")]
    separator: String,
}

fn run(args: Args) -> Result<()> {
    let delimiter = Delimiter::from_name(&args.separator)
        .ok_or_else(|| anyhow!("unknown separator {:?}", args.separator))?;
    let direction = if args.reverse {
        Direction::DelimitedToLines
    } else {
        Direction::LinesToDelimited
    };

    let written = convert_file(&args.input, args.output.as_deref(), direction, delimiter)?;
    println!("{}", written.display());
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    vocab_trainer::init_tracing();
    vocab_trainer::exit_code(run(Args::parse()))
}
