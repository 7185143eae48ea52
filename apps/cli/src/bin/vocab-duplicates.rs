//! Report terms defined in more than one dictionary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use vocab_core::Delimiter;
use vocab_trainer::library::scan_duplicates;

#[derive(Debug, Parser)]
#[command(name = "vocab-duplicates", version, about = "Search repeated words in all dictionaries")]
struct Args {
    /// Directory holding the dictionaries
    dir: PathBuf,

    /// Field separator: tab, comma, semicolon, pipe, space or a single character
    #[arg(long, default_value = "tab")]
    separator: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<()> {
    let delimiter = Delimiter::from_name(&args.separator)
        .ok_or_else(|| anyhow!("unknown separator {:?}", args.separator))?;
    let duplicates = scan_duplicates(&args.dir, delimiter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&duplicates)?);
        return Ok(());
    }

    for duplicate in &duplicates {
        println!(
            "\"{}\" is found in dicts:\t{}",
            duplicate.term,
            duplicate.dictionaries.join(", ")
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    vocab_trainer::init_tracing();
    vocab_trainer::exit_code(run(Args::parse()))
}
