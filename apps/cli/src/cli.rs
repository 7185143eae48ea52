//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE: &str = "
Program for learning new words:
    list -- list all available dictionaries
    look <dictname>... -- look at words and their translations
    learn <dictname>... -- learn words (choose correct translation from variants)
    test <dictname>... -- test words (type word by its translation)
";

#[derive(Debug, Parser)]
#[command(name = "vocab-trainer", version, about = "Vocabulary flashcard trainer")]
pub struct Cli {
    /// Config file (defaults to ./vocab_trainer.cfg, then the user config directory)
    #[arg(long, global = true, env = "VOCAB_TRAINER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List all available dictionaries
    List,
    /// Look at words and their translations
    Look {
        #[arg(required = true)]
        dictionaries: Vec<String>,
    },
    /// Learn words (choose the correct translation from variants)
    Learn {
        #[arg(required = true)]
        dictionaries: Vec<String>,
    },
    /// Test words (type the word by its translation)
    Test {
        #[arg(required = true)]
        dictionaries: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
