//! Shared fixtures for the integration tests.
//!
//! `TestLibrary` is a scratch vocabulary directory with a config pointing at it.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vocab_core::Config;
use vocab_trainer::terminal::{PlainInput, TerminalConsole};

pub type ScriptedConsole = TerminalConsole<Vec<u8>, PlainInput<Cursor<Vec<u8>>>>;

pub struct TestLibrary {
    root: TempDir,
}

impl TestLibrary {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(root.path().join("vocabularies")).expect("create vocabulary dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn vocabulary_dir(&self) -> PathBuf {
        self.root.path().join("vocabularies")
    }

    /// Write a dictionary file into the vocabulary directory.
    pub fn dictionary(&self, name: &str, content: &str) -> &Self {
        fs::write(self.vocabulary_dir().join(name), content).expect("write dictionary");
        self
    }

    /// Write the config file and return its path.
    pub fn config_file(&self, extra: &str) -> PathBuf {
        let path = self.root.path().join("vocab_trainer.cfg");
        let content = format!(
            "vocabulary_dir = {}\nlook_delay_time_s = 0\n{extra}",
            self.vocabulary_dir().display()
        );
        fs::write(&path, content).expect("write config");
        path
    }

    pub fn config(&self) -> Config {
        Config {
            vocabulary_dir: self.vocabulary_dir(),
            look_delay_secs: 0,
            ..Config::default()
        }
    }
}

/// Console fed with `input` that records everything written.
pub fn scripted_console(input: &str) -> ScriptedConsole {
    TerminalConsole::new(Vec::new(), PlainInput::new(Cursor::new(input.as_bytes().to_vec())))
}

pub fn output(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}
