//! Terminal input and output for the study modes.
//!
//! Input comes from a [`LineSource`]: a line editor with history when stdin is
//! an interactive terminal and the `line-editing` feature is on, plain buffered
//! reads otherwise.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use vocab_core::{
    ChoiceTurn, Console, DrillSummary, OptionSeparator, Progress, RecallTurn, ReviewConsole,
    Verdict,
};

const PROMPT: &str = "> ";

/// Something that reads answer lines. `None` means input is closed.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Plain line reads. The prompt is not echoed.
pub struct PlainInput<R> {
    reader: R,
}

impl<R: BufRead> PlainInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for PlainInput<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(feature = "line-editing")]
pub use editor::EditorInput;

#[cfg(feature = "line-editing")]
mod editor {
    use super::LineSource;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::io;

    /// Line editor with in-session history.
    pub struct EditorInput {
        editor: DefaultEditor,
    }

    impl EditorInput {
        pub fn new() -> Result<Self, ReadlineError> {
            Ok(Self {
                editor: DefaultEditor::new()?,
            })
        }
    }

    impl LineSource for EditorInput {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    Ok(Some(line))
                }
                // Ctrl-C and Ctrl-D both end the session
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
                Err(ReadlineError::Io(err)) => Err(err),
                Err(err) => Err(io::Error::other(err.to_string())),
            }
        }
    }
}

#[cfg(feature = "line-editing")]
fn editor_input() -> Option<Box<dyn LineSource>> {
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() {
        return None;
    }
    match EditorInput::new() {
        Ok(editor) => Some(Box::new(editor)),
        Err(err) => {
            tracing::debug!(error = %err, "line editor unavailable, using plain input");
            None
        }
    }
}

#[cfg(not(feature = "line-editing"))]
fn editor_input() -> Option<Box<dyn LineSource>> {
    None
}

/// Pick the best input available on stdin.
pub fn stdin_source() -> Box<dyn LineSource> {
    editor_input().unwrap_or_else(|| Box::new(PlainInput::new(io::stdin().lock())))
}

/// `1 word`, `2 words`, `3 passes`.
fn counted(n: usize, noun: &str) -> String {
    match (n, noun.ends_with('s')) {
        (1, _) => format!("{n} {noun}"),
        (_, true) => format!("{n} {noun}es"),
        (_, false) => format!("{n} {noun}s"),
    }
}

/// Drill console writing to `out` and reading answers from `input`.
pub struct TerminalConsole<W, L> {
    out: W,
    input: L,
    option_separator: OptionSeparator,
    delay: Duration,
}

impl<W: Write, L: LineSource> TerminalConsole<W, L> {
    pub fn new(out: W, input: L) -> Self {
        Self {
            out,
            input,
            option_separator: OptionSeparator::default(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_option_separator(mut self, separator: OptionSeparator) -> Self {
        self.option_separator = separator;
        self
    }

    /// Delay used by passive review between term and translation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn announce(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn report(&mut self, summary: &DrillSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "learned {} in {} ({})",
            counted(summary.items, "word"),
            counted(summary.passes, "pass"),
            counted(summary.mistakes, "mistake")
        )
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn ask(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        self.input.read_line(PROMPT)
    }

    fn pass_banner(&mut self, progress: Progress) -> io::Result<()> {
        if progress.pass > 1 && progress.position == 1 {
            writeln!(
                self.out,
                "-- pass {}: {} left --",
                progress.pass,
                counted(progress.total, "word")
            )?;
        }
        Ok(())
    }
}

impl<W: Write, L: LineSource> Console for TerminalConsole<W, L> {
    fn choose(&mut self, turn: &ChoiceTurn<'_>) -> io::Result<Option<String>> {
        let progress = turn.progress;
        self.pass_banner(progress)?;
        writeln!(self.out, "{}/{}: {}:", progress.position, progress.total, turn.term)?;
        let options = turn
            .candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| format!("{}: {candidate}", idx + 1))
            .collect::<Vec<_>>()
            .join(self.option_separator.as_str());
        writeln!(self.out, "{options}")?;
        self.ask()
    }

    fn recall(&mut self, turn: &RecallTurn<'_>) -> io::Result<Option<String>> {
        let progress = turn.progress;
        self.pass_banner(progress)?;
        writeln!(
            self.out,
            "{}/{}: {}:",
            progress.position, progress.total, turn.translation
        )?;
        self.ask()
    }

    fn verdict(&mut self, verdict: &Verdict<'_>) -> io::Result<()> {
        match verdict {
            Verdict::Correct => writeln!(self.out, "correct!")?,
            Verdict::Wrong { expected } => writeln!(self.out, "wrong! correct answer: {expected}")?,
        }
        writeln!(self.out)
    }
}

impl<W: Write, L: LineSource> ReviewConsole for TerminalConsole<W, L> {
    fn show_term(&mut self, progress: Progress, term: &str) -> io::Result<()> {
        writeln!(self.out, "{}/{}: {term}", progress.position, progress.total)
    }

    fn show_translation(&mut self, translation: &str) -> io::Result<()> {
        writeln!(self.out, "{translation}")
    }

    fn pause(&mut self) -> io::Result<()> {
        self.out.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}
