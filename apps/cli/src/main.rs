use std::process::ExitCode;

fn main() -> ExitCode {
    vocab_trainer::exit_code(vocab_trainer::run())
}
