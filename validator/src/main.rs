//! Question bank validator CLI entrypoint.
//!
//! Parses arguments, runs the validation pipeline against stdout, and
//! maps the verdict to the process exit code: 0 when the error list is
//! empty (warnings never block), 1 otherwise.

use clap::Parser;
use placement_validator::cli::Cli;
use placement_validator::run::run;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    let exit_code = match run(&cli, &mut stdout) {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            write_stderr_line(&err);
            1
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn write_stderr_line(message: &impl std::fmt::Display) {
    let mut stderr = std::io::stderr();
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
