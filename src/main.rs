//! Cardface - command-line tool for inspecting card layer composition

use std::process::ExitCode;

use cardface::cli;

fn main() -> ExitCode {
    cli::run()
}
