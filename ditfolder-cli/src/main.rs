// ditfolder-cli/src/main.rs
//
// Entry point for the ditfolder binary: parses arguments, runs the command
// and turns any error into an `Error: ...` line on stderr with exit code 1.

use std::process;

use clap::Parser;
use ditfolder_cli::{Cli, run, terminal};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
