// ditfolder-cli/src/lib.rs
//
// Library portion of the ditfolder CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, CreateArgs, NameArgs, PresetsArgs, ScanArgs};
pub use commands::create::run_create;
pub use commands::name::run_name;
pub use commands::presets::run_presets;
pub use commands::scan::run_scan;

use error::CliResult;

/// Runs a parsed command line.
pub fn run(cli: Cli) -> CliResult<()> {
    if cli.no_color {
        terminal::set_color(false);
    }
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Create(args) => run_create(args),
        Commands::Name(args) => run_name(args),
        Commands::Scan(args) => run_scan(args),
        Commands::Presets(args) => run_presets(args),
    }
}
