use ditfolder_core::presets::{DirectoryPresetCatalog, PresetCatalog};
use log::debug;

use crate::cli::PresetsArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

/// Lists the preset catalog, seeding the directory on first use.
pub fn run_presets(args: PresetsArgs) -> CliResult<()> {
    let catalog = DirectoryPresetCatalog::new(&args.presets_dir);
    debug!("Reading presets from {}", catalog.dir().display());

    let presets = catalog
        .list_presets()
        .cli_with_context(|| format!("Failed to read presets from {}", args.presets_dir.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
    } else {
        terminal::print_presets(&presets);
    }
    Ok(())
}
