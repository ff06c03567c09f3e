use ditfolder_core::naming::resolve_folder_name;

use crate::cli::NameArgs;
use crate::error::CliResult;

/// Prints the resolved day-folder name. Touches nothing on disk.
pub fn run_name(args: NameArgs) -> CliResult<()> {
    let meta = args.shoot.to_metadata();
    meta.validate()?;
    println!("{}", resolve_folder_name(&meta));
    Ok(())
}
