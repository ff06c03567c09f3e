use chrono::Local;
use ditfolder_core::export::DocumentLayout;
use ditfolder_core::naming::ProjectInfo;
use ditfolder_core::scanner::{scan, summarize};
use ditfolder_core::utils::display_name;
use ditfolder_core::CoreError;

use super::{layout_for, write_reports};
use crate::cli::ScanArgs;
use crate::error::CliResult;
use crate::terminal;

/// Prints the tree of an existing folder and writes any requested reports.
pub fn run_scan(args: ScanArgs) -> CliResult<()> {
    let nodes = scan(&args.path);
    let Some(root) = nodes.first() else {
        return Err(CoreError::filesystem(
            &args.path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        ));
    };

    let info = ProjectInfo::from_text(&format!(
        "Folder: {}\nPath: {}\nScanned: {}",
        root.name,
        root.path.display(),
        Local::now().format("%A, %B %-d, %Y %H:%M")
    ));
    let base_name = display_name(&root.path);

    terminal::print_section("Structure");
    terminal::print_tree(&nodes);
    println!();
    terminal::print_summary(&summarize(&nodes));

    let layout = layout_for(&args.reports, DocumentLayout::default());
    write_reports(&args.reports, &nodes, &info, &base_name, &layout)
}
