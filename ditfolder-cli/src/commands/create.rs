// ============================================================================
// ditfolder-cli/src/commands/create.rs
// ============================================================================
//
// CREATE COMMAND: Builds a shoot-day folder at every location
//
// Resolves the folder name, creates the tree through the core workflow on a
// worker thread, prints the project folder's tree at the primary location
// (earlier shoot days included) and writes any requested reports.

use ditfolder_core::config::CoreConfigBuilder;
use ditfolder_core::scanner::summarize;
use ditfolder_core::workflow::{DayFolderRequest, create_day_folder, spawn_operation};
use log::info;

use super::{layout_for, write_reports};
use crate::cli::CreateArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

pub fn run_create(args: CreateArgs) -> CliResult<()> {
    let metadata = args.shoot.to_metadata();
    let config = CoreConfigBuilder::new()
        .project_name(&args.project)
        .locations(args.locations.iter().cloned())
        .presets_dir(args.presets_dir.clone())
        .preset_name(&args.preset)
        .precheck(args.precheck)
        .build()?;
    let layout = layout_for(&args.reports, config.document_layout);
    let catalog = config.preset_catalog();
    let request = DayFolderRequest::new(metadata, config);

    info!(
        "Creating day folder for project '{}' with preset '{}'",
        args.project, args.preset
    );
    let handle = spawn_operation("create", move || create_day_folder(&request, &catalog))?;
    let created = handle.wait().cli_context("Failed to create day folder")?;

    terminal::print_section("Day Folder");
    terminal::print_status("Folder", &created.folder_name, true);
    for (index, path) in created.created.iter().enumerate() {
        let label = if index == 0 {
            "Primary".to_string()
        } else {
            format!("Backup {index}")
        };
        terminal::print_status(&label, &path.display().to_string(), false);
    }
    if let Some(project) = created.primary_project() {
        terminal::print_status("Project", &project.display().to_string(), false);
    }
    terminal::print_success(&format!(
        "Created at {} location(s)",
        created.created.len()
    ));

    terminal::print_section("Structure");
    terminal::print_tree(&created.snapshot);
    println!();
    terminal::print_summary(&summarize(&created.snapshot));

    write_reports(
        &args.reports,
        &created.snapshot,
        &created.project_info,
        &created.folder_name,
        &layout,
    )
}
