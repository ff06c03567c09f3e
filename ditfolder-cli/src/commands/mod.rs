//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

pub mod create;
pub mod name;
pub mod presets;
pub mod scan;

use std::path::{Path, PathBuf};

use ditfolder_core::export::{DocumentLayout, Overflow, page_count, write_csv, write_pdf};
use ditfolder_core::naming::{ProjectInfo, default_export_file_name};
use ditfolder_core::scanner::TreeNode;

use crate::cli::ReportArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

/// A report path given as a directory gets `{base}_structure.{ext}` inside it.
/// The generated name is always a single file name within `requested`.
pub(crate) fn report_path(requested: &Path, base_name: &str, extension: &str) -> PathBuf {
    if requested.is_dir() {
        requested.join(default_export_file_name(base_name, extension))
    } else {
        requested.to_path_buf()
    }
}

pub(crate) fn layout_for(args: &ReportArgs, base: DocumentLayout) -> DocumentLayout {
    if args.paginate {
        base.with_overflow(Overflow::Paginate)
    } else {
        base
    }
}

/// Writes whichever reports were requested.
pub(crate) fn write_reports(
    args: &ReportArgs,
    nodes: &[TreeNode],
    info: &ProjectInfo,
    base_name: &str,
    layout: &DocumentLayout,
) -> CliResult<()> {
    if args.csv.is_none() && args.pdf.is_none() {
        return Ok(());
    }
    terminal::print_section("Reports");

    if let Some(requested) = &args.csv {
        let dest = report_path(requested, base_name, "csv");
        write_csv(nodes, &dest)
            .cli_with_context(|| format!("Failed to export CSV to {}", dest.display()))?;
        terminal::print_success(&format!("CSV written to {}", dest.display()));
    }

    if let Some(requested) = &args.pdf {
        let dest = report_path(requested, base_name, "pdf");
        write_pdf(nodes, info, layout, &dest)
            .cli_with_context(|| format!("Failed to export PDF to {}", dest.display()))?;
        let pages = page_count(nodes, info, layout);
        terminal::print_success(&format!("PDF written to {} ({} page(s))", dest.display(), pages));
        if layout.overflow == Overflow::Truncate {
            let full = page_count(nodes, info, &layout.with_overflow(Overflow::Paginate));
            if full > 1 {
                terminal::print_warning("Tree did not fit on one page; use --paginate to include every line");
            }
        }
    }

    Ok(())
}
