// ============================================================================
// ditfolder-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Everything the CLI shows the operator goes through here, on stdout. Log
// records go to stderr (or a log file) and never mix with this output.
//
// KEY COMPONENTS:
// - styling: symbols and layout constants
// - print_section / print_status / print_success / print_warning
// - print_tree: a scan snapshot with Unicode tree guides
// - print_presets: the preset catalog

use console::style;
use ditfolder_core::presets::FolderPreset;
use ditfolder_core::scanner::{ScanSummary, TreeNode};
use ditfolder_core::tree_guide::{GuideGlyphs, format_line};
use ditfolder_core::utils::format_size;
use unicode_width::UnicodeWidthStr;

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const WARNING_SYMBOL: &str = "⚠";

    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    pub const STATUS_INDENT: &str = "  ";
    pub const SUB_ITEM_INDENT: &str = "    ";

    /// Labels are padded to this display width.
    pub const LABEL_WIDTH: usize = 16;
}

/// Turns colored output off (or back on) for stdout and stderr.
pub fn set_color(enable: bool) {
    console::set_colors_enabled(enable);
    console::set_colors_enabled_stderr(enable);
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    println!();
    println!(
        "{}{}{}",
        styling::SECTION_PREFIX,
        style(title.to_uppercase()).cyan().bold(),
        styling::SECTION_SUFFIX
    );
    println!();
}

/// Pads `label:` to a fixed display width.
fn pad_label(label: &str) -> String {
    let width = UnicodeWidthStr::width(label) + 1;
    let padding = styling::LABEL_WIDTH.saturating_sub(width).max(1);
    format!("{}:{}", label, " ".repeat(padding))
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let value = if highlight {
        style(value).bold().to_string()
    } else {
        value.to_string()
    };
    println!("{}{}{}", styling::STATUS_INDENT, pad_label(label), value);
}

pub fn print_success(message: &str) {
    println!(
        "{}{} {}",
        styling::STATUS_INDENT,
        style(styling::SUCCESS_SYMBOL).green().bold(),
        message
    );
}

pub fn print_warning(message: &str) {
    println!(
        "{}{} {}",
        styling::STATUS_INDENT,
        style(styling::WARNING_SYMBOL).yellow().bold(),
        style(message).yellow()
    );
}

/// Prints `Error: {message}` on stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        style("Error:").for_stderr().red().bold(),
        message
    );
}

/// Tree lines for a snapshot, one per node.
pub fn tree_lines(nodes: &[TreeNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| format_line(node, &GuideGlyphs::UNICODE))
        .collect()
}

pub fn print_tree(nodes: &[TreeNode]) {
    for line in tree_lines(nodes) {
        println!("{line}");
    }
}

pub fn print_summary(summary: &ScanSummary) {
    print_status("Folders", &summary.directories.to_string(), false);
    print_status("Files", &summary.files.to_string(), false);
    print_status("Total size", &format_size(summary.total_bytes), true);
}

pub fn print_presets(presets: &[FolderPreset]) {
    for preset in presets {
        println!("{}", style(&preset.preset_name).bold());
        for folder in &preset.folders {
            println!("{}{}", styling::SUB_ITEM_INDENT, folder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pad_label() {
        assert_eq!(pad_label("Folder"), "Folder:         ");
        assert_eq!(pad_label("Folder").len(), styling::LABEL_WIDTH);
        // Always at least one space
        assert_eq!(pad_label("A very long label here"), "A very long label here: ");
    }

    #[test]
    fn test_tree_lines() {
        let nodes = vec![
            TreeNode {
                name: "Day".to_string(),
                path: PathBuf::from("/r/Day"),
                is_directory: true,
                size: "0 B".to_string(),
                bytes: 0,
                level: 0,
            },
            TreeNode {
                name: "Reports".to_string(),
                path: PathBuf::from("/r/Day/Reports"),
                is_directory: true,
                size: "0 B".to_string(),
                bytes: 0,
                level: 1,
            },
        ];
        assert_eq!(
            tree_lines(&nodes),
            vec!["📁 Day (0 B)".to_string(), "└── 📁 Reports (0 B)".to_string()]
        );
    }
}
