//! Tree-drawing prefixes for snapshot lines.
//!
//! A snapshot only records each node's level, so the guide is derived from
//! the level alone: one continuation segment per ancestor below the root,
//! then a corner. Every child gets the same corner; the guide shows depth,
//! not which sibling is last.
//!
//! Every segment is [`SEGMENT_CELLS`] monospace cells wide and an icon takes
//! [`ICON_CELLS`], which lets the PDF report draw the same guides as vector
//! strokes.

use crate::scanner::TreeNode;

/// Monospace cells per guide segment.
pub const SEGMENT_CELLS: usize = 4;

/// Monospace cells an icon occupies (emoji render double width).
pub const ICON_CELLS: usize = 2;

/// Segments and icons used to draw a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideGlyphs {
    pub continuation: &'static str,
    pub corner: &'static str,
    pub directory_icon: &'static str,
    pub file_icon: &'static str,
}

impl GuideGlyphs {
    /// Box-drawing guides and emoji icons for terminals.
    pub const UNICODE: Self = Self {
        continuation: "│   ",
        corner: "└── ",
        directory_icon: "📁",
        file_icon: "📄",
    };
}

/// Prefix for a node at `level`: empty for the root, otherwise
/// `level - 1` continuation segments and a corner.
#[must_use]
pub fn level_prefix(level: usize, glyphs: &GuideGlyphs) -> String {
    if level == 0 {
        return String::new();
    }
    let mut prefix = glyphs.continuation.repeat(level - 1);
    prefix.push_str(glyphs.corner);
    prefix
}

/// `{prefix}{icon} {name} ({size})`
#[must_use]
pub fn format_line(node: &TreeNode, glyphs: &GuideGlyphs) -> String {
    let icon = if node.is_directory {
        glyphs.directory_icon
    } else {
        glyphs.file_icon
    };
    format!(
        "{}{} {} ({})",
        level_prefix(node.level, glyphs),
        icon,
        node.name,
        node.size
    )
}
