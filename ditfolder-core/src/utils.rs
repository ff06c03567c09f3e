//! Utility functions for formatting and path handling.
//!
//! This module provides general-purpose helpers used throughout the
//! ditfolder-core library: human-readable size strings and file-name
//! extraction.

use std::path::Path;

/// Decimal units in ascending order with the number of decimals shown.
const SIZE_UNITS: [(&str, i32); 4] = [("KB", 0), ("MB", 1), ("GB", 2), ("TB", 2)];

/// Formats a byte count with decimal (1000-based) units: B, KB, MB, GB, TB.
///
/// Bytes are shown as an integer, KB without decimals, MB with one and
/// GB/TB with two. TB is the largest unit; anything bigger stays in TB.
///
/// ```rust
/// use ditfolder_core::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1_500_000), "1.5 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    for (index, (unit, decimals)) in SIZE_UNITS.iter().enumerate() {
        value /= 1000.0;
        let scale = 10f64.powi(*decimals);
        let rounded = (value * scale).round() / scale;
        let is_last = index == SIZE_UNITS.len() - 1;
        if rounded < 1000.0 || is_last {
            return format!("{:.*} {}", *decimals as usize, rounded, unit);
        }
    }

    unreachable!("the last unit always returns")
}

/// Extracts the final path component for display, falling back to the whole
/// path for roots such as `/`.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
