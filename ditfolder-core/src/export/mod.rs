//! Report export for scan snapshots.
//!
//! Two formats are supported:
//! - [`csv`]: one row per node, for spreadsheets and re-import
//! - [`pdf`]: a printable report with project info and the tree
//!
//! Both writers go through [`crate::temp_files::write_atomic`], so an
//! existing report is only replaced once the new one is complete.

pub mod csv;
pub mod pdf;

pub use self::csv::{CSV_HEADER, CsvRecord, parse_csv, render_csv, write_csv};
pub use self::pdf::{DocumentLayout, Overflow, page_count, render_pdf, write_pdf};
