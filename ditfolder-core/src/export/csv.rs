// ============================================================================
// ditfolder-core/src/export/csv.rs
// ============================================================================
//
// TABULAR REPORT: One CSV row per snapshot node, in scan order
//
// Header: Folder Name,Path,Type,Size,Level
// Fields containing a comma, quote, CR or LF are quoted with internal quotes
// doubled. Lines end with LF. The file is written atomically.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{CoreError, CoreResult};
use crate::scanner::TreeNode;
use crate::temp_files::write_atomic;

/// Column names, in order.
pub const CSV_HEADER: [&str; 5] = ["Folder Name", "Path", "Type", "Size", "Level"];

/// One row read back from a CSV report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub folder_name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub size: String,
    pub level: usize,
}

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the snapshot as CSV text, header first.
#[must_use]
pub fn render_csv(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for node in nodes {
        let row = [
            csv_escape(&node.name),
            csv_escape(&node.path.to_string_lossy()),
            node.kind_label().to_string(),
            csv_escape(&node.size),
            node.level.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Writes the snapshot to `dest` as CSV.
pub fn write_csv(nodes: &[TreeNode], dest: &Path) -> CoreResult<()> {
    write_atomic(dest, render_csv(nodes).as_bytes())?;
    info!("Exported {} row(s) to {}", nodes.len(), dest.display());
    Ok(())
}

/// Splits CSV text into rows of fields. Quoted fields may span lines.
fn split_rows(text: &str) -> CoreResult<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut current)),
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    row.push(std::mem::take(&mut current));
                    rows.push(std::mem::take(&mut row));
                }
                _ => current.push(ch),
            }
        }
    }

    if in_quotes {
        return Err(CoreError::CsvParse("unterminated quoted field".to_string()));
    }
    if !current.is_empty() || !row.is_empty() {
        row.push(current);
        rows.push(row);
    }

    Ok(rows)
}

/// Reads a CSV report back into records.
///
/// # Errors
///
/// `CoreError::CsvParse` if the header is missing or wrong, a row has the
/// wrong number of fields, or a Type or Level value is not recognised.
pub fn parse_csv(text: &str) -> CoreResult<Vec<CsvRecord>> {
    let mut rows = split_rows(text)?.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| CoreError::CsvParse("CSV is empty".to_string()))?;
    if header != CSV_HEADER {
        return Err(CoreError::CsvParse(format!(
            "unexpected header: {}",
            header.join(",")
        )));
    }

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        // Header is line 1
        let line = index + 2;
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }
        let [folder_name, path, kind, size, level]: [String; 5] =
            row.try_into().map_err(|row: Vec<String>| {
                CoreError::CsvParse(format!("row {line}: expected 5 fields, found {}", row.len()))
            })?;

        let is_directory = match kind.as_str() {
            "Directory" => true,
            "File" => false,
            other => {
                return Err(CoreError::CsvParse(format!(
                    "row {line}: unknown type '{other}'"
                )));
            }
        };
        let level = level
            .parse::<usize>()
            .map_err(|e| CoreError::CsvParse(format!("row {line}: invalid level '{level}': {e}")))?;

        records.push(CsvRecord {
            folder_name,
            path: PathBuf::from(path),
            is_directory,
            size,
            level,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, path: &str, is_directory: bool, size: &str, level: usize) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            path: PathBuf::from(path),
            is_directory,
            size: size.to_string(),
            bytes: 0,
            level,
        }
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
        assert_eq!(csv_escape("cr\rhere"), "\"cr\rhere\"");
    }

    #[test]
    fn test_render_csv() {
        let nodes = vec![
            node("Day", "/mnt/Show/Day", true, "1.5 MB", 0),
            node("A, B", "/mnt/Show/Day/A, B", false, "1.5 MB", 1),
        ];
        assert_eq!(
            render_csv(&nodes),
            "Folder Name,Path,Type,Size,Level\n\
             Day,/mnt/Show/Day,Directory,1.5 MB,0\n\
             \"A, B\",\"/mnt/Show/Day/A, B\",File,1.5 MB,1\n"
        );
    }

    #[test]
    fn test_empty_snapshot_is_header_only() {
        assert_eq!(render_csv(&[]), "Folder Name,Path,Type,Size,Level\n");
        assert!(parse_csv(&render_csv(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_parse_handles_quotes_and_newlines() {
        let nodes = vec![
            node("Day", "/r/Day", true, "0 B", 0),
            node("say \"hi\"", "/r/Day/say \"hi\"", false, "0 B", 1),
            node("two\nlines", "/r/Day/two\nlines", false, "0 B", 1),
        ];
        let records = parse_csv(&render_csv(&nodes)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].folder_name, "say \"hi\"");
        assert_eq!(records[2].folder_name, "two\nlines");
        assert_eq!(records[2].path, PathBuf::from("/r/Day/two\nlines"));
        assert!(records[0].is_directory);
        assert_eq!(records[2].level, 1);
    }

    #[test]
    fn test_parse_accepts_crlf() {
        let text = "Folder Name,Path,Type,Size,Level\r\nDay,/r/Day,Directory,0 B,0\r\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_csv(""), Err(CoreError::CsvParse(_))));
        assert!(parse_csv("Name,Path\n").is_err());
        assert!(parse_csv("Folder Name,Path,Type,Size,Level\nDay,/r,Folder,0 B,0\n").is_err());
        assert!(parse_csv("Folder Name,Path,Type,Size,Level\nDay,/r,File,0 B\n").is_err());
        assert!(parse_csv("Folder Name,Path,Type,Size,Level\nDay,/r,File,0 B,-1\n").is_err());
        assert!(parse_csv("Folder Name,Path,Type,Size,Level\n\"open,/r,File,0 B,0\n").is_err());
    }
}
