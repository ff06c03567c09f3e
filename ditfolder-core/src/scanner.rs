//! Recursive folder scanning into a flat, level-tagged snapshot.
//!
//! The scan produces a single depth-first pre-order list. Each node carries
//! its depth (`level`, root = 0); a node's parent is the most recently
//! emitted node one level up. Renderers rebuild tree guides from consecutive
//! levels alone, and exporters write rows in the same order.
//!
//! Siblings are sorted by case-insensitive name. Directory sizes are the sum
//! of every file below them, accumulated bottom-up in the same pass that
//! emits the nodes: a directory's size is filled in once its subtree has
//! been walked.
//!
//! Scanning never fails. Entries that cannot be stat'ed are left out, and
//! directories that cannot be listed appear without children. Symlinks are
//! followed, and cycles are not detected.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::utils::{display_name, format_size};

/// One file or directory in a scan snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Final path component
    pub name: String,
    /// Absolute path
    pub path: PathBuf,
    pub is_directory: bool,
    /// Human-readable size, e.g. "1.5 MB"
    pub size: String,
    /// File length, or the sum of all file lengths below a directory
    pub bytes: u64,
    /// Depth below the scanned root (root = 0)
    pub level: usize,
}

impl TreeNode {
    fn new(name: String, path: PathBuf, is_directory: bool, bytes: u64, level: usize) -> Self {
        Self {
            name,
            path,
            is_directory,
            size: format_size(bytes),
            bytes,
            level,
        }
    }

    fn set_bytes(&mut self, bytes: u64) {
        self.bytes = bytes;
        self.size = format_size(bytes);
    }

    /// "Directory" or "File", as written to reports.
    pub fn kind_label(&self) -> &'static str {
        if self.is_directory { "Directory" } else { "File" }
    }
}

/// Counts over a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    /// Directories below the root
    pub directories: usize,
    pub total_bytes: u64,
}

/// Scans `root` and returns its snapshot.
///
/// The first node is the root itself, sized as its whole subtree. An empty
/// list means the root could not be stat'ed.
///
/// # Examples
///
/// ```rust,no_run
/// use ditfolder_core::scan;
/// use std::path::Path;
///
/// for node in scan(Path::new("/Volumes/RAID/Show/ABC_20240315_Day003_MU")) {
///     println!("{}{} ({})", "  ".repeat(node.level), node.name, node.size);
/// }
/// ```
pub fn scan(root: &Path) -> Vec<TreeNode> {
    let root = normalize_root(root);

    let metadata = match fs::metadata(&root) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Cannot scan {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let name = display_name(&root);
    if !metadata.is_dir() {
        return vec![TreeNode::new(name, root, false, metadata.len(), 0)];
    }

    let mut nodes = vec![TreeNode::new(name, root.clone(), true, 0, 0)];
    let total = walk(&root, 1, &mut nodes);
    nodes[0].set_bytes(total);

    debug!("Scanned {}: {} node(s), {} bytes", root.display(), nodes.len(), total);
    nodes
}

/// Resolves `.`, `..` and symlinks so the root node carries a real folder
/// name. Paths that cannot be resolved are made absolute as given.
fn normalize_root(root: &Path) -> PathBuf {
    fs::canonicalize(root)
        .or_else(|_| std::path::absolute(root))
        .unwrap_or_else(|_| root.to_path_buf())
}

/// Emits the children of `dir` at `level` and returns their total size.
fn walk(dir: &Path, level: usize, nodes: &mut Vec<TreeNode>) -> u64 {
    let mut total: u64 = 0;

    for (name, path) in sorted_children(dir) {
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Skipping unreadable entry {}: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_dir() {
            let index = nodes.len();
            nodes.push(TreeNode::new(name, path.clone(), true, 0, level));
            let bytes = walk(&path, level + 1, nodes);
            nodes[index].set_bytes(bytes);
            total = total.saturating_add(bytes);
        } else {
            let bytes = metadata.len();
            nodes.push(TreeNode::new(name, path, false, bytes, level));
            total = total.saturating_add(bytes);
        }
    }

    total
}

/// Immediate children of `dir`, sorted by case-insensitive name with the
/// raw name as a tie-breaker.
fn sorted_children(dir: &Path) -> Vec<(String, PathBuf)> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!("Error reading directory contents at {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut children: Vec<(String, PathBuf)> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            Some((entry.file_name().to_string_lossy().to_string(), entry.path()))
        })
        .collect();

    children.sort_by_cached_key(|(name, _)| (name.to_lowercase(), name.clone()));
    children
}

/// Totals for a snapshot.
#[must_use]
pub fn summarize(nodes: &[TreeNode]) -> ScanSummary {
    let mut summary = ScanSummary::default();
    for node in nodes {
        if node.is_directory {
            if node.level > 0 {
                summary.directories += 1;
            }
        } else {
            summary.files += 1;
            summary.total_bytes = summary.total_bytes.saturating_add(node.bytes);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(scan(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_parent_reference_root_is_resolved() {
        let dir = tempdir().unwrap();
        let show = dir.path().join("Show");
        fs::create_dir_all(show.join("inner")).unwrap();

        let nodes = scan(&show.join("inner").join(".."));

        assert_eq!(nodes[0].name, "Show");
        assert_eq!(nodes[0].path, fs::canonicalize(&show).unwrap());
        assert_eq!(nodes[1].name, "inner");
    }

    #[test]
    fn test_file_root_is_single_node() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("clip.mov");
        fs::write(&file, vec![0u8; 42]).unwrap();

        let nodes = scan(&file);
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].is_directory);
        assert_eq!(nodes[0].bytes, 42);
        assert_eq!(nodes[0].size, "42 B");
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let nodes = scan(dir.path());
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].level, 0);
        assert_eq!(nodes[0].size, "0 B");
        assert!(nodes[0].is_directory);
    }

    #[test]
    fn test_case_insensitive_sibling_order() {
        let dir = tempdir().unwrap();
        for name in ["beta", "Alpha", "gamma", "Delta"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let names: Vec<_> = scan(dir.path()).into_iter().skip(1).map(|n| n.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Delta", "gamma"]);
    }

    #[test]
    fn test_sizes_accumulate_bottom_up() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("A").join("B");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("A").join("one.bin"), vec![0u8; 100]).unwrap();
        fs::write(nested.join("two.bin"), vec![0u8; 250]).unwrap();
        fs::write(dir.path().join("top.bin"), vec![0u8; 7]).unwrap();

        let nodes = scan(dir.path());
        let by_name = |name: &str| nodes.iter().find(|n| n.name == name).unwrap();

        assert_eq!(nodes[0].bytes, 357);
        assert_eq!(by_name("A").bytes, 350);
        assert_eq!(by_name("B").bytes, 250);
        assert_eq!(by_name("top.bin").bytes, 7);
        assert_eq!(summarize(&nodes).total_bytes, nodes[0].bytes);
    }

    #[test]
    fn test_summarize_counts() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("A").join("B")).unwrap();
        fs::write(dir.path().join("A").join("f.txt"), b"hello").unwrap();

        let summary = summarize(&scan(dir.path()));
        assert_eq!(
            summary,
            ScanSummary {
                files: 1,
                directories: 2,
                total_bytes: 5
            }
        );
    }

    #[test]
    fn test_kind_label() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), b"").unwrap();
        let nodes = scan(dir.path());
        assert_eq!(nodes[0].kind_label(), "Directory");
        assert_eq!(nodes[1].kind_label(), "File");
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_skipped() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();
        fs::write(dir.path().join("real.txt"), b"abc").unwrap();

        let nodes = scan(dir.path());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].name, "real.txt");
    }
}
