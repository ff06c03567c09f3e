//! Folder-name synthesis from shoot metadata.
//!
//! Everything in this module is pure: no I/O, no failure. Absent optional
//! fields are simply left out of the generated name.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ditfolder_core::metadata::{ShootMetadata, Unit};
//! use ditfolder_core::naming::resolve_folder_name;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let meta = ShootMetadata::new("ABC", date, Unit::Main, "Day003");
//! assert_eq!(resolve_folder_name(&meta), "ABC_20240315_Day003_MU");
//! ```

use std::fmt;

use chrono::NaiveDate;

use crate::metadata::{ShootMetadata, Unit};

/// Suffix used for every test-shoot folder, whatever day or episode was entered.
pub const TEST_SHOOT_SUFFIX: &str = "_TEST01_Day999_TEST";

/// Builds the canonical day-folder name.
///
/// `{showcode}_{YYYYMMDD}` followed by a unit-specific tail:
/// - `CG` with a CG number: `_{cg}_CG`
/// - `TEST`: the fixed `_TEST01_Day999_TEST`
/// - anything else: `_{episode}` when present, then `_{day}_{unit}`
#[must_use]
pub fn resolve(
    showcode: &str,
    date: NaiveDate,
    unit: &Unit,
    episode: Option<&str>,
    day: &str,
    cg_number: Option<&str>,
) -> String {
    let mut name = format!("{}_{}", showcode, date.format("%Y%m%d"));

    let cg_number = cg_number.filter(|cg| !cg.is_empty());
    match (unit, cg_number) {
        (Unit::Cg, Some(cg)) => {
            name.push('_');
            name.push_str(cg);
            name.push_str("_CG");
        }
        (Unit::Test, _) => name.push_str(TEST_SHOOT_SUFFIX),
        _ => {
            if let Some(episode) = episode.filter(|ep| !ep.is_empty()) {
                name.push('_');
                name.push_str(episode);
            }
            name.push('_');
            name.push_str(day);
            name.push('_');
            name.push_str(unit.as_str());
        }
    }

    name
}

/// [`resolve`] over a [`ShootMetadata`] value.
#[must_use]
pub fn resolve_folder_name(meta: &ShootMetadata) -> String {
    resolve(
        &meta.showcode,
        meta.date,
        &meta.unit,
        Some(meta.episode.as_str()),
        &meta.day,
        Some(meta.cg_number.as_str()),
    )
}

/// Folder name used for the project level: spaces become underscores.
#[must_use]
pub fn project_folder_name(project_name: &str) -> String {
    project_name.replace(' ', "_")
}

/// Suggested file name for an exported report, e.g. `ABC_20240315_Day003_MU_structure.csv`.
///
/// The base is reduced to a single path component: separators become `_`,
/// and a base with nothing left (such as `/`) becomes `root`.
#[must_use]
pub fn default_export_file_name(base_name: &str, extension: &str) -> String {
    let base: String = base_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let base = base.trim_matches(|c| c == '_' || c == '.');
    let base = if base.is_empty() { "root" } else { base };
    format!("{base}_structure.{extension}")
}

/// The metadata block printed at the top of a structure report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    lines: Vec<String>,
}

impl ProjectInfo {
    /// Builds the block from the project name and shoot metadata.
    pub fn from_metadata(project_name: &str, meta: &ShootMetadata) -> Self {
        let mut lines = vec![
            format!("Project: {project_name}"),
            format!("Showcode: {}", meta.showcode),
        ];
        if !meta.episode.is_empty() {
            lines.push(format!("Episode: {}", meta.episode));
        }
        lines.push(format!("Day: {}", meta.day));
        lines.push(format!("Unit: {}", meta.unit));
        if !meta.cg_number.is_empty() {
            lines.push(format!("CG Number: {}", meta.cg_number));
        }
        lines.push(format!("Date: {}", meta.date.format("%A, %B %-d, %Y")));
        lines.push(format!("Folder: {}", resolve_folder_name(meta)));

        Self { lines }
    }

    /// Free text, one field per line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_main_unit_without_episode() {
        let name = resolve("ABC", date(), &Unit::Main, None, "Day003", None);
        assert_eq!(name, "ABC_20240315_Day003_MU");

        let empty_episode = resolve("ABC", date(), &Unit::Main, Some(""), "Day003", None);
        assert_eq!(empty_episode, name);
    }

    #[test]
    fn test_episode_is_inserted_before_day() {
        let name = resolve("ABC", date(), &Unit::Second, Some("EP104"), "Day012", None);
        assert_eq!(name, "ABC_20240315_EP104_Day012_2U");
        assert!(name.contains("_EP104_"));
        assert!(name.ends_with("_Day012_2U"));
    }

    #[test]
    fn test_cg_unit_with_number() {
        let name = resolve("XYZ", date(), &Unit::Cg, Some("EP1"), "Day001", Some("042"));
        assert_eq!(name, "XYZ_20240315_042_CG");
    }

    #[test]
    fn test_cg_unit_without_number_falls_through() {
        let name = resolve("XYZ", date(), &Unit::Cg, None, "Day001", Some(""));
        assert_eq!(name, "XYZ_20240315_Day001_CG");
    }

    #[test]
    fn test_test_unit_ignores_day_episode_and_cg() {
        for (episode, day, cg) in [
            (None, "Day001", None),
            (Some("EP9"), "Day050", Some("7")),
            (Some(""), "", Some("")),
        ] {
            let name = resolve("QQQ", date(), &Unit::Test, episode, day, cg);
            assert_eq!(name, "QQQ_20240315_TEST01_Day999_TEST");
        }
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        let unit = Unit::from("3U");
        let name = resolve("ABC", date(), &unit, None, "Day002", None);
        assert_eq!(name, "ABC_20240315_Day002_3U");
    }

    #[test]
    fn test_resolve_folder_name_matches_resolve() {
        let meta = ShootMetadata::new("abc", date(), Unit::Main, "Day003").with_episode("EP1");
        assert_eq!(resolve_folder_name(&meta), "ABC_20240315_EP1_Day003_MU");
    }

    #[test]
    fn test_project_folder_name() {
        assert_eq!(project_folder_name("My Great Show"), "My_Great_Show");
        assert_eq!(project_folder_name("Show"), "Show");
    }

    #[test]
    fn test_default_export_file_name() {
        assert_eq!(
            default_export_file_name("ABC_20240315_Day003_MU", "pdf"),
            "ABC_20240315_Day003_MU_structure.pdf"
        );
        assert_eq!(default_export_file_name("/", "csv"), "root_structure.csv");
        assert_eq!(default_export_file_name("/tmp/Show/..", "csv"), "tmp_Show_structure.csv");
        assert_eq!(default_export_file_name("C:\\", "pdf"), "C_structure.pdf");
    }

    #[test]
    fn test_project_info_lines() {
        let meta = ShootMetadata::new("ABC", date(), Unit::Cg, "Day003").with_cg_number("12");
        let info = ProjectInfo::from_metadata("My Show", &meta);
        assert_eq!(
            info.lines(),
            [
                "Project: My Show",
                "Showcode: ABC",
                "Day: Day003",
                "Unit: CG",
                "CG Number: 12",
                "Date: Friday, March 15, 2024",
                "Folder: ABC_20240315_12_CG",
            ]
        );
    }

    #[test]
    fn test_project_info_from_text_round_trips() {
        let info = ProjectInfo::from_text("Project: X\nDay: Day001");
        assert_eq!(info.lines().len(), 2);
        assert_eq!(info.to_string(), "Project: X\nDay: Day001");
    }
}
