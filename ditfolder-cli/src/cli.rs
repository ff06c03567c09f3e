// ditfolder-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ditfolder_core::metadata::{ShootMetadata, Unit};

use crate::config::{DEFAULT_PRESETS_DIR, DEFAULT_UNIT, PRESETS_DIR_ENV};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ditfolder: shoot-day folder generator for DITs",
    long_about = "Creates standardized shoot-day folder structures at one or more storage \
                  locations and exports CSV/PDF reports of folder trees."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file (or a timestamped file in this directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a shoot-day folder structure at every location
    Create(CreateArgs),
    /// Prints the day-folder name for the given shoot details
    Name(NameArgs),
    /// Shows the tree of an existing folder and optionally exports it
    Scan(ScanArgs),
    /// Lists the available folder presets
    Presets(PresetsArgs),
}

/// Shoot details the day-folder name is built from.
#[derive(Args, Debug, Clone)]
pub struct ShootArgs {
    /// 3-letter production code (uppercased automatically)
    #[arg(short, long, value_name = "CODE")]
    pub showcode: String,

    /// Episode code, if the production has episodes
    #[arg(short, long, value_name = "EPISODE")]
    pub episode: Option<String>,

    /// Shoot day label, e.g. Day003
    #[arg(short, long, value_name = "DAY")]
    pub day: String,

    /// Unit tag: MU, 2U, CG, TEST or any custom tag
    #[arg(short, long, default_value = DEFAULT_UNIT, value_parser = parse_unit)]
    pub unit: Unit,

    /// CG number, used when the unit is CG
    #[arg(long, value_name = "NUMBER")]
    pub cg_number: Option<String>,

    /// Shoot date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl ShootArgs {
    pub fn to_metadata(&self) -> ShootMetadata {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let mut meta = ShootMetadata::new(&self.showcode, date, self.unit.clone(), &self.day);
        if let Some(episode) = &self.episode {
            meta = meta.with_episode(episode);
        }
        if let Some(cg_number) = &self.cg_number {
            meta = meta.with_cg_number(cg_number);
        }
        meta
    }
}

/// Where generated reports go.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Export the tree as CSV to this file or directory
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Export the tree as a PDF report to this file or directory
    #[arg(long, value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Continue long PDF trees on extra pages instead of truncating
    #[arg(long)]
    pub paginate: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name; spaces become underscores in the folder name
    #[arg(short, long, value_name = "NAME")]
    pub project: String,

    #[command(flatten)]
    pub shoot: ShootArgs,

    /// Target location; repeat for backups (first is the primary, at most 3)
    #[arg(short, long = "location", value_name = "DIR", required = true)]
    pub locations: Vec<PathBuf>,

    /// Folder preset to create under the day folder
    #[arg(long, default_value = ditfolder_core::presets::DEFAULT_PRESET_NAME)]
    pub preset: String,

    /// Directory holding preset JSON files
    #[arg(long, value_name = "DIR", env = PRESETS_DIR_ENV, default_value = DEFAULT_PRESETS_DIR)]
    pub presets_dir: PathBuf,

    /// Check every location for an existing day folder before creating anything
    #[arg(long)]
    pub precheck: bool,

    #[command(flatten)]
    pub reports: ReportArgs,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    #[command(flatten)]
    pub shoot: ShootArgs,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Folder to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub reports: ReportArgs,
}

#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Directory holding preset JSON files
    #[arg(long, value_name = "DIR", env = PRESETS_DIR_ENV, default_value = DEFAULT_PRESETS_DIR)]
    pub presets_dir: PathBuf,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}' ({e})"))
}

fn parse_unit(value: &str) -> Result<Unit, String> {
    Ok(Unit::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_args() {
        let cli = Cli::parse_from([
            "ditfolder",
            "create",
            "--project",
            "Night Shift",
            "--showcode",
            "abc",
            "--day",
            "Day003",
            "--date",
            "2024-03-15",
            "--location",
            "/mnt/a",
            "--location",
            "/mnt/b",
            "--presets-dir",
            "/tmp/presets",
            "--csv",
            "out.csv",
        ]);

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.project, "Night Shift");
                assert_eq!(args.shoot.unit, Unit::Main);
                assert_eq!(args.locations, vec![PathBuf::from("/mnt/a"), PathBuf::from("/mnt/b")]);
                assert_eq!(args.preset, "Default");
                assert!(!args.precheck);
                assert_eq!(args.reports.csv, Some(PathBuf::from("out.csv")));
                assert!(args.reports.pdf.is_none());
                assert_eq!(
                    args.shoot.to_metadata().date,
                    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
                );
            }
            other => panic!("Expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_name_with_cg_unit() {
        let cli = Cli::parse_from([
            "ditfolder", "name", "-s", "XYZ", "-d", "Day001", "-u", "CG", "--cg-number", "042",
        ]);
        match cli.command {
            Commands::Name(args) => {
                let meta = args.shoot.to_metadata();
                assert_eq!(meta.unit, Unit::Cg);
                assert_eq!(meta.cg_number, "042");
            }
            other => panic!("Expected name, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ditfolder", "scan", ".", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from([
            "ditfolder", "name", "-s", "ABC", "-d", "Day1", "--date", "15/03/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_requires_a_location() {
        let result = Cli::try_parse_from([
            "ditfolder", "create", "-p", "Show", "-s", "ABC", "-d", "Day1",
        ]);
        assert!(result.is_err());
    }
}
