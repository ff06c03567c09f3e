//! Core library for creating and documenting DIT day-folder structures.
//!
//! This crate resolves standardized day-folder names from shoot metadata,
//! creates the project/day/preset tree at one or more storage locations,
//! scans folders into a flat snapshot, and exports snapshots as CSV or PDF
//! reports.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use ditfolder_core::config::CoreConfigBuilder;
//! use ditfolder_core::metadata::{ShootMetadata, Unit};
//! use ditfolder_core::workflow::{DayFolderRequest, create_day_folder};
//! use ditfolder_core::export::{DocumentLayout, write_csv, write_pdf};
//! use std::path::Path;
//!
//! let config = CoreConfigBuilder::new()
//!     .project_name("Night Shift")
//!     .location("/Volumes/RAID_A")
//!     .location("/Volumes/Shuttle_01")
//!     .presets_dir("/Volumes/RAID_A/Presets")
//!     .build()
//!     .unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let metadata = ShootMetadata::new("ABC", date, Unit::Main, "Day003");
//! let catalog = config.preset_catalog();
//! let request = DayFolderRequest::new(metadata, config);
//!
//! let result = create_day_folder(&request, &catalog).unwrap();
//! write_csv(&result.snapshot, Path::new("structure.csv")).unwrap();
//! write_pdf(
//!     &result.snapshot,
//!     &result.project_info,
//!     &DocumentLayout::default(),
//!     Path::new("structure.pdf"),
//! )
//! .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod file_logging;
pub mod materialize;
pub mod metadata;
pub mod naming;
pub mod presets;
pub mod scanner;
pub mod temp_files;
pub mod tree_guide;
pub mod utils;
pub mod workflow;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use export::{DocumentLayout, Overflow};
pub use materialize::{MaterializeOptions, check_collisions, materialize, materialize_with};
pub use metadata::{ShootMetadata, Unit};
pub use naming::{ProjectInfo, resolve, resolve_folder_name};
pub use presets::{DirectoryPresetCatalog, FolderPreset, PresetCatalog, StaticPresetCatalog};
pub use scanner::{ScanSummary, TreeNode, scan, summarize};
pub use utils::format_size;
pub use workflow::{
    CreatedDayFolder, DayFolderRequest, OperationHandle, create_day_folder, spawn_operation,
};
