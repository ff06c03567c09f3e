//! Configuration structures and constants for the ditfolder-core library.
//!
//! This module holds the settings a day-folder run needs beyond the shoot
//! metadata itself: where presets live, which locations to write to, the
//! project and preset to use, and how reports are laid out.

mod builder;

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::export::DocumentLayout;
use crate::materialize::MaterializeOptions;
use crate::metadata::validate_project_name;
use crate::presets::{DEFAULT_PRESET_NAME, DirectoryPresetCatalog};

// Default constants

/// Default presets directory, relative to the working directory.
pub const DEFAULT_PRESETS_DIR: &str = "Presets";

/// Most locations a single run writes to. The first is the primary.
pub const MAX_LOCATIONS: usize = 3;

/// Main configuration structure for the ditfolder-core library.
///
/// Usually built by the CLI from its arguments and handed to
/// [`crate::workflow::create_day_folder`] through a
/// [`crate::workflow::DayFolderRequest`].
///
/// # Examples
///
/// ```rust
/// use ditfolder_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .project_name("Night Shift")
///     .location(PathBuf::from("/Volumes/RAID_A"))
///     .location(PathBuf::from("/Volumes/Shuttle_01"))
///     .preset_name("Extended")
///     .precheck(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.locations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Directory holding `*.json` preset files
    pub presets_dir: PathBuf,

    /// Target locations in order; the first is the primary
    pub locations: Vec<PathBuf>,

    /// Human-readable project name; spaces become underscores on disk
    pub project_name: String,

    /// Preset to create under the day folder
    pub preset_name: String,

    /// Check every location for a collision before creating anything
    pub precheck: bool,

    /// Page geometry and overflow policy for PDF reports
    pub document_layout: DocumentLayout,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            presets_dir: PathBuf::from(DEFAULT_PRESETS_DIR),
            locations: Vec::new(),
            project_name: String::new(),
            preset_name: DEFAULT_PRESET_NAME.to_string(),
            precheck: false,
            document_layout: DocumentLayout::default(),
        }
    }
}

impl CoreConfig {
    /// Checks the configuration before anything touches the disk.
    ///
    /// # Errors
    ///
    /// * `CoreError::NoLocations` - every location is empty
    /// * `CoreError::InvalidMetadata` - the project name is missing or unsafe
    /// * `CoreError::Config` - too many locations, no preset name, or a page
    ///   layout with no room for text
    pub fn validate(&self) -> CoreResult<()> {
        let active = self
            .locations
            .iter()
            .filter(|location| !location.as_os_str().is_empty())
            .count();
        if active == 0 {
            return Err(CoreError::NoLocations);
        }
        if active > MAX_LOCATIONS {
            return Err(CoreError::Config(format!(
                "At most {MAX_LOCATIONS} locations are supported, got {active}"
            )));
        }

        validate_project_name(&self.project_name)?;

        if self.preset_name.trim().is_empty() {
            return Err(CoreError::Config("Preset name is required".to_string()));
        }

        let layout = &self.document_layout;
        if layout.margin < 0.0
            || layout.margin * 2.0 >= layout.page_width
            || layout.margin * 2.0 >= layout.page_height
        {
            return Err(CoreError::Config(format!(
                "Margin of {} pt leaves no room on a {}x{} pt page",
                layout.margin, layout.page_width, layout.page_height
            )));
        }

        Ok(())
    }

    pub fn materialize_options(&self) -> MaterializeOptions {
        MaterializeOptions {
            precheck: self.precheck,
        }
    }

    /// Preset catalog backed by `presets_dir`.
    pub fn preset_catalog(&self) -> DirectoryPresetCatalog {
        DirectoryPresetCatalog::new(&self.presets_dir)
    }
}
