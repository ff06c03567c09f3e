// ============================================================================
// ditfolder-core/src/materialize.rs
// ============================================================================
//
// TREE MATERIALIZER: Creates the project/day folder tree at each location
//
// Locations are processed one at a time in the order given; the first one is
// the primary. The first collision or filesystem error aborts the whole
// operation. Locations that were already populated are left in place: there
// is no rollback, and the operator cleans up by hand.
//
// With `MaterializeOptions::precheck` set, every location is checked for a
// collision before anything is created, so a collision at a later location
// no longer leaves earlier locations modified. OS errors during creation can
// still leave earlier locations populated.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::presets::validate_relative_folder;

/// Options for [`materialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Check every location for a collision before creating anything.
    pub precheck: bool,
}

/// `location/project/day`
#[must_use]
pub fn day_folder_path(location: &Path, project_folder_name: &str, day_folder_name: &str) -> PathBuf {
    location.join(project_folder_name).join(day_folder_name)
}

fn active_locations(locations: &[PathBuf]) -> impl Iterator<Item = &PathBuf> {
    locations
        .iter()
        .filter(|location| !location.as_os_str().is_empty())
}

fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Dry run: returns the first day-folder path that already exists, in
/// location order. Touches nothing on disk.
#[must_use]
pub fn check_collisions(
    locations: &[PathBuf],
    project_folder_name: &str,
    day_folder_name: &str,
) -> Option<PathBuf> {
    active_locations(locations)
        .map(|location| day_folder_path(location, project_folder_name, day_folder_name))
        .find(|full_path| path_exists(full_path))
}

/// Creates `location/project/day` and every preset folder under it, at each
/// location in turn.
///
/// Returns the created day-folder paths in location order. Empty location
/// entries are skipped.
///
/// # Errors
///
/// * `CoreError::NoLocations` - no non-empty location was given
/// * `CoreError::InvalidPreset` - a preset folder is absolute or contains `..`
/// * `CoreError::Collision` - the day folder already exists at a location
/// * `CoreError::Filesystem` - a directory could not be created
pub fn materialize(
    locations: &[PathBuf],
    project_folder_name: &str,
    day_folder_name: &str,
    preset_folders: &[String],
) -> CoreResult<Vec<PathBuf>> {
    materialize_with(
        locations,
        project_folder_name,
        day_folder_name,
        preset_folders,
        MaterializeOptions::default(),
    )
}

/// [`materialize`] with explicit options.
pub fn materialize_with(
    locations: &[PathBuf],
    project_folder_name: &str,
    day_folder_name: &str,
    preset_folders: &[String],
    options: MaterializeOptions,
) -> CoreResult<Vec<PathBuf>> {
    if active_locations(locations).next().is_none() {
        return Err(CoreError::NoLocations);
    }

    for folder in preset_folders {
        validate_relative_folder(folder)
            .map_err(|reason| CoreError::InvalidPreset(format!("'{folder}' {reason}")))?;
    }

    if options.precheck {
        if let Some(path) = check_collisions(locations, project_folder_name, day_folder_name) {
            return Err(CoreError::Collision { path });
        }
    }

    let mut created = Vec::new();
    for location in active_locations(locations) {
        let full_path =
            materialize_location(location, project_folder_name, day_folder_name, preset_folders)?;
        info!("Created folder structure at {}", full_path.display());
        created.push(full_path);
    }

    Ok(created)
}

fn materialize_location(
    location: &Path,
    project_folder_name: &str,
    day_folder_name: &str,
    preset_folders: &[String],
) -> CoreResult<PathBuf> {
    let project_path = location.join(project_folder_name);
    let full_path = project_path.join(day_folder_name);

    if path_exists(&full_path) {
        return Err(CoreError::Collision { path: full_path });
    }

    create_dir(&project_path)?;
    create_dir(&full_path)?;
    for folder in preset_folders {
        create_dir(&full_path.join(folder))?;
    }

    Ok(full_path)
}

fn create_dir(path: &Path) -> CoreResult<()> {
    debug!("Creating {}", path.display());
    fs::create_dir_all(path).map_err(|e| CoreError::filesystem(path, e))
}
