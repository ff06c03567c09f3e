// ============================================================================
// ditfolder-core/src/workflow.rs
// ============================================================================
//
// DAY FOLDER WORKFLOW: The full create-a-day-folder sequence
//
// 1. Validate shoot metadata and configuration
// 2. Resolve the day-folder name
// 3. Look up the preset
// 4. Materialize the tree at every location
// 5. Scan the project folder at the primary location for display and export
//
// Every step runs on the calling thread. Front-ends that must stay
// responsive run the whole sequence through spawn_operation and collect the
// single result with OperationHandle::wait.

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use log::{debug, info};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::materialize::materialize_with;
use crate::metadata::ShootMetadata;
use crate::naming::{ProjectInfo, project_folder_name, resolve_folder_name};
use crate::presets::PresetCatalog;
use crate::scanner::{TreeNode, scan};

/// Everything needed to create one day folder.
#[derive(Debug, Clone)]
pub struct DayFolderRequest {
    pub metadata: ShootMetadata,
    pub config: CoreConfig,
}

impl DayFolderRequest {
    pub fn new(metadata: ShootMetadata, config: CoreConfig) -> Self {
        Self { metadata, config }
    }

    /// Project info block for reports on this request.
    pub fn project_info(&self) -> ProjectInfo {
        ProjectInfo::from_metadata(&self.config.project_name, &self.metadata)
    }
}

/// Outcome of a successful [`create_day_folder`].
#[derive(Debug, Clone)]
pub struct CreatedDayFolder {
    pub folder_name: String,
    /// Day-folder paths in location order; the first is the primary.
    pub created: Vec<PathBuf>,
    /// Scan of the project folder at the primary location, earlier days
    /// included.
    pub snapshot: Vec<TreeNode>,
    /// Scan of the new primary day folder only.
    pub day_snapshot: Vec<TreeNode>,
    pub project_info: ProjectInfo,
}

impl CreatedDayFolder {
    pub fn primary(&self) -> Option<&PathBuf> {
        self.created.first()
    }

    /// The project folder holding the primary day folder.
    pub fn primary_project(&self) -> Option<&Path> {
        self.primary().and_then(|day| day.parent())
    }
}

/// Creates the day folder described by `request` at every configured
/// location.
///
/// # Errors
///
/// * `CoreError::InvalidMetadata` - metadata or project name failed validation
/// * `CoreError::NoLocations` / `CoreError::Config` - unusable configuration
/// * `CoreError::PresetNotFound` - the preset is not in `catalog`
/// * `CoreError::InvalidPreset` - a preset folder would escape the day folder
/// * `CoreError::Collision` / `CoreError::Filesystem` - from materialization
pub fn create_day_folder<C>(request: &DayFolderRequest, catalog: &C) -> CoreResult<CreatedDayFolder>
where
    C: PresetCatalog + ?Sized,
{
    let DayFolderRequest { metadata, config } = request;

    metadata.validate()?;
    config.validate()?;

    let folder_name = resolve_folder_name(metadata);
    let project_dir = project_folder_name(&config.project_name);
    debug!("Resolved day folder {} in project {}", folder_name, project_dir);

    let preset = catalog.find(&config.preset_name)?;
    preset.validate()?;
    debug!(
        "Using preset '{}' with {} folder(s)",
        preset.preset_name,
        preset.folders.len()
    );

    let created = materialize_with(
        &config.locations,
        &project_dir,
        &folder_name,
        &preset.folders,
        config.materialize_options(),
    )?;

    info!(
        "Created {} at {} location(s)",
        folder_name,
        created.len()
    );

    let primary = created.first();
    let day_snapshot = primary.map(|day| scan(day)).unwrap_or_default();
    let snapshot = primary
        .and_then(|day| day.parent())
        .map(scan)
        .unwrap_or_default();

    Ok(CreatedDayFolder {
        folder_name,
        created,
        snapshot,
        day_snapshot,
        project_info: request.project_info(),
    })
}

/// A long-running operation executing on a worker thread.
#[derive(Debug)]
pub struct OperationHandle<T> {
    label: String,
    handle: JoinHandle<CoreResult<T>>,
}

impl<T> OperationHandle<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Blocks until the operation ends and returns its result.
    ///
    /// A panic on the worker thread is reported as
    /// `CoreError::OperationFailed`.
    pub fn wait(self) -> CoreResult<T> {
        let label = self.label;
        self.handle.join().unwrap_or_else(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(CoreError::OperationFailed(format!("{label} panicked: {reason}")))
        })
    }
}

/// Runs `op` on a named worker thread.
///
/// # Errors
///
/// `CoreError::Io` if the thread cannot be spawned.
pub fn spawn_operation<T, F>(label: &str, op: F) -> CoreResult<OperationHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> CoreResult<T> + Send + 'static,
{
    debug!("Starting operation: {}", label);
    let handle = thread::Builder::new()
        .name(format!("ditfolder-{label}"))
        .spawn(op)?;
    Ok(OperationHandle {
        label: label.to_string(),
        handle,
    })
}
