// ============================================================================
// ditfolder-core/src/presets.rs
// ============================================================================
//
// PRESET CATALOG: Named lists of subfolders created under a day folder
//
// KEY COMPONENTS:
// - FolderPreset: one named, ordered list of relative folder paths
// - PresetCatalog: the read-only interface the engine depends on
// - DirectoryPresetCatalog: user-editable JSON files in a presets directory
// - StaticPresetCatalog: in-memory catalog
//
// The built-in "Default" preset is always listed first and cannot be
// replaced from disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Name of the built-in preset.
pub const DEFAULT_PRESET_NAME: &str = "Default";

/// A named, ordered list of relative folder paths.
///
/// Paths use forward slashes and may be nested ("Dailies/Proxies").
/// Duplicates are allowed; creating a folder twice is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderPreset {
    pub preset_name: String,
    pub folders: Vec<String>,
}

impl FolderPreset {
    pub fn new(name: &str, folders: &[&str]) -> Self {
        Self {
            preset_name: name.to_string(),
            folders: folders.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// The built-in preset every catalog starts with.
    pub fn default_preset() -> Self {
        Self::new(
            DEFAULT_PRESET_NAME,
            &[
                "Camera_Media",
                "Sound_Media",
                "Reports",
                "LUTs",
                "Dailies/Proxies",
                "Dailies/H264",
            ],
        )
    }

    /// Presets written to a fresh presets directory so operators have
    /// something to copy from.
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new(
                "Extended",
                &[
                    "Camera_Media/A_Camera",
                    "Camera_Media/B_Camera",
                    "Camera_Media/C_Camera",
                    "Sound_Media/Boom",
                    "Sound_Media/Wireless",
                    "Reports/Camera_Reports",
                    "Reports/Sound_Reports",
                    "Reports/Script_Notes",
                    "LUTs/Show_LUTs",
                    "LUTs/Camera_LUTs",
                    "Dailies/Proxies/H264",
                    "Dailies/Proxies/ProRes_Proxy",
                    "Dailies/Graded/H264",
                    "Dailies/Graded/ProRes_422",
                ],
            ),
            Self::new(
                "Minimal",
                &["Camera_Media", "Sound_Media", "Reports", "Dailies"],
            ),
            Self::new(
                "Documentary",
                &[
                    "Camera_Media/A_Camera/Original",
                    "Camera_Media/A_Camera/Backup",
                    "Sound_Media/Field_Recording",
                    "Sound_Media/Interviews",
                    "Reports/Shot_Lists",
                    "Reports/Interview_Notes",
                    "LUTs",
                    "Dailies/Rough_Cut",
                    "Dailies/Interview_Selects",
                    "Archive/Raw_Footage",
                    "Archive/Audio_Files",
                ],
            ),
        ]
    }

    /// File name this preset is saved under in a presets directory.
    pub fn file_name(&self) -> String {
        format!("{}_preset.json", self.preset_name.to_lowercase())
    }

    /// Rejects folder entries that would escape the day folder.
    pub fn validate(&self) -> CoreResult<()> {
        for folder in &self.folders {
            validate_relative_folder(folder).map_err(|reason| {
                CoreError::InvalidPreset(format!(
                    "'{}' in preset '{}' {}",
                    folder, self.preset_name, reason
                ))
            })?;
        }
        Ok(())
    }
}

pub(crate) fn validate_relative_folder(folder: &str) -> Result<(), &'static str> {
    if folder.trim().is_empty() {
        return Err("is empty");
    }
    let path = Path::new(folder);
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err("must not contain '..'"),
            Component::RootDir | Component::Prefix(_) => return Err("must be a relative path"),
        }
    }
    Ok(())
}

/// Read access to the available presets.
pub trait PresetCatalog {
    /// All presets, in display order.
    fn list_presets(&self) -> CoreResult<Vec<FolderPreset>>;

    /// Looks up a preset by exact name.
    fn find(&self, name: &str) -> CoreResult<FolderPreset> {
        self.list_presets()?
            .into_iter()
            .find(|preset| preset.preset_name == name)
            .ok_or_else(|| CoreError::PresetNotFound(name.to_string()))
    }
}

/// In-memory catalog. The default preset is listed first unless the
/// given list already contains one named "Default".
#[derive(Debug, Clone)]
pub struct StaticPresetCatalog {
    presets: Vec<FolderPreset>,
}

impl StaticPresetCatalog {
    pub fn new(presets: Vec<FolderPreset>) -> Self {
        let mut all = Vec::with_capacity(presets.len() + 1);
        if !presets.iter().any(|p| p.preset_name == DEFAULT_PRESET_NAME) {
            all.push(FolderPreset::default_preset());
        }
        all.extend(presets);
        Self { presets: all }
    }
}

impl Default for StaticPresetCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PresetCatalog for StaticPresetCatalog {
    fn list_presets(&self) -> CoreResult<Vec<FolderPreset>> {
        Ok(self.presets.clone())
    }
}

/// Presets stored as `*.json` files in a directory.
///
/// Each file holds one preset:
///
/// ```json
/// { "preset_name": "Minimal", "folders": ["Camera_Media", "Reports"] }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryPresetCatalog {
    dir: PathBuf,
}

impl DirectoryPresetCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory and writes the sample presets into it.
    fn seed(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::filesystem(&self.dir, e))?;

        for preset in FolderPreset::samples() {
            let path = self.dir.join(preset.file_name());
            let json = serde_json::to_string_pretty(&preset)?;
            if let Err(e) = fs::write(&path, json) {
                warn!("Error saving preset {}: {}", preset.preset_name, e);
            }
        }

        info!("Created sample presets in {}", self.dir.display());
        Ok(())
    }

    fn load_file(path: &Path) -> Option<FolderPreset> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Error loading preset from {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<FolderPreset>(&data) {
            Ok(preset) => Some(preset),
            Err(e) => {
                warn!("Error loading preset from {}: {}", path.display(), e);
                None
            }
        }
    }

    fn preset_files(&self) -> CoreResult<Vec<PathBuf>> {
        let read_dir = fs::read_dir(&self.dir).map_err(|e| CoreError::filesystem(&self.dir, e))?;
        let mut files: Vec<PathBuf> = read_dir
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                let hidden = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with('.'));
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                (path.is_file() && is_json && !hidden).then_some(path)
            })
            .collect();
        files.sort();
        Ok(files)
    }
}

impl PresetCatalog for DirectoryPresetCatalog {
    fn list_presets(&self) -> CoreResult<Vec<FolderPreset>> {
        if !self.dir.exists() {
            self.seed()?;
        }

        let mut presets = vec![FolderPreset::default_preset()];
        for path in self.preset_files()? {
            match Self::load_file(&path) {
                Some(preset) if preset.preset_name == DEFAULT_PRESET_NAME => {
                    debug!("Ignoring {}: the Default preset is built in", path.display());
                }
                Some(preset) => presets.push(preset),
                None => {}
            }
        }

        debug!("Loaded {} preset(s) from {}", presets.len(), self.dir.display());
        Ok(presets)
    }
}
