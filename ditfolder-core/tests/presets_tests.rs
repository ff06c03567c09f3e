// ditfolder-core/tests/presets_tests.rs

use ditfolder_core::error::CoreError;
use ditfolder_core::presets::{DirectoryPresetCatalog, FolderPreset, PresetCatalog};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_directory_is_seeded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let presets_dir = dir.path().join("Presets");
    let catalog = DirectoryPresetCatalog::new(&presets_dir);

    let presets = catalog.list_presets()?;

    assert!(presets_dir.join("extended_preset.json").is_file());
    assert!(presets_dir.join("minimal_preset.json").is_file());
    assert!(presets_dir.join("documentary_preset.json").is_file());
    let names: Vec<&str> = presets.iter().map(|p| p.preset_name.as_str()).collect();
    assert_eq!(names, vec!["Default", "Documentary", "Extended", "Minimal"]);
    Ok(())
}

#[test]
fn test_existing_directory_is_not_seeded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let presets = DirectoryPresetCatalog::new(dir.path()).list_presets()?;

    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0], FolderPreset::default_preset());
    Ok(())
}

#[test]
fn test_default_file_and_malformed_files_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("default_preset.json"),
        r#"{"preset_name": "Default", "folders": ["Hijacked"]}"#,
    )?;
    fs::write(dir.path().join("broken.json"), "{ not json")?;
    fs::write(dir.path().join("notes.txt"), "ignored")?;
    fs::write(
        dir.path().join("commercial_preset.json"),
        r#"{"preset_name": "Commercial", "folders": ["Camera_Media", "Client_Review"]}"#,
    )?;

    let catalog = DirectoryPresetCatalog::new(dir.path());
    let presets = catalog.list_presets()?;

    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0], FolderPreset::default_preset());
    assert_eq!(presets[1].preset_name, "Commercial");
    assert_eq!(catalog.find("Commercial")?.folders[1], "Client_Review");
    assert!(matches!(catalog.find("Hijacked"), Err(CoreError::PresetNotFound(_))));
    Ok(())
}
