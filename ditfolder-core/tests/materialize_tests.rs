// ditfolder-core/tests/materialize_tests.rs

use ditfolder_core::error::CoreError;
use ditfolder_core::materialize::{MaterializeOptions, materialize, materialize_with};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn preset_folders() -> Vec<String> {
    vec![
        "Camera_Media".to_string(),
        "Reports".to_string(),
        "Dailies/Proxies".to_string(),
    ]
}

/// Every path below `root`, sorted.
fn snapshot_paths(root: &Path) -> Vec<PathBuf> {
    fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                out.push(path.clone());
                if path.is_dir() {
                    walk(&path, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out.sort();
    out
}

#[test]
fn test_second_call_collides_without_mutation() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let locations = vec![root.path().to_path_buf()];

    let created = materialize(&locations, "Show", "ABC_20240315_Day003_MU", &preset_folders())?;
    assert_eq!(created.len(), 1);
    let before = snapshot_paths(root.path());

    let second = materialize(&locations, "Show", "ABC_20240315_Day003_MU", &preset_folders());
    match second {
        Err(CoreError::Collision { path }) => {
            assert_eq!(path, root.path().join("Show").join("ABC_20240315_Day003_MU"));
        }
        other => panic!("Expected a collision, got {:?}", other),
    }

    assert_eq!(snapshot_paths(root.path()), before);
    Ok(())
}

#[test]
fn test_failure_at_second_location_stops_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let first = tempdir()?;
    let second = tempdir()?;
    let third = tempdir()?;
    fs::create_dir_all(second.path().join("Show").join("Day"))?;

    let locations = vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
        third.path().to_path_buf(),
    ];
    let result = materialize(&locations, "Show", "Day", &preset_folders());

    match result {
        Err(CoreError::Collision { path }) => {
            assert_eq!(path, second.path().join("Show").join("Day"));
        }
        other => panic!("Expected a collision, got {:?}", other),
    }

    // Earlier location keeps its full tree; later ones are never touched
    let day = first.path().join("Show").join("Day");
    for folder in preset_folders() {
        assert!(day.join(folder).is_dir());
    }
    assert!(!second.path().join("Show").join("Day").join("Camera_Media").exists());
    assert!(!third.path().join("Show").exists());
    Ok(())
}

#[test]
fn test_filesystem_error_names_the_failing_path() -> Result<(), Box<dyn std::error::Error>> {
    let first = tempdir()?;
    let scratch = tempdir()?;
    let not_a_dir = scratch.path().join("volume");
    fs::write(&not_a_dir, b"plain file")?;

    let locations = vec![first.path().to_path_buf(), not_a_dir.clone()];
    let result = materialize(&locations, "Show", "Day", &preset_folders());

    match result {
        Err(CoreError::Filesystem { path, .. }) => {
            assert!(path.starts_with(&not_a_dir));
        }
        other => panic!("Expected a filesystem error, got {:?}", other),
    }
    assert!(first.path().join("Show").join("Day").join("Reports").is_dir());
    Ok(())
}

#[test]
fn test_precheck_leaves_every_location_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let first = tempdir()?;
    let second = tempdir()?;
    fs::create_dir_all(second.path().join("Show").join("Day"))?;

    let locations = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let result = materialize_with(
        &locations,
        "Show",
        "Day",
        &preset_folders(),
        MaterializeOptions { precheck: true },
    );

    assert!(matches!(result, Err(CoreError::Collision { .. })));
    assert!(snapshot_paths(first.path()).is_empty());
    Ok(())
}

#[test]
fn test_blank_locations_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let locations = vec![PathBuf::new(), root.path().to_path_buf(), PathBuf::new()];

    let created = materialize(&locations, "Show", "Day", &preset_folders())?;

    assert_eq!(created, vec![root.path().join("Show").join("Day")]);
    Ok(())
}
