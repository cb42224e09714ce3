//! Cross-crate lifecycle tests
//!
//! Exercises the full stack: manifest on disk -> catalog -> registry over
//! the TOML settings bag -> dispatcher -> process runner.

use pretty_assertions::assert_eq;
use std::fs;
use syncctl_core::{
    ActivationRegistry, Catalog, Dispatcher, FileStore, ManifestCatalog, ProcessRunner,
    SETTINGS_BAG, SyncOptions, SyncOutcome, SyncerDefinition, SyncerManifest,
};
use syncctl_fs::{DocumentStore, NormalizedPath};
use syncctl_test_utils::workspace::TestWorkspace;
use tempfile::TempDir;

fn home(ws: &TestWorkspace) -> NormalizedPath {
    NormalizedPath::new(ws.home())
}

#[test]
fn test_manifest_in_any_format_gives_same_catalog() {
    let temp = TempDir::new().unwrap();
    let manifest = SyncerManifest {
        syncers: vec![
            SyncerDefinition {
                name: "members".into(),
                command: vec!["./bin/members".into()],
                description: Some("Member records".into()),
            },
            SyncerDefinition {
                name: "classes".into(),
                command: vec![],
                description: None,
            },
        ],
    };

    for file in ["syncers.toml", "syncers.json", "syncers.yaml"] {
        let path = NormalizedPath::new(temp.path().join(file));
        DocumentStore::new().save(&path, &manifest).unwrap();

        let catalog = ManifestCatalog::load(&path).unwrap();
        assert_eq!(catalog.syncers(), vec!["members", "classes"], "{}", file);
        assert_eq!(catalog.manifest(), &manifest, "{}", file);
    }
}

#[test]
fn test_settings_written_by_registry_are_plain_toml() {
    let ws = TestWorkspace::new();
    ws.write_catalog(&["members", "classes", "events"]);
    let catalog = ManifestCatalog::load_from_home(&home(&ws)).unwrap();
    let mut registry = ActivationRegistry::new(FileStore::open(&home(&ws), SETTINGS_BAG));

    registry.enable(&"events".into(), &catalog).unwrap();
    registry.enable(&"members".into(), &catalog).unwrap();

    #[derive(serde::Deserialize)]
    struct Settings {
        active_syncers: Vec<String>,
    }
    let settings: Settings = DocumentStore::new()
        .load(&NormalizedPath::new(ws.settings_path()))
        .unwrap();
    assert_eq!(settings.active_syncers, vec!["events", "members"]);
}

#[cfg(unix)]
#[test]
fn test_full_lifecycle_with_process_runner() {
    let ws = TestWorkspace::new();
    ws.write_manifest(&[
        ("members", &["sh", "-c", "echo \"$SYNCCTL_OPT_SINCE\" >> members.log"]),
        ("classes", &["sh", "-c", "touch classes.log"]),
    ]);
    let catalog = ManifestCatalog::load_from_home(&home(&ws)).unwrap();
    let runner = ProcessRunner::new(catalog.manifest().clone(), ws.root());
    let registry = ActivationRegistry::new(FileStore::open(&home(&ws), SETTINGS_BAG));
    let mut dispatcher = Dispatcher::new(&catalog, registry, &runner);

    assert!(dispatcher.list().unwrap().is_empty());
    dispatcher.enable("classes").unwrap();

    let statuses: Vec<_> = dispatcher
        .list()
        .unwrap()
        .into_iter()
        .map(|s| format!("{}:{}", s.syncer, s.active))
        .collect();
    assert_eq!(statuses, vec!["members:disabled", "classes:active"]);

    let options = SyncOptions::default().with("since", "2024-01-01");
    assert_eq!(
        dispatcher.sync("members", &options).unwrap(),
        SyncOutcome::Started("members".into())
    );
    assert_eq!(
        fs::read_to_string(ws.root().join("members.log")).unwrap().trim(),
        "2024-01-01"
    );
    assert!(!ws.root().join("classes.log").exists());
}
