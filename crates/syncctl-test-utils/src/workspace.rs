//! [`TestWorkspace`] builder for syncctl test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory name of the syncctl home inside a workspace.
pub const HOME_DIR: &str = ".syncctl";

/// Settings bag file name inside the home.
pub const SETTINGS_FILE: &str = "syncctl.settings.toml";

/// Syncer manifest file name inside the home.
pub const MANIFEST_FILE: &str = "syncers.toml";

/// A temporary directory laid out as a syncctl workspace.
///
/// # Example
///
/// ```rust,no_run
/// use syncctl_test_utils::workspace::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_catalog(&["members", "classes"]);
/// ws.write_active(&["members"]);
/// ws.assert_settings_contains("members");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create a workspace with an empty `.syncctl/` home.
    pub fn new() -> Self {
        let ws = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(ws.home()).unwrap();
        ws
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `.syncctl/` home directory.
    pub fn home(&self) -> PathBuf {
        self.root().join(HOME_DIR)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.home().join(SETTINGS_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.home().join(MANIFEST_FILE)
    }

    /// Write a manifest declaring `names` without commands.
    pub fn write_catalog(&self, names: &[&str]) {
        let entries: Vec<(&str, &[&str])> = names.iter().map(|n| (*n, &[][..])).collect();
        self.write_manifest(&entries);
    }

    /// Write a manifest with one `[[syncer]]` per `(name, command)` pair.
    pub fn write_manifest(&self, syncers: &[(&str, &[&str])]) {
        let mut content = String::new();
        for (name, command) in syncers {
            content.push_str("[[syncer]]\n");
            content.push_str(&format!("name = \"{}\"\n", name));
            if !command.is_empty() {
                content.push_str(&format!("command = [{}]\n", quote_list(command)));
            }
            content.push('\n');
        }
        fs::write(self.manifest_path(), content).unwrap();
    }

    /// Write the settings bag with `active_syncers` set to `names`.
    pub fn write_active(&self, names: &[&str]) {
        fs::write(
            self.settings_path(),
            format!("active_syncers = [{}]\n", quote_list(names)),
        )
        .unwrap();
    }

    /// Contents of the settings bag, or an empty string if it does not exist.
    pub fn read_settings(&self) -> String {
        fs::read_to_string(self.settings_path()).unwrap_or_default()
    }

    /// Assert that the settings bag contains `content`.
    ///
    /// # Panics
    /// Panics if the settings file is missing or lacks `content`.
    pub fn assert_settings_contains(&self, content: &str) {
        let settings = self.read_settings();
        assert!(
            settings.contains(content),
            "Settings do not contain expected content.\nExpected: {}\nActual: {}",
            content,
            settings
        );
    }

    /// Assert that the settings bag does not contain `content`.
    pub fn assert_settings_lacks(&self, content: &str) {
        let settings = self.read_settings();
        assert!(
            !settings.contains(content),
            "Settings unexpectedly contain {}.\nActual: {}",
            content,
            settings
        );
    }
}

fn quote_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join(", ")
}
