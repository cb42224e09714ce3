//! syncctl home detection
//!
//! Finds the `.syncctl/` directory holding the syncer manifest and the
//! settings bag, walking up from the current directory the way git finds
//! `.git/`, and wires the file-backed collaborators for the dispatcher.

use std::path::{Path, PathBuf};

use syncctl_core::{
    ActivationRegistry, Dispatcher, FileStore, ManifestCatalog, ProcessRunner, SETTINGS_BAG,
};
use syncctl_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Name of the syncctl home directory.
pub const HOME_DIR: &str = ".syncctl";

/// Walk up from `cwd` looking for a `.syncctl/` directory.
pub fn find_home(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .map(|dir| dir.join(HOME_DIR))
        .find(|candidate| candidate.is_dir())
}

/// Resolve the home to use: an explicit path (relative to `cwd`), else the
/// nearest `.syncctl/` above `cwd`, else `cwd/.syncctl`.
pub fn resolve_home(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(path) => cwd.join(path),
        None => find_home(cwd).unwrap_or_else(|| cwd.join(HOME_DIR)),
    }
}

/// Everything a command needs, loaded once per invocation.
#[derive(Debug)]
pub struct SyncContext {
    home: NormalizedPath,
    catalog: ManifestCatalog,
    runner: ProcessRunner,
}

impl SyncContext {
    /// Load the manifest from `home` and set up the runner.
    ///
    /// Syncer commands run from the directory containing the home, so
    /// relative commands in the manifest resolve against the project root.
    pub fn load(home: &Path) -> Result<Self> {
        if home.exists() && !home.is_dir() {
            return Err(CliError::user(format!(
                "syncctl home {} is not a directory",
                home.display()
            )));
        }
        let normalized = NormalizedPath::new(home);
        let catalog = ManifestCatalog::load_from_home(&normalized)?;
        let working_dir = home
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let runner = ProcessRunner::new(catalog.manifest().clone(), working_dir);

        tracing::debug!(home = %normalized, "loaded syncctl context");
        Ok(Self {
            home: normalized,
            catalog,
            runner,
        })
    }

    /// Resolve the home from `explicit`/`cwd` and load it.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        Self::load(&resolve_home(explicit, cwd))
    }

    pub fn home(&self) -> &NormalizedPath {
        &self.home
    }

    /// A dispatcher over a freshly opened settings bag.
    pub fn dispatcher(&self) -> Dispatcher<'_, FileStore> {
        let registry = ActivationRegistry::new(FileStore::open(&self.home, SETTINGS_BAG));
        Dispatcher::new(&self.catalog, registry, &self.runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use syncctl_core::SyncerState;
    use tempfile::TempDir;

    #[test]
    fn test_find_home_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(HOME_DIR)).unwrap();
        let nested = temp.path().join("web/modules/custom");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_home(&nested), Some(temp.path().join(HOME_DIR)));
    }

    #[test]
    fn test_resolve_home_defaults_to_cwd() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_home(None, temp.path()),
            temp.path().join(HOME_DIR)
        );
    }

    #[test]
    fn test_resolve_home_explicit_relative() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_home(Some(Path::new("conf")), temp.path()),
            temp.path().join("conf")
        );
    }

    #[test]
    fn test_load_rejects_file_as_home() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(HOME_DIR);
        fs::write(&file, "").unwrap();

        assert!(SyncContext::load(&file).is_err());
    }

    #[test]
    fn test_load_without_manifest_is_empty() {
        let temp = TempDir::new().unwrap();
        let ctx = SyncContext::load(&temp.path().join(HOME_DIR)).unwrap();
        assert_eq!(ctx.dispatcher().state("a").unwrap(), SyncerState::Unknown);
        assert!(ctx.dispatcher().list().unwrap().is_empty());
    }
}
