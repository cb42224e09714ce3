//! Syncer catalog
//!
//! The catalog is the ordered list of syncers the system knows about. Its
//! order drives `list` output. Discovery is pluggable through [`Catalog`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use syncctl_fs::{DocumentStore, NormalizedPath};

use crate::{Error, Result, SyncerName};

/// File name of the syncer manifest inside the syncctl home.
pub const MANIFEST_FILE: &str = "syncers.toml";

/// Source of known syncer names.
pub trait Catalog {
    /// All known syncers, in catalog order.
    fn syncers(&self) -> Vec<SyncerName>;

    /// Whether `name` is a known syncer.
    fn contains(&self, name: &SyncerName) -> bool {
        self.syncers().iter().any(|s| s == name)
    }
}

/// A catalog over a fixed list of names.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    names: Vec<SyncerName>,
}

impl StaticCatalog {
    pub fn new<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SyncerName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Catalog for StaticCatalog {
    fn syncers(&self) -> Vec<SyncerName> {
        self.names.clone()
    }

    fn contains(&self, name: &SyncerName) -> bool {
        self.names.contains(name)
    }
}

/// One `[[syncer]]` entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncerDefinition {
    pub name: SyncerName,

    /// Program and arguments executed by [`crate::ProcessRunner`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed `syncers.toml`.
///
/// ```toml
/// [[syncer]]
/// name = "members"
/// command = ["./bin/sync-members"]
/// description = "Pull member records"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncerManifest {
    #[serde(default, rename = "syncer")]
    pub syncers: Vec<SyncerDefinition>,
}

impl SyncerManifest {
    /// Look up a definition by name.
    pub fn get(&self, name: &SyncerName) -> Option<&SyncerDefinition> {
        self.syncers.iter().find(|def| &def.name == name)
    }

    fn validate(&self, path: &NormalizedPath) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.syncers {
            if def.name.as_str().trim().is_empty() {
                return Err(Error::InvalidManifest {
                    path: path.to_string(),
                    message: "syncer name must not be empty".into(),
                });
            }
            if !seen.insert(&def.name) {
                tracing::warn!(syncer = %def.name, path = %path, "duplicate syncer in manifest");
            }
        }
        Ok(())
    }
}

/// A catalog loaded from a syncer manifest file.
#[derive(Debug, Clone, Default)]
pub struct ManifestCatalog {
    manifest: SyncerManifest,
}

impl ManifestCatalog {
    /// Load the manifest at `path`. A missing file yields an empty catalog.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let manifest: SyncerManifest = DocumentStore::new().load_or_default(path)?;
        manifest.validate(path)?;
        tracing::debug!(path = %path, syncers = manifest.syncers.len(), "loaded syncer manifest");
        Ok(Self { manifest })
    }

    /// Load `syncers.toml` from a syncctl home directory.
    pub fn load_from_home(home: &NormalizedPath) -> Result<Self> {
        Self::load(&home.join(MANIFEST_FILE))
    }

    pub fn from_manifest(manifest: SyncerManifest) -> Self {
        Self { manifest }
    }

    pub fn manifest(&self) -> &SyncerManifest {
        &self.manifest
    }
}

impl Catalog for ManifestCatalog {
    fn syncers(&self) -> Vec<SyncerName> {
        self.manifest.syncers.iter().map(|d| d.name.clone()).collect()
    }

    fn contains(&self, name: &SyncerName) -> bool {
        self.manifest.get(name).is_some()
    }
}
