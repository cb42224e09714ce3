//! Activation registry
//!
//! Owns the set of active syncers and keeps it consistent with the catalog:
//! `enable` never records a duplicate or an unknown name, `disable` never
//! touches anything but the named syncer. Every successful mutation is
//! persisted with set, save and reset before returning.

use crate::store::ConfigStore;
use crate::{Catalog, Error, Result, SyncerName};

/// Settings bag holding the active syncers.
pub const SETTINGS_BAG: &str = "syncctl.settings";

/// Key of the active syncer list inside [`SETTINGS_BAG`].
pub const ACTIVE_SYNCERS_KEY: &str = "active_syncers";

/// The ordered set of active syncers.
///
/// Distinguishes a key that was never written from one that holds an empty
/// list, so callers can tell an uninitialized registry from one whose
/// syncers were all disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    names: Vec<SyncerName>,
    configured: bool,
}

impl ActiveSet {
    /// The state of a registry whose key has never been written.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn from_names<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SyncerName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            configured: true,
        }
    }

    /// Whether the settings key exists, even if empty.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn contains(&self, name: &SyncerName) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[SyncerName] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyncerName> {
        self.names.iter()
    }

    /// Append `name` unless present. Returns whether it was added.
    fn insert(&mut self, name: SyncerName) -> bool {
        self.configured = true;
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove every occurrence of `name`. Returns whether any was removed.
    fn remove(&mut self, name: &SyncerName) -> bool {
        self.configured = true;
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    fn to_strings(&self) -> Vec<String> {
        self.names.iter().map(|n| n.as_str().to_string()).collect()
    }
}

/// Why `enable` refused to change anything.
#[derive(Debug, thiserror::Error)]
pub enum EnableError {
    #[error("Syncer {0} is already active.")]
    AlreadyActive(SyncerName),

    #[error("Syncer {0} not exist.")]
    UnknownSyncer(SyncerName),

    #[error(transparent)]
    Store(#[from] Error),
}

/// Why `disable` refused to change anything.
#[derive(Debug, thiserror::Error)]
pub enum DisableError {
    #[error("Syncer {0} not exist.")]
    UnknownSyncer(SyncerName),

    #[error("Syncer {0} is not active.")]
    NotActive(SyncerName),

    #[error(transparent)]
    Store(#[from] Error),
}

/// The active syncer set, backed by a [`ConfigStore`].
#[derive(Debug)]
pub struct ActivationRegistry<S> {
    store: S,
}

impl<S: ConfigStore> ActivationRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the persisted active set. A missing key is an unconfigured,
    /// empty set rather than an error.
    pub fn get_active(&self) -> Result<ActiveSet> {
        Ok(match self.store.get(ACTIVE_SYNCERS_KEY)? {
            Some(names) => ActiveSet::from_names(names),
            None => ActiveSet::unconfigured(),
        })
    }

    pub fn is_active(&self, name: &SyncerName) -> Result<bool> {
        Ok(self.get_active()?.contains(name))
    }

    /// Mark `name` active.
    ///
    /// Membership is checked before the catalog, so an already active
    /// syncer reports [`EnableError::AlreadyActive`] even if the catalog
    /// has since dropped it.
    pub fn enable(&mut self, name: &SyncerName, catalog: &dyn Catalog) -> Result<(), EnableError> {
        let mut active = self.get_active()?;
        if active.contains(name) {
            return Err(EnableError::AlreadyActive(name.clone()));
        }
        if !catalog.contains(name) {
            return Err(EnableError::UnknownSyncer(name.clone()));
        }

        active.insert(name.clone());
        self.persist(&active)?;
        tracing::debug!(syncer = %name, active = active.len(), "syncer enabled");
        Ok(())
    }

    /// Mark `name` inactive, removing every occurrence.
    ///
    /// The catalog is checked first, so an active entry whose syncer has
    /// left the catalog cannot be disabled this way.
    pub fn disable(
        &mut self,
        name: &SyncerName,
        catalog: &dyn Catalog,
    ) -> Result<(), DisableError> {
        if !catalog.contains(name) {
            return Err(DisableError::UnknownSyncer(name.clone()));
        }
        let mut active = self.get_active()?;
        if !active.remove(name) {
            return Err(DisableError::NotActive(name.clone()));
        }

        self.persist(&active)?;
        tracing::debug!(syncer = %name, active = active.len(), "syncer disabled");
        Ok(())
    }

    fn persist(&mut self, active: &ActiveSet) -> Result<()> {
        self.store.set(ACTIVE_SYNCERS_KEY, active.to_strings())?;
        self.store.save()?;
        self.store.reset(ACTIVE_SYNCERS_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StaticCatalog};
    use pretty_assertions::assert_eq;

    fn registry_with(active: &[&str]) -> ActivationRegistry<MemoryStore> {
        let store = MemoryStore::new().with_value(ACTIVE_SYNCERS_KEY, active.iter().copied());
        ActivationRegistry::new(store)
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let registry = ActivationRegistry::new(MemoryStore::new());
        let active = registry.get_active().unwrap();

        assert!(active.is_empty());
        assert!(!active.is_configured());
    }

    #[test]
    fn test_empty_list_is_configured() {
        let registry = registry_with(&[]);
        let active = registry.get_active().unwrap();

        assert!(active.is_empty());
        assert!(active.is_configured());
    }

    #[test]
    fn test_enable_appends_and_saves_once() {
        let catalog = StaticCatalog::new(["a", "b", "c"]);
        let mut registry = registry_with(&["c"]);

        registry.enable(&"a".into(), &catalog).unwrap();

        assert_eq!(registry.get_active().unwrap().names(), ["c", "a"]);
        assert_eq!(registry.store().save_count(), 1);
    }

    #[test]
    fn test_enable_already_active_does_not_write() {
        let catalog = StaticCatalog::new(["a"]);
        let mut registry = registry_with(&["a"]);

        let err = registry.enable(&"a".into(), &catalog).unwrap_err();

        assert!(matches!(err, EnableError::AlreadyActive(ref n) if n == "a"));
        assert_eq!(registry.store().save_count(), 0);
    }

    #[test]
    fn test_enable_checks_membership_before_catalog() {
        let catalog = StaticCatalog::new(["a"]);
        let mut registry = registry_with(&["stale"]);

        let err = registry.enable(&"stale".into(), &catalog).unwrap_err();

        assert!(matches!(err, EnableError::AlreadyActive(_)));
    }

    #[test]
    fn test_disable_removes_all_occurrences_in_place() {
        let catalog = StaticCatalog::new(["a", "b", "c"]);
        let mut registry = registry_with(&["a", "b", "c", "b"]);

        registry.disable(&"b".into(), &catalog).unwrap();

        assert_eq!(registry.get_active().unwrap().names(), ["a", "c"]);
        assert_eq!(registry.store().save_count(), 1);
    }

    #[test]
    fn test_disable_checks_catalog_first() {
        let catalog = StaticCatalog::new(["a"]);
        let mut registry = registry_with(&["stale"]);

        let err = registry.disable(&"stale".into(), &catalog).unwrap_err();

        assert!(matches!(err, DisableError::UnknownSyncer(_)));
        assert_eq!(registry.get_active().unwrap().names(), ["stale"]);
    }

    #[test]
    fn test_disable_not_active() {
        let catalog = StaticCatalog::new(["a"]);
        let mut registry = ActivationRegistry::new(MemoryStore::new());

        let err = registry.disable(&"a".into(), &catalog).unwrap_err();

        assert!(matches!(err, DisableError::NotActive(_)));
        assert_eq!(registry.store().save_count(), 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EnableError::AlreadyActive("a".into()).to_string(),
            "Syncer a is already active."
        );
        assert_eq!(
            DisableError::UnknownSyncer("z".into()).to_string(),
            "Syncer z not exist."
        );
    }
}
