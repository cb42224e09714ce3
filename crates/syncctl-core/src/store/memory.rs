//! In-process settings bag

use std::collections::BTreeMap;

use super::ConfigStore;
use crate::Result;

/// A [`ConfigStore`] kept entirely in memory.
///
/// Staged values live apart from persisted ones until [`ConfigStore::save`],
/// and the number of saves is counted so callers can assert on writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    persisted: BTreeMap<String, Vec<String>>,
    staged: BTreeMap<String, Vec<String>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` already persisted.
    pub fn with_value<I, T>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.persisted.insert(key.to_string(), values.clone());
        self.staged.insert(key.to_string(), values);
        self
    }

    /// Number of successful [`ConfigStore::save`] calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The persisted value for `key`, ignoring anything staged.
    pub fn persisted(&self, key: &str) -> Option<&[String]> {
        self.persisted.get(key).map(Vec::as_slice)
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.staged.get(key).cloned())
    }

    fn set(&mut self, key: &str, values: Vec<String>) -> Result<()> {
        self.staged.insert(key.to_string(), values);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.persisted = self.staged.clone();
        self.saves += 1;
        Ok(())
    }

    fn reset(&mut self, key: &str) {
        match self.persisted.get(key) {
            Some(values) => {
                self.staged.insert(key.to_string(), values.clone());
            }
            None => {
                self.staged.remove(key);
            }
        }
    }
}
