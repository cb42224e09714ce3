//! TOML file backed settings bag

use std::cell::RefCell;

use syncctl_fs::{DocumentStore, NormalizedPath};
use toml::{Table, Value};

use super::ConfigStore;
use crate::{Error, Result};

/// A [`ConfigStore`] persisted as `<dir>/<bag>.toml`.
///
/// The file is read lazily on first access and cached until
/// [`ConfigStore::reset`]. A missing file is an empty bag. Keys this
/// store does not touch are written back unchanged on save.
#[derive(Debug)]
pub struct FileStore {
    path: NormalizedPath,
    documents: DocumentStore,
    cache: RefCell<Option<Table>>,
}

impl FileStore {
    /// Open the settings bag `bag` inside `dir`.
    pub fn open(dir: &NormalizedPath, bag: &str) -> Self {
        Self::at(dir.join(&format!("{}.toml", bag)))
    }

    /// Open a settings bag at an explicit file path.
    pub fn at(path: NormalizedPath) -> Self {
        Self {
            path,
            documents: DocumentStore::new(),
            cache: RefCell::new(None),
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    fn with_table<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T> {
        let mut cache = self.cache.borrow_mut();
        if cache.is_none() {
            let table: Table = self.documents.load_or_default(&self.path)?;
            tracing::debug!(path = %self.path, keys = table.len(), "loaded settings bag");
            *cache = Some(table);
        }
        Ok(f(cache.get_or_insert_with(Table::new)))
    }

    fn invalid(&self, key: &str) -> Error {
        Error::InvalidSetting {
            key: key.to_string(),
            location: self.path.to_string(),
        }
    }
}

impl ConfigStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        let value = self.with_table(|table| table.get(key).cloned())?;
        match value {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(self.invalid(key)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(_) => Err(self.invalid(key)),
        }
    }

    fn set(&mut self, key: &str, values: Vec<String>) -> Result<()> {
        let array = values.into_iter().map(Value::String).collect();
        self.with_table(|table| {
            table.insert(key.to_string(), Value::Array(array));
        })
    }

    fn save(&mut self) -> Result<()> {
        let table = self.with_table(|table| table.clone())?;
        self.documents.save(&self.path, &table)?;
        tracing::debug!(path = %self.path, "saved settings bag");
        Ok(())
    }

    fn reset(&mut self, key: &str) {
        tracing::debug!(path = %self.path, key, "invalidating settings cache");
        self.cache.get_mut().take();
    }
}
