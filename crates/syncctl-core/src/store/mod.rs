//! Settings bag persistence
//!
//! A [`ConfigStore`] is a named bag of settings where each key holds an
//! ordered list of strings. Writes are staged with [`ConfigStore::set`],
//! made durable with [`ConfigStore::save`], and [`ConfigStore::reset`]
//! drops any read cache so the next [`ConfigStore::get`] observes the
//! persisted value.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::Result;

/// Key/value persistence for a single named settings bag.
pub trait ConfigStore {
    /// Read a list-valued setting. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<String>>>;

    /// Stage a new value for `key`.
    fn set(&mut self, key: &str, values: Vec<String>) -> Result<()>;

    /// Persist every staged value.
    fn save(&mut self) -> Result<()>;

    /// Invalidate cached state for `key`.
    fn reset(&mut self, key: &str);
}

impl<S: ConfigStore + ?Sized> ConfigStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, values: Vec<String>) -> Result<()> {
        (**self).set(key, values)
    }

    fn save(&mut self) -> Result<()> {
        (**self).save()
    }

    fn reset(&mut self, key: &str) {
        (**self).reset(key)
    }
}
