//! Syncer identifiers and sync request options

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque name of a syncer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncerName(String);

impl SyncerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SyncerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SyncerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SyncerName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SyncerName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for SyncerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SyncerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Options handed to a syncer run, passed through to the runner untouched.
///
/// Defaults to `{mode: "default"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncOptions(BTreeMap<String, String>);

impl SyncOptions {
    /// Option key carrying the requested mode.
    pub const MODE_KEY: &'static str = "mode";
    pub const DEFAULT_MODE: &'static str = "default";

    /// Options with no entries at all, not even `mode`.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// The requested mode, if any.
    pub fn mode(&self) -> Option<&str> {
        self.get(Self::MODE_KEY)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::empty().with(Self::MODE_KEY, Self::DEFAULT_MODE)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SyncOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_carry_default_mode() {
        let options = SyncOptions::default();
        assert_eq!(options.mode(), Some("default"));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_options_from_pairs() {
        let options: SyncOptions = [("mode", "fast"), ("limit", "10")].into_iter().collect();
        assert_eq!(options.mode(), Some("fast"));
        assert_eq!(options.get("limit"), Some("10"));
    }

    #[test]
    fn test_syncer_name_compares_with_str() {
        let name = SyncerName::from("members");
        assert_eq!(name, "members");
        assert_eq!(name.to_string(), "members");
    }
}
