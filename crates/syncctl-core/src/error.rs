//! Error types for syncctl-core

use crate::runner::RunnerError;

/// Result type for syncctl-core operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in syncctl-core operations
///
/// Registry conflicts (unknown syncer, already active, not active) are not
/// errors at this level; see [`crate::EnableError`] and
/// [`crate::DisableError`]. Everything here is fatal for a command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A settings key holds something other than a list of strings
    #[error("Setting '{key}' in {location} must be a list of strings")]
    InvalidSetting { key: String, location: String },

    /// The syncer manifest is structurally invalid
    #[error("Invalid syncer manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Syncer runner failure
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// Filesystem error from syncctl-fs
    #[error(transparent)]
    Fs(#[from] syncctl_fs::Error),
}
