//! Filesystem layer for syncctl
//!
//! Provides normalized path handling, atomic locked writes and
//! format-agnostic loading of settings documents.

pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use document::{DocumentFormat, DocumentStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
