//! Syncer activation registry and command dispatch
//!
//! This crate sits between the `syncctl` command line and the persisted
//! settings bag. It provides:
//!
//! - **Activation registry**: the ordered, de-duplicated set of active
//!   syncers, persisted through a [`ConfigStore`]
//! - **Dispatcher**: the `list`, `enable`, `disable` and `sync` operations,
//!   validated against a [`Catalog`] of known syncers
//! - **Collaborator seams**: [`ConfigStore`], [`Catalog`] and [`Runner`]
//!   traits with file- and process-backed default implementations
//!
//! # Architecture
//!
//! ```text
//!                 syncctl-cli
//!                      |
//!                 Dispatcher
//!            /         |          \
//!     Catalog   ActivationRegistry   Runner
//!                      |
//!                 ConfigStore
//!                      |
//!                 syncctl-fs
//! ```
//!
//! # Example
//!
//! ```
//! use syncctl_core::{
//!     ActivationRegistry, Dispatcher, EnableOutcome, MemoryStore, NoopRunner, StaticCatalog,
//! };
//!
//! let catalog = StaticCatalog::new(["members", "classes"]);
//! let runner = NoopRunner;
//! let registry = ActivationRegistry::new(MemoryStore::new());
//! let mut dispatcher = Dispatcher::new(&catalog, registry, &runner);
//!
//! let outcome = dispatcher.enable("members").unwrap();
//! assert_eq!(outcome, EnableOutcome::Enabled("members".into()));
//! assert_eq!(dispatcher.list().unwrap().len(), 2);
//! ```

pub mod catalog;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod runner;
pub mod store;
pub mod syncer;

pub use catalog::{Catalog, ManifestCatalog, StaticCatalog, SyncerDefinition, SyncerManifest};
pub use dispatcher::{
    Activity, DisableOutcome, Dispatcher, EnableOutcome, SyncOutcome, SyncerState, SyncerStatus,
};
pub use error::{Error, Result};
pub use registry::{
    ACTIVE_SYNCERS_KEY, ActivationRegistry, ActiveSet, DisableError, EnableError, SETTINGS_BAG,
};
pub use runner::{NoopRunner, PROCEED_MODE, ProcessRunner, Runner, RunnerError};
pub use store::{ConfigStore, FileStore, MemoryStore};
pub use syncer::{SyncOptions, SyncerName};
