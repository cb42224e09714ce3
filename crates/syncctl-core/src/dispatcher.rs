//! Command dispatcher
//!
//! The four user-facing operations. Registry conflicts are reported as
//! outcomes and logged at info level; only store and runner failures
//! surface as errors.

use std::fmt;

use serde::Serialize;

use crate::registry::{ActivationRegistry, DisableError, EnableError};
use crate::runner::PROCEED_MODE;
use crate::store::ConfigStore;
use crate::{Catalog, Result, Runner, SyncOptions, SyncerName};

/// Activation label shown by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Active,
    Disabled,
}

impl Activity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncerStatus {
    pub active: Activity,
    pub syncer: SyncerName,
}

/// Where a syncer stands relative to the catalog and the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncerState {
    /// Not in the catalog
    Unknown,
    Disabled,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnableOutcome {
    Enabled(SyncerName),
    AlreadyActive(SyncerName),
    UnknownSyncer(SyncerName),
}

impl EnableOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

impl fmt::Display for EnableOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled(name) => write!(f, "Syncer {} enabled.", name),
            Self::AlreadyActive(name) => write!(f, "Syncer {} is already active.", name),
            Self::UnknownSyncer(name) => write!(f, "Syncer {} not exist.", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisableOutcome {
    Disabled(SyncerName),
    NotActive(SyncerName),
    UnknownSyncer(SyncerName),
}

impl DisableOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Disabled(_))
    }
}

impl fmt::Display for DisableOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled(name) => write!(f, "Syncer {} disabled.", name),
            Self::NotActive(name) => write!(f, "Syncer {} is not active.", name),
            Self::UnknownSyncer(name) => write!(f, "Syncer {} not exist.", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The runner was invoked and returned
    Started(SyncerName),
    UnknownSyncer(SyncerName),
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started(name) => write!(f, "Try to start syncer {}", name),
            Self::UnknownSyncer(name) => write!(f, "Syncer {} not exist.", name),
        }
    }
}

/// Dispatches commands against an injected catalog, registry and runner.
pub struct Dispatcher<'a, S> {
    catalog: &'a dyn Catalog,
    registry: ActivationRegistry<S>,
    runner: &'a dyn Runner,
}

impl<'a, S: ConfigStore> Dispatcher<'a, S> {
    pub fn new(
        catalog: &'a dyn Catalog,
        registry: ActivationRegistry<S>,
        runner: &'a dyn Runner,
    ) -> Self {
        Self {
            catalog,
            registry,
            runner,
        }
    }

    pub fn registry(&self) -> &ActivationRegistry<S> {
        &self.registry
    }

    pub fn into_registry(self) -> ActivationRegistry<S> {
        self.registry
    }

    /// One row per catalog entry, in catalog order.
    ///
    /// When the active set was never written, nothing is reported and the
    /// catalog is not consulted. A set emptied by `disable` still lists
    /// every syncer as disabled.
    pub fn list(&self) -> Result<Vec<SyncerStatus>> {
        let active = self.registry.get_active()?;
        if !active.is_configured() {
            tracing::debug!("active syncers not configured, skipping catalog");
            return Ok(Vec::new());
        }

        Ok(self
            .catalog
            .syncers()
            .into_iter()
            .map(|syncer| SyncerStatus {
                active: if active.contains(&syncer) {
                    Activity::Active
                } else {
                    Activity::Disabled
                },
                syncer,
            })
            .collect())
    }

    pub fn enable(&mut self, name: &str) -> Result<EnableOutcome> {
        let name = SyncerName::from(name);
        let outcome = match self.registry.enable(&name, self.catalog) {
            Ok(()) => EnableOutcome::Enabled(name),
            Err(EnableError::AlreadyActive(name)) => EnableOutcome::AlreadyActive(name),
            Err(EnableError::UnknownSyncer(name)) => EnableOutcome::UnknownSyncer(name),
            Err(EnableError::Store(e)) => return Err(e),
        };
        tracing::info!("{}", outcome);
        Ok(outcome)
    }

    pub fn disable(&mut self, name: &str) -> Result<DisableOutcome> {
        let name = SyncerName::from(name);
        let outcome = match self.registry.disable(&name, self.catalog) {
            Ok(()) => DisableOutcome::Disabled(name),
            Err(DisableError::UnknownSyncer(name)) => DisableOutcome::UnknownSyncer(name),
            Err(DisableError::NotActive(name)) => DisableOutcome::NotActive(name),
            Err(DisableError::Store(e)) => return Err(e),
        };
        tracing::info!("{}", outcome);
        Ok(outcome)
    }

    /// Run a cataloged syncer by hand.
    ///
    /// Activation is not consulted. The runner always receives
    /// [`PROCEED_MODE`]; `options` are handed over untouched.
    pub fn sync(&self, name: &str, options: &SyncOptions) -> Result<SyncOutcome> {
        let name = SyncerName::from(name);
        if !self.catalog.contains(&name) {
            let outcome = SyncOutcome::UnknownSyncer(name);
            tracing::info!("{}", outcome);
            return Ok(outcome);
        }

        tracing::info!("Try to start syncer {}", name);
        self.runner.run(&name, PROCEED_MODE, options)?;
        Ok(SyncOutcome::Started(name))
    }

    pub fn state(&self, name: &str) -> Result<SyncerState> {
        let name = SyncerName::from(name);
        if !self.catalog.contains(&name) {
            return Ok(SyncerState::Unknown);
        }
        Ok(if self.registry.is_active(&name)? {
            SyncerState::Active
        } else {
            SyncerState::Disabled
        })
    }
}
