//! Shared test utilities for the syncctl workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`workspace`]: [`workspace::TestWorkspace`] builder for a temporary
//!   syncctl home with a syncer manifest and settings bag

pub mod workspace;
