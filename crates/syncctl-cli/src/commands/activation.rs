//! Enable and disable commands
//!
//! Every registry outcome is reported by the dispatcher as an info event;
//! these commands only fail when the settings bag cannot be read or written.

use syncctl_core::{DisableOutcome, EnableOutcome};

use crate::context::SyncContext;
use crate::error::Result;

/// Run the enable command
pub fn run_enable(ctx: &SyncContext, name: &str) -> Result<EnableOutcome> {
    Ok(ctx.dispatcher().enable(name)?)
}

/// Run the disable command
pub fn run_disable(ctx: &SyncContext, name: &str) -> Result<DisableOutcome> {
    Ok(ctx.dispatcher().disable(name)?)
}
