//! The sync command

use syncctl_core::{SyncOptions, SyncOutcome};

use crate::context::SyncContext;
use crate::error::Result;

/// Build runner options from CLI arguments.
///
/// Starts from `{mode: "default"}`, applies `-o` pairs in order, then
/// `--mode` if given.
pub fn build_options(mode: Option<&str>, pairs: &[(String, String)]) -> SyncOptions {
    let mut options = SyncOptions::default();
    for (key, value) in pairs {
        options.insert(key.as_str(), value.as_str());
    }
    if let Some(mode) = mode {
        options.insert(SyncOptions::MODE_KEY, mode);
    }
    options
}

/// Run the sync command
pub fn run_sync(ctx: &SyncContext, name: &str, options: &SyncOptions) -> Result<SyncOutcome> {
    Ok(ctx.dispatcher().sync(name, options)?)
}
