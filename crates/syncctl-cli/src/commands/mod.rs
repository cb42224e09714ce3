//! Command implementations for syncctl-cli

pub mod activation;
pub mod list;
pub mod sync;

pub use activation::{run_disable, run_enable};
pub use list::run_list;
pub use sync::{build_options, run_sync};
