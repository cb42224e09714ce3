//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// syncctl - toggle and run named syncers
#[derive(Parser, Debug)]
#[command(name = "syncctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// syncctl home holding syncers.toml and the settings bag
    ///
    /// Defaults to the nearest `.syncctl/` directory above the current
    /// directory, or `./.syncctl` if there is none.
    #[arg(long, global = true, env = "SYNCCTL_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List syncers and whether they are active
    ///
    /// Prints nothing until a syncer has been enabled for the first time.
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Mark a syncer active
    Enable {
        /// Name of the syncer (see 'syncctl list')
        syncer: String,
    },

    /// Mark a syncer inactive
    Disable {
        /// Name of the syncer to disable
        syncer: String,
    },

    /// Run a syncer now, whether or not it is active
    ///
    /// Examples:
    ///   syncctl sync members
    ///   syncctl sync members --mode full
    ///   syncctl sync members -o since=2024-01-01 -o batch-size=50
    #[command(visible_alias = "run")]
    Sync {
        /// Name of the syncer to run
        syncer: String,

        /// Value for the `mode` option (defaults to "default")
        #[arg(short, long)]
        mode: Option<String>,

        /// Extra option passed to the syncer
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        options: Vec<(String, String)>,
    },
}

/// Parse a `KEY=VALUE` pair.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        Some(_) => Err(format!("missing option name in '{}'", raw)),
        None => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
