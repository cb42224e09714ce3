//! Syncer runners
//!
//! A [`Runner`] performs the actual work of a syncer. The dispatcher knows
//! nothing about what a syncer does; it hands over the name, a mode and
//! the caller's options.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::catalog::SyncerManifest;
use crate::{SyncOptions, SyncerName};

/// Mode passed to the runner for every manual `sync` invocation.
pub const PROCEED_MODE: &str = "proceed";

/// Errors raised while running a syncer
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Syncer {syncer} has no command configured")]
    NoCommand { syncer: String },

    #[error("Failed to start syncer {syncer}: {source}")]
    Spawn {
        syncer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Syncer {syncer} exited with status {code}")]
    Failed { syncer: String, code: i32 },
}

/// Executes a syncer's work.
pub trait Runner {
    fn run(&self, syncer: &SyncerName, mode: &str, options: &SyncOptions)
    -> Result<(), RunnerError>;
}

/// A runner that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunner;

impl Runner for NoopRunner {
    fn run(
        &self,
        syncer: &SyncerName,
        mode: &str,
        _options: &SyncOptions,
    ) -> Result<(), RunnerError> {
        tracing::debug!(%syncer, mode, "noop runner");
        Ok(())
    }
}

/// Runs the `command` declared for a syncer in the manifest.
///
/// The child inherits stdio and receives its request through the
/// environment:
///
/// - `SYNCCTL_SYNCER`: syncer name
/// - `SYNCCTL_MODE`: runner mode
/// - `SYNCCTL_OPT_<KEY>`: one per option, key upper-cased with `-` as `_`
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    manifest: SyncerManifest,
    working_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(manifest: SyncerManifest, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Environment variable name for an option key.
    pub fn option_env_var(key: &str) -> String {
        format!("SYNCCTL_OPT_{}", key.to_uppercase().replace('-', "_"))
    }
}

impl Runner for ProcessRunner {
    fn run(
        &self,
        syncer: &SyncerName,
        mode: &str,
        options: &SyncOptions,
    ) -> Result<(), RunnerError> {
        let no_command = || RunnerError::NoCommand {
            syncer: syncer.to_string(),
        };
        let definition = self.manifest.get(syncer).ok_or_else(no_command)?;
        let (program, args) = definition.command.split_first().ok_or_else(no_command)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(&self.working_dir)
            .env("SYNCCTL_SYNCER", syncer.as_str())
            .env("SYNCCTL_MODE", mode);
        for (key, value) in options.iter() {
            cmd.env(Self::option_env_var(key), value);
        }

        tracing::debug!(%syncer, mode, program = %program, "spawning syncer");
        let status = cmd.status().map_err(|source| RunnerError::Spawn {
            syncer: syncer.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunnerError::Failed {
                syncer: syncer.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyncerDefinition;

    fn manifest(name: &str, command: &[&str]) -> SyncerManifest {
        SyncerManifest {
            syncers: vec![SyncerDefinition {
                name: name.into(),
                command: command.iter().map(|s| s.to_string()).collect(),
                description: None,
            }],
        }
    }

    #[test]
    fn test_option_env_var_name() {
        assert_eq!(ProcessRunner::option_env_var("mode"), "SYNCCTL_OPT_MODE");
        assert_eq!(ProcessRunner::option_env_var("batch-size"), "SYNCCTL_OPT_BATCH_SIZE");
    }

    #[test]
    fn test_missing_command_is_error() {
        let runner = ProcessRunner::new(manifest("members", &[]), ".");
        let result = runner.run(&"members".into(), PROCEED_MODE, &SyncOptions::default());
        assert!(matches!(result, Err(RunnerError::NoCommand { .. })));
    }

    #[test]
    fn test_unknown_syncer_is_error() {
        let runner = ProcessRunner::new(SyncerManifest::default(), ".");
        let result = runner.run(&"ghost".into(), PROCEED_MODE, &SyncOptions::default());
        assert!(matches!(result, Err(RunnerError::NoCommand { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_command_with_environment() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new(
            manifest(
                "members",
                &[
                    "sh",
                    "-c",
                    "printf '%s %s %s' \"$SYNCCTL_SYNCER\" \"$SYNCCTL_MODE\" \"$SYNCCTL_OPT_MODE\" > out.txt",
                ],
            ),
            temp.path(),
        );

        runner
            .run(
                &"members".into(),
                PROCEED_MODE,
                &SyncOptions::default().with("mode", "fast"),
            )
            .unwrap();

        let out = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
        assert_eq!(out, "members proceed fast");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failure() {
        let runner = ProcessRunner::new(manifest("members", &["sh", "-c", "exit 3"]), ".");
        let result = runner.run(&"members".into(), PROCEED_MODE, &SyncOptions::default());
        assert!(matches!(result, Err(RunnerError::Failed { code: 3, .. })));
    }
}
