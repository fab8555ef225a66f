//! Shell executor port for running external commands.

use std::path::Path;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process, or `-1` when it was killed by a signal.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The process ran but its standard output is not valid UTF-8.
#[derive(Debug, Error)]
#[error("standard output is not valid UTF-8")]
pub struct NonUtf8Stdout(#[source] pub FromUtf8Error);

/// Executes external commands.
///
/// Abstracting process execution allows deterministic replay by recording
/// and replaying command outputs during cassette playback.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned, or [`NonUtf8Stdout`]
    /// if it printed bytes that do not decode.
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;

    /// Runs `program` directly with the given argument list, bypassing the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned (missing, not executable),
    /// or [`NonUtf8Stdout`] if it printed bytes that do not decode.
    fn exec(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
