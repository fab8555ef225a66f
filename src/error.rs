//! Errors raised by the fetchers.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Boxed error produced at a port boundary.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failure fetching JSON from an external Confero tool.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The tool or script is not present under the tools directory.
    #[error("external tool not found at `{}`", .path.display())]
    ToolMissing {
        /// Expected location.
        path: PathBuf,
    },
    /// The process (or the shell wrapping it) could not be spawned.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// Program or command line that was launched.
        program: String,
        /// Error reported by the executor.
        #[source]
        source: PortError,
    },
    /// The tool ran but exited with a non-zero status.
    #[error("`{program}` exited with status {exit_code}: {stderr}")]
    ToolFailed {
        /// Program or command line that was launched.
        program: String,
        /// Exit status, `-1` if terminated by a signal.
        exit_code: i32,
        /// Trimmed standard error.
        stderr: String,
    },
    /// Standard output was not valid UTF-8.
    #[error("`{program}` wrote invalid UTF-8 to stdout: {source}")]
    InvalidUtf8 {
        /// Program or command line that was launched.
        program: String,
        /// Decoder failure.
        #[source]
        source: FromUtf8Error,
    },
    /// Standard output was empty or not valid JSON.
    #[error("`{program}` did not produce valid JSON: {source}")]
    InvalidJson {
        /// Program or command line that was launched.
        program: String,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// The diagnostic log could not be written; nothing was executed.
    #[error("failed to write log file `{}`: {source}", .path.display())]
    LogWrite {
        /// Log file location.
        path: PathBuf,
        /// Error reported by the filesystem.
        #[source]
        source: PortError,
    },
}
