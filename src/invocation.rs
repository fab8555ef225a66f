//! Command invocation descriptor and decoding of tool output.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::FetchError;
use crate::ports::shell::ShellOutput;

/// An ordered argument list for one external tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Tool executable.
    pub program: PathBuf,
    /// Arguments, passed to the process as discrete elements.
    pub args: Vec<String>,
}

impl Invocation {
    /// Starts an invocation of `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends `arg` only when `enabled` is set.
    #[must_use]
    pub fn arg_if(self, enabled: bool, arg: impl Into<String>) -> Self {
        if enabled {
            self.arg(arg)
        } else {
            self
        }
    }

    /// Program path for messages and logs.
    #[must_use]
    pub fn program_display(&self) -> String {
        self.program.display().to_string()
    }
}

/// Turns captured tool output into a JSON value.
///
/// A non-zero exit is a [`FetchError::ToolFailed`] unless
/// `ignore_exit_status` is set, in which case stdout is parsed regardless.
///
/// # Errors
///
/// Returns [`FetchError::ToolFailed`] or [`FetchError::InvalidJson`].
pub fn decode_json(
    program: &str,
    output: &ShellOutput,
    ignore_exit_status: bool,
) -> Result<Value, FetchError> {
    if !output.success() {
        if !ignore_exit_status {
            return Err(FetchError::ToolFailed {
                program: program.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        tracing::warn!(program, exit_code = output.exit_code, "ignoring non-zero exit status");
    }

    serde_json::from_str(&output.stdout)
        .map_err(|source| FetchError::InvalidJson { program: program.to_string(), source })
}
