//! Live shell executor using `std::process::Command`.

use std::path::Path;
use std::process::{Command, Output};

use crate::ports::shell::{NonUtf8Stdout, ShellExecutor, ShellOutput};

/// Live shell executor that spawns real processes.
pub struct LiveShellExecutor;

/// Stdout must decode; stderr is only diagnostic and is decoded lossily.
fn capture(output: Output) -> Result<ShellOutput, NonUtf8Stdout> {
    Ok(ShellOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        stdout: String::from_utf8(output.stdout).map_err(NonUtf8Stdout)?,
    })
}

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        Ok(capture(output)?)
    }

    fn exec(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(program).args(args).output()?;
        Ok(capture(output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_echo_command() {
        let shell = LiveShellExecutor;
        let result = shell.run("echo hello").unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.trim(), "hello");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn captures_exit_code() {
        let shell = LiveShellExecutor;
        let result = shell.run("exit 42").unwrap();

        assert_eq!(result.exit_code, 42);
        assert!(!result.success());
    }

    #[test]
    fn exec_passes_arguments_verbatim() {
        let shell = LiveShellExecutor;
        let args = vec!["%s|".to_string(), "a b".to_string(), "$HOME".to_string()];
        let result = shell.exec(Path::new("printf"), &args).unwrap();

        assert!(result.success());
        assert_eq!(result.stdout, "a b|$HOME|");
    }

    #[test]
    fn invalid_utf8_stdout_is_an_error() {
        let shell = LiveShellExecutor;
        let err = shell.run("printf '{\"a\": \"\\377\\376\"}'").unwrap_err();
        assert!(err.downcast_ref::<NonUtf8Stdout>().is_some(), "unexpected error: {err}");
    }

    #[test]
    fn invalid_utf8_stderr_is_tolerated() {
        let shell = LiveShellExecutor;
        let result = shell.run("printf '[]'; printf '\\377' >&2").unwrap();
        assert_eq!(result.stdout, "[]");
        assert_eq!(result.stderr, "\u{FFFD}");
    }

    #[test]
    fn exec_missing_program_is_an_error() {
        let shell = LiveShellExecutor;
        let result = shell.exec(Path::new("/nonexistent/confero/tool.pl"), &[]);
        assert!(result.is_err());
    }
}
