//! Replaying adapter for the `ShellExecutor` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::json;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let input = json!({ "command": command });
        let output = next_output(&self.replayer, "shell", "run", &input);
        replay_result(&output, "shell::run")
    }

    fn exec(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let input = json!({ "program": program.display().to_string(), "args": args });
        let output = next_output(&self.replayer, "shell", "exec", &input);
        replay_result(&output, "shell::exec")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replaying_shell_run() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "echo hello"}),
            output: json!({"ok": {"exit_code": 0, "stdout": "hello\n", "stderr": ""}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("echo hello").unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "hello\n");
    }

    #[test]
    fn replaying_shell_exec() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "exec".into(),
            input: json!({"program": "/tools/confero/bin/cfo_get_info.pl", "args": []}),
            output: json!({"ok": {"exit_code": 3, "stdout": "", "stderr": "boom"}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.exec(Path::new("/tools/confero/bin/cfo_get_info.pl"), &[]).unwrap();
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.stderr, "boom");
    }

    #[test]
    #[should_panic(expected = "Cassette mismatch for shell::exec")]
    fn replaying_shell_exec_rejects_reordered_arguments() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "exec".into(),
            input: json!({"program": "/t/cfo_get_info.pl", "args": ["--as-json", "--as-tuples"]}),
            output: json!({"ok": {"exit_code": 0, "stdout": "{}", "stderr": ""}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let args = vec!["--as-tuples".to_string(), "--as-json".to_string()];
        let _ = shell.exec(Path::new("/t/cfo_get_info.pl"), &args);
    }

    #[test]
    fn replaying_shell_run_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "bad_cmd"}),
            output: json!({"err": "command not found"}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("bad_cmd");
        assert!(result.unwrap_err().to_string().contains("command not found"));
    }
}
