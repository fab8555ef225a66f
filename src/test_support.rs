//! Cassette builders shared by the fetcher unit tests.

use chrono::Utc;
use serde_json::json;

use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::format::{Cassette, Interaction};
use crate::cassette::replayer::CassetteReplayer;
use crate::context::ServiceContext;

fn interaction(port: &str, method: &str, output: serde_json::Value) -> Interaction {
    Interaction { seq: 0, port: port.into(), method: method.into(), input: json!({}), output }
}

/// Recorded `fs::exists` answer.
pub(crate) fn exists(answer: bool) -> Interaction {
    interaction("fs", "exists", json!(answer))
}

/// Recorded successful `fs::write`.
pub(crate) fn write_ok() -> Interaction {
    interaction("fs", "write", json!({"ok": null}))
}

/// Recorded failing `fs::write`.
pub(crate) fn write_err(message: &str) -> Interaction {
    interaction("fs", "write", json!({"err": message}))
}

/// Recorded `shell::exec` that ran to completion.
pub(crate) fn exec_output(exit_code: i32, stdout: &str) -> Interaction {
    interaction(
        "shell",
        "exec",
        json!({"ok": {"exit_code": exit_code, "stdout": stdout, "stderr": ""}}),
    )
}

/// Recorded `shell::run` that ran to completion.
pub(crate) fn run_output(exit_code: i32, stdout: &str, stderr: &str) -> Interaction {
    interaction(
        "shell",
        "run",
        json!({"ok": {"exit_code": exit_code, "stdout": stdout, "stderr": stderr}}),
    )
}

/// Context replaying `interactions` in order; any call not covered panics.
pub(crate) fn replaying_context(interactions: Vec<Interaction>) -> ServiceContext {
    let interactions = interactions
        .into_iter()
        .enumerate()
        .map(|(seq, i)| Interaction { seq: seq as u64, ..i })
        .collect();
    let cassette = Cassette { name: "unit".into(), recorded_at: Utc::now(), interactions };
    ServiceContext::new(
        Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
    )
}
