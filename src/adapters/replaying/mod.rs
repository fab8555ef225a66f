//! Replaying adapters that replay recorded interactions.

pub mod filesystem;
pub mod shell;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;

/// Pull the recorded output of the next `port::method` interaction.
///
/// Panics when the recorded input differs from `input`. A recorded `{}`
/// matches any call.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    input: &serde_json::Value,
) -> serde_json::Value {
    let interaction =
        replayer.lock().expect("replayer lock poisoned").next_interaction(port, method);
    let recorded = &interaction.input;
    let any_input = recorded.as_object().is_some_and(serde_json::Map::is_empty);
    assert!(
        any_input || recorded == input,
        "Cassette mismatch for {port}::{method} (seq {}): recorded input {recorded}, \
         replayed with {input}",
        interaction.seq
    );
    interaction.output
}

/// Extracts a `Result` from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`; a bare value is
/// treated as `ok`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
