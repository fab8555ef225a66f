//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::json;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let input = json!({ "path": path.display().to_string(), "contents": contents });
        let output = next_output(&self.replayer, "fs", "write", &input);
        replay_result(&output, "fs::write")
    }

    fn exists(&self, path: &Path) -> bool {
        let input = json!({ "path": path.display().to_string() });
        let output = next_output(&self.replayer, "fs", "exists", &input);
        output.as_bool().expect("fs::exists: expected boolean output")
    }
}
