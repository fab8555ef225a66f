//! Contrast info for a dataset from `cfo_get_contrast_info_from_dataset.pl`.

use serde_json::Value;

use super::run_tool;
use crate::config::{ToolsConfig, CONTRAST_INFO_TOOL};
use crate::context::ServiceContext;
use crate::error::FetchError;
use crate::invocation::Invocation;

/// Selector value that picks a file-based lookup.
pub const FROM_FILE: &str = "from_file";

/// How the dataset is referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// A dataset file on disk.
    File(String),
    /// A dataset identifier known to the Confero repository.
    Id(String),
}

impl DatasetSource {
    /// Maps a workflow selector onto a source. `"from_file"` selects a file
    /// lookup; every other selector is an identifier lookup.
    #[must_use]
    pub fn from_selector(kind: &str, value: impl Into<String>) -> Self {
        if kind == FROM_FILE {
            Self::File(value.into())
        } else {
            Self::Id(value.into())
        }
    }

    /// The single `--dataset-file=` / `--dataset-id=` flag for this source.
    #[must_use]
    pub fn flag(&self) -> String {
        match self {
            Self::File(path) => format!("--dataset-file={path}"),
            Self::Id(id) => format!("--dataset-id={id}"),
        }
    }
}

/// Builds `cfo_get_contrast_info_from_dataset.pl --as-tuples --get-idxs <dataset flag>`.
#[must_use]
pub fn invocation(config: &ToolsConfig, source: &DatasetSource) -> Invocation {
    Invocation::new(config.tool_path(CONTRAST_INFO_TOOL))
        .arg("--as-tuples")
        .arg("--get-idxs")
        .arg(source.flag())
}

/// Fetches contrast info for the dataset as JSON.
///
/// # Errors
///
/// See [`FetchError`].
pub fn get_contrast_info(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    source: &DatasetSource,
) -> Result<Value, FetchError> {
    run_tool(ctx, config, &invocation(config, source))
}
