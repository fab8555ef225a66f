//! Annotation info from `cfo_get_info.pl`.

use serde_json::Value;

use super::run_tool;
use crate::config::{ToolsConfig, GET_INFO_TOOL};
use crate::context::ServiceContext;
use crate::error::FetchError;
use crate::invocation::Invocation;

/// What to ask `cfo_get_info.pl` for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationQuery {
    /// Data type identifier, first positional argument.
    pub data_type: String,
    /// Include annotations with no values (`--with-empty`).
    pub with_empty: bool,
    /// Annotation name filter, second positional; empty means no filter.
    pub annotation_names: String,
}

impl AnnotationQuery {
    /// Query for `data_type` with no filter and empty annotations excluded.
    #[must_use]
    pub fn new(data_type: impl Into<String>) -> Self {
        Self { data_type: data_type.into(), with_empty: false, annotation_names: String::new() }
    }

    /// Sets the annotation name filter.
    #[must_use]
    pub fn annotation_names(mut self, names: impl Into<String>) -> Self {
        self.annotation_names = names.into();
        self
    }

    /// Sets whether empty annotations are included.
    #[must_use]
    pub fn with_empty(mut self, with_empty: bool) -> Self {
        self.with_empty = with_empty;
        self
    }
}

/// Builds `cfo_get_info.pl --as-json --as-tuples [--with-empty] <type> <names>`.
#[must_use]
pub fn invocation(config: &ToolsConfig, query: &AnnotationQuery) -> Invocation {
    Invocation::new(config.tool_path(GET_INFO_TOOL))
        .arg("--as-json")
        .arg("--as-tuples")
        .arg_if(query.with_empty, "--with-empty")
        .arg(query.data_type.as_str())
        .arg(query.annotation_names.as_str())
}

/// Fetches annotation info for `query` as JSON.
///
/// # Errors
///
/// See [`FetchError`].
pub fn get_info(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    query: &AnnotationQuery,
) -> Result<Value, FetchError> {
    run_tool(ctx, config, &invocation(config, query))
}
