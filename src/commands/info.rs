//! `confero-fetch info` command.

use crate::config::ToolsConfig;
use crate::context::ServiceContext;
use crate::fetch::{get_info, AnnotationQuery};

/// Execute the `info` command.
///
/// # Errors
///
/// Returns an error string if the tool cannot be run or its output is not JSON.
pub fn run(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    data_type: &str,
    annotation_names: &str,
    with_empty: bool,
) -> Result<(), String> {
    let query =
        AnnotationQuery::new(data_type).annotation_names(annotation_names).with_empty(with_empty);
    let value = get_info(ctx, config, &query).map_err(|e| e.to_string())?;
    super::print_json(&value)
}
