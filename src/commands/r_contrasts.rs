//! `confero-fetch r-contrasts` command.

use crate::config::ToolsConfig;
use crate::context::ServiceContext;
use crate::fetch::get_contrast_list;

/// Execute the `r-contrasts` command.
///
/// # Errors
///
/// Returns an error string if the log cannot be written, R cannot be run,
/// or its output is not JSON.
pub fn run(ctx: &ServiceContext, config: &ToolsConfig, file: &str) -> Result<(), String> {
    let value = get_contrast_list(ctx, config, file).map_err(|e| e.to_string())?;
    super::print_json(&value)
}
