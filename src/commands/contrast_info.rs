//! `confero-fetch contrast-info` command.

use crate::config::ToolsConfig;
use crate::context::ServiceContext;
use crate::fetch::{get_contrast_info, DatasetSource};

/// Execute the `contrast-info` command.
///
/// # Errors
///
/// Returns an error string if the tool cannot be run or its output is not JSON.
pub fn run(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    source: &str,
    value: &str,
) -> Result<(), String> {
    let source = DatasetSource::from_selector(source, value);
    let value = get_contrast_info(ctx, config, &source).map_err(|e| e.to_string())?;
    super::print_json(&value)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::ToolsConfig;
    use crate::test_support::{exec_output, exists, replaying_context};

    #[test]
    fn contrast_info_command_prints_tool_output() {
        let ctx = replaying_context(vec![exists(true), exec_output(0, "{\"contrasts\": []}")]);
        assert!(run(&ctx, &ToolsConfig::new("/opt/tools"), "from_file", "/data/ds.txt").is_ok());
    }

    #[test]
    fn contrast_info_command_reports_bad_json() {
        let ctx = replaying_context(vec![exists(true), exec_output(0, "")]);
        let err = run(&ctx, &ToolsConfig::new("/opt/tools"), "id", "GSE1").unwrap_err();
        assert!(err.contains("did not produce valid JSON"));
    }
}
