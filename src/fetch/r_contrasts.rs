//! Contrast list computed by `get_r_contrasts.R`.
//!
//! Unlike the Perl tools this one goes through the shell: the script is fed
//! to R on stdin. Every call overwrites the diagnostic log with the input
//! file and the exact command line before anything runs.

use serde_json::Value;

use super::executor_error;
use crate::config::{ToolsConfig, R_CONTRASTS_SCRIPT};
use crate::context::ServiceContext;
use crate::error::FetchError;
use crate::invocation::decode_json;

/// Builds `<R> --vanilla --slave --args <file> < <script>`.
///
/// The file and script path are shell-quoted; plain paths render unchanged.
#[must_use]
pub fn command_line(config: &ToolsConfig, file_selected: &str) -> String {
    let script = config.tool_path(R_CONTRASTS_SCRIPT);
    format!(
        "{} --vanilla --slave --args {} < {}",
        config.r_program,
        shell_words::quote(file_selected),
        shell_words::quote(&script.to_string_lossy()),
    )
}

/// The two log lines written ahead of each invocation.
fn log_contents(file_selected: &str, command: &str) -> String {
    format!("file_selected: {file_selected}\nRunme: {command}\n")
}

/// Fetches the contrast list for `file_selected` as JSON.
///
/// # Errors
///
/// [`FetchError::LogWrite`] if the log cannot be written, in which case
/// nothing is executed; otherwise see [`FetchError`].
pub fn get_contrast_list(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    file_selected: &str,
) -> Result<Value, FetchError> {
    let command = command_line(config, file_selected);

    ctx.fs
        .write(&config.log_path, &log_contents(file_selected, &command))
        .map_err(|source| FetchError::LogWrite { path: config.log_path.clone(), source })?;

    let script = config.tool_path(R_CONTRASTS_SCRIPT);
    if !ctx.fs.exists(&script) {
        return Err(FetchError::ToolMissing { path: script });
    }

    tracing::debug!(%command, "invoking R");
    let output = ctx
        .shell
        .run(&command)
        .map_err(|source| executor_error(command.clone(), source))?;
    tracing::info!(exit_code = output.exit_code, bytes = output.stdout.len(), "R finished");

    decode_json(&config.r_program, &output, config.ignore_exit_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::replaying::ReplayingShellExecutor;
    use crate::cassette::format::Cassette;
    use crate::cassette::replayer::CassetteReplayer;
    use crate::test_support::{exists, replaying_context, run_output, write_err, write_ok};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn command_line_matches_r_batch_invocation() {
        let config = ToolsConfig::new("/opt/tools");
        assert_eq!(
            command_line(&config, "/data/dataset_42.dat"),
            "R --vanilla --slave --args /data/dataset_42.dat \
             < /opt/tools/confero_platform/galaxy/get_r_contrasts.R"
        );
    }

    #[test]
    fn command_line_quotes_shell_metacharacters() {
        let config = ToolsConfig { r_program: "Rscript-wrapper".into(), ..ToolsConfig::new("/t") };
        let command = command_line(&config, "my file; rm -rf x");
        assert!(command
            .starts_with("Rscript-wrapper --vanilla --slave --args 'my file; rm -rf x' < "));
    }

    #[test]
    fn log_contents_are_two_terminated_lines() {
        assert_eq!(
            log_contents("/data/x.dat", "R --vanilla"),
            "file_selected: /data/x.dat\nRunme: R --vanilla\n"
        );
    }

    #[test]
    fn returns_decoded_output_after_logging() {
        let ctx = replaying_context(vec![
            write_ok(),
            exists(true),
            run_output(0, "[\"A vs B\", \"A vs C\"]\n", ""),
        ]);
        let value = get_contrast_list(&ctx, &ToolsConfig::new("/opt/tools"), "/data/x.dat");
        assert_eq!(value.unwrap(), json!(["A vs B", "A vs C"]));
    }

    #[test]
    fn log_failure_aborts_before_execution() {
        // No shell interaction recorded: reaching the executor would panic.
        let ctx = replaying_context(vec![write_err("permission denied")]);
        let err = get_contrast_list(&ctx, &ToolsConfig::new("/opt/tools"), "/data/x.dat")
            .unwrap_err();
        match err {
            FetchError::LogWrite { path, source } => {
                assert_eq!(path, std::path::PathBuf::from("log.txt"));
                assert!(source.to_string().contains("permission denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn r_errors_surface_stderr() {
        let ctx = replaying_context(vec![
            write_ok(),
            exists(true),
            run_output(1, "", "Error in file(file, \"rt\") : cannot open the connection\n"),
        ]);
        let err = get_contrast_list(&ctx, &ToolsConfig::new("/opt/tools"), "/data/x.dat")
            .unwrap_err();
        match err {
            FetchError::ToolFailed { program, exit_code, stderr } => {
                assert_eq!(program, "R");
                assert_eq!(exit_code, 1);
                assert!(stderr.contains("cannot open the connection"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn log_file_holds_exactly_two_lines() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join(R_CONTRASTS_SCRIPT);
        std::fs::create_dir_all(script.parent().unwrap()).unwrap();
        std::fs::write(&script, "cat('[]')\n").unwrap();

        let config =
            ToolsConfig { log_path: dir.path().join("log.txt"), ..ToolsConfig::new(dir.path()) };
        std::fs::write(&config.log_path, "stale\nstale\nstale\n").unwrap();

        let cassette = Cassette {
            name: "r".into(),
            recorded_at: Utc::now(),
            interactions: vec![run_output(0, "[]", "")],
        };
        let ctx = ServiceContext::new(
            Box::new(LiveFileSystem),
            Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        );

        let value = get_contrast_list(&ctx, &config, "/data/x.dat").unwrap();
        assert_eq!(value, json!([]));

        let log = std::fs::read_to_string(&config.log_path).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "file_selected: /data/x.dat");
        assert_eq!(lines[1], format!("Runme: {}", command_line(&config, "/data/x.dat")));
    }
}
