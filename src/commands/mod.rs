//! Command dispatch and handlers.

pub mod contrast_info;
pub mod info;
pub mod r_contrasts;

use std::env;
use std::path::PathBuf;

use serde_json::Value;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::ToolsConfig;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "CONFERO_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `CONFERO_RECORD` is set to a directory path, every shell and
/// filesystem interaction is recorded to per-port cassette files under it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &ToolsConfig) -> Result<(), String> {
    let (ctx, session) = match env::var(RECORD_ENV) {
        Ok(path) if !path.is_empty() => {
            let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path))?;
            (ctx, Some(session))
        }
        _ => (ServiceContext::live(), None),
    };

    let result = dispatch_with_context(command, &ctx, config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &ToolsConfig,
) -> Result<(), String> {
    match command {
        Command::Info { data_type, annotation_names, with_empty } => {
            info::run(ctx, config, data_type, annotation_names, *with_empty)
        }
        Command::ContrastInfo { source, value } => contrast_info::run(ctx, config, source, value),
        Command::RContrasts { file } => r_contrasts::run(ctx, config, file),
    }
}

/// Print a fetched value on stdout for the calling workflow.
fn print_json(value: &Value) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    tracing::info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
