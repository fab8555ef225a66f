//! Fetchers that run a Confero tool and hand back its JSON output.
//!
//! Each fetcher is a straight line: build the invocation, run it, check the
//! exit status, parse stdout. The returned [`serde_json::Value`] is passed
//! through untouched; callers deserialize it if they need typed records.

pub mod annotation;
pub mod contrast;
pub mod r_contrasts;

use serde_json::Value;

use crate::config::ToolsConfig;
use crate::context::ServiceContext;
use crate::error::{FetchError, PortError};
use crate::invocation::{decode_json, Invocation};
use crate::ports::NonUtf8Stdout;

pub use annotation::{get_info, AnnotationQuery};
pub use contrast::{get_contrast_info, DatasetSource};
pub use r_contrasts::get_contrast_list;

/// Runs an argv-style tool invocation and decodes its stdout.
///
/// Presence is checked with [`crate::ports::FileSystem::exists`], which also
/// answers `false` when the path cannot be inspected (an unreadable tools
/// directory, for instance). Such tools are reported as missing.
///
/// # Errors
///
/// Returns [`FetchError::ToolMissing`] when the program is absent, otherwise
/// whatever launching or decoding reports.
pub(crate) fn run_tool(
    ctx: &ServiceContext,
    config: &ToolsConfig,
    invocation: &Invocation,
) -> Result<Value, FetchError> {
    if !ctx.fs.exists(&invocation.program) {
        return Err(FetchError::ToolMissing { path: invocation.program.clone() });
    }

    let program = invocation.program_display();
    tracing::debug!(%program, args = ?invocation.args, "invoking tool");

    let output = ctx
        .shell
        .exec(&invocation.program, &invocation.args)
        .map_err(|source| executor_error(program.clone(), source))?;
    tracing::info!(
        %program,
        exit_code = output.exit_code,
        bytes = output.stdout.len(),
        "tool finished"
    );

    decode_json(&program, &output, config.ignore_exit_status)
}

/// Maps an executor failure onto [`FetchError`]. Undecodable stdout means the
/// process did run, so it is not a launch failure.
pub(crate) fn executor_error(program: String, source: PortError) -> FetchError {
    match source.downcast::<NonUtf8Stdout>() {
        Ok(err) => {
            let NonUtf8Stdout(source) = *err;
            FetchError::InvalidUtf8 { program, source }
        }
        Err(source) => FetchError::Launch { program, source },
    }
}
