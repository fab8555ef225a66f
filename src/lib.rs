//! Run the Confero annotation and contrast tools and hand back their JSON.
//!
//! Three fetchers wrap external programs: `cfo_get_info.pl`,
//! `cfo_get_contrast_info_from_dataset.pl` and the `get_r_contrasts.R`
//! script. Each builds an invocation, runs it through the
//! [`ports::ShellExecutor`] port, checks the exit status and parses stdout
//! into a [`serde_json::Value`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod invocation;
pub mod logging;
pub mod ports;

#[cfg(test)]
mod test_support;

use clap::Parser;

use crate::config::ToolsConfig;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, config resolution or
/// command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = ToolsConfig::resolve(cli.tools.overrides()).map_err(|err| err.to_string())?;
    tracing::debug!(tools_dir = %config.tools_dir.display(), "resolved tools directory");
    commands::dispatch(&cli.command, &config)
}
