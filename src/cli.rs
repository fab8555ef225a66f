//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

/// Top-level CLI parser for `confero-fetch`.
#[derive(Debug, Parser)]
#[command(
    name = "confero-fetch",
    version,
    about = "Run a Confero tool and print its JSON output"
)]
pub struct Cli {
    /// Tool location and execution options.
    #[command(flatten)]
    pub tools: ToolArgs,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct ToolArgs {
    /// Root of the bundled tools tree [env: `CONFERO_TOOLS_DIR`].
    #[arg(long, global = true, value_name = "DIR")]
    pub tools_dir: Option<PathBuf>,
    /// Diagnostic log written by `r-contrasts` [env: `CONFERO_LOG_FILE`].
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// R interpreter used by `r-contrasts` [env: `CONFERO_R`].
    #[arg(long, global = true, value_name = "R")]
    pub r_program: Option<String>,
    /// Parse the tool's stdout even when it exits non-zero.
    #[arg(long, global = true)]
    pub ignore_exit_status: bool,
}

impl ToolArgs {
    /// Converts the flags into config overrides.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            tools_dir: self.tools_dir.clone(),
            log_file: self.log_file.clone(),
            r_program: self.r_program.clone(),
            ignore_exit_status: self.ignore_exit_status,
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Annotation info for a data type (`cfo_get_info.pl`).
    Info {
        /// Data type identifier.
        data_type: String,
        /// Annotation name filter.
        #[arg(default_value = "")]
        annotation_names: String,
        /// Include annotations with no values.
        #[arg(long)]
        with_empty: bool,
    },
    /// Contrast info for a dataset (`cfo_get_contrast_info_from_dataset.pl`).
    ContrastInfo {
        /// `from_file` for a dataset file; anything else looks up an identifier.
        source: String,
        /// Dataset file path or identifier.
        value: String,
    },
    /// Contrast list computed by `get_r_contrasts.R`.
    RContrasts {
        /// Input file handed to the R script.
        file: String,
    },
}
