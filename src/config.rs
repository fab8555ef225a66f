//! Installation layout for the companion Confero tools.
//!
//! The Perl helpers and the R script ship in a `tools/` tree next to the
//! deployed application. The location is resolved once and injected into
//! every fetcher instead of being derived per call from the entry point.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the tools directory.
pub const TOOLS_DIR_ENV: &str = "CONFERO_TOOLS_DIR";
/// Environment variable overriding the diagnostic log path.
pub const LOG_FILE_ENV: &str = "CONFERO_LOG_FILE";
/// Environment variable overriding the R interpreter.
pub const R_PROGRAM_ENV: &str = "CONFERO_R";

/// Default diagnostic log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";
/// Default R interpreter, looked up on `PATH` by the shell.
pub const DEFAULT_R_PROGRAM: &str = "R";

/// Annotation info tool, relative to the tools directory.
pub const GET_INFO_TOOL: &str = "confero/bin/cfo_get_info.pl";
/// Contrast info tool, relative to the tools directory.
pub const CONTRAST_INFO_TOOL: &str = "confero/galaxy/cfo_get_contrast_info_from_dataset.pl";
/// R contrast list script, relative to the tools directory.
pub const R_CONTRASTS_SCRIPT: &str = "confero_platform/galaxy/get_r_contrasts.R";

/// Errors raised while resolving the tools layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The running executable's location could not be determined.
    #[error("cannot locate the running executable to find the tools directory: {source}")]
    CurrentExe {
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The executable path has no parent directory.
    #[error("executable path `{path}` has no parent directory")]
    NoParent {
        /// Offending executable path.
        path: PathBuf,
    },
}

/// Command-line overrides, each taking precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit tools directory.
    pub tools_dir: Option<PathBuf>,
    /// Explicit log file path.
    pub log_file: Option<PathBuf>,
    /// Explicit R interpreter.
    pub r_program: Option<String>,
    /// Parse stdout even when a tool exits non-zero.
    pub ignore_exit_status: bool,
}

/// Where the companion tools live and how they are run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Root of the bundled tools tree.
    pub tools_dir: PathBuf,
    /// Diagnostic log written by the R contrast fetcher, overwritten per call.
    pub log_path: PathBuf,
    /// R interpreter command.
    pub r_program: String,
    /// When set, a non-zero exit is logged and stdout is parsed anyway.
    pub ignore_exit_status: bool,
}

impl ToolsConfig {
    /// Builds a config rooted at `tools_dir` with every other setting at its default.
    #[must_use]
    pub fn new(tools_dir: impl Into<PathBuf>) -> Self {
        Self {
            tools_dir: tools_dir.into(),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            r_program: DEFAULT_R_PROGRAM.to_string(),
            ignore_exit_status: false,
        }
    }

    /// Resolves the config from overrides, the process environment and the
    /// running executable's location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no tools directory is given and the
    /// executable's directory cannot be determined.
    pub fn resolve(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |name| env::var(name).ok(), default_tools_dir)
    }

    /// Resolution over injected lookups.
    ///
    /// Precedence per setting: override, then environment, then default.
    /// `fallback_dir` is only consulted when neither names a tools directory.
    ///
    /// # Errors
    ///
    /// Propagates the error from `fallback_dir`.
    pub fn resolve_with<E, D>(
        overrides: Overrides,
        lookup: E,
        fallback_dir: D,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
        D: FnOnce() -> Result<PathBuf, ConfigError>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let tools_dir =
            match overrides.tools_dir.or_else(|| non_empty(TOOLS_DIR_ENV).map(PathBuf::from)) {
                Some(dir) => dir,
                None => fallback_dir()?,
            };

        let mut config = Self::new(tools_dir);
        let log_file = overrides.log_file.or_else(|| non_empty(LOG_FILE_ENV).map(PathBuf::from));
        if let Some(path) = log_file {
            config.log_path = path;
        }
        if let Some(r) = overrides.r_program.or_else(|| non_empty(R_PROGRAM_ENV)) {
            config.r_program = r;
        }
        config.ignore_exit_status = overrides.ignore_exit_status;
        Ok(config)
    }

    /// Absolute location of a tool given its path relative to the tools tree.
    #[must_use]
    pub fn tool_path(&self, relative: &str) -> PathBuf {
        self.tools_dir.join(relative)
    }
}

/// `<dir of current executable>/../tools`, the layout tools are deployed with.
///
/// # Errors
///
/// Returns [`ConfigError`] if the executable path is unavailable.
pub fn default_tools_dir() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe().map_err(|source| ConfigError::CurrentExe { source })?;
    tools_dir_beside(&exe)
}

fn tools_dir_beside(exe: &Path) -> Result<PathBuf, ConfigError> {
    let parent = exe.parent().ok_or_else(|| ConfigError::NoParent { path: exe.to_path_buf() })?;
    Ok(parent.join("..").join("tools"))
}
