//! Logging initialisation for the `confero-fetch` CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr`, so the JSON
//! printed on `stdout` stays parseable by the calling workflow.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "CONFERO_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `CONFERO_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Install global logging if it has not already been configured.
///
/// Human-readable by default, JSON with `CONFERO_LOG_FORMAT=json`. The level
/// is controlled via `RUST_LOG` and defaults to `warn`. If another subscriber
/// already owns the global slot it is kept.
///
/// # Errors
///
/// Returns [`LoggingError`] if the format variable is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let use_json = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => false,
        Err(source @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode { name: LOG_FORMAT_ENV, source });
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if use_json { fmt_layer.json().boxed() } else { fmt_layer.boxed() };

    if let Err(err) = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init() {
        eprintln!("logging already configured elsewhere: {err}");
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn parse_log_format(raw: &str) -> Result<bool, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" | "" => Ok(false),
        "json" => Ok(true),
        other => Err(LoggingError::UnsupportedFormat { provided: other.to_owned() }),
    }
}
