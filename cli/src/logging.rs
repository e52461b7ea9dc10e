//! Tracing subscriber setup for the `artistnet` binary.
//!
//! Diagnostics go to `stderr`. `RUST_LOG` controls the level and
//! `ARTISTNET_LOG_FORMAT=json` switches to structured output.

use std::env;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_ENV: &str = "ARTISTNET_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat { provided: String },
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

/// Installs the global subscriber once; later calls are no-ops.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::Human,
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source: err,
            });
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

pub fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
