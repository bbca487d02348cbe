//! Observability and telemetry.
//!
//! Logging setup for the process: a `tracing-subscriber` registry with an
//! env-filter and either a pretty or JSON fmt layer. Metrics are recorded
//! through the `metrics` facade; no exporter is installed, so counters are
//! no-ops unless an embedding application wires one up.

use crate::{Error, Result};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Parses a format string, defaulting to pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Options for logging initialization.
#[derive(Debug, Clone, Copy)]
pub struct InitOptions {
    /// Whether verbose output was requested via CLI.
    pub verbose: bool,
    /// Output format.
    pub format: LogFormat,
}

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging for the process.
///
/// The filter honors `CINELOG_LOG` when set; otherwise `--verbose` selects
/// `debug` for this crate and the default is `warn`.
///
/// # Errors
///
/// Returns an error if logging has already been initialized or the
/// subscriber cannot be installed.
pub fn init(options: InitOptions) -> Result<()> {
    if LOGGING_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: "logging already initialized".to_string(),
        });
    }

    let default_directive = if options.verbose {
        "cinelog=debug"
    } else {
        "cinelog=warn"
    };
    let filter = EnvFilter::try_from_env("CINELOG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    match options.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
    }

    LOGGING_INIT
        .set(())
        .map_err(|()| Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: "failed to mark logging initialized".to_string(),
        })?;

    Ok(())
}

/// Helper to convert init errors.
#[allow(clippy::needless_pass_by_value)]
fn init_error(e: tracing_subscriber::util::TryInitError) -> Error {
    Error::OperationFailed {
        operation: "logging_init".to_string(),
        cause: e.to_string(),
    }
}
