//! Subscriber installation.
//!
//! Pretty output is meant for a developer terminal; JSON output carries the
//! same fields one object per line for log shippers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter for a configuration.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        directive: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Fails with [`TelemetryError::AlreadyInitialized`] if a subscriber is
/// already set, so tests and embedders can call it more than once.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let output = if !config.console_output {
        None
    } else if config.json_logs {
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        )
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(true)
                .boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}

/// Log a feature-scoped event with a `feature` field.
///
/// ```rust,ignore
/// log_event!(debug, "chain_tracker", "Chain reset", reason = "disconnect");
/// ```
#[macro_export]
macro_rules! log_event {
    (info, $feature:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            feature = $feature,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $feature:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            feature = $feature,
            $($($field)*,)?
            $msg
        )
    };

    (error, $feature:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            feature = $feature,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $feature:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            feature = $feature,
            $($($field)*,)?
            $msg
        )
    };

    (trace, $feature:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::trace!(
            feature = $feature,
            $($($field)*,)?
            $msg
        )
    };
}
