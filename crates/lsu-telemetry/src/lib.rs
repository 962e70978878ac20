//! # LSU Telemetry
//!
//! Logging for the Lifesteal Utils client, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lsu_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     if let Err(e) = init_logging(&config) {
//!         eprintln!("logging disabled: {e}");
//!     }
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LSU_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `LSU_JSON_LOGS` | `false` | One JSON object per line |
//! | `LSU_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `LSU_SERVICE_NAME` | `lifesteal-utils` | Name in the startup line |

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    Filter { directive: String, reason: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}
