//! # LSU Runtime
//!
//! Client bootstrap for Lifesteal Utils.
//!
//! ```text
//!  game hooks ──▶ probes ──post──▶ EventBus ──▶ feature listeners
//!                   ▲                                  │
//!                   └──── cancel / rewritten values ◀──┘
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Read [`RuntimeConfig`] from the environment
//! 2. Load and validate the feature configuration
//! 3. Construct every feature and register it on the bus
//! 4. Hand the probes to the game hooks and start the tick loop

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod config;
pub mod features;
pub mod probes;
pub mod runtime;

pub use config::{RuntimeConfig, RuntimeError, DEFAULT_TICK_RATE_HZ, MAX_TICK_RATE_HZ};
pub use features::FeatureSet;
pub use runtime::ClientRuntime;
