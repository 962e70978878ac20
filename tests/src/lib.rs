//! # Lifesteal Utils Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Dispatch cost on the per-frame render path
//! └── src/integration/  # Feature scenarios driven through runtime probes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lsu-tests
//!
//! # By scenario
//! cargo test -p lsu-tests integration::combat_chain::
//!
//! # Benchmarks
//! cargo bench -p lsu-tests
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod integration;
