//! # LSU Types Crate
//!
//! Occurrence types shared across the client: the things the event bus
//! delivers, the priority scale that orders listeners, and the misuse error
//! raised when a non-cancellable occurrence is vetoed.
//!
//! ## Design Principles
//!
//! - **Type is category**: an occurrence's Rust type *is* its routing key.
//!   [`EventKind`] is derived from the type (`Event::KIND`), never stored.
//! - **Cancellability is fixed per type**: only cancellable types expose
//!   `cancel()`. The generic [`Event::set_cancelled`] path reports
//!   misuse with [`EventError::NotCancellable`].
//! - **Current vs. original value**: mutable occurrences keep the producer's
//!   value untouched and expose a separate current value that listeners
//!   overwrite.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod errors;
pub mod events;
pub mod kind;
pub mod priority;

pub use errors::EventError;
pub use events::*;
pub use kind::EventKind;
pub use priority::Priority;
