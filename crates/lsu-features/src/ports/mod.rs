//! Ports layer for the feature listeners.
//!
//! Inbound traffic arrives through the bus contracts; the traits here are
//! what the features need from the host client.

pub mod outbound;

pub use outbound::*;
