//! Handler fault type.

use std::any::Any;

use thiserror::Error;

/// Why a single handler invocation did not complete.
///
/// Faults are contained by the bus: logged, counted, and never propagated
/// to the producer.
#[derive(Debug, Error)]
pub enum HandlerFault {
    /// The handler returned an error.
    #[error("Handler failed: {0:#}")]
    Failed(anyhow::Error),

    /// The handler panicked.
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

impl HandlerFault {
    /// Build a fault from a `catch_unwind` payload.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panicked(message)
    }
}
