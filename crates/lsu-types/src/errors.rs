//! # Error Types
//!
//! Errors raised by occurrence types themselves.

use thiserror::Error;

use crate::kind::EventKind;

/// Errors that can occur when manipulating an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// Veto attempted on an occurrence type that is not cancellable.
    ///
    /// This is a programming error: a listener is treating an occurrence as
    /// vetoable when its type says otherwise.
    #[error("Cannot cancel a non-cancellable event: {kind}")]
    NotCancellable { kind: EventKind },
}
