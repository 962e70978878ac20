//! # Listener Priority
//!
//! Defines execution order for listeners subscribed to the same occurrence
//! type. Higher priority runs first and sees the occurrence before any
//! lower-priority listener can read or overwrite its mutable fields.

use std::fmt;

/// Ordering weight for a listener.
///
/// Compared numerically through [`Priority::weight`]; the bus sorts lists
/// descending so `High` listeners observe an occurrence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    /// Runs after everything else (weight 0).
    Low,
    /// Default for most features (weight 100).
    #[default]
    Normal,
    /// Runs first (weight 200). Use for features that must fully replace an
    /// occurrence's content before cosmetic passes adjust it.
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    /// Numeric weight used for sorting.
    #[must_use]
    pub const fn weight(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Normal => 100,
            Self::High => 200,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Normal => write!(f, "NORMAL"),
            Self::High => write!(f, "HIGH"),
        }
    }
}
