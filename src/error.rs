//! ActionError: unified error type for orbit-action public APIs
//!
//! Every fallible operation in the crate returns this error type; no public
//! API panics on bad input. Non-triggering lookups on unknown points return
//! `None` instead of an error.

use thiserror::Error;

/// Unified error type for orbit-action operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A point or node index beyond the currently discovered range.
    #[error("index {index} out of range (currently {size} points discovered)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of points discovered at the time of the call.
        size: usize,
    },
    /// A generator label beyond the current out-degree of the word graph.
    #[error("generator label {label} out of range (out-degree {out_degree})")]
    LabelOutOfRange {
        /// The offending label.
        label: usize,
        /// Out-degree (number of generators) at the time of the call.
        out_degree: usize,
    },
    /// A generator or point whose shape is incompatible with existing data.
    #[error("degree mismatch: expected {expected}, found {found}")]
    DegreeMismatch {
        /// Degree recorded from the first seed/generator.
        expected: usize,
        /// Degree of the offending value.
        found: usize,
    },
    /// Operation requires state the action does not have yet.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}
