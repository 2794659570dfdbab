//! Error taxonomy for the optimization pipeline.
//!
//! Only fatal conditions become errors. A single out-of-range k value
//! is not fatal: the driver skips it with a recorded warning and keeps
//! running the remaining candidates.

use thiserror::Error;

/// Errors surfaced by the grouping optimization pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// A range boundary id is absent from the level source.
    #[error("unknown level '{id}': not present in the level source")]
    UnknownLevel {
        /// The id that failed to resolve.
        id: String,
    },

    /// A missing steel value had no usable neighbor to reconstruct from.
    #[error("cannot impute steel for level '{id}': no valid neighbor available")]
    InsufficientData {
        /// The level whose value could not be reconstructed.
        id: String,
    },

    /// A configuration value or request parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The run produced no scenarios at all.
    #[error("empty result: {0}")]
    EmptyResult(String),
}
