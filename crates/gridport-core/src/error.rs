//! Error types for gridport-core

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of an import a range belongs to.
///
/// Carried on ordering errors so the message can say whether the bad range
/// was the one being copied from or the one being pasted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeContext {
    Source,
    Destination,
}

impl fmt::Display for RangeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeContext::Source => write!(f, "source"),
            RangeContext::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that can occur in gridport-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row or column outside the representable domain
    #[error("invalid cell address: {0}")]
    InvalidAddress(String),

    /// Label does not match the letters-then-digits cell name grammar
    #[error("invalid cell name '{0}': expected column letters followed by a row number, e.g. 'A1'")]
    InvalidCellName(String),

    /// Range endpoints are out of order
    #[error("invalid {context} range: {detail}")]
    InvalidRange {
        context: RangeContext,
        detail: String,
    },
}
