//! Error type for the import flow.

use thiserror::Error;

/// Failures surfaced while handling an import request.
///
/// Every variant is rendered through `Display` into the uniform failure
/// body; the message text is the only thing a caller can differentiate on.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Range arithmetic or validation failure
    #[error(transparent)]
    Range(#[from] gridport_core::Error),

    /// Failure surfaced by the spreadsheet service
    #[error(transparent)]
    Sheets(#[from] gridport_sheets::ClientError),

    /// A required request field was absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}
