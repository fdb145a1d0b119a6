//! Error types for the spreadsheet service client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error talking to spreadsheet service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("spreadsheet service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response from spreadsheet service: {0}")]
    Decode(String),

    #[error("spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("credentials error: {0}")]
    Credentials(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
