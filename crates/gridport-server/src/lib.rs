//! HTTP surface and import orchestration for gridport.
//!
//! The binary lives in `main.rs`; everything else is a library so the
//! end-to-end tests can build the router against a stub spreadsheet
//! service.

pub mod app;
pub mod error;
pub mod import;

pub use app::{router, AppState};
pub use error::ImportError;
pub use import::{run_import, ImportRequest};
