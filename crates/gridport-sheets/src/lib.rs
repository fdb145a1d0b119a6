//! Client for the external spreadsheet service.
//!
//! gridport never touches spreadsheet files itself; all cell data lives on
//! a remote service reached over its REST API with a bearer token. This
//! crate provides the typed handle chain the import flow works through:
//!
//! ```text
//! SheetsClient::open_spreadsheet(id)
//!     └── Spreadsheet::sheet(name)
//!           └── Sheet::{dimensions, read_range, write_range}
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gridport_sheets::{Credentials, SheetsClient};
//!
//! # async fn example() -> gridport_sheets::error::Result<()> {
//! let creds = Credentials::from_file("/etc/secrets/service_account.json".as_ref())?;
//! let client = SheetsClient::new(creds)?;
//!
//! let spreadsheet = client.open_spreadsheet("1aBcD").await?;
//! let sheet = spreadsheet.sheet("Sheet1")?;
//! let values = sheet.read_range("A1:C3").await?;
//! sheet.write_range("E1:G3", &values).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;

pub use auth::Credentials;
pub use client::{used_extent, Grid, Sheet, SheetsClient, Spreadsheet};
pub use error::ClientError;
