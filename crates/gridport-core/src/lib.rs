//! # gridport-core
//!
//! Cell-range arithmetic for the gridport import service:
//! - [`CellAddress`] - translation between A1-style labels and 1-indexed
//!   (row, column) pairs
//! - [`compare_columns`] - spreadsheet ordering of column letter runs
//! - [`validate_label`] / [`validate_order`] - checks on user-supplied
//!   range endpoints
//! - [`reconcile`] - resolution of optional copy/paste endpoints into the
//!   concrete ranges an import will read and write
//!
//! ## Example
//!
//! ```rust
//! use gridport_core::{reconcile, CellAddress};
//!
//! let addr = CellAddress::parse("B7").unwrap();
//! assert_eq!((addr.row, addr.col), (7, 2));
//!
//! // A 10x5 source sheet with no endpoints given copies in full,
//! // anchored at A1 on the destination.
//! let ranges = reconcile(None, None, None, None, 10, 5).unwrap();
//! assert_eq!(ranges.copy_range, "A1:E10");
//! assert_eq!(ranges.paste_range, "A1");
//! ```

pub mod address;
pub mod column;
pub mod error;
pub mod reconcile;
pub mod validate;

// Re-exports for convenience
pub use address::CellAddress;
pub use column::compare_columns;
pub use error::{Error, RangeContext, Result};
pub use reconcile::{reconcile, ResolvedRanges};
pub use validate::{validate_label, validate_order};
