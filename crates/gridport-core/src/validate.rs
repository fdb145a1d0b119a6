//! Syntactic and ordering checks for user-supplied range endpoints.

use std::cmp::Ordering;

use crate::address::split_label;
use crate::column::compare_columns;
use crate::error::{Error, RangeContext, Result};

/// Check that `label` is a well-formed A1 cell name.
///
/// Applied to each endpoint the caller actually supplied; absent endpoints
/// are defaulted later by the reconciler and never pass through here.
pub fn validate_label(label: &str) -> Result<()> {
    if split_label(label).is_none() {
        return Err(Error::InvalidCellName(label.to_string()));
    }
    Ok(())
}

/// Check that `start` does not come after `end`.
///
/// Rows compare numerically and columns via [`compare_columns`], so no
/// letter run is ever converted to a column number just to order two
/// labels. Equal rows and equal columns are allowed (single-row and
/// single-column ranges).
pub fn validate_order(start: &str, end: &str, context: RangeContext) -> Result<()> {
    let (start_col, start_row) = decompose(start)?;
    let (end_col, end_row) = decompose(end)?;

    if start_row > end_row {
        return Err(Error::InvalidRange {
            context,
            detail: format!("start row {} is below end row {}", start_row, end_row),
        });
    }
    if compare_columns(start_col, end_col) == Ordering::Greater {
        return Err(Error::InvalidRange {
            context,
            detail: format!("start column '{}' is after end column '{}'", start_col, end_col),
        });
    }
    Ok(())
}

fn decompose(label: &str) -> Result<(&str, u32)> {
    let (letters, digits) =
        split_label(label).ok_or_else(|| Error::InvalidCellName(label.to_string()))?;
    let row = digits
        .parse()
        .map_err(|_| Error::InvalidCellName(label.to_string()))?;
    Ok((letters, row))
}
