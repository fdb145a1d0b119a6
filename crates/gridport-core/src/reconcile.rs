//! Resolution of optional copy/paste endpoints into concrete ranges.

use crate::address::CellAddress;
use crate::error::{RangeContext, Result};
use crate::validate::validate_order;

/// The concrete ranges an import will read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRanges {
    /// Inclusive A1 range to read from the source sheet, e.g. "A1:E10".
    pub copy_range: String,
    /// Anchor cell or inclusive A1 range to write on the destination sheet.
    pub paste_range: String,
}

/// Resolve the four optional endpoints against the source sheet's used
/// extent (`source_rows` x `source_cols`, 1-indexed inclusive counts).
///
/// Defaults: a missing `copy_start` or `paste_start` is "A1"; a missing
/// `copy_end` is the full used extent of the source sheet. `paste_end` has
/// no default — without it the paste target stays an open-ended anchor.
///
/// When `paste_end` is present the copy range is clamped, per axis, so its
/// shape never exceeds the paste range's shape; the copy range is never
/// grown to match a larger paste range. Endpoint labels are canonicalized
/// to upper-case in the output.
pub fn reconcile(
    copy_start: Option<&str>,
    copy_end: Option<&str>,
    paste_start: Option<&str>,
    paste_end: Option<&str>,
    source_rows: u32,
    source_cols: u32,
) -> Result<ResolvedRanges> {
    let copy_start = match copy_start {
        Some(label) => label.to_ascii_uppercase(),
        None => "A1".to_string(),
    };
    let mut copy_end = match copy_end {
        Some(label) => label.to_ascii_uppercase(),
        None => CellAddress::new(source_rows, source_cols)?.to_a1_string(),
    };
    validate_order(&copy_start, &copy_end, RangeContext::Source)?;

    let paste_start = match paste_start {
        Some(label) => label.to_ascii_uppercase(),
        None => "A1".to_string(),
    };

    let paste_range = match paste_end {
        Some(paste_end) => {
            let paste_end = paste_end.to_ascii_uppercase();
            validate_order(&paste_start, &paste_end, RangeContext::Destination)?;

            copy_end = clamp_copy_end(&copy_start, &copy_end, &paste_start, &paste_end)?;
            format!("{}:{}", paste_start, paste_end)
        }
        None => paste_start,
    };

    Ok(ResolvedRanges {
        copy_range: format!("{}:{}", copy_start, copy_end),
        paste_range,
    })
}

/// Shrink `copy_end` so the copy span does not exceed the paste span on
/// either axis. Both ranges have already passed order validation, so the
/// per-axis spans cannot underflow.
fn clamp_copy_end(
    copy_start: &str,
    copy_end: &str,
    paste_start: &str,
    paste_end: &str,
) -> Result<String> {
    let c_start = CellAddress::parse(copy_start)?;
    let c_end = CellAddress::parse(copy_end)?;
    let p_start = CellAddress::parse(paste_start)?;
    let p_end = CellAddress::parse(paste_end)?;

    let mut end_row = c_end.row;
    let mut end_col = c_end.col;

    if c_end.row - c_start.row > p_end.row - p_start.row {
        end_row = c_start.row + (p_end.row - p_start.row);
    }
    if c_end.col - c_start.col > p_end.col - p_start.col {
        end_col = c_start.col + (p_end.col - p_start.col);
    }

    Ok(CellAddress::new(end_row, end_col)?.to_a1_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn resolved(copy_range: &str, paste_range: &str) -> ResolvedRanges {
        ResolvedRanges {
            copy_range: copy_range.to_string(),
            paste_range: paste_range.to_string(),
        }
    }

    #[test]
    fn test_all_endpoints_defaulted() {
        let ranges = reconcile(None, None, None, None, 10, 5).unwrap();
        assert_eq!(ranges, resolved("A1:E10", "A1"));
    }

    #[test]
    fn test_copy_clamped_to_paste_shape() {
        // 5 cols x 10 rows copied into 3 cols x 5 rows
        let ranges = reconcile(Some("A1"), Some("E10"), Some("A1"), Some("C5"), 10, 5).unwrap();
        assert_eq!(ranges, resolved("A1:C5", "A1:C5"));
    }

    #[test]
    fn test_copy_never_grows_to_paste_shape() {
        let ranges = reconcile(Some("A1"), Some("B2"), Some("A1"), Some("Z10"), 20, 20).unwrap();
        assert_eq!(ranges, resolved("A1:B2", "A1:Z10"));
    }

    #[test]
    fn test_clamp_is_per_axis() {
        // Rows fit, columns do not: only the column axis shrinks.
        let ranges = reconcile(Some("A1"), Some("E3"), Some("A1"), Some("B10"), 10, 10).unwrap();
        assert_eq!(ranges, resolved("A1:B3", "A1:B10"));
    }

    #[test]
    fn test_clamp_respects_offset_starts() {
        // B2:F11 (5x10) into D4:F8 (3x5)
        let ranges = reconcile(Some("B2"), Some("F11"), Some("D4"), Some("F8"), 20, 20).unwrap();
        assert_eq!(ranges, resolved("B2:D6", "D4:F8"));
    }

    #[test]
    fn test_clamp_applies_with_defaulted_paste_start() {
        // Bounding only paste_end still clamps against an A1-anchored
        // paste shape.
        let ranges = reconcile(Some("A1"), Some("E10"), None, Some("C5"), 10, 5).unwrap();
        assert_eq!(ranges, resolved("A1:C5", "A1:C5"));
    }

    #[test]
    fn test_no_paste_end_leaves_anchor_open() {
        let ranges = reconcile(Some("A1"), Some("E10"), Some("B2"), None, 10, 5).unwrap();
        assert_eq!(ranges, resolved("A1:E10", "B2"));
    }

    #[test]
    fn test_start_after_end_fails_with_source_context() {
        let err = reconcile(Some("B2"), Some("A1"), None, None, 10, 5).unwrap_err();
        match err {
            Error::InvalidRange { context, .. } => assert_eq!(context, RangeContext::Source),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_paste_order_checked_only_when_bounded() {
        // paste_start after the (absent) paste_end is fine: the anchor is
        // open-ended.
        assert!(reconcile(None, None, Some("Z99"), None, 10, 5).is_ok());

        let err = reconcile(None, None, Some("C5"), Some("A1"), 10, 5).unwrap_err();
        match err {
            Error::InvalidRange { context, .. } => {
                assert_eq!(context, RangeContext::Destination)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_sheet_fails_default_copy_end() {
        let err = reconcile(None, None, None, None, 0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)), "{:?}", err);
    }

    #[test]
    fn test_endpoints_are_canonicalized() {
        let ranges = reconcile(Some("a1"), Some("e10"), Some("b2"), None, 10, 5).unwrap();
        assert_eq!(ranges, resolved("A1:E10", "B2"));
    }

    #[test]
    fn test_single_cell_copy_range() {
        let ranges = reconcile(Some("C3"), Some("C3"), None, None, 10, 5).unwrap();
        assert_eq!(ranges, resolved("C3:C3", "A1"));
    }
}
