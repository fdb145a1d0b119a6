//! Ordering of column letter runs.

use std::cmp::Ordering;

/// Compare two column letter runs in spreadsheet column order.
///
/// A shorter run always denotes an earlier column than a longer one ("Z"
/// comes before "AA"); equal-length runs compare lexicographically. This
/// agrees with the numeric order produced by the address codec and lets
/// callers order two labels without converting them.
///
/// `Ordering::Less` means `a` denotes an earlier column than `b`.
pub fn compare_columns(a: &str, b: &str) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            let a = a.bytes().map(|c| c.to_ascii_uppercase());
            let b = b.bytes().map(|c| c.to_ascii_uppercase());
            a.cmp(b)
        }
        unequal => unequal,
    }
}
