//! A1-style cell labels and their numeric (row, column) form.
//!
//! Column letters are a bijective base-26 numeral: digit values run 1-26
//! ('A'-'Z') with no zero digit, so "Z" is column 26 and "AA" is column 27.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A cell position, 1-indexed on both axes (row 1 / column 1 is "A1").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row number (>= 1)
    pub row: u32,
    /// Column number (>= 1, A=1, B=2, ..., Z=26, AA=27)
    pub col: u32,
}

impl CellAddress {
    /// Create an address, rejecting out-of-domain rows and columns.
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row < 1 || col < 1 {
            return Err(Error::InvalidAddress(format!("({}, {})", row, col)));
        }
        Ok(Self { row, col })
    }

    /// Parse an A1-style label.
    ///
    /// The grammar is strict: one or more letters, then one or more digits
    /// with no leading zero, and nothing else. Letter case is ignored.
    ///
    /// # Examples
    /// ```
    /// use gridport_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    ///
    /// let addr = CellAddress::parse("aa11").unwrap();
    /// assert_eq!(addr.row, 11);
    /// assert_eq!(addr.col, 27);
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let (letters, digits) =
            split_label(label).ok_or_else(|| Error::InvalidAddress(label.to_string()))?;

        let col = letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(label.to_string()))?;

        Ok(Self { row, col })
    }

    /// Format as a canonical (upper-case) A1-style label.
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_to_letters(self.col), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split a label into its letter run and digit run, or None if it does not
/// match the cell name grammar (letters, then digits with no leading zero).
pub(crate) fn split_label(label: &str) -> Option<(&str, &str)> {
    let bytes = label.as_bytes();
    let letters_end = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    if letters_end == 0 {
        return None;
    }

    let digits = &bytes[letters_end..];
    if digits.is_empty() || digits[0] == b'0' {
        return None;
    }
    if !digits.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((&label[..letters_end], &label[letters_end..]))
}

/// Convert a column number to letters (1 = A, 26 = Z, 27 = AA, ...).
pub(crate) fn column_to_letters(col: u32) -> String {
    let mut letters = String::new();
    let mut div = col;

    while div > 0 {
        let mut rem = div % 26;
        div /= 26;
        // No zero digit: a remainder of 0 is the digit 26 ('Z'), borrowing
        // one unit from the quotient.
        if rem == 0 {
            rem = 26;
            div -= 1;
        }
        letters.insert(0, (b'A' + rem as u8 - 1) as char);
    }

    letters
}

/// Convert column letters to a column number (A = 1, Z = 26, AA = 27, ...).
///
/// Case-insensitive. The caller guarantees `letters` is non-empty and ASCII
/// alphabetic; runs too long to denote a `u32` column are rejected.
pub(crate) fn letters_to_column(letters: &str) -> Result<u32> {
    let mut col: u64 = 0;
    for c in letters.bytes() {
        col = col * 26 + u64::from(c.to_ascii_uppercase() - b'A' + 1);
        if col > u64::from(u32::MAX) {
            return Err(Error::InvalidAddress(letters.to_string()));
        }
    }
    Ok(col as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(2), "B");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(28), "AB");
        assert_eq!(column_to_letters(52), "AZ");
        assert_eq!(column_to_letters(702), "ZZ");
        assert_eq!(column_to_letters(703), "AAA");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("B").unwrap(), 2);
        assert_eq!(letters_to_column("Z").unwrap(), 26);
        assert_eq!(letters_to_column("AA").unwrap(), 27);
        assert_eq!(letters_to_column("AZ").unwrap(), 52);
        assert_eq!(letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(letters_to_column("AAA").unwrap(), 703);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 1);
        assert_eq!(letters_to_column("aa").unwrap(), 27);

        // Too long for a u32 column
        assert!(letters_to_column("ZZZZZZZZ").is_err());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(CellAddress::new(0, 1).is_err());
        assert!(CellAddress::new(1, 0).is_err());
        assert!(CellAddress::new(0, 0).is_err());
        assert!(CellAddress::new(1, 1).is_ok());
    }

    #[test]
    fn test_to_a1_boundaries() {
        let label = |row, col| CellAddress::new(row, col).unwrap().to_a1_string();
        assert_eq!(label(1, 1), "A1");
        assert_eq!(label(1, 26), "Z1");
        assert_eq!(label(1, 27), "AA1");
        assert_eq!(label(1, 52), "AZ1");
        assert_eq!(label(1, 702), "ZZ1");
        assert_eq!(label(1, 703), "AAA1");
        assert_eq!(label(100, 3), "C100");
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!((addr.row, addr.col), (1, 1));

        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!((addr.row, addr.col), (2, 2));

        let addr = CellAddress::parse("ZZ702").unwrap();
        assert_eq!((addr.row, addr.col), (702, 702));

        // Case insensitive
        let addr = CellAddress::parse("aa11").unwrap();
        assert_eq!((addr.row, addr.col), (11, 27));
    }

    #[test]
    fn test_parse_errors() {
        for label in ["", "A", "1", "1A", "A0", "A01", "A1B", "A 1", "$A$1", "A-1"] {
            let err = CellAddress::parse(label).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAddress(_)),
                "{:?} for {:?}",
                err,
                label
            );
        }
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(CellAddress { row: 1, col: 1 }.to_string(), "A1");
        assert_eq!(
            "c100".parse::<CellAddress>().unwrap(),
            CellAddress { row: 100, col: 3 }
        );
    }

    #[test]
    fn test_round_trip_small_grid() {
        for row in (1..=1000).step_by(7) {
            for col in 1..=1000 {
                let addr = CellAddress::new(row, col).unwrap();
                let back = CellAddress::parse(&addr.to_a1_string()).unwrap();
                assert_eq!(back, addr);
            }
        }
    }

    #[test]
    fn test_round_trip_canonicalizes_label() {
        for label in ["a1", "Az52", "zz702", "AaA703"] {
            let addr = CellAddress::parse(label).unwrap();
            assert_eq!(addr.to_a1_string(), label.to_ascii_uppercase());
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_round_trip(row in 1u32..=5000, col in 1u32..=5000) {
            let addr = CellAddress::new(row, col).unwrap();
            let back = CellAddress::parse(&addr.to_a1_string()).unwrap();
            proptest::prop_assert_eq!(back, addr);
        }
    }
}
