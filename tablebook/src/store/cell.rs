//! A1-notation cell references.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A zero-based cell position, written in A1 notation.
///
/// # Examples
///
/// ```
/// use tablebook::store::CellRef;
///
/// let cell: CellRef = "C12".parse().unwrap();
/// assert_eq!((cell.row(), cell.col()), (11, 2));
/// assert_eq!(cell.to_string(), "C12");
///
/// let wide: CellRef = "AA1".parse().unwrap();
/// assert_eq!(wide.col(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    row: usize,
    col: usize,
}

impl CellRef {
    /// The top-left cell, `A1`.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Creates a reference from zero-based row and column offsets.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Zero-based row offset.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column offset.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCellRef { input: s.to_string() };

        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = trimmed.split_at(split);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        // Bijective base-26: A=1 .. Z=26, AA=27
        let mut col: usize = 0;
        for c in letters.chars() {
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(invalid)?;
        }

        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Self {
            row: row - 1,
            col: col - 1,
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero-based walk so the last column and row never overflow
        let mut letters = Vec::new();
        let mut n = self.col;
        loop {
            letters.push(char::from(b'A' + (n % 26) as u8));
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        let column: String = letters.iter().rev().collect();
        write!(f, "{column}{}", self.row as u128 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin() {
        assert_eq!("A1".parse::<CellRef>().unwrap(), CellRef::ORIGIN);
        assert_eq!("a1".parse::<CellRef>().unwrap(), CellRef::ORIGIN);
    }

    #[test]
    fn test_parse_multi_letter_columns() {
        assert_eq!("Z3".parse::<CellRef>().unwrap(), CellRef::new(2, 25));
        assert_eq!("AB10".parse::<CellRef>().unwrap(), CellRef::new(9, 27));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "A", "1", "A0", "1A", "A1B", "Ä1", "A-1"] {
            assert!(
                matches!(bad.parse::<CellRef>(), Err(Error::InvalidCellRef { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(4, 25).to_string(), "Z5");
        assert_eq!(CellRef::new(0, 26).to_string(), "AA1");
        assert_eq!(CellRef::new(0, 701).to_string(), "ZZ1");
        assert_eq!(CellRef::new(0, 702).to_string(), "AAA1");
    }

    #[test]
    fn test_display_at_limits() {
        let far = CellRef::new(usize::MAX, usize::MAX).to_string();
        assert!(far.starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(far.ends_with(&(usize::MAX as u128 + 1).to_string()));
    }
}
