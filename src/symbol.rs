//! Don't-care marker used in column strings.

use std::fmt::{Display, Formatter};

use crate::error::TermError;

/// A single-character marker for unconstrained rows in a column string.
///
/// The marker is never `'0'` or `'1'`; a [`DontCare`] obtained through
/// [`DontCare::new`] or [`TryFrom<&str>`] always satisfies this.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DontCare(char);

impl DontCare {
    /// The default marker, `-`.
    pub const DEFAULT: DontCare = DontCare('-');

    /// Creates a marker from a character.
    pub fn new(symbol: char) -> Result<Self, TermError> {
        if symbol == '0' || symbol == '1' {
            return Err(TermError::InvalidDontCareSymbol {
                symbol: symbol.to_string(),
            });
        }
        Ok(DontCare(symbol))
    }

    /// Returns the marker character.
    pub const fn get(self) -> char {
        self.0
    }

    /// Returns `true` if `c` is this marker.
    pub fn matches(self, c: char) -> bool {
        self.0 == c
    }
}

impl Default for DontCare {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<&str> for DontCare {
    type Error = TermError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DontCare::new(c),
            _ => Err(TermError::InvalidDontCareSymbol {
                symbol: value.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for DontCare {
    type Error = TermError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        DontCare::new(value)
    }
}

impl From<DontCare> for char {
    fn from(dc: DontCare) -> Self {
        dc.0
    }
}

impl Display for DontCare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(DontCare::default().get(), '-');
        assert_eq!(DontCare::default(), DontCare::DEFAULT);
    }

    #[test]
    fn test_custom_symbol() {
        let dc = DontCare::new('x').unwrap();
        assert_eq!(dc.get(), 'x');
        assert!(dc.matches('x'));
        assert!(!dc.matches('-'));
        assert_eq!(dc.to_string(), "x");
    }

    #[test]
    fn test_reject_binary_digits() {
        assert!(matches!(
            DontCare::new('0'),
            Err(TermError::InvalidDontCareSymbol { .. })
        ));
        assert!(matches!(
            DontCare::new('1'),
            Err(TermError::InvalidDontCareSymbol { .. })
        ));
    }

    #[test]
    fn test_from_str_requires_single_char() {
        assert_eq!(DontCare::try_from("*").unwrap().get(), '*');
        assert_eq!(
            DontCare::try_from(""),
            Err(TermError::InvalidDontCareSymbol {
                symbol: String::new()
            })
        );
        assert_eq!(
            DontCare::try_from("--"),
            Err(TermError::InvalidDontCareSymbol {
                symbol: "--".to_string()
            })
        );
        assert!(DontCare::try_from("1").is_err());
    }

    #[test]
    fn test_multibyte_symbol() {
        let dc = DontCare::try_from("×").unwrap();
        assert_eq!(char::from(dc), '×');
    }
}
