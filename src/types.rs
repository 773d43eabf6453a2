//! The three-valued cell used throughout the crate.
//!
//! Every position of a table key, and every table output, is one of three
//! symbols: `0`, `1`, or `-` (don't care). External input additionally
//! accepts the numeric synonyms `-1`/`0`/`1`; anything else is rejected
//! with an argument error.

use std::fmt;

use crate::error::TableError;

/// A three-valued cell: `0`, `1`, or `-` (don't care).
///
/// In a cube position, `One` means "variable true", `Zero` means "variable
/// false", and `Dash` means "variable absent from this term". As a table
/// output, `Dash` means the function value is unconstrained on that cube.
///
/// # Invariants
///
/// - The derived order is `Dash < Zero < One` (the `-1 < 0 < 1` value
///   order). Map keys, set iteration, and the cover-search tiebreak all
///   rely on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Tri {
    /// Don't care (`-`).
    Dash,
    /// Constant false (`0`).
    Zero,
    /// Constant true (`1`).
    One,
}

impl Tri {
    /// Returns `true` for `Dash`.
    pub fn is_dash(self) -> bool {
        self == Tri::Dash
    }

    /// The boolean value of a defined cell, or `None` for `Dash`.
    pub fn value(self) -> Option<bool> {
        match self {
            Tri::Dash => None,
            Tri::Zero => Some(false),
            Tri::One => Some(true),
        }
    }
}

impl From<bool> for Tri {
    fn from(value: bool) -> Self {
        if value {
            Tri::One
        } else {
            Tri::Zero
        }
    }
}

impl TryFrom<i8> for Tri {
    type Error = TableError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Tri::Dash),
            0 => Ok(Tri::Zero),
            1 => Ok(Tri::One),
            _ => Err(TableError::UnexpectedValue { value }),
        }
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Tri::Dash => '-',
            Tri::Zero => '0',
            Tri::One => '1',
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        assert!(Tri::Dash < Tri::Zero);
        assert!(Tri::Zero < Tri::One);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Tri::from(true), Tri::One);
        assert_eq!(Tri::from(false), Tri::Zero);
    }

    #[test]
    fn test_try_from_synonyms() {
        assert_eq!(Tri::try_from(-1), Ok(Tri::Dash));
        assert_eq!(Tri::try_from(0), Ok(Tri::Zero));
        assert_eq!(Tri::try_from(1), Ok(Tri::One));
        assert_eq!(
            Tri::try_from(2),
            Err(TableError::UnexpectedValue { value: 2 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Tri::Dash.to_string(), "-");
        assert_eq!(Tri::Zero.to_string(), "0");
        assert_eq!(Tri::One.to_string(), "1");
    }
}
