//! Argument errors raised by table validation.
//!
//! Only the canonicalizer (and the value/text constructors feeding it)
//! can fail; everything past canonicalization is infallible. The variants
//! are distinguished by message and form a single "argument error" family.

use std::fmt;

use crate::cube::Cube;
use crate::types::Tri;

/// An invalid truth-table argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table key's width disagrees with the first-seen width.
    WidthMismatch {
        /// Width of the first key seen.
        expected: usize,
        /// Width of the offending key.
        found: usize,
    },
    /// A numeric cell outside the accepted synonyms `-1`, `0`, `1`.
    UnexpectedValue {
        /// The offending value.
        value: i8,
    },
    /// A textual cell outside the accepted symbols `-`, `0`, `1`.
    UnexpectedSymbol {
        /// The offending character.
        symbol: char,
    },
    /// Two overlapping cubes specify distinct defined outputs.
    Inconsistent {
        /// The smaller cube (in key order) of the clashing pair.
        first: Cube,
        /// Its output.
        first_output: Tri,
        /// The larger cube of the clashing pair.
        second: Cube,
        /// Its output.
        second_output: Tri,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::WidthMismatch { expected, found } => write!(
                f,
                "table row has {} inputs, expected {}",
                found, expected
            ),
            TableError::UnexpectedValue { value } => write!(
                f,
                "unexpected value {}; expected -1 (don't care), 0, or 1",
                value
            ),
            TableError::UnexpectedSymbol { symbol } => write!(
                f,
                "unexpected symbol {:?}; expected '-', '0', or '1'",
                symbol
            ),
            TableError::Inconsistent {
                first,
                first_output,
                second,
                second_output,
            } => write!(
                f,
                "inconsistent table: cubes {} and {} overlap but specify different outputs ({} vs {})",
                first, second, first_output, second_output
            ),
        }
    }
}

impl std::error::Error for TableError {}
