//! Cubes: fixed-width tuples of three-valued cells.
//!
//! A cube denotes a conjunction over `N` variables (`1` for a positive
//! literal, `0` for a negated literal, `-` for an absent variable) and
//! therefore a sub-space of the `2^N` input space. The minimizer works
//! entirely in terms of cube implication, intersection, and the two
//! Quine-McCluskey combine rules implemented here.
//!
//! Cubes have a compact text form (`"10-"`) for tests and tooling:
//!
//! ```
//! use qm_rs::cube::Cube;
//!
//! let cube: Cube = "10-".parse().unwrap();
//! assert_eq!(cube.to_string(), "10-");
//! assert_eq!(cube.dashes(), 1);
//! assert_eq!(cube.ones(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;
use crate::types::Tri;

/// A conjunction term over `N` indexed variables.
///
/// Two cubes are equal iff all positions match. The derived order compares
/// positionwise with `Dash < Zero < One`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Cube(Vec<Tri>);

impl Cube {
    /// Builds a cube from its cells.
    pub fn new(cells: Vec<Tri>) -> Self {
        Cube(cells)
    }

    /// Builds a cube from the numeric synonyms `-1` (don't care), `0`, `1`.
    pub fn from_values(values: &[i8]) -> Result<Self, TableError> {
        values.iter().map(|&v| Tri::try_from(v)).collect()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the zero-width cube.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cell at `index`.
    pub fn get(&self, index: usize) -> Tri {
        self.0[index]
    }

    /// Iterates over the cells.
    pub fn cells(&self) -> impl Iterator<Item = Tri> + '_ {
        self.0.iter().copied()
    }

    /// Number of `-` positions.
    pub fn dashes(&self) -> usize {
        self.0.iter().filter(|c| c.is_dash()).count()
    }

    /// Number of `1` positions.
    pub fn ones(&self) -> usize {
        self.0.iter().filter(|&&c| c == Tri::One).count()
    }

    /// A copy of this cube with the cell at `index` replaced.
    pub fn with(&self, index: usize, cell: Tri) -> Cube {
        let mut cells = self.0.clone();
        cells[index] = cell;
        Cube(cells)
    }

    /// Whether this cube implies `other`: every position of `other` is
    /// either `-` or equal to the corresponding position here. Implication
    /// is sub-space containment: `self` is the more specific cube.
    pub fn implies(&self, other: &Cube) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| b.is_dash() || a == b)
    }

    /// Whether the two cubes share at least one assignment: no position
    /// pins the same variable to opposite values.
    pub fn intersects(&self, other: &Cube) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.is_dash() || b.is_dash() || a == b)
    }

    /// The standard Quine-McCluskey combine: both cubes have dashes in the
    /// same positions and disagree in exactly one defined position, which
    /// becomes `-` in the result.
    pub fn combine(&self, other: &Cube) -> Option<Cube> {
        if self.0.len() != other.0.len() {
            return None;
        }
        let mut pivot = None;
        for (i, (&a, &b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            match (a, b) {
                (Tri::Zero, Tri::One) | (Tri::One, Tri::Zero) if pivot.is_none() => {
                    pivot = Some(i);
                }
                _ => return None,
            }
        }
        pivot.map(|i| self.with(i, Tri::Dash))
    }

    /// The asymmetric combine against a don't-care-bearing neighbor:
    /// every position is equal, or the single `0`/`1` pivot, or a `-` in
    /// `other` where this cube is defined. The result is this cube with
    /// the pivot dashed; `other` is left untouched by the merge.
    pub fn absorb(&self, other: &Cube) -> Option<Cube> {
        if self.0.len() != other.0.len() {
            return None;
        }
        let mut pivot = None;
        for (i, (&a, &b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            match (a, b) {
                (Tri::Zero, Tri::One) | (Tri::One, Tri::Zero) if pivot.is_none() => {
                    pivot = Some(i);
                }
                (_, Tri::Dash) if !a.is_dash() => {}
                _ => return None,
            }
        }
        pivot.map(|i| self.with(i, Tri::Dash))
    }

    /// Ordering for rendered covers: fewer dashes first, then positionwise
    /// with `0` before `1` before `-`. Minimized covers are returned and
    /// printed in this order.
    pub fn term_cmp(&self, other: &Cube) -> Ordering {
        fn rank(cell: Tri) -> u8 {
            match cell {
                Tri::Zero => 0,
                Tri::One => 1,
                Tri::Dash => 2,
            }
        }
        self.dashes().cmp(&other.dashes()).then_with(|| {
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&a, &b)| rank(a).cmp(&rank(b)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl FromIterator<Tri> for Cube {
    fn from_iter<I: IntoIterator<Item = Tri>>(iter: I) -> Self {
        Cube(iter.into_iter().collect())
    }
}

impl FromStr for Cube {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '-' => Ok(Tri::Dash),
                '0' => Ok(Tri::Zero),
                '1' => Ok(Tri::One),
                _ => Err(TableError::UnexpectedSymbol { symbol: c }),
            })
            .collect()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
