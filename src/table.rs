//! Truth tables over cubes, and their canonical form.

use std::collections::BTreeMap;

use crate::cube::Cube;
use crate::error::TableError;
use crate::types::Tri;

/// A mapping from cube to output cell.
///
/// A key with dashes stands for every row of its sub-space; an output of
/// [`Tri::Dash`] means the function value on that cube is unconstrained.
/// Keys are held in a `BTreeMap`, so iteration order, and everything the
/// minimizer derives from it, is independent of insertion order.
///
/// ```
/// use qm_rs::table::Table;
/// use qm_rs::types::Tri;
///
/// let table: Table = [
///     ("0".parse().unwrap(), Tri::Zero),
///     ("1".parse().unwrap(), Tri::One),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: BTreeMap<Cube, Tri>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Table::default()
    }

    /// Inserts a row; a later insert for the same cube wins.
    pub fn insert(&mut self, inputs: Cube, output: Tri) {
        self.rows.insert(inputs, output);
    }

    /// The output recorded for exactly this cube, if any.
    pub fn get(&self, inputs: &Cube) -> Option<Tri> {
        self.rows.get(inputs).copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Cube, Tri)> + '_ {
        self.rows.iter().map(|(inputs, &output)| (inputs, output))
    }

    /// The key width, taken from the first row in key order.
    pub fn width(&self) -> Option<usize> {
        self.rows.keys().next().map(Cube::len)
    }

    /// Rewrites the table into canonical form:
    ///
    /// - all keys have uniform width;
    /// - no two intersecting cubes specify distinct defined outputs
    ///   ([`TableError::Inconsistent`]);
    /// - a key subsumed by a broader key with the same defined output is
    ///   removed;
    /// - every input of the `2^N` space is covered, uncovered minterms
    ///   being added with a don't-care output.
    ///
    /// Canonicalization is idempotent.
    pub fn canonicalize(&self) -> Result<Table, TableError> {
        let width = match self.width() {
            Some(width) => width,
            None => return Ok(Table::new()),
        };
        let mut rows = self.rows.clone();
        for cube in rows.keys() {
            if cube.len() != width {
                return Err(TableError::WidthMismatch {
                    expected: width,
                    found: cube.len(),
                });
            }
        }

        // Two defined outputs may not clash anywhere in the input space.
        let keys: Vec<Cube> = rows.keys().cloned().collect();
        for (i, first) in keys.iter().enumerate() {
            let first_output = rows[first];
            if first_output.is_dash() {
                continue;
            }
            for second in &keys[i + 1..] {
                let second_output = rows[second];
                if second_output.is_dash() || second_output == first_output {
                    continue;
                }
                if first.intersects(second) {
                    return Err(TableError::Inconsistent {
                        first: first.clone(),
                        first_output,
                        second: second.clone(),
                        second_output,
                    });
                }
            }
        }

        // Drop keys subsumed by a broader key with a defined output. The
        // consistency pass above guarantees the outputs agree.
        for cube in &keys {
            if rows[cube].is_dash() {
                continue;
            }
            let subsumed = rows
                .iter()
                .any(|(other, output)| other != cube && !output.is_dash() && cube.implies(other));
            if subsumed {
                rows.remove(cube);
            }
        }

        // Complete the input space with don't-care minterms.
        assert!(
            width < usize::BITS as usize,
            "Table width {} is too large to complete",
            width
        );
        for index in 0..(1usize << width) {
            let minterm: Cube = (0..width)
                .map(|position| Tri::from((index >> (width - 1 - position)) & 1 == 1))
                .collect();
            if !rows.keys().any(|key| minterm.intersects(key)) {
                rows.insert(minterm, Tri::Dash);
            }
        }

        Ok(Table { rows })
    }
}

impl FromIterator<(Cube, Tri)> for Table {
    fn from_iter<I: IntoIterator<Item = (Cube, Tri)>>(iter: I) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(s: &str) -> Cube {
        s.parse().unwrap()
    }

    fn table(rows: &[(&str, Tri)]) -> Table {
        rows.iter().map(|&(s, o)| (cube(s), o)).collect()
    }

    #[test]
    fn test_width_mismatch() {
        let t = table(&[("0", Tri::Zero), ("", Tri::One)]);
        assert!(matches!(
            t.canonicalize(),
            Err(TableError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn test_dash_key_alone() {
        let t = table(&[("-", Tri::Zero)]);
        assert_eq!(t.canonicalize().unwrap(), table(&[("-", Tri::Zero)]));
    }

    #[test]
    fn test_inconsistent_overlap() {
        let t = table(&[("0", Tri::Zero), ("-", Tri::One)]);
        assert!(matches!(
            t.canonicalize(),
            Err(TableError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_subsumption() {
        let t = table(&[("0", Tri::Zero), ("-", Tri::Zero)]);
        assert_eq!(t.canonicalize().unwrap(), table(&[("-", Tri::Zero)]));
    }

    #[test]
    fn test_dont_care_fill() {
        let t = table(&[("0", Tri::Zero)]);
        assert_eq!(
            t.canonicalize().unwrap(),
            table(&[("0", Tri::Zero), ("1", Tri::Dash)])
        );
    }

    #[test]
    fn test_fill_spares_covered_cubes() {
        // The dash key already covers both minterms of its column.
        let t = table(&[("0-", Tri::One), ("10", Tri::Zero)]);
        assert_eq!(
            t.canonicalize().unwrap(),
            table(&[("0-", Tri::One), ("10", Tri::Zero), ("11", Tri::Dash)])
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(Table::new().canonicalize().unwrap(), Table::new());
    }

    #[test]
    fn test_idempotent() {
        let t = table(&[("01-", Tri::One), ("1--", Tri::Zero), ("0--", Tri::One)]);
        let once = t.canonicalize().unwrap();
        let twice = once.canonicalize().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_agreeing_overlap_is_consistent() {
        let t = table(&[("1-", Tri::One), ("-1", Tri::One)]);
        let canonical = t.canonicalize().unwrap();
        assert_eq!(canonical.get(&cube("00")), Some(Tri::Dash));
        assert_eq!(canonical.len(), 3);
    }
}
