//! Prime implicant generation.
//!
//! Live implicants are grouped by `(dashes, ones)`. The standard combine
//! merges two cubes of the same dash count whose set-bit counts differ by
//! one; the absorbing combine lets a cube merge across a neighbor that
//! carries extra don't-cares. Sweeps repeat until no new cube appears; the
//! primes are exactly the cubes never combined away.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::cube::Cube;
use crate::table::Table;
use crate::types::Tri;

/// Computes the prime implicants of the ON and don't-care rows of a
/// canonical table: every cube inside ON ∪ DC that cannot be widened by
/// one more dash.
///
/// The input is expected in canonical form (see
/// [`Table::canonicalize`][crate::table::Table::canonicalize]); the full
/// input space must be covered for the combine rules to reach every prime.
/// The result is sorted in key order.
pub fn prime_implicants(table: &Table) -> Vec<Cube> {
    let mut groups: BTreeMap<(usize, usize), BTreeSet<Cube>> = BTreeMap::new();
    let mut live: BTreeSet<Cube> = BTreeSet::new();
    for (cube, output) in table.iter() {
        if output == Tri::Zero {
            continue;
        }
        groups
            .entry((cube.dashes(), cube.ones()))
            .or_default()
            .insert(cube.clone());
        live.insert(cube.clone());
    }

    let mut combined: BTreeSet<Cube> = BTreeSet::new();
    loop {
        let mut fresh: BTreeSet<Cube> = BTreeSet::new();
        let coords: Vec<(usize, usize)> = groups.keys().copied().collect();
        for &(dashes, ones) in &coords {
            let group = &groups[&(dashes, ones)];

            // Standard combine: same dash count, one more set bit.
            if let Some(partner) = groups.get(&(dashes, ones + 1)) {
                for t1 in group {
                    for t2 in partner {
                        if let Some(merged) = t1.combine(t2) {
                            debug!("combine {} + {} -> {}", t1, t2, merged);
                            combined.insert(t1.clone());
                            combined.insert(t2.clone());
                            if !live.contains(&merged) {
                                fresh.insert(merged);
                            }
                        }
                    }
                }
            }

            // Absorb across neighbors carrying strictly more dashes. Only
            // the absorbed cube is consumed: the merged result contains t1
            // but not t2, so t2 may still be prime.
            for &(d2, k2) in coords.iter().filter(|&&(d2, _)| d2 > dashes) {
                for t1 in group {
                    for t2 in &groups[&(d2, k2)] {
                        if let Some(merged) = t1.absorb(t2) {
                            debug!("absorb {} across {} -> {}", t1, t2, merged);
                            combined.insert(t1.clone());
                            if !live.contains(&merged) {
                                fresh.insert(merged);
                            }
                        }
                    }
                }
            }
        }

        if fresh.is_empty() {
            break;
        }
        for merged in fresh {
            groups
                .entry((merged.dashes(), merged.ones()))
                .or_default()
                .insert(merged.clone());
            live.insert(merged);
        }
    }

    live.difference(&combined).cloned().collect()
}
