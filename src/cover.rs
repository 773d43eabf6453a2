//! Chart construction, essential extraction, and the exhaustive
//! minimum-cover search.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::cube::Cube;
use crate::error::TableError;
use crate::prime::prime_implicants;
use crate::table::Table;
use crate::types::Tri;

/// Minimizes a truth table into a smallest sum-of-products cover.
///
/// The table is canonicalized first; all argument errors surface here.
/// The result is a (possibly empty) list of prime implicants covering
/// every defined ON row, minimal in term count, sorted by
/// [`Cube::term_cmp`]. An empty table yields an empty cover.
///
/// ```
/// use qm_rs::cover::minimize;
/// use qm_rs::table::Table;
/// use qm_rs::types::Tri;
///
/// // f = v[0] | v[1]
/// let table: Table = [
///     ("00".parse().unwrap(), Tri::Zero),
///     ("01".parse().unwrap(), Tri::One),
///     ("10".parse().unwrap(), Tri::One),
///     ("11".parse().unwrap(), Tri::One),
/// ]
/// .into_iter()
/// .collect();
///
/// let cover = minimize(&table).unwrap();
/// assert_eq!(cover, vec!["1-".parse().unwrap(), "-1".parse().unwrap()]);
/// ```
pub fn minimize(table: &Table) -> Result<Vec<Cube>, TableError> {
    let canonical = table.canonicalize()?;
    Ok(minimize_canonical(&canonical))
}

/// Minimization over a table already in canonical form. Infallible.
pub(crate) fn minimize_canonical(table: &Table) -> Vec<Cube> {
    let primes = prime_implicants(table);

    // Chart: every ON row, with the primes that cover it.
    let mut chart: BTreeMap<Cube, BTreeSet<Cube>> = BTreeMap::new();
    for (row, output) in table.iter() {
        if output != Tri::One {
            continue;
        }
        let covering: BTreeSet<Cube> = primes
            .iter()
            .filter(|prime| row.implies(prime))
            .cloned()
            .collect();
        assert!(!covering.is_empty(), "No prime implicant covers row {}", row);
        chart.insert(row.clone(), covering);
    }

    // A row covered by exactly one prime makes that prime essential.
    let mut cover: BTreeSet<Cube> = chart
        .values()
        .filter(|primes| primes.len() == 1)
        .filter_map(|primes| primes.first().cloned())
        .collect();
    for essential in &cover {
        debug!("essential prime {}", essential);
    }

    // Strike rows the essentials already cover; search the rest.
    chart.retain(|row, _| !cover.iter().any(|essential| row.implies(essential)));
    if !chart.is_empty() {
        cover.extend(min_cover(&chart));
    }

    let mut terms: Vec<Cube> = cover.into_iter().collect();
    terms.sort_by(|a, b| a.term_cmp(b));
    terms
}

/// Exhaustive breadth-first search for a smallest subset of primes
/// covering every residual row. Subsets are kept sorted, so the first
/// cover found in the frontier's order is the lexicographically smallest
/// of its layer.
fn min_cover(chart: &BTreeMap<Cube, BTreeSet<Cube>>) -> Vec<Cube> {
    let pool: BTreeSet<Cube> = chart.values().flatten().cloned().collect();
    let mut frontier: BTreeSet<Vec<Cube>> = pool.iter().map(|prime| vec![prime.clone()]).collect();
    for size in 1.. {
        debug!("cover search: {} subsets of size {}", frontier.len(), size);
        if let Some(best) = frontier.iter().find(|subset| {
            chart
                .values()
                .all(|covering| subset.iter().any(|prime| covering.contains(prime)))
        }) {
            return best.clone();
        }
        let mut next: BTreeSet<Vec<Cube>> = BTreeSet::new();
        for subset in &frontier {
            for prime in &pool {
                if subset.contains(prime) {
                    continue;
                }
                let mut grown = subset.clone();
                grown.push(prime.clone());
                grown.sort();
                next.insert(grown);
            }
        }
        assert!(!next.is_empty(), "Residual chart cannot be covered");
        frontier = next;
    }
    unreachable!()
}
