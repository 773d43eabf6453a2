//! End-to-end tests for the enumeration → minimization → formula pipeline.
//!
//! Covers the literal formula scenarios, the canonicalizer's argument
//! errors and rewrites, and the minimizer's algebraic invariants.

use qm_rs::cover::minimize;
use qm_rs::cube::Cube;
use qm_rs::error::TableError;
use qm_rs::explore::explore;
use qm_rs::formula::sum_of_products;
use qm_rs::prime::prime_implicants;
use qm_rs::table::Table;
use qm_rs::types::Tri;

fn cube(s: &str) -> Cube {
    s.parse().unwrap()
}

fn cubes(strs: &[&str]) -> Vec<Cube> {
    strs.iter().map(|s| cube(s)).collect()
}

fn minterm(width: usize, index: usize) -> Cube {
    (0..width)
        .map(|position| Tri::from((index >> (width - 1 - position)) & 1 == 1))
        .collect()
}

fn minterms(width: usize, on: &[usize]) -> Table {
    (0..(1usize << width))
        .map(|index| (minterm(width, index), Tri::from(on.contains(&index))))
        .collect()
}

fn cover_value(cover: &[Cube], point: &Cube) -> bool {
    cover.iter().any(|term| point.implies(term))
}

const FIBONACCI: [usize; 6] = [1, 2, 3, 5, 8, 13];

// ─── End-to-End Scenarios ──────────────────────────────────────────────────────

#[test]
fn identity() {
    let result = explore(|v| v.read(0));
    assert_eq!(result.minimal(), "v[0]");
    assert_eq!(result.dnf(), "v[0]");
    assert_eq!(result.cnf(), "v[0]");
}

#[test]
fn tautology() {
    let result = explore(|v| v.read(0) | !v.read(0));
    assert_eq!(result.minimal(), "true");
    assert_eq!(result.dnf(), "!v[0] | v[0]");
    assert_eq!(result.cnf(), "true");
}

#[test]
fn contradiction() {
    let result = explore(|v| v.read(0) & !v.read(0));
    assert_eq!(result.minimal(), "false");
    assert_eq!(result.dnf(), "false");
    assert_eq!(result.cnf(), "v[0] & !v[0]");
}

#[test]
fn xor() {
    let result = explore(|v| v.read(0) ^ v.read(1));
    assert_eq!(result.minimal(), "!v[0]&v[1] | v[0]&!v[1]");
    assert_eq!(minimize(&result.to_table()).unwrap(), cubes(&["01", "10"]));
}

#[test]
fn majority_of_three() {
    let result = explore(|v| {
        let a = v.read(0);
        let b = v.read(1);
        let c = v.read(2);
        (a & b) | (a & c) | (b & c)
    });
    assert_eq!(result.minimal(), "v[0]&v[1] | v[0]&v[2] | v[1]&v[2]");
    assert_eq!(
        minimize(&result.to_table()).unwrap(),
        cubes(&["11-", "1-1", "-11"])
    );
}

#[test]
fn fibonacci_membership() {
    let table = minterms(4, &FIBONACCI);
    assert_eq!(
        minimize(&table).unwrap(),
        cubes(&["1000", "001-", "0-01", "-101"])
    );
}

#[test]
fn fibonacci_membership_via_predicate() {
    let result = explore(|v| {
        let mut n = 0usize;
        for bit in 0..4 {
            n = (n << 1) | v.read(bit) as usize;
        }
        FIBONACCI.contains(&n)
    });
    assert_eq!(
        result.minimal(),
        "v[0]&!v[1]&!v[2]&!v[3] | !v[0]&!v[1]&v[2] | !v[0]&!v[2]&v[3] | v[1]&!v[2]&v[3]"
    );
}

// ─── Canonicalizer ─────────────────────────────────────────────────────────────

#[test]
fn canonicalize_rejects_width_mismatch() {
    let table: Table = [(cube("0"), Tri::Zero), (cube(""), Tri::One)]
        .into_iter()
        .collect();
    assert!(matches!(
        table.canonicalize(),
        Err(TableError::WidthMismatch { .. })
    ));
}

#[test]
fn canonicalize_accepts_lone_dash_key() {
    let table: Table = [(cube("-"), Tri::Zero)].into_iter().collect();
    let canonical = table.canonicalize().unwrap();
    assert_eq!(canonical.get(&cube("-")), Some(Tri::Zero));
    assert_eq!(canonical.len(), 1);
}

#[test]
fn canonicalize_rejects_conflicting_overlap() {
    let table: Table = [(cube("0"), Tri::Zero), (cube("-"), Tri::One)]
        .into_iter()
        .collect();
    assert!(matches!(
        table.canonicalize(),
        Err(TableError::Inconsistent { .. })
    ));
}

#[test]
fn canonicalize_removes_subsumed_keys() {
    let table: Table = [(cube("0"), Tri::Zero), (cube("-"), Tri::Zero)]
        .into_iter()
        .collect();
    let expected: Table = [(cube("-"), Tri::Zero)].into_iter().collect();
    assert_eq!(table.canonicalize().unwrap(), expected);
}

#[test]
fn canonicalize_fills_uncovered_rows() {
    let table: Table = [(cube("0"), Tri::Zero)].into_iter().collect();
    let expected: Table = [(cube("0"), Tri::Zero), (cube("1"), Tri::Dash)]
        .into_iter()
        .collect();
    assert_eq!(table.canonicalize().unwrap(), expected);
}

#[test]
fn canonicalize_is_idempotent() {
    let table: Table = [
        (cube("01--"), Tri::One),
        (cube("1---"), Tri::Zero),
        (cube("0000"), Tri::One),
    ]
    .into_iter()
    .collect();
    let once = table.canonicalize().unwrap();
    assert_eq!(once.canonicalize().unwrap(), once);
}

#[test]
fn invalid_values_are_argument_errors() {
    assert_eq!(
        Cube::from_values(&[0, 2]),
        Err(TableError::UnexpectedValue { value: 2 })
    );
    assert_eq!(
        "01x".parse::<Cube>(),
        Err(TableError::UnexpectedSymbol { symbol: 'x' })
    );
}

// ─── Minimizer Invariants ──────────────────────────────────────────────────────

#[test]
fn cover_is_equivalent_on_defined_rows() {
    for on in [
        vec![],
        vec![0, 3],
        vec![1, 2, 4, 7],
        FIBONACCI.to_vec(),
        (0..16).collect::<Vec<_>>(),
    ] {
        let width = 4;
        let cover = minimize(&minterms(width, &on)).unwrap();
        for index in 0..(1usize << width) {
            assert_eq!(
                cover_value(&cover, &minterm(width, index)),
                on.contains(&index),
                "mismatch at minterm {} for ON-set {:?}",
                index,
                on
            );
        }
    }
}

#[test]
fn every_returned_term_is_prime() {
    let on = FIBONACCI;
    let width = 4;
    let cover = minimize(&minterms(width, &on)).unwrap();
    for term in &cover {
        for position in 0..width {
            if term.get(position).is_dash() {
                continue;
            }
            // Widening any defined position must leak into the OFF-set.
            let widened = term.with(position, Tri::Dash);
            let leaks = (0..(1usize << width))
                .any(|i| !on.contains(&i) && minterm(width, i).implies(&widened));
            assert!(leaks, "term {} could be shortened at {}", term, position);
        }
    }
}

#[test]
fn cover_sizes_are_minimal() {
    assert_eq!(minimize(&minterms(2, &[1, 2])).unwrap().len(), 2);
    assert_eq!(minimize(&minterms(3, &[3, 5, 6, 7])).unwrap().len(), 3);
    assert_eq!(minimize(&minterms(4, &FIBONACCI)).unwrap().len(), 4);
    // The cyclic chart needs three of its six primes.
    assert_eq!(minimize(&minterms(3, &[0, 1, 2, 5, 6, 7])).unwrap().len(), 3);
}

#[test]
fn minimize_is_stable_under_row_permutation() {
    let forward = minterms(4, &FIBONACCI);
    let backward: Table = (0..16)
        .rev()
        .map(|index| (minterm(4, index), Tri::from(FIBONACCI.contains(&index))))
        .collect();
    assert_eq!(minimize(&forward).unwrap(), minimize(&backward).unwrap());
}

#[test]
fn dont_care_rows_may_join_the_cover() {
    // ON = {3}, DC = {1}: the don't-care lets the term drop a literal.
    let table: Table = [
        (cube("00"), Tri::Zero),
        (cube("01"), Tri::Dash),
        (cube("10"), Tri::Zero),
        (cube("11"), Tri::One),
    ]
    .into_iter()
    .collect();
    let cover = minimize(&table).unwrap();
    assert_eq!(cover, cubes(&["-1"]));
    assert_eq!(sum_of_products(&cover, &[0, 1]), "v[1]");
}

#[test]
fn primes_include_dont_care_reachable_cubes() {
    // All primes of the majority function are found, dashes and all.
    let primes = prime_implicants(&minterms(3, &[3, 5, 6, 7]).canonicalize().unwrap());
    assert_eq!(primes, cubes(&["-11", "1-1", "11-"]));
}

// ─── Enumerator Invariants ─────────────────────────────────────────────────────

#[test]
fn each_reachable_assignment_is_evaluated_once() {
    let mut calls = 0usize;
    let result = explore(|v| {
        calls += 1;
        (v.read(0) & v.read(1)) | (v.read(2) & v.read(3))
    });
    assert_eq!(calls, result.rows().len());
    let mut plans: Vec<_> = result.rows().iter().map(|r| r.observed.clone()).collect();
    plans.sort();
    plans.dedup();
    assert_eq!(plans.len(), result.rows().len());
}

#[test]
fn short_circuiting_predicates_stay_polynomial_in_paths() {
    // v[0] && ... && v[7] has 9 paths, not 256.
    let mut calls = 0usize;
    let result = explore(|v| {
        calls += 1;
        (0..8).all(|i| v.read(i))
    });
    assert_eq!(calls, 9);
    assert!(result.rows().iter().filter(|r| r.output).count() == 1);
    assert_eq!(result.minimal(), {
        let lits: Vec<String> = (0..8).map(|i| format!("v[{}]", i)).collect();
        lits.join("&")
    });
}

#[test]
fn registry_orders_literals_across_partial_rows() {
    // v[2] is observed before v[0] on every path.
    let result = explore(|v| v.read(2) || v.read(0));
    assert_eq!(result.variables(), &[2, 0]);
    assert_eq!(result.minimal(), "v[2] | v[0]");
    assert_eq!(result.dnf(), "!v[2]&v[0] | v[2]");
}
