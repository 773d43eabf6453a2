//! String rendering of formulas: DNF and CNF over raw enumeration rows,
//! and the minimal sum of products over a minimized cover.
//!
//! Literals are `v[i]` and `!v[i]`, conjoined with `&`; disjunction is
//! ` | `. Variables appear in registry (first-observation) order.

use itertools::Itertools;

use crate::cube::Cube;
use crate::explore::Exploration;

fn literal(index: usize, value: bool) -> String {
    if value {
        format!("v[{}]", index)
    } else {
        format!("!v[{}]", index)
    }
}

/// Renders a cover as a sum of products against the registry.
///
/// Each cube contributes one term with a literal per defined position.
/// An empty cover renders as `"false"`; a cover consisting of the
/// all-dash cube renders as `"true"`.
pub fn sum_of_products(terms: &[Cube], variables: &[usize]) -> String {
    if terms.is_empty() {
        return "false".to_string();
    }
    let rendered: Vec<String> = terms
        .iter()
        .map(|term| {
            term.cells()
                .zip(variables.iter())
                .filter_map(|(cell, &index)| cell.value().map(|value| literal(index, value)))
                .join("&")
        })
        .collect();
    if rendered.len() == 1 && rendered[0].is_empty() {
        return "true".to_string();
    }
    rendered.join(" | ")
}

/// DNF over the raw rows: one term per true row, over the inputs that
/// row observed.
pub(crate) fn dnf(exploration: &Exploration) -> String {
    let terms: Vec<String> = exploration
        .rows()
        .iter()
        .filter(|row| row.output)
        .map(|row| {
            exploration
                .variables()
                .iter()
                .filter_map(|&index| row.observed.get(&index).map(|&value| literal(index, value)))
                .join("&")
        })
        .collect();
    if terms.is_empty() {
        return "false".to_string();
    }
    if terms.len() == 1 && terms[0].is_empty() {
        return "true".to_string();
    }
    terms.join(" | ")
}

/// CNF over the raw rows: one clause per false row, literals inverted;
/// clauses of two or more literals are parenthesized.
pub(crate) fn cnf(exploration: &Exploration) -> String {
    let clauses: Vec<Vec<String>> = exploration
        .rows()
        .iter()
        .filter(|row| !row.output)
        .map(|row| {
            exploration
                .variables()
                .iter()
                .filter_map(|&index| row.observed.get(&index).map(|&value| literal(index, !value)))
                .collect()
        })
        .collect();
    if clauses.is_empty() {
        return "true".to_string();
    }
    if clauses.len() == 1 && clauses[0].is_empty() {
        return "false".to_string();
    }
    clauses
        .iter()
        .map(|literals| {
            if literals.len() == 1 {
                literals[0].clone()
            } else {
                format!("({})", literals.iter().join(" | "))
            }
        })
        .join(" & ")
}
