//! Adaptive truth-table enumeration of an opaque predicate.
//!
//! The predicate receives a reader handle and asks for its inputs by
//! index; nothing about its variable set or branching structure is known
//! up front. The enumerator discovers variables as they are observed,
//! keeps a worklist of deferred assignment plans, and drives the
//! predicate until every reachable assignment path has been evaluated
//! exactly once.
//!
//! # Example
//!
//! ```
//! use qm_rs::explore::explore;
//!
//! let xor = explore(|v| v.read(0) ^ v.read(1));
//! assert_eq!(xor.rows().len(), 4);
//! assert_eq!(xor.variables(), &[0, 1]);
//! assert_eq!(xor.minimal(), "!v[0]&v[1] | v[0]&!v[1]");
//! ```
//!
//! # Contract
//!
//! The predicate must be a pure function of the inputs it reads: no side
//! effects, no nondeterminism. It is invoked up to `2^N` times for `N`
//! observed variables, sequentially, and may short-circuit: paths that
//! never read a variable produce partial rows, which downstream
//! minimization treats as don't-care positions.

use std::collections::{BTreeMap, VecDeque};

use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;

use crate::cover;
use crate::cube::Cube;
use crate::formula;
use crate::table::Table;
use crate::types::Tri;

/// The reader handle passed to the predicate.
///
/// Within one invocation, reads are deterministic: asking for the same
/// index twice returns the same value.
pub struct Inputs {
    plan: BTreeMap<usize, bool>,
    order: Vec<usize>,
    pending: VecDeque<BTreeMap<usize, bool>>,
    seen: HashSet<String>,
}

impl Inputs {
    fn new() -> Self {
        Inputs {
            plan: BTreeMap::new(),
            order: Vec::new(),
            pending: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Reads the input with the given index.
    ///
    /// An index already bound on the current path returns its bound
    /// value. A first observation binds the index to `false`, records it
    /// in the observation order, and schedules the `true`-extended plan
    /// at the front of the worklist unless an identical frontier was
    /// already scheduled.
    pub fn read(&mut self, index: usize) -> bool {
        if let Some(&value) = self.plan.get(&index) {
            return value;
        }
        self.plan.insert(index, false);
        self.order.push(index);

        let mut flipped = self.plan.clone();
        flipped.insert(index, true);
        let flipped_print = fingerprint(&flipped);
        if !self.seen.contains(&flipped_print) {
            debug!("read(v[{}]): deferring {{{}}}", index, flipped_print);
            self.seen.insert(fingerprint(&self.plan));
            self.seen.insert(flipped_print);
            self.pending.push_front(flipped);
        }
        false
    }
}

/// Canonical serialization of a plan, stable under observation order.
fn fingerprint(plan: &BTreeMap<usize, bool>) -> String {
    plan.iter()
        .map(|(index, value)| format!("{}={}", index, value))
        .join(",")
}

/// One predicate invocation: the inputs observed on that path, the
/// output, and the order in which unseen inputs were first observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Observed inputs and their values; unread inputs are absent.
    pub observed: BTreeMap<usize, bool>,
    /// The predicate's result on this path.
    pub output: bool,
    /// Indices in first-observation order on this path.
    pub order: Vec<usize>,
}

/// The result of enumerating a predicate: one row per reachable
/// assignment path, and the variable registry in first-observation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    rows: Vec<Row>,
    variables: Vec<usize>,
}

/// Runs the predicate over every reachable assignment path.
///
/// Exploration is depth-first: the `true` branch of the most recent
/// observation is tried next. A predicate that reads nothing produces
/// exactly one row with an empty plan.
pub fn explore<F>(mut predicate: F) -> Exploration
where
    F: FnMut(&mut Inputs) -> bool,
{
    let mut rows = Vec::new();
    let mut variables: Vec<usize> = Vec::new();
    let mut inputs = Inputs::new();
    loop {
        let output = predicate(&mut inputs);
        for &index in &inputs.order {
            if !variables.contains(&index) {
                variables.push(index);
            }
        }
        let row = Row {
            observed: std::mem::take(&mut inputs.plan),
            output,
            order: std::mem::take(&mut inputs.order),
        };
        debug!("row {{{}}} -> {}", fingerprint(&row.observed), row.output);
        rows.push(row);
        match inputs.pending.pop_front() {
            Some(next) => inputs.plan = next,
            None => break,
        }
    }
    Exploration { rows, variables }
}

impl Exploration {
    /// The recorded rows, in evaluation order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Observed input indices, in first-observation order across all
    /// rows. Cube positions and formula literals follow this order.
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    /// Builds the truth table of the enumeration: one cube per row, with
    /// unobserved positions as don't-cares.
    pub fn to_table(&self) -> Table {
        self.rows
            .iter()
            .map(|row| {
                let inputs: Cube = self
                    .variables
                    .iter()
                    .map(|index| row.observed.get(index).map_or(Tri::Dash, |&v| Tri::from(v)))
                    .collect();
                (inputs, Tri::from(row.output))
            })
            .collect()
    }

    /// The disjunctive normal form of the raw rows.
    pub fn dnf(&self) -> String {
        formula::dnf(self)
    }

    /// The conjunctive normal form of the raw rows.
    pub fn cnf(&self) -> String {
        formula::cnf(self)
    }

    /// The minimal sum-of-products formula of the enumerated function.
    ///
    /// # Panics
    ///
    /// Panics if the predicate violated the purity contract badly enough
    /// to record conflicting rows.
    pub fn minimal(&self) -> String {
        let cover = cover::minimize(&self.to_table())
            .expect("rows of a pure predicate form a consistent table");
        formula::sum_of_products(&cover, &self.variables)
    }
}
