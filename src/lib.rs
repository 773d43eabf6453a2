//! # qm-rs: truth-table enumeration and exact two-level minimization
//!
//! **`qm-rs`** derives a minimized boolean formula from an opaque predicate.
//! The predicate addresses its inputs by numeric index (`v[0]`, `v[1]`, ...);
//! the crate discovers the variable set by observation, records a truth
//! table over every reachable assignment path, and produces a DNF, a CNF,
//! or a **minimal** sum-of-products formula computed by the Quine-McCluskey
//! algorithm, don't-cares included.
//!
//! ## How it works
//!
//! Two subsystems carry the weight:
//!
//! - **Adaptive enumerator** ([`explore`]): drives the predicate without
//!   knowing how many inputs it reads or in what order, maintaining a
//!   worklist of deferred assignment plans so that every reachable path is
//!   evaluated exactly once.
//! - **Exact minimizer** ([`cover::minimize`][crate::cover::minimize]):
//!   canonicalizes the table, generates all prime implicants reachable from
//!   it (combining across don't-care cubes), extracts essentials, and
//!   searches the residual chart exhaustively for a smallest cover.
//!
//! The result is exact: every returned term is a prime implicant and no
//! smaller cover exists. The search is exponential in the residual chart
//! and will not scale to large cyclic charts; this crate is not a
//! heuristic (Espresso-style) minimizer.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qm_rs::explore::explore;
//!
//! // Discover and minimize a 3-input majority function.
//! let majority = explore(|v| {
//!     let a = v.read(0);
//!     let b = v.read(1);
//!     let c = v.read(2);
//!     (a & b) | (a & c) | (b & c)
//! });
//!
//! assert_eq!(majority.variables(), &[0, 1, 2]);
//! assert_eq!(majority.minimal(), "v[0]&v[1] | v[0]&v[2] | v[1]&v[2]");
//! ```
//!
//! Predicates must be pure: no side effects, no nondeterminism. Paths that
//! short-circuit produce partial rows whose unobserved inputs become
//! don't-cares in the minimizer's table.
//!
//! ## Core Components
//!
//! - **[`explore`]**: the adaptive enumerator and its [`Exploration`][crate::explore::Exploration] result.
//! - **[`table`]**: truth tables over three-valued cubes and their canonical form.
//! - **[`prime`]** and **[`cover`]**: prime implicant generation, chart, essentials, minimum cover.
//! - **[`formula`]**: DNF / CNF / minimal formula strings.

pub mod cover;
pub mod cube;
pub mod error;
pub mod explore;
pub mod formula;
pub mod prime;
pub mod table;
pub mod types;
