// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Propagation and completion search for partial alternating ternary
//! relations: partial cyclic orders and uniform rank-3 chirotopes.
//!
//! Part of the Venn triangle search; see
//! <https://github.com/jeremycarroll/venntriangles> for the original
//! implementation, where this machinery orders the lines of a triangle
//! arrangement.
//!
//! # Architecture
//!
//! Three layers, each depending only on the ones before it:
//!
//! 1. **Trail** - append-only reversible write log with
//!    checkpoint/rollback; the only path by which a cell is ever unset.
//! 2. **RelationStore** - `2 * C(n,3)` sign cells indexed by every
//!    ordered distinct triple of `n` lines, a two-variant axiom system
//!    fixed at construction, and a naive iterate-to-fixpoint closure
//!    over it.
//! 3. **SearchEngine** - a WAM-like stack-of-predicates backtracking
//!    driver, instantiated with the `CompleteAlternating` predicate that
//!    decides every remaining triple.
//!
//! # Example
//!
//! ```
//! use alternating_search::{Axiom, RelationStore};
//!
//! let mut store = RelationStore::new(5, Axiom::Chirotope);
//! store.try_set(0, 1, 2).unwrap();
//!
//! assert!(store.closure_to_fixpoint().is_ok());
//! assert!(store.complete());
//!
//! // The completion decided every triple one way or the other.
//! assert!(store.get(0, 1, 2));
//! assert_ne!(store.get(0, 1, 3), store.get(0, 3, 1));
//! ```

pub mod engine;
pub mod predicates;
pub mod relation;
pub mod trail;

// Re-export commonly used types
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use relation::{encoding, Axiom, CellId, Contradiction, Parity, RelationStore};
pub use trail::{Mark, Trail};
