// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! - `complete`: the domain predicate extending a relation to totality
//! - Built-in terminals: [`FailPredicate`], [`SuspendPredicate`]

pub mod complete;

pub use complete::CompleteAlternatingPredicate;

use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::relation::RelationStore;

/// Built-in fail terminal (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack through every
/// remaining alternative of the predicates before it. Use it to drive
/// an exhaustive traversal of the search space.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _store: &mut RelationStore, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend terminal.
///
/// Reached with everything before it resolved, it stops the engine with
/// the store holding the answer; the overall-success sentinel of a
/// first-answer search.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _store: &mut RelationStore, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
