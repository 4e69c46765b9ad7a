// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CompleteAlternating - extend a partial relation to a total one.
//!
//! Each round hunts for the first undetermined unordered triple in
//! storage order and offers its two orientations as a binary choice
//! point: branch 0 asserts the even-parity cell, branch 1 the odd one.
//! Committing a branch re-closes the relation under the store's axioms;
//! a contradiction fails the branch and the engine backtracks. When no
//! gap remains the relation is total and the predicate resolves.

use crate::engine::{Predicate, PredicateResult, SearchEngine};
use crate::predicates::SuspendPredicate;
use crate::relation::cell::{CellId, Parity};
use crate::relation::RelationStore;

/// The completion search's one domain predicate.
#[derive(Debug)]
pub struct CompleteAlternatingPredicate {
    /// Gap triple chosen at each round, indexed by round number.
    gaps: Vec<usize>,
}

impl CompleteAlternatingPredicate {
    pub fn new() -> Self {
        Self { gaps: Vec::new() }
    }
}

impl Default for CompleteAlternatingPredicate {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicate for CompleteAlternatingPredicate {
    fn try_pred(&mut self, store: &mut RelationStore, round: usize) -> PredicateResult {
        for triple in 0..store.num_triples() {
            if store.is_undetermined(triple) {
                if self.gaps.len() <= round {
                    self.gaps.resize(round + 1, 0);
                }
                self.gaps[round] = triple;
                tracing::trace!(round, triple, "offering orientations of gap triple");
                return PredicateResult::Choices(2);
            }
        }
        // No gap left: the relation is total.
        PredicateResult::Success
    }

    fn retry_pred(
        &mut self,
        store: &mut RelationStore,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let cell = CellId::new(self.gaps[round], Parity::from_choice(choice));
        if store.set_cell(cell).is_err() {
            return PredicateResult::Failure;
        }
        match store.closure_to_fixpoint() {
            Ok(()) => PredicateResult::SuccessSamePredicate,
            Err(contradiction) => {
                tracing::trace!(round, choice, %contradiction, "branch closed inconsistently");
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "CompleteAlternating"
    }
}

impl RelationStore {
    /// Search for a consistent total extension of the current relation.
    ///
    /// Returns `true` and leaves the store holding the first extension
    /// found, or returns `false` and leaves the store exactly as it was:
    /// the checkpoint taken before any branch is tried is rolled back as
    /// the last step of unwinding.
    pub fn complete(&mut self) -> bool {
        let mark = self.checkpoint();
        let engine = SearchEngine::new(vec![
            Box::new(CompleteAlternatingPredicate::new()),
            Box::new(SuspendPredicate),
        ]);

        match engine.search(self) {
            Some(engine) => {
                let (tries, retries) = engine.statistics();
                tracing::debug!(axiom = %self.axiom(), tries, retries, "completion found");
                true
            }
            None => {
                self.rollback(mark);
                tracing::debug!(axiom = %self.axiom(), "no consistent total extension");
                false
            }
        }
    }
}
