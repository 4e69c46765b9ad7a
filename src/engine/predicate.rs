// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the non-deterministic search engine.
//!
//! The engine runs predicates in sequence. Each predicate is a choice
//! point in the search: `try_pred` either resolves it outright or offers
//! a number of ordered alternatives, which the engine then commits one
//! at a time through `retry_pred`, backtracking between attempts.

use crate::relation::RelationStore;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate resolved. Move to the next predicate in sequence.
    Success,

    /// Predicate made progress but has more rounds to run. Stay at the
    /// same predicate with the round incremented.
    SuccessSamePredicate,

    /// No (more) viable branch. Backtrack to the previous choice point.
    Failure,

    /// The predicate offers `n` ordered alternatives. The engine opens a
    /// choice point and calls `retry_pred(round, choice)` for each
    /// `choice` in `0..n`, rolling the store back between attempts.
    Choices(usize),

    /// Terminal sentinel: stop with the current store state as the
    /// answer. Only terminal predicates return this.
    Suspend,
}

/// A terminal predicate that ends an engine program.
///
/// Terminal predicates only ever return `Failure` or `Suspend`; every
/// valid predicate sequence ends with one, so the engine never runs off
/// the end of the sequence.
pub trait TerminalPredicate: Predicate {}

/// A search predicate over the relation store.
///
/// `round` starts at 0 and increments each time the predicate returns
/// `SuccessSamePredicate`, so a predicate resolving one fact per round
/// can keep round-local scratch indexed by it.
///
/// The engine owns all trail bookkeeping: it captures a checkpoint when
/// a choice point opens and rolls the store back to it before every
/// `retry_pred` call, so a retry always sees the store as it was when
/// its choices were offered.
pub trait Predicate: Debug {
    /// Attempt this predicate for `round`.
    fn try_pred(&mut self, store: &mut RelationStore, round: usize) -> PredicateResult;

    /// Commit alternative `choice` of the choice point `try_pred` opened
    /// for `round`, and validate the result.
    ///
    /// May not return `Choices` or `Suspend`; a choice either resolves
    /// (`Success`/`SuccessSamePredicate`) or fails.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        store: &mut RelationStore,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging and engine diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
