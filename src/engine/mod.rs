// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic backtracking search engine.
//!
//! The engine executes a sequence of predicates against a relation
//! store, keeping an explicit stack of frames instead of recursing. Each
//! frame records which predicate is active, its round, whether it is in
//! choice mode, and the trail checkpoint to restore before re-entering
//! it. Backtracking pops frames and rolls the store back to the popped-
//! into frame's checkpoint, so a retried choice always starts from the
//! state its choice point was opened in.
//!
//! Execution model:
//! 1. Call `try_pred(round)` on the current predicate.
//! 2. `Success`: advance to the next predicate.
//! 3. `SuccessSamePredicate`: stay at this predicate, round + 1.
//! 4. `Choices(n)`: enter choice mode, call `retry_pred(round, 0..n)`.
//! 5. `Failure` (or choices exhausted): pop the frame.
//! 6. `Suspend`: stop with the store as the answer.
//!
//! Popping the last frame means the search space is exhausted. The
//! engine does not restore the store past the first frame's checkpoint;
//! a caller wanting failure to be invisible takes its own checkpoint
//! first (see `RelationStore::complete`).

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::relation::RelationStore;
use crate::trail::Mark;

/// One frame of the predicate stack.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the program.
    predicate_index: usize,

    /// Round number (incremented by `SuccessSamePredicate`).
    round: usize,

    /// Whether this frame is exploring alternatives.
    in_choice_mode: bool,

    /// Whether `try_pred` already resolved this frame deterministically.
    /// Backtracking pops straight through resolved frames: they offered
    /// no alternatives, so the nearest untried branch lies below them.
    resolved: bool,

    /// Next choice to try (when in choice mode).
    current_choice: usize,

    /// Number of choices on offer (when in choice mode).
    num_choices: usize,

    /// Store state to restore before re-entering this frame.
    trail_checkpoint: Mark,
}

/// Backtracking driver over a sequence of predicates.
pub struct SearchEngine {
    /// Predicates executed in sequence; the last must be terminal.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of active frames.
    stack: Vec<StackEntry>,

    /// Number of `try_pred` calls.
    try_count: u64,

    /// Number of `retry_pred` calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create an engine running `predicates` in order.
    ///
    /// Every valid program ends with a terminal predicate (one that
    /// fails or suspends); the engine panics if execution runs past the
    /// end of the sequence.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to its first answer.
    ///
    /// Consumes the engine. Returns `Some(engine)` if a terminal
    /// predicate suspended (the store holds the answer; statistics
    /// remain inspectable), or `None` if the whole choice tree was
    /// exhausted.
    pub fn search(mut self, store: &mut RelationStore) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry {
            predicate_index: 0,
            round: 0,
            in_choice_mode: false,
            resolved: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: store.checkpoint(),
        });

        loop {
            let Some(entry) = self.stack.last_mut() else {
                // Backtracked past the first predicate: exhausted.
                tracing::debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            store.rollback(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                if entry.resolved {
                    // Backtracked into a frame that resolved without
                    // alternatives; keep popping toward a choice point.
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(store, round);

                match result {
                    PredicateResult::Success => {
                        self.stack.last_mut().unwrap().resolved = true;
                        self.push_next_predicate(store);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.stack.last_mut().unwrap().resolved = true;
                        self.push_same_predicate(store);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        let entry = self.stack.last_mut().unwrap();
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = store.checkpoint();
                    }
                    PredicateResult::Suspend => {
                        tracing::debug!(
                            tries = self.try_count,
                            retries = self.retry_count,
                            "search suspended with an answer"
                        );
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    // All alternatives failed.
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(store, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(store),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(store),
                    PredicateResult::Failure => {
                        // Next choice on the next loop iteration.
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// Push a frame for the next predicate in the program.
    fn push_next_predicate(&mut self, store: &RelationStore) {
        let current = self.stack.last().unwrap();
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "invalid predicate sequence: ran past the end without a \
                 terminal predicate"
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            in_choice_mode: false,
            resolved: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: store.checkpoint(),
        });
    }

    /// Push a frame for the same predicate with the round incremented.
    fn push_same_predicate(&mut self, store: &RelationStore) {
        let current = self.stack.last().unwrap();
        let next_round = current.round + 1;
        let pred_index = current.predicate_index;

        self.stack.push(StackEntry {
            predicate_index: pred_index,
            round: next_round,
            in_choice_mode: false,
            resolved: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: store.checkpoint(),
        });
    }

    /// `(try_pred calls, retry_pred calls)` of the last `search` run.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}
