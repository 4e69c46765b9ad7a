// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Textual encoding used by fixtures to seed and dump relations.
//!
//! One character per unordered triple `{i,j,k}` with `i < j < k`,
//! enumerated with `k` as the slowest-varying index, then `j`, then `i`
//! (the ordering used by the published chirotope catalogues the C test
//! suite takes its fixtures from; note it differs from the store's own
//! `i`-slowest storage order):
//!
//! - `'+'` asserts the even-parity cell, i.e. `χ(i,j,k)`;
//! - `'-'` asserts the odd-parity cell, i.e. `χ(i,k,j)`;
//! - `'?'` or `'0'` leaves the triple undetermined.
//!
//! Anything else is a format error, reported distinctly from an
//! inconsistent seed.

use super::{Contradiction, RelationStore};
use thiserror::Error;

/// A seed string could not be applied to a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The string length does not match the store's `C(n,3)` triples.
    #[error("seed encodes {actual} triples but the store has {expected}")]
    Length { expected: usize, actual: usize },

    /// A character outside `+ - ? 0`.
    #[error("illegal character {ch:?} at position {position} in seed")]
    Format { position: usize, ch: char },

    /// The seeded facts are contradictory on their own.
    #[error(transparent)]
    Inconsistent(#[from] Contradiction),
}

/// Assert the facts of `text` into `store`.
///
/// On an `Inconsistent` error the facts asserted so far stay in place
/// (and on the trail); the caller decides whether to roll back.
pub fn seed(store: &mut RelationStore, text: &str) -> Result<(), SeedError> {
    let expected = store.num_triples();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != expected {
        return Err(SeedError::Length {
            expected,
            actual: chars.len(),
        });
    }

    let mut position = 0;
    for k in 0..store.n() {
        for j in 0..k {
            for i in 0..j {
                let ch = chars[position];
                match ch {
                    '+' => store.try_set(i, j, k)?,
                    '-' => store.try_set(i, k, j)?,
                    '?' | '0' => {}
                    _ => return Err(SeedError::Format { position, ch }),
                }
                position += 1;
            }
        }
    }
    Ok(())
}

/// Encode the current relation in the same character ordering.
///
/// Contradictory triples (both cells `true`) encode as `'+'`; they only
/// exist transiently between a failed assertion and its rollback.
pub fn encode(store: &RelationStore) -> String {
    let mut out = String::with_capacity(store.num_triples());
    for k in 0..store.n() {
        for j in 0..k {
            for i in 0..j {
                out.push(if store.get(i, j, k) {
                    '+'
                } else if store.get(i, k, j) {
                    '-'
                } else {
                    '?'
                });
            }
        }
    }
    out
}
