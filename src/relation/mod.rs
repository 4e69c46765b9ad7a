// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Indexed storage for a partial alternating ternary relation.
//!
//! A [`RelationStore`] holds the sign of ordered triples of `n` lines as
//! `2 * C(n,3)` boolean cells, two per unordered triple (one per parity
//! class). `true` means "this permutation's sign is asserted"; `false`
//! means undetermined. Negativity is never stored directly: it is the
//! other cell of the pair being `true`.
//!
//! All writes go through the trail, so the store can be rolled back to
//! any earlier checkpoint. The store carries one of two axiom systems,
//! fixed at construction, which [`RelationStore::closure_to_fixpoint`]
//! propagates to a fixpoint.

pub mod axioms;
pub mod cell;
pub mod encoding;

pub use cell::{CellId, Parity};

use crate::trail::{Mark, Trail};
use std::fmt;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Axiom system a store propagates during closure.
///
/// A closed two-variant tag dispatched by a single `match` inside the
/// closure pass; the C implementation selects the step by function
/// pointer at construction instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Axiom {
    /// Betweenness transitivity of a partial cyclic order.
    CyclicOrder,
    /// Three-term Grassmann-Plücker exchange for uniform rank-3
    /// chirotopes.
    Chirotope,
}

/// An assertion made both orientations of an unordered triple `true`.
///
/// Raised synchronously by [`RelationStore::try_set`] and the axiom
/// steps; always recoverable by rolling back to an earlier mark, and
/// never fatal at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("both orientations of triple ({i}, {j}, {k}) are asserted")]
pub struct Contradiction {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// Relation storage with trail-guarded writes and axiom propagation.
pub struct RelationStore {
    /// Number of lines. Elements are `0..n`.
    n: usize,
    /// Axiom system applied by `closure_to_fixpoint`.
    axiom: Axiom,
    /// `2 * C(n,3)` cells, two adjacent cells per unordered triple.
    cells: Vec<bool>,
    /// `n^3` ordered-triple index: `(i*n + j)*n + k` maps to the cell for
    /// that permutation's parity class. `None` for repeated indices.
    index: Vec<Option<CellId>>,
    /// Unordered triple index back to `(i, j, k)` with `i < j < k`, so
    /// contradictions and dumps can name the offending triple.
    triples: Vec<[usize; 3]>,
    /// Write log; the only path to un-setting a cell.
    trail: Trail,
}

impl RelationStore {
    /// Create a store for `n` lines, all triples undetermined.
    ///
    /// Builds the index table once: for each `i < j < k` the three even
    /// rotations `(i,j,k)`, `(j,k,i)`, `(k,i,j)` share one cell and the
    /// three odd rotations `(i,k,j)`, `(j,i,k)`, `(k,j,i)` share its
    /// partner. Triple indices run lexicographically with `i` slowest.
    pub fn new(n: usize, axiom: Axiom) -> Self {
        assert!(n >= 3, "an alternating relation needs at least 3 lines");

        let num_triples = n * (n - 1) * (n - 2) / 6;
        let mut index = vec![None; n * n * n];
        let mut triples = Vec::with_capacity(num_triples);

        let ordered = |i: usize, j: usize, k: usize| (i * n + j) * n + k;
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let triple = triples.len();
                    triples.push([i, j, k]);

                    let even = CellId::new(triple, Parity::Even);
                    index[ordered(i, j, k)] = Some(even);
                    index[ordered(j, k, i)] = Some(even);
                    index[ordered(k, i, j)] = Some(even);

                    let odd = CellId::new(triple, Parity::Odd);
                    index[ordered(i, k, j)] = Some(odd);
                    index[ordered(j, i, k)] = Some(odd);
                    index[ordered(k, j, i)] = Some(odd);
                }
            }
        }
        debug_assert_eq!(triples.len(), num_triples);

        Self {
            n,
            axiom,
            cells: vec![false; 2 * num_triples],
            index,
            triples,
            trail: Trail::with_capacity(2 * num_triples),
        }
    }

    /// Number of lines in the relation.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Axiom system this store propagates.
    pub fn axiom(&self) -> Axiom {
        self.axiom
    }

    /// Number of unordered triples (`C(n,3)`).
    pub fn num_triples(&self) -> usize {
        self.triples.len()
    }

    /// The lines `(i, j, k)` with `i < j < k` of an unordered triple.
    pub fn triple(&self, triple: usize) -> [usize; 3] {
        self.triples[triple]
    }

    /// The cell for an exact ordered triple.
    ///
    /// Panics on repeated indices: valid domain usage never queries a
    /// triple with a repeated line, so this is a fail-fast precondition
    /// check rather than a runtime case.
    fn cell_id(&self, i: usize, j: usize, k: usize) -> CellId {
        self.index[(i * self.n + j) * self.n + k]
            .unwrap_or_else(|| panic!("repeated line in triple ({}, {}, {})", i, j, k))
    }

    /// Read the sign cell for the ordered triple `(i, j, k)`.
    ///
    /// `true` means the sign of that permutation is asserted; `false`
    /// means undetermined or asserted with the opposite sign (query the
    /// transposed triple to tell the two apart).
    pub fn get(&self, i: usize, j: usize, k: usize) -> bool {
        self.cells[self.cell_id(i, j, k).index()]
    }

    /// Current value of a cell named canonically.
    pub fn cell_value(&self, cell: CellId) -> bool {
        self.cells[cell.index()]
    }

    /// Whether neither cell of an unordered triple is asserted yet.
    pub fn is_undetermined(&self, triple: usize) -> bool {
        !self.cells[CellId::new(triple, Parity::Even).index()]
            && !self.cells[CellId::new(triple, Parity::Odd).index()]
    }

    /// Assert the cell for the ordered triple `(i, j, k)`.
    ///
    /// A no-op returning `Ok` if the cell is already `true`. Otherwise
    /// the write is trailed and mutual exclusion checked: if the partner
    /// cell is also `true` the triple is contradictory and `Err` is
    /// returned. The offending write stays on the trail either way; the
    /// caller recovers by rolling back.
    pub fn try_set(&mut self, i: usize, j: usize, k: usize) -> Result<(), Contradiction> {
        self.set_cell(self.cell_id(i, j, k))
    }

    /// Assert a cell named canonically. See [`RelationStore::try_set`].
    pub(crate) fn set_cell(&mut self, cell: CellId) -> Result<(), Contradiction> {
        if self.cells[cell.index()] {
            return Ok(());
        }
        self.trail.record(cell, false);
        self.cells[cell.index()] = true;

        if self.cells[cell.partner().index()] {
            let [i, j, k] = self.triples[cell.triple()];
            return Err(Contradiction { i, j, k });
        }
        Ok(())
    }

    /// Apply the configured axiom step until no pass derives a new fact.
    ///
    /// Each pass visits every ordered quadruple of pairwise-distinct
    /// lines in the extended Roy-Floyd-Warshall nesting of the C
    /// implementation and aborts on the first contradiction. A pass that
    /// leaves the trail length unchanged reached the fixpoint. The
    /// propagation operator is monotone and extensive, so the fixpoint
    /// does not depend on the visit order, and total work is bounded by
    /// the `2 * C(n,3)` derivable facts.
    pub fn closure_to_fixpoint(&mut self) -> Result<(), Contradiction> {
        let mut pass = 0usize;
        loop {
            let before = self.trail.len();
            self.closure_pass()?;
            let derived = self.trail.len() - before;
            pass += 1;
            if derived == 0 {
                tracing::debug!(axiom = %self.axiom, passes = pass, "closure reached fixpoint");
                return Ok(());
            }
            tracing::trace!(pass, derived, "closure pass derived new facts");
        }
    }

    fn closure_pass(&mut self) -> Result<(), Contradiction> {
        for i in 0..self.n {
            for k in 0..self.n {
                if k == i {
                    continue;
                }
                for j in 0..self.n {
                    if j == k || j == i {
                        continue;
                    }
                    for l in 0..self.n {
                        if l == i || l == k || l == j {
                            continue;
                        }
                        match self.axiom {
                            Axiom::CyclicOrder => self.cyclic_order_step(i, j, k, l)?,
                            Axiom::Chirotope => self.chirotope_step(i, j, k, l)?,
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Capture a rollback target for the current store state.
    pub fn checkpoint(&self) -> Mark {
        self.trail.checkpoint()
    }

    /// Undo every write made after `mark`, most recent first.
    ///
    /// The only way a cell ever moves back from `true` to `false`.
    pub fn rollback(&mut self, mark: Mark) {
        for entry in self.trail.unwind(mark) {
            self.cells[entry.cell.index()] = entry.previous;
        }
    }

    /// Current trail length; unchanged closure passes leave it fixed.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

impl fmt::Debug for RelationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationStore")
            .field("n", &self.n)
            .field("axiom", &self.axiom)
            .field("asserted", &self.trail.len())
            .field("triples", &self.triples.len())
            .finish()
    }
}

/// Dump of all asserted triples, one ordered triple per line, flagging
/// any contradictory triple with `***`.
impl fmt::Display for RelationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (triple, &[i, j, k]) in self.triples.iter().enumerate() {
            let positive = self.cells[CellId::new(triple, Parity::Even).index()];
            let negative = self.cells[CellId::new(triple, Parity::Odd).index()];
            if positive && negative {
                write!(f, "*** ")?;
            }
            if positive {
                writeln!(f, "{} {} {}", i, j, k)?;
            }
            if negative {
                writeln!(f, "{} {} {}", i, k, j)?;
            }
        }
        Ok(())
    }
}
