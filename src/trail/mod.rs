// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the relation store.
//!
//! The trail records every `false -> true` cell transition so the search
//! engine can restore earlier states in O(1) per write. It models a
//! one-way boolean lattice: the only operation that ever moves a cell
//! backward is `RelationStore::rollback`, which unwinds trail entries in
//! reverse order down to a previously captured mark.
//!
//! The C implementation keeps the trail in a global static array and
//! stores raw pointers to the changed words. Here the trail is an owned
//! `Vec` of canonical [`CellId`]s, one trail per store, so independent
//! solves never cross-contaminate.

use crate::relation::cell::CellId;

/// A captured trail length, used as a rollback target.
pub type Mark = usize;

/// A single entry in the trail, recording one cell write.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrailEntry {
    /// The cell that was written.
    pub cell: CellId,
    /// The value the cell held before the write (always `false` in this
    /// domain, kept explicit so rollback is mechanical).
    pub previous: bool,
}

/// Append-only reversible write log.
///
/// The log length increases monotonically between rollbacks; a checkpoint
/// is just the captured length. Rollback is total: it always succeeds and
/// leaves the length exactly at the mark.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create an empty trail sized for a store with `cells` cells.
    ///
    /// Each cell transitions `false -> true` at most once between
    /// rollbacks, so `cells` entries is the hard upper bound.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cells),
        }
    }

    /// Capture the current log length as a rollback target.
    pub fn checkpoint(&self) -> Mark {
        self.entries.len()
    }

    /// Record one cell write (internal: only the store writes cells).
    pub(crate) fn record(&mut self, cell: CellId, previous: bool) {
        self.entries.push(TrailEntry { cell, previous });
    }

    /// Drain all entries recorded after `mark`, most recent first, and
    /// truncate the log to `mark`. The caller restores each cell.
    pub(crate) fn unwind(&mut self, mark: Mark) -> impl Iterator<Item = TrailEntry> {
        debug_assert!(mark <= self.entries.len(), "rollback past end of trail");
        self.entries.split_off(mark).into_iter().rev()
    }

    /// Current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
