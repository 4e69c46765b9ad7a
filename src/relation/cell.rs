// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical cell identity for the alternating relation storage.
//!
//! The C implementation identifies a cell by a raw pointer into shared
//! storage and recovers the unordered triple by pointer arithmetic
//! (`roundedDownIx = ((entry - rawStorage) / 2) * 2`). Here a cell is
//! named by the pair it canonically is: an unordered-triple index and a
//! parity class. The flat storage index is derived from that pair, never
//! the other way round from a memory offset.

/// Parity class of an ordered triple.
///
/// The six permutations of an unordered triple `{i,j,k}` split into two
/// classes that must carry opposite signs under an alternating function:
/// the identity rotation class of `(i,j,k)` with `i<j<k` is `Even`, the
/// transposed class is `Odd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

impl Parity {
    /// Map a binary search-branch index to a parity class.
    ///
    /// Branch 0 tries the even cell first, matching the C completion
    /// search which tries `rawStorage[gap]` before `rawStorage[gap + 1]`.
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            0 => Parity::Even,
            1 => Parity::Odd,
            _ => panic!("parity choice out of range: {}", choice),
        }
    }
}

/// Identity of one boolean storage slot: `(unordered triple, parity)`.
///
/// Internally a flat index `2 * triple + parity`, matching the storage
/// layout where the two cells of an unordered triple are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(usize);

impl CellId {
    pub fn new(triple: usize, parity: Parity) -> Self {
        CellId(triple * 2 + parity as usize)
    }

    /// Flat index into the cell array.
    pub fn index(self) -> usize {
        self.0
    }

    /// Index of the owning unordered triple.
    pub fn triple(self) -> usize {
        self.0 / 2
    }

    pub fn parity(self) -> Parity {
        if self.0 % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The opposite-parity cell of the same unordered triple.
    ///
    /// At most one of `self` and `self.partner()` is ever `true` in a
    /// consistent store.
    pub fn partner(self) -> CellId {
        CellId(self.0 ^ 1)
    }
}
