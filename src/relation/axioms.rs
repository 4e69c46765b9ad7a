// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two axiom steps propagated by closure.
//!
//! Both steps are deductive rules: whenever already-asserted facts make
//! their antecedent hold, the consequent triple is asserted through the
//! trail, failing on contradiction. Neither step ever reads a cell with
//! repeated lines; the closure loop bounds guarantee distinctness and
//! the chirotope step skips colliding witnesses itself.

use super::{Contradiction, RelationStore};

impl RelationStore {
    /// Betweenness transitivity of a partial cyclic order:
    /// `χ(i,j,k) ∧ χ(i,k,l) ⇒ χ(i,j,l)`.
    pub fn cyclic_order_step(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        l: usize,
    ) -> Result<(), Contradiction> {
        if self.get(i, j, k) && self.get(i, k, l) {
            self.try_set(i, j, l)?;
        }
        Ok(())
    }

    /// `(χ(a,b,x) ∧ χ(c,d,x)) ∨ (χ(b,a,x) ∧ χ(d,c,x))`
    fn same_order(&self, a: usize, b: usize, c: usize, d: usize, x: usize) -> bool {
        (self.get(a, b, x) && self.get(c, d, x)) || (self.get(b, a, x) && self.get(d, c, x))
    }

    /// The exchange antecedent for witness `x`: does one of the four
    /// three-term Grassmann-Plücker rules force `χ(a,b,x)`?
    ///
    /// With rank 3 and uniformity (no zero signs), the four rules share
    /// `χ(c,d,x)` and pair up into two `same_order` conditions:
    ///
    /// ```text
    /// χ(c,d,x), χ(a,c,x), χ(a,d,x), χ(b,d,x), χ(c,b,x)  ⇒ χ(a,b,x) [1]
    /// χ(c,d,x), χ(a,c,x), χ(b,c,x), χ(b,d,x), χ(d,a,x)  ⇒ χ(a,b,x) [2]
    /// χ(c,d,x), χ(a,d,x), χ(c,a,x), χ(c,b,x), χ(d,b,x)  ⇒ χ(a,b,x) [3]
    /// χ(c,d,x), χ(b,c,x), χ(c,a,x), χ(d,a,x), χ(d,b,x)  ⇒ χ(a,b,x) [4]
    /// ```
    ///
    /// [1]/[2] share `χ(a,c,x), χ(b,d,x)` and [3]/[4] their transposes;
    /// [1]/[3] share `χ(a,d,x), χ(c,b,x)` and [2]/[4] their transposes.
    fn exchange_antecedent(&self, a: usize, b: usize, c: usize, d: usize, x: usize) -> bool {
        // The witness must be distinct from all four indices.
        if x == a || x == b || x == c || x == d {
            return false;
        }
        self.get(c, d, x) && self.same_order(a, c, b, d, x) && self.same_order(a, d, c, b, x)
    }

    /// One uniform rank-3 chirotope exchange step: scan every witness
    /// `x` and assert `χ(a,b,x)` wherever the antecedent holds,
    /// short-circuiting on the first contradiction.
    pub fn chirotope_step(
        &mut self,
        a: usize,
        b: usize,
        c: usize,
        d: usize,
    ) -> Result<(), Contradiction> {
        for x in 0..self.n() {
            if self.exchange_antecedent(a, b, c, d, x) {
                self.try_set(a, b, x)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Axiom, RelationStore};

    #[test]
    fn test_cyclic_order_transitivity() {
        let mut store = RelationStore::new(4, Axiom::CyclicOrder);
        store.try_set(0, 1, 2).unwrap();
        store.try_set(0, 2, 3).unwrap();

        store.cyclic_order_step(0, 1, 2, 3).unwrap();
        assert!(store.get(0, 1, 3));
    }

    #[test]
    fn test_cyclic_order_step_without_antecedent_is_noop() {
        let mut store = RelationStore::new(4, Axiom::CyclicOrder);
        store.try_set(0, 1, 2).unwrap();

        store.cyclic_order_step(0, 1, 2, 3).unwrap();
        assert_eq!(store.trail_len(), 1);
        assert!(!store.get(0, 1, 3));
        assert!(!store.get(0, 3, 1));
    }

    #[test]
    fn test_cyclic_order_closure_derives_transitive_facts() {
        let mut store = RelationStore::new(5, Axiom::CyclicOrder);
        // 0,1,2,3,4 in convex position around a circle.
        store.try_set(0, 1, 2).unwrap();
        store.try_set(0, 2, 3).unwrap();
        store.try_set(0, 3, 4).unwrap();
        store.try_set(1, 2, 3).unwrap();
        store.try_set(2, 3, 4).unwrap();

        store.closure_to_fixpoint().unwrap();
        assert!(store.get(0, 1, 3));
        assert!(store.get(0, 1, 4));
        assert!(store.get(0, 2, 4));
        assert!(store.get(1, 2, 4));
    }

    #[test]
    fn test_cyclic_order_closure_detects_contradiction() {
        let mut store = RelationStore::new(4, Axiom::CyclicOrder);
        store.try_set(0, 1, 2).unwrap();
        store.try_set(0, 2, 3).unwrap();
        // Directly opposed to the transitive consequence chi(0,1,3).
        store.try_set(0, 3, 1).unwrap();

        assert!(store.closure_to_fixpoint().is_err());
    }

    /// All triples of five points in convex position except `{0,1,3}`.
    ///
    /// `orientation` is asserted for the gap instead when given:
    /// `Some(true)` seeds `chi(0,1,3)`, `Some(false)` seeds `chi(0,3,1)`.
    fn convex_position_with_gap(orientation: Option<bool>) -> RelationStore {
        let mut store = RelationStore::new(5, Axiom::Chirotope);
        for t in 0..store.num_triples() {
            let [i, j, k] = store.triple(t);
            match ([i, j, k], orientation) {
                ([0, 1, 3], None) => {}
                ([0, 1, 3], Some(true)) => store.try_set(i, j, k).unwrap(),
                ([0, 1, 3], Some(false)) => store.try_set(i, k, j).unwrap(),
                _ => store.try_set(i, j, k).unwrap(),
            }
        }
        store
    }

    #[test]
    fn test_exchange_asserts_consequent() {
        // With chi(0,1,3) the only gap, the exchange step for the
        // quadruple (1,3,2,4) finds witness x = 0 and derives chi(1,3,0).
        let mut store = convex_position_with_gap(None);
        assert!(store.is_undetermined(1)); // triple {0,1,3}

        store.chirotope_step(1, 3, 2, 4).unwrap();
        assert!(store.get(0, 1, 3));
        assert!(!store.get(0, 3, 1));
    }

    #[test]
    fn test_exchange_short_circuits_on_contradiction() {
        // Same quadruple, but the gap is pre-asserted the other way
        // round, so the derived chi(1,3,0) clashes.
        let mut store = convex_position_with_gap(Some(false));
        assert!(store.chirotope_step(1, 3, 2, 4).is_err());
    }
}
