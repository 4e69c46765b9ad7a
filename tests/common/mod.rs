// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use alternating_search::{encoding, Axiom, RelationStore};

/// Seed a store from `text`, close it, and check the outcome against
/// the catalogue's expectations.
///
/// `consistent`: closure reaches a fixpoint without contradiction.
/// `closed`: the seed already was a fixpoint (trail unchanged by
/// closure); only checked when consistent.
/// `extensible`: a consistent total extension exists; only checked when
/// consistent.
pub fn run_alternating_test(
    n: usize,
    axiom: Axiom,
    text: &str,
    consistent: bool,
    closed: bool,
    extensible: bool,
) {
    let mut store = RelationStore::new(n, axiom);
    encoding::seed(&mut store, text).expect("seed should apply cleanly");

    let start = store.checkpoint();
    let result = store.closure_to_fixpoint();
    assert_eq!(
        result.is_ok(),
        consistent,
        "closure consistency was not as expected for {:?}",
        text
    );
    if !consistent {
        return;
    }

    assert_eq!(
        store.trail_len() == start,
        closed,
        "closedness was not as expected for {:?}",
        text
    );
    assert_eq!(
        store.complete(),
        extensible,
        "extensibility was not as expected for {:?}",
        text
    );
}

/// A chirotope fixture expected to be consistent, already closed, and
/// extensible.
#[allow(dead_code)]
pub fn run_true_chirotope(n: usize, text: &str) {
    run_alternating_test(n, Axiom::Chirotope, text, true, true, true);
}
