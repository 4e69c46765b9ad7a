// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chirotope propagation and completion against the fixture catalogue.
//!
//! Our chirotopes unusually are:
//! - partial: `?` is a legal value meaning unknown/undefined
//! - uniform: `0` is not a legal value (fixture `0`s read as unknown)
//!
//! The named fixtures are classical arrangements: Ceva's configuration,
//! Ringel's non-stretchable arrangement, and the 14-line examples of
//! Suvorov and Richter-Gebert's omega.

mod common;

use alternating_search::{encoding, Axiom, RelationStore};
use common::{run_alternating_test, run_true_chirotope};

#[test]
fn test_chapter1() {
    run_true_chirotope(6, "+?--+?-+++++?++++++?");
}

#[test]
fn test_incomplete() {
    // Same fixture with one more unknown: no longer a fixpoint, but
    // closure derives the missing triple and completion succeeds.
    run_alternating_test(6, Axiom::Chirotope, "?+--+?-+++++?++++++?", true, false, true);
}

#[test]
fn test_simple() {
    run_true_chirotope(5, "++++++++++");
}

#[test]
fn test_simple_inconsistent() {
    run_alternating_test(5, Axiom::Chirotope, "++-++++-++", false, true, true);
}

#[test]
fn test_simple_incomplete() {
    run_alternating_test(5, Axiom::Chirotope, "+?++++++++", true, false, true);
}

#[test]
fn test_inconsistent() {
    run_alternating_test(6, Axiom::Chirotope, "-+--+?-+++++?++++++?", false, false, true);
}

#[test]
fn test_ceva() {
    run_true_chirotope(7, "+++0+++++++++++++++0++++++++0-+0---");
}

#[test]
fn test_ringel() {
    run_true_chirotope(
        9,
        "+++-++-+++++-+++++++++-++++++++-+--++++++++++++++-++++-++\
         +-++++++++-+--++++-++------",
    );
}

#[test]
fn test_suvorov14() {
    run_true_chirotope(
        14,
        "++-++-??-++?++?-++-++-++-?++-+--+-?+?++--++-+?-?--+?-+-++-++?-++-+-?+?+\
         -+-++--++++-++-++--++-+--+-+?+-++--++++-++----+-?+-++--++-+--+-+-+-++--+\
         +?+-+--+-?+++--+-+?++--+-++-+-++++-+-+--+-++--+-+-++-+----++-+-?--+++-+-\
         ?--+?+-+-?+-+---?+?+-++-+--++-+-+-?+?+?++-++-+-++--++-+-++--+-?+-+++++++\
         -?--+-??---+-+--+-+---+-+----+-++++--+-++++---+-++++-+++-?-------?-++++\
         +++++-",
    );
}

#[test]
fn test_omega14() {
    run_true_chirotope(
        14,
        "++--+--++0+--0+--0-++-0++-0+-+++---+--++-0+-+++0--0-+-0-+--++--0-++0+-0-\
         -+0+---+++--+--++0++00+++--+-+---+0+---++++--++++--++0--00+-+-+--+-+---+\
         -+--0-+-+-++--000----++-++++-+-+-+-++-+---+-+---++-+-+-+++-+---0--+0+-++\
         +++++--+-++-+-+-+-++-+---+-+---++-+-+-++0-+------+-+-+0++++-----------+\
         0-+0++-+-+-+-++-+---+-+---++-+-+-+++-+------+-+-++++++-----------+++++++\
         ++++0",
    );
}

/// Closing an already closed store twice derives nothing new either
/// time and reports the same result.
#[test]
fn test_closure_idempotence() {
    let mut store = RelationStore::new(6, Axiom::Chirotope);
    encoding::seed(&mut store, "?+--+?-+++++?++++++?").unwrap();

    assert!(store.closure_to_fixpoint().is_ok());
    let len = store.trail_len();
    assert!(store.closure_to_fixpoint().is_ok());
    assert_eq!(store.trail_len(), len);
}

/// After closure, every satisfied exchange antecedent has its
/// consequent asserted (otherwise closure would not be a fixpoint).
#[test]
fn test_exchange_soundness_at_fixpoint() {
    let mut store = RelationStore::new(6, Axiom::Chirotope);
    encoding::seed(&mut store, "+?--+?-+++++?++++++?").unwrap();
    assert!(store.closure_to_fixpoint().is_ok());

    let n = store.n();
    let same_order = |a: usize, b: usize, c: usize, d: usize, x: usize| {
        (store.get(a, b, x) && store.get(c, d, x))
            || (store.get(b, a, x) && store.get(d, c, x))
    };
    let distinct = |q: &[usize]| q.iter().all(|&v| q.iter().filter(|&&w| w == v).count() == 1);

    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                for d in 0..n {
                    for x in 0..n {
                        if !distinct(&[a, b, c, d, x]) {
                            continue;
                        }
                        if store.get(c, d, x)
                            && same_order(a, c, b, d, x)
                            && same_order(a, d, c, b, x)
                        {
                            assert!(
                                store.get(a, b, x),
                                "exchange consequent chi({},{},{}) missing",
                                a,
                                b,
                                x
                            );
                        }
                    }
                }
            }
        }
    }
}

/// Completion fills exactly the undetermined triples, one orientation
/// each, and never flips a seeded fact.
#[test]
fn test_completion_is_total_and_faithful() {
    let text = "?+--+?-+++++?++++++?";
    let mut store = RelationStore::new(6, Axiom::Chirotope);
    encoding::seed(&mut store, text).unwrap();
    assert!(store.closure_to_fixpoint().is_ok());
    assert!(store.complete());

    let completed = encoding::encode(&store);
    assert!(!completed.contains('?'));
    for (seeded, kept) in text.chars().zip(completed.chars()) {
        if seeded == '+' || seeded == '-' {
            assert_eq!(seeded, kept, "completion flipped a seeded triple");
        }
    }
}
