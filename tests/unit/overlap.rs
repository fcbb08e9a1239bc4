//! The overlap predicate through the store API.

use super::common::build_test_store;
use seqdb::{OverlapKind, SequenceStore, StoreConfig};

#[test]
fn containment_in_both_directions() {
    let store = build_test_store(&["ACGTACGT"]);
    assert!(store.overlap("GTAC", 1).unwrap());
    assert!(store.overlap("ACGTACGT", 1).unwrap());
    assert!(store.overlap("TTACGTACGTTT", 1).unwrap());

    let detail = store.overlap_detail("TTACGTACGTTT", 1).unwrap().unwrap();
    assert_eq!(detail.kind, OverlapKind::SequenceWithinSample);
    assert_eq!(detail.length, 8);
}

#[test]
fn front_overlap_tail_of_sample_meets_head_of_sequence() {
    let store = build_test_store(&["AACCGGTT"]);
    let detail = store.overlap_detail("GGGAACC", 1).unwrap().unwrap();
    assert_eq!(detail.kind, OverlapKind::Front);
    assert_eq!(detail.length, 4);
}

#[test]
fn back_overlap_head_of_sample_meets_tail_of_sequence() {
    let store = build_test_store(&["AACCGGTT"]);
    let detail = store.overlap_detail("GGTTCCC", 1).unwrap().unwrap();
    assert_eq!(detail.kind, OverlapKind::Back);
    assert_eq!(detail.length, 4);
}

#[test]
fn longer_sample_without_containment_is_false() {
    // "CG" is a back overlap, but a longer sample only counts on containment
    let store = build_test_store(&["ACG"]);
    assert!(!store.overlap("CGTTTT", 1).unwrap());
}

#[test]
fn unrelated_sample_is_false() {
    let store = build_test_store(&["AAAA"]);
    assert!(!store.overlap("CCC", 1).unwrap());
    assert!(store.overlap_detail("CCC", 1).unwrap().is_none());
}

#[test]
fn single_symbol_overlaps_count_by_default() {
    let store = build_test_store(&["ACCC"]);
    let detail = store.overlap_detail("GGA", 1).unwrap().unwrap();
    assert_eq!(detail.kind, OverlapKind::Front);
    assert_eq!(detail.length, 1);
}

#[test]
fn min_overlap_suppresses_short_partial_matches() {
    let config = StoreConfig::default().with_min_overlap(2);
    let mut store = SequenceStore::with_config(config).unwrap();
    store.insert("ACCC").unwrap();
    assert!(!store.overlap("GGA", 1).unwrap());
    assert!(store.overlap("GGAC", 1).unwrap());
    // containment is never suppressed
    assert!(store.overlap("C", 1).unwrap());
}

#[test]
fn missing_id_is_a_hard_error() {
    let store = build_test_store(&["ACGT"]);
    assert!(store.overlap("AC", 2).unwrap_err().is_not_found());
    assert!(store.overlap("AC", "2").unwrap_err().is_not_found());
    assert!(store.overlap("AC", "two").unwrap_err().is_invalid_argument());
}
