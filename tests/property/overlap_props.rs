//! Border-array overlap detection against the brute-force oracle.

use super::common::build_test_store;
use super::strategies::{repetitive_sequence, sequence};
use proptest::prelude::*;
use seqdb::search::{back_overlap, detect_overlap, front_overlap};
use seqdb::testing::{naive_back_overlap, naive_front_overlap, naive_overlap};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_front_overlap_matches_oracle(sample in sequence(), target in sequence()) {
        prop_assert_eq!(
            front_overlap(sample.as_bytes(), target.as_bytes()),
            naive_front_overlap(&sample, &target)
        );
    }

    #[test]
    fn prop_back_overlap_matches_oracle(sample in sequence(), target in sequence()) {
        prop_assert_eq!(
            back_overlap(sample.as_bytes(), target.as_bytes()),
            naive_back_overlap(&sample, &target)
        );
    }

    /// Repetitive inputs stress the border fallback chain.
    #[test]
    fn prop_repetitive_inputs_match_oracle(
        sample in repetitive_sequence(),
        target in repetitive_sequence(),
        min_overlap in 1usize..4,
    ) {
        prop_assert_eq!(
            detect_overlap(&sample, &target, min_overlap),
            naive_overlap(&sample, &target, min_overlap)
        );
    }

    #[test]
    fn prop_detect_overlap_matches_oracle(
        sample in sequence(),
        target in sequence(),
        min_overlap in 1usize..4,
    ) {
        prop_assert_eq!(
            detect_overlap(&sample, &target, min_overlap),
            naive_overlap(&sample, &target, min_overlap)
        );
    }

    /// Containment in either direction is always an overlap.
    #[test]
    fn prop_containment_implies_overlap(a in sequence(), b in sequence()) {
        let store = build_test_store(&[a.as_str()]);
        if a.contains(&b) || b.contains(&a) {
            prop_assert!(store.overlap(&b, 1).unwrap());
        }
    }

    /// A tail of the sequence followed by new symbols overlaps, as long as
    /// the sample is no longer than the sequence.
    #[test]
    fn prop_constructed_back_overlap_is_found(
        target in sequence(),
        cut in 0usize..12,
        extra in sequence(),
    ) {
        let cut = cut % target.len();
        let extra = &extra[..cut.min(extra.len())];
        let sample = format!("{}{}", &target[cut..], extra);
        let store = build_test_store(&[target.as_str()]);
        prop_assert!(store.overlap(&sample, 1).unwrap());
    }

    /// A reported overlap never exceeds either operand.
    #[test]
    fn prop_overlap_length_is_bounded(sample in sequence(), target in sequence()) {
        if let Some(overlap) = detect_overlap(&sample, &target, 1) {
            prop_assert!(overlap.length >= 1);
            prop_assert!(overlap.length <= sample.len().min(target.len()));
        }
    }
}
