// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the store and the overlap algorithm.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (guarded by `cfg!(debug_assertions)`)
//! 2. **Early failure detection** whenever tests exercise the store
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                      |
//! |--------------------------------|-----------------------------------------------|
//! | `check_newest_entry_indexed`   | id→sequence and sequence→id agree             |
//! | `check_overlap_matches_naive`  | KMP overlap == shrinking-window definition    |

use std::collections::HashMap;

use crate::testing::naive_overlap;
use crate::types::{Overlap, Sequence, SequenceId};

/// Check the entry an insert just pushed, in O(1).
///
/// Earlier slots were checked when they were pushed and are never modified,
/// so equal sizes plus an indexed last slot keep the two indices bijective.
///
/// # Panics (debug builds only)
/// Panics if the sizes differ or the last slot disagrees with the reverse index.
#[inline]
pub fn check_newest_entry_indexed(by_id: &[Sequence], by_sequence: &HashMap<Sequence, SequenceId>) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        by_id.len(),
        by_sequence.len(),
        "Contract violation: index sizes differ (by_id {}, by_sequence {})",
        by_id.len(),
        by_sequence.len()
    );

    if let Some(sequence) = by_id.last() {
        let expected = SequenceId::from_slot(by_id.len() - 1);
        debug_assert_eq!(
            by_sequence.get(sequence).copied(),
            Some(expected),
            "Contract violation: {} stored at id {} but reverse index disagrees",
            sequence,
            expected
        );
    }
}

/// Check that an overlap result agrees with the naive window scan.
///
/// # Panics (debug builds only)
/// Panics if the two disagree on the kind or length of the overlap.
#[inline]
pub fn check_overlap_matches_naive(
    sample: &str,
    sequence: &str,
    min_overlap: usize,
    result: Option<Overlap>,
) {
    if !cfg!(debug_assertions) {
        return;
    }

    let expected = naive_overlap(sample, sequence, min_overlap);
    debug_assert_eq!(
        result, expected,
        "Contract violation: overlap({:?}, {:?}, min {}) gave {:?}, naive scan gives {:?}",
        sample, sequence, min_overlap, result, expected
    );
}
