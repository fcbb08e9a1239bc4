// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation. Each oracle
//! is the most literal rendition of a definition: slow, obviously correct, and
//! the thing the fast paths are checked against.

#![doc(hidden)]

use crate::types::{Overlap, OverlapKind};

/// Largest front overlap by shrinking window: compare the last `k` symbols of
/// `sample` with the first `k` of `sequence`, from the largest `k` down.
pub fn naive_front_overlap(sample: &str, sequence: &str) -> usize {
    let max = sample.len().min(sequence.len());
    (1..=max)
        .rev()
        .find(|&k| sample[sample.len() - k..] == sequence[..k])
        .unwrap_or(0)
}

/// Largest back overlap by shrinking window: compare the first `k` symbols of
/// `sample` with the last `k` of `sequence`, from the largest `k` down.
pub fn naive_back_overlap(sample: &str, sequence: &str) -> usize {
    let max = sample.len().min(sequence.len());
    (1..=max)
        .rev()
        .find(|&k| sample[..k] == sequence[sequence.len() - k..])
        .unwrap_or(0)
}

/// Overlap classification straight from the definition.
pub fn naive_overlap(sample: &str, sequence: &str, min_overlap: usize) -> Option<Overlap> {
    if sample.len() > sequence.len() {
        return sample.contains(sequence).then_some(Overlap {
            kind: OverlapKind::SequenceWithinSample,
            length: sequence.len(),
        });
    }
    if sequence.contains(sample) {
        return Some(Overlap {
            kind: OverlapKind::SampleWithinSequence,
            length: sample.len(),
        });
    }

    let min_overlap = min_overlap.max(1);
    let front = naive_front_overlap(sample, sequence);
    if front >= min_overlap {
        return Some(Overlap {
            kind: OverlapKind::Front,
            length: front,
        });
    }
    let back = naive_back_overlap(sample, sequence);
    if back >= min_overlap {
        return Some(Overlap {
            kind: OverlapKind::Back,
            length: back,
        });
    }
    None
}

/// Ids (1-based) of every text containing `sample`, by brute force.
///
/// `corpus` must be distinct texts in insertion order, i.e. what a store
/// holds after deduplication.
pub fn naive_find(corpus: &[&str], sample: &str) -> Vec<u64> {
    corpus
        .iter()
        .enumerate()
        .filter(|(_, text)| text.contains(sample))
        .map(|(i, _)| i as u64 + 1)
        .collect()
}
