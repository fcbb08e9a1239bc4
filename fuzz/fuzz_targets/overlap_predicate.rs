// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for overlap detection.
//!
//! The border-array scan must agree with the shrinking-window definition on
//! every pair of sequences, for every minimum overlap length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdb::search::detect_overlap;
use seqdb::testing::naive_overlap;

#[derive(Debug, Arbitrary)]
struct OverlapInput {
    /// Two bits per symbol
    sample: Vec<u8>,
    sequence: Vec<u8>,
    min_overlap: u8,
}

fn decode(raw: &[u8]) -> String {
    raw.iter()
        .take(256)
        .map(|b| ['A', 'C', 'G', 'T'][(b & 0b11) as usize])
        .collect()
}

fuzz_target!(|input: OverlapInput| {
    let sample = decode(&input.sample);
    let sequence = decode(&input.sequence);
    if sample.is_empty() || sequence.is_empty() {
        return;
    }
    let min_overlap = (input.min_overlap % 8) as usize + 1;

    let fast = detect_overlap(&sample, &sequence, min_overlap);
    let slow = naive_overlap(&sample, &sequence, min_overlap);
    assert_eq!(fast, slow, "sample={} sequence={} min={}", sample, sequence, min_overlap);
});
