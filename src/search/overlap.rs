// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix/suffix overlap detection between a sample and a stored sequence.
//!
//! The textbook version shrinks a window one symbol at a time and compares,
//! which is O(n·m). Here both directions reduce to one question: "what is the
//! longest prefix of `pattern` that is also a suffix of `text`?" A KMP scan of
//! `text` against `pattern` answers it in O(n + m): the automaton state after
//! the last symbol is exactly that length.
//!
//! - **Front**: suffix of sample = prefix of sequence → pattern = sequence, text = sample.
//! - **Back**: prefix of sample = suffix of sequence → pattern = sample, text = sequence.
//!
//! # Evaluation order
//!
//! 1. Sample longer than sequence: only "sequence within sample" is checked.
//! 2. Sample within sequence.
//! 3. Front overlap (largest `k` first).
//! 4. Back overlap (largest `k` first).
//!
//! Front and back overlaps shorter than `min_overlap` are ignored.

use crate::types::{Overlap, OverlapKind};

/// Border array (KMP failure function) of `pattern`.
///
/// `border[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
pub fn border_array(pattern: &[u8]) -> Vec<usize> {
    let mut border = vec![0usize; pattern.len()];
    let mut k = 0usize;
    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = border[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        border[i] = k;
    }
    border
}

/// Length of the longest prefix of `pattern` that is a suffix of `text`.
///
/// Bounded by `min(text.len(), pattern.len())`. A full occurrence of
/// `pattern` inside `text` keeps scanning past it, so the result always
/// describes the end of `text`.
pub fn longest_suffix_prefix(text: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let border = border_array(pattern);
    let mut q = 0usize;
    for &b in text {
        if q == pattern.len() {
            q = border[q - 1];
        }
        while q > 0 && pattern[q] != b {
            q = border[q - 1];
        }
        if pattern[q] == b {
            q += 1;
        }
    }
    q
}

/// Largest `k` such that the last `k` symbols of `sample` equal the first
/// `k` symbols of `sequence`, or 0.
pub fn front_overlap(sample: &[u8], sequence: &[u8]) -> usize {
    longest_suffix_prefix(sample, sequence)
}

/// Largest `k` such that the first `k` symbols of `sample` equal the last
/// `k` symbols of `sequence`, or 0.
pub fn back_overlap(sample: &[u8], sequence: &[u8]) -> usize {
    longest_suffix_prefix(sequence, sample)
}

/// Classify how `sample` overlaps `sequence`, if at all.
///
/// Both inputs are expected to be validated nucleotide strings; validation
/// and id lookup happen in the store before this is called.
pub fn detect_overlap(sample: &str, sequence: &str, min_overlap: usize) -> Option<Overlap> {
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
    let (sample, sequence) = (sample.as_bytes(), sequence.as_bytes());

    let front = front_overlap(sample, sequence);
    if front >= min_overlap {
        return Some(Overlap {
            kind: OverlapKind::Front,
            length: front,
        });
    }

    let back = back_overlap(sample, sequence);
    if back >= min_overlap {
        return Some(Overlap {
            kind: OverlapKind::Back,
            length: back,
        });
    }

    None
}
