// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus-wide substring containment.
//!
//! The corpus is stored densely in id order, so a left-to-right scan yields
//! ids already sorted ascending. The parallel path uses rayon's indexed
//! `filter_map` + `collect`, which preserves that order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{Sequence, SequenceId};

/// Ids of every sequence in `corpus` that contains `sample`, ascending.
///
/// `corpus[i]` is the sequence with id `i + 1`.
pub fn find_in_corpus(corpus: &[Sequence], sample: &str) -> Vec<SequenceId> {
    corpus
        .iter()
        .enumerate()
        .filter(|(_, sequence)| contains(sequence, sample))
        .map(|(slot, _)| SequenceId::from_slot(slot))
        .collect()
}

/// Parallel variant of [`find_in_corpus`]. Identical output.
#[cfg(feature = "parallel")]
pub fn find_in_corpus_parallel(corpus: &[Sequence], sample: &str) -> Vec<SequenceId> {
    corpus
        .par_iter()
        .enumerate()
        .filter(|(_, sequence)| contains(sequence, sample))
        .map(|(slot, _)| SequenceId::from_slot(slot))
        .collect()
}

#[inline]
fn contains(sequence: &Sequence, sample: &str) -> bool {
    sample.len() <= sequence.len() && sequence.as_str().contains(sample)
}
