// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence store: two synchronized indices over one corpus.
//!
//! # Layout
//!
//! ```text
//!   by_id (authoritative)          by_sequence (dedup only)
//!   ┌──────┬──────────┐            ┌──────────┬────┐
//!   │ slot │ sequence │            │ sequence │ id │
//!   ├──────┼──────────┤            ├──────────┼────┤
//!   │  0   │ ACGT     │◀──────────▶│ ACGT     │ 1  │
//!   │  1   │ TTTT     │◀──────────▶│ TTTT     │ 2  │
//!   └──────┴──────────┘            └──────────┴────┘
//! ```
//!
//! Ids are dense and never deleted, so id `n` lives at slot `n - 1` and the
//! next id is always `len + 1`. No separate counter to drift out of sync.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BIJECTIVE**: `by_id.len() == by_sequence.len()`, and
//!    `by_sequence[by_id[i]] == i + 1` for every slot `i`.
//! 2. **NO_PARTIAL_MUTATION**: every failure is decided before either index is
//!    touched.

use std::collections::HashMap;

use crate::alphabet;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::search;
use crate::types::{InsertStatus, Inserted, Overlap, Sequence, SequenceId, ToSequenceId};
use crate::verify::contracts;

/// In-memory DNA sequence store.
///
/// ```
/// use seqdb::{InsertStatus, SequenceStore};
///
/// let mut store = SequenceStore::new();
/// let first = store.insert("ACGT")?;
/// assert_eq!(first.id.get(), 1);
/// assert_eq!(store.insert("ACGT")?.status, InsertStatus::Exists);
///
/// assert_eq!(store.find("CG")?, vec![first.id]);
/// assert!(store.overlap("GTTT", first.id)?);
/// # Ok::<(), seqdb::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    by_id: Vec<Sequence>,
    by_sequence: HashMap<Sequence, SequenceId>,
    config: StoreConfig,
}

impl SequenceStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom configuration.
    ///
    /// Fails with `InvalidArgument` if the configuration is out of range.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of distinct stored sequences.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterate `(id, sequence)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SequenceId, &Sequence)> + '_ {
        self.by_id
            .iter()
            .enumerate()
            .map(|(slot, sequence)| (SequenceId::from_slot(slot), sequence))
    }

    /// Id of an already stored value, if any. Never allocates.
    pub fn id_of(&self, sequence: &str) -> Option<SequenceId> {
        self.by_sequence.get(sequence).copied()
    }

    /// True if `sequence` is already stored.
    pub fn contains(&self, sequence: &str) -> bool {
        self.by_sequence.contains_key(sequence)
    }

    /// Insert a sequence, deduplicating on value.
    ///
    /// Returns the existing id with [`InsertStatus::Exists`] when the value
    /// is already stored, otherwise the next sequential id with
    /// [`InsertStatus::Created`]. Fails with `InvalidInput` (and changes
    /// nothing) if `sequence` is empty or not `{A,C,G,T}`-only.
    pub fn insert(&mut self, sequence: &str) -> Result<Inserted> {
        let value = Sequence::new(sequence)?;

        if let Some(&id) = self.by_sequence.get(&value) {
            return Ok(Inserted {
                id,
                status: InsertStatus::Exists,
            });
        }

        let id = SequenceId::from_slot(self.by_id.len());
        self.by_sequence.insert(value.clone(), id);
        self.by_id.push(value);

        contracts::check_newest_entry_indexed(&self.by_id, &self.by_sequence);

        Ok(Inserted {
            id,
            status: InsertStatus::Created,
        })
    }

    /// Look up a sequence by id.
    ///
    /// A non-positive or never-issued id is `Ok(None)`. Only an argument that
    /// is not an integer identifier at all fails, with `InvalidArgument`.
    pub fn get(&self, id: impl ToSequenceId) -> Result<Option<&Sequence>> {
        Ok(id
            .to_sequence_id()?
            .and_then(SequenceId::slot)
            .and_then(|slot| self.by_id.get(slot)))
    }

    /// Ids of every stored sequence containing `sample`, ascending.
    ///
    /// An empty vector when nothing matches. Fails with `InvalidInput` if
    /// `sample` is not a valid sequence.
    pub fn find(&self, sample: &str) -> Result<Vec<SequenceId>> {
        alphabet::check(sample)?;

        #[cfg(feature = "parallel")]
        if self.by_id.len() >= self.config.parallel_find_min_sequences {
            return Ok(search::find_in_corpus_parallel(&self.by_id, sample));
        }

        Ok(search::find_in_corpus(&self.by_id, sample))
    }

    /// Does `sample` overlap the sequence stored under `id`?
    ///
    /// True on containment in either direction, or on a front/back
    /// prefix-suffix match of at least [`StoreConfig::min_overlap`] symbols.
    /// See [`SequenceStore::overlap_detail`] for which rule matched.
    pub fn overlap(&self, sample: &str, id: impl ToSequenceId) -> Result<bool> {
        Ok(self.overlap_detail(sample, id)?.is_some())
    }

    /// Like [`SequenceStore::overlap`], but reports the matching rule and the
    /// overlap length.
    ///
    /// Errors, in check order: `InvalidInput` for a bad sample,
    /// `InvalidArgument` for a non-integer id, `NotFound` for an id that
    /// references nothing.
    pub fn overlap_detail(&self, sample: &str, id: impl ToSequenceId) -> Result<Option<Overlap>> {
        alphabet::check(sample)?;
        let sequence = self.resolve(id)?;

        let overlap = search::detect_overlap(sample, sequence.as_str(), self.config.min_overlap);
        contracts::check_overlap_matches_naive(
            sample,
            sequence.as_str(),
            self.config.min_overlap,
            overlap,
        );
        Ok(overlap)
    }

    /// Resolve an id argument to a stored sequence, failing with `NotFound`
    /// that names the argument as given.
    fn resolve(&self, id: impl ToSequenceId) -> Result<&Sequence> {
        id.to_sequence_id()?
            .and_then(SequenceId::slot)
            .and_then(|slot| self.by_id.get(slot))
            .ok_or_else(|| StoreError::not_found(&id))
    }
}
