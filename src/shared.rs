// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A store handle that can be shared across threads.
//!
//! One `RwLock` guards both indices, so an `insert` is visible all at once or
//! not at all. Readers (`get`, `find`, `overlap`) run concurrently; writers
//! are serialized.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::SequenceStore;
use crate::types::{Inserted, Overlap, Sequence, SequenceId, ToSequenceId};

/// Cloneable, thread-safe handle to a [`SequenceStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<SequenceStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Result<Self> {
        Ok(Self::from(SequenceStore::with_config(config)?))
    }

    pub fn insert(&self, sequence: &str) -> Result<Inserted> {
        self.inner.write().insert(sequence)
    }

    /// Owned copy of the sequence; a borrow cannot outlive the read guard.
    pub fn get(&self, id: impl ToSequenceId) -> Result<Option<Sequence>> {
        Ok(self.inner.read().get(id)?.cloned())
    }

    pub fn find(&self, sample: &str) -> Result<Vec<SequenceId>> {
        self.inner.read().find(sample)
    }

    pub fn overlap(&self, sample: &str, id: impl ToSequenceId) -> Result<bool> {
        self.inner.read().overlap(sample, id)
    }

    pub fn overlap_detail(&self, sample: &str, id: impl ToSequenceId) -> Result<Option<Overlap>> {
        self.inner.read().overlap_detail(sample, id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` against a consistent snapshot of the whole store.
    pub fn read<R>(&self, f: impl FnOnce(&SequenceStore) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<SequenceStore> for SharedStore {
    fn from(store: SequenceStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}
