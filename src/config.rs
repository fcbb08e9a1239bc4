// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Store tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Configuration for a [`SequenceStore`](crate::SequenceStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Smallest front/back overlap length that counts as an overlap.
    ///
    /// With a 4-symbol alphabet a 1-symbol coincidence is common, so
    /// assembly-style callers usually raise this. Containment is always an
    /// overlap regardless of this value.
    pub min_overlap: usize,
    /// Below this corpus size, `find` scans sequentially even when the
    /// `parallel` feature is enabled.
    pub parallel_find_min_sequences: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_overlap: 1,
            parallel_find_min_sequences: 4_096,
        }
    }
}

impl StoreConfig {
    /// Builder-style setter for [`StoreConfig::min_overlap`].
    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    /// Reject settings the store cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.min_overlap == 0 {
            return Err(StoreError::invalid_argument(
                self.min_overlap,
                "min_overlap must be at least 1",
            ));
        }
        Ok(())
    }
}
