// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching algorithms: corpus-wide substring search and pairwise overlap.
//!
//! Both work on validated input only. The store does validation and id
//! resolution, then hands plain strings to these functions.

pub mod overlap;
pub mod substring;

pub use overlap::{back_overlap, border_array, detect_overlap, front_overlap};
pub use substring::find_in_corpus;
#[cfg(feature = "parallel")]
pub use substring::find_in_corpus_parallel;
