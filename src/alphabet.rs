// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The nucleotide alphabet and the validator every input passes through.
//!
//! Validation is case-sensitive: `acgt` is rejected. Upper-casing is the
//! caller's job (the shell does it). The core only says yes or no.

use crate::error::{Result, StoreError};

/// The four symbols a sequence may contain.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Check whether a single byte is a nucleotide symbol.
#[inline]
pub fn is_symbol(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// Returns true iff `candidate` is non-empty and every character is one of
/// `A`, `C`, `G`, `T`.
///
/// ```
/// use seqdb::validate;
///
/// assert!(validate("ACGT"));
/// assert!(!validate(""));
/// assert!(!validate("acgt"));
/// assert!(!validate("ACGN"));
/// ```
pub fn validate(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(is_symbol)
}

/// Like [`validate`], but explains the rejection.
///
/// The error carries the first offending character and its character
/// position, which is what a user actually needs to fix their input.
pub(crate) fn check(candidate: &str) -> Result<()> {
    if candidate.is_empty() {
        return Err(StoreError::invalid_input(candidate, "sequence is empty"));
    }

    match candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || !is_symbol(*c as u8))
    {
        Some((position, c)) => Err(StoreError::invalid_input(
            candidate,
            format!(
                "only A, C, G and T are allowed, found {:?} at position {}",
                c, position
            ),
        )),
        None => Ok(()),
    }
}
