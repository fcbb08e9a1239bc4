// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for alphabet validation.
//!
//! Arbitrary text must never panic the validator, and `validate`, `Sequence::new`
//! and `insert` must agree on what is accepted.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqdb::{validate, Sequence, SequenceStore};

fuzz_target!(|text: &str| {
    let accepted = validate(text);
    assert_eq!(accepted, !text.is_empty() && text.bytes().all(|b| b"ACGT".contains(&b)));
    assert_eq!(accepted, Sequence::new(text).is_ok());

    let mut store = SequenceStore::new();
    match store.insert(text) {
        Ok(inserted) => {
            assert!(accepted);
            assert_eq!(inserted.id.get(), 1);
        }
        Err(e) => {
            assert!(!accepted);
            assert!(e.is_invalid_input());
            assert!(store.is_empty());
        }
    }
});
