// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences against the store.
//!
//! Replays inserts, gets, finds and overlaps against a plain `Vec<String>`
//! model and checks every answer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdb::testing::{naive_find, naive_overlap};
use seqdb::{InsertStatus, SequenceStore};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(Vec<u8>),
    Get(i64),
    GetToken(String),
    Find(Vec<u8>),
    Overlap(Vec<u8>, u8),
}

fn decode(raw: &[u8]) -> String {
    raw.iter()
        .take(32)
        .map(|b| ['A', 'C', 'G', 'T'][(b & 0b11) as usize])
        .collect()
}

fuzz_target!(|ops: Vec<Op>| {
    let mut store = SequenceStore::new();
    let mut model: Vec<String> = Vec::new();

    for op in ops.into_iter().take(64) {
        match op {
            Op::Insert(raw) => {
                let text = decode(&raw);
                match store.insert(&text) {
                    Ok(inserted) => {
                        match model.iter().position(|t| *t == text) {
                            Some(i) => {
                                assert_eq!(inserted.status, InsertStatus::Exists);
                                assert_eq!(inserted.id.get(), i as u64 + 1);
                            }
                            None => {
                                model.push(text);
                                assert_eq!(inserted.status, InsertStatus::Created);
                                assert_eq!(inserted.id.get(), model.len() as u64);
                            }
                        }
                    }
                    Err(e) => {
                        assert!(text.is_empty());
                        assert!(e.is_invalid_input());
                    }
                }
            }
            Op::Get(raw) => {
                let expected = usize::try_from(raw)
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|slot| model.get(slot));
                let got = store.get(raw).unwrap();
                assert_eq!(got.map(|s| s.as_str()), expected.map(String::as_str));
            }
            Op::GetToken(token) => {
                if let Err(e) = store.get(token.as_str()) {
                    assert!(e.is_invalid_argument());
                }
            }
            Op::Find(raw) => {
                let sample = decode(&raw);
                if sample.is_empty() {
                    continue;
                }
                let corpus: Vec<&str> = model.iter().map(String::as_str).collect();
                let ids: Vec<u64> = store
                    .find(&sample)
                    .unwrap()
                    .into_iter()
                    .map(|id| id.get())
                    .collect();
                assert_eq!(ids, naive_find(&corpus, &sample));
            }
            Op::Overlap(raw, id) => {
                let sample = decode(&raw);
                if sample.is_empty() {
                    continue;
                }
                let id = id as usize;
                match id.checked_sub(1).and_then(|slot| model.get(slot)) {
                    Some(sequence) => {
                        let expected = naive_overlap(&sample, sequence, 1).is_some();
                        assert_eq!(store.overlap(&sample, id as u64).unwrap(), expected);
                    }
                    None => assert!(store.overlap(&sample, id as u64).unwrap_err().is_not_found()),
                }
            }
        }
    }
});
