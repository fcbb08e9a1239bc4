//! Shared helpers for integration tests.

#![allow(dead_code)]

use seqdb::{SequenceId, SequenceStore};

/// Build a store by inserting `texts` in order. Panics on invalid input.
pub fn build_test_store(texts: &[&str]) -> SequenceStore {
    let mut store = SequenceStore::new();
    for text in texts {
        store.insert(text).expect("test corpus must be valid");
    }
    store
}

/// Shorthand for a known-positive id.
pub fn id(raw: u64) -> SequenceId {
    SequenceId::new(raw).expect("ids in tests are positive")
}

/// Raw values of a list of ids.
pub fn raw_ids(ids: &[SequenceId]) -> Vec<u64> {
    ids.iter().map(|id| id.get()).collect()
}

/// Check that `iter()`, `get()` and `id_of()` agree on every stored pair.
pub fn assert_store_consistent(store: &SequenceStore) {
    let mut expected = 1u64;
    for (id, sequence) in store.iter() {
        assert_eq!(id.get(), expected, "ids must be dense and ascending");
        assert_eq!(store.get(id).unwrap(), Some(sequence));
        assert_eq!(store.id_of(sequence.as_str()), Some(id));
        expected += 1;
    }
    assert_eq!(store.len() as u64, expected - 1);
}
