//! Insert, get and find behavior of the store.

use super::common::{assert_store_consistent, build_test_store, id, raw_ids};
use seqdb::{InsertStatus, SequenceId, SequenceStore};

#[test]
fn end_to_end_scenario() {
    let mut store = SequenceStore::new();

    let inserted = store.insert("ACGT").unwrap();
    assert_eq!((inserted.id.get(), inserted.status), (1, InsertStatus::Created));

    let inserted = store.insert("ACGT").unwrap();
    assert_eq!((inserted.id.get(), inserted.status), (1, InsertStatus::Exists));

    let inserted = store.insert("TTTT").unwrap();
    assert_eq!((inserted.id.get(), inserted.status), (2, InsertStatus::Created));

    assert_eq!(raw_ids(&store.find("CG").unwrap()), vec![1]);
    assert_eq!(store.get(2).unwrap().map(|s| s.as_str()), Some("TTTT"));
    assert!(store.get(99).unwrap().is_none());
    assert!(store.overlap("GTTT", 1).unwrap());

    assert_store_consistent(&store);
}

#[test]
fn duplicate_insert_is_idempotent() {
    let mut store = build_test_store(&["GATTACA"]);
    let before = store.len();
    let again = store.insert("GATTACA").unwrap();
    assert_eq!(again.id, SequenceId::FIRST);
    assert_eq!(again.status, InsertStatus::Exists);
    assert_eq!(store.len(), before);
}

#[test]
fn ids_are_sequential_without_gaps() {
    let mut store = SequenceStore::new();
    let mut created = Vec::new();
    for text in ["A", "AA", "A", "AAA", "AA", "AAAA"] {
        let inserted = store.insert(text).unwrap();
        if inserted.is_created() {
            created.push(inserted.id.get());
        }
    }
    assert_eq!(created, vec![1, 2, 3, 4]);
    assert_store_consistent(&store);
}

#[test]
fn get_accepts_ids_integers_and_tokens() {
    let store = build_test_store(&["AC", "GT"]);
    assert_eq!(store.get(id(2)).unwrap().unwrap(), "GT");
    assert_eq!(store.get(2u64).unwrap().unwrap(), "GT");
    assert_eq!(store.get("2").unwrap().unwrap(), "GT");
    assert_eq!(store.get(String::from("1")).unwrap().unwrap(), "AC");
}

#[test]
fn get_non_positive_ids_are_absent_not_errors() {
    let store = build_test_store(&["AC"]);
    assert!(store.get(0).unwrap().is_none());
    assert!(store.get(-1i64).unwrap().is_none());
    assert!(store.get("-1").unwrap().is_none());
}

#[test]
fn get_non_integer_tokens_are_invalid_arguments() {
    let store = build_test_store(&["AC"]);
    for token in ["one", "1.0", "", "1a"] {
        assert!(store.get(token).unwrap_err().is_invalid_argument(), "{:?}", token);
    }
}

#[test]
fn find_returns_ascending_ids() {
    let store = build_test_store(&["TTGA", "GACC", "CCCC", "AGAG", "GA"]);
    assert_eq!(raw_ids(&store.find("GA").unwrap()), vec![1, 2, 4, 5]);
    assert_eq!(raw_ids(&store.find("CCCC").unwrap()), vec![3]);
    assert!(store.find("TTTTT").unwrap().is_empty());
}

#[test]
fn find_on_empty_store_is_empty() {
    let store = SequenceStore::new();
    assert!(store.find("ACGT").unwrap().is_empty());
}
