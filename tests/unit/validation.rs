//! Alphabet validation at every entry point.

use super::common::build_test_store;
use seqdb::{validate, Sequence, SequenceStore, StoreError};

#[test]
fn validate_accepts_only_upper_case_acgt() {
    assert!(validate("A"));
    assert!(validate("GATTACA"));
    assert!(!validate(""));
    assert!(!validate("gattaca"));
    assert!(!validate("GATTACAN"));
    assert!(!validate("GAT TACA"));
}

#[test]
fn insert_rejects_illegal_input() {
    let mut store = SequenceStore::new();
    for bad in ["ACGX", "", "acgt", "ACGU"] {
        let err = store.insert(bad).unwrap_err();
        assert!(err.is_invalid_input(), "{:?} gave {:?}", bad, err);
    }
    assert!(store.is_empty());
}

#[test]
fn find_rejects_lower_case() {
    let store = build_test_store(&["ACGT"]);
    assert!(store.find("acgt").unwrap_err().is_invalid_input());
}

#[test]
fn overlap_rejects_illegal_sample_before_looking_up_id() {
    let store = build_test_store(&["ACGT"]);
    // id 42 does not exist, but the sample is checked first
    let err = store.overlap("AC-GT", 42).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn error_messages_are_descriptive() {
    let err = Sequence::new("ACGZ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input \"ACGZ\": only A, C, G and T are allowed, found 'Z' at position 3"
    );
    assert_eq!(
        StoreError::NotFound {
            id: "7".to_string()
        }
        .to_string(),
        "sequence id 7 does not match any sequence"
    );
}
