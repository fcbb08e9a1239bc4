//! Store invariants under arbitrary insert orders.

use super::common::{assert_store_consistent, raw_ids};
use super::strategies::{corpus, invalid_sequence, sequence};
use proptest::prelude::*;
use seqdb::testing::naive_find;
use seqdb::{InsertStatus, SequenceStore};
use std::collections::HashMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ids are handed out 1, 2, 3, ... in first-seen order and reinsertion
    /// always returns the original id.
    #[test]
    fn prop_ids_follow_first_insertion(texts in corpus()) {
        let mut store = SequenceStore::new();
        let mut first_seen: HashMap<String, u64> = HashMap::new();

        for text in &texts {
            let inserted = store.insert(text).unwrap();
            let next = first_seen.len() as u64 + 1;
            let expected = *first_seen.entry(text.clone()).or_insert(next);
            prop_assert_eq!(inserted.id.get(), expected);
            let status = if expected == next { InsertStatus::Created } else { InsertStatus::Exists };
            prop_assert_eq!(inserted.status, status);
        }

        prop_assert_eq!(store.len(), first_seen.len());
        assert_store_consistent(&store);
    }

    /// `get` returns exactly what was inserted under that id.
    #[test]
    fn prop_get_round_trips(texts in corpus()) {
        let mut store = SequenceStore::new();
        for text in &texts {
            let id = store.insert(text).unwrap().id;
            prop_assert_eq!(store.get(id).unwrap().map(|s| s.as_str()), Some(text.as_str()));
        }
        prop_assert!(store.get(store.len() as u64 + 1).unwrap().is_none());
    }

    /// Rejected input never changes the store.
    #[test]
    fn prop_invalid_insert_is_rejected(texts in corpus(), bad in invalid_sequence()) {
        let mut store = SequenceStore::new();
        for text in &texts {
            store.insert(text).unwrap();
        }
        let before = store.len();
        prop_assert!(store.insert(&bad).unwrap_err().is_invalid_input());
        prop_assert_eq!(store.len(), before);
        prop_assert!(store.find(&bad).unwrap_err().is_invalid_input());
    }

    /// `find` agrees with a linear scan and lists ids in ascending order.
    #[test]
    fn prop_find_matches_linear_scan(texts in corpus(), sample in sequence()) {
        let mut store = SequenceStore::new();
        let mut distinct: Vec<&str> = Vec::new();
        for text in &texts {
            if store.insert(text).unwrap().is_created() {
                distinct.push(text);
            }
        }

        let found = raw_ids(&store.find(&sample).unwrap());
        prop_assert_eq!(&found, &naive_find(&distinct, &sample));
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
    }

    /// Every stored sequence finds at least itself.
    #[test]
    fn prop_find_self(texts in prop::collection::vec(sequence(), 1..20)) {
        let mut store = SequenceStore::new();
        for text in &texts {
            store.insert(text).unwrap();
        }
        for (id, sequence) in store.iter() {
            prop_assert!(store.find(sequence.as_str()).unwrap().contains(&id));
        }
    }
}
