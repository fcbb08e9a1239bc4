//! In-memory DNA sequence store with substring search and overlap detection.
//!
//! Sequences over `{A,C,G,T}` are stored once each under sequential ids.
//! Four operations: `insert` (deduplicating), `get`, `find` (substring
//! containment across the corpus) and `overlap` (containment or an
//! assembly-style prefix/suffix match against one stored sequence).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────────┐
//! │ alphabet.rs │────▶│   store.rs   │────▶│ search/substring.rs │
//! │ (validate)  │     │ (insert, get,│     │ (find_in_corpus)    │
//! └─────────────┘     │  find,       │     ├─────────────────────┤
//!        │            │  overlap)    │────▶│ search/overlap.rs   │
//!        ▼            └──────────────┘     │ (border arrays)     │
//! ┌─────────────┐            │             └─────────────────────┘
//! │  types.rs   │            ▼
//! │ (Sequence,  │     ┌──────────────┐
//! │  SequenceId)│     │  shared.rs   │
//! └─────────────┘     │ (RwLock'd)   │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use seqdb::{InsertStatus, OverlapKind, SequenceStore};
//!
//! let mut store = SequenceStore::new();
//! assert_eq!(store.insert("ACGT")?.status, InsertStatus::Created);
//! assert_eq!(store.insert("ACGT")?.status, InsertStatus::Exists);
//! store.insert("TTTT")?;
//!
//! let ids: Vec<u64> = store.find("CG")?.into_iter().map(|id| id.get()).collect();
//! assert_eq!(ids, vec![1]);
//!
//! assert_eq!(store.get(2)?.map(|s| s.as_str()), Some("TTTT"));
//! assert_eq!(store.get(99)?, None);
//!
//! let overlap = store.overlap_detail("GTTT", 1)?.unwrap();
//! assert_eq!(overlap.kind, OverlapKind::Back);
//! assert_eq!(overlap.length, 2);
//! # Ok::<(), seqdb::StoreError>(())
//! ```

mod alphabet;
mod config;
mod error;
pub mod search;
mod shared;
mod store;
pub mod testing;
mod types;
pub mod verify;

pub use alphabet::{is_symbol, validate, ALPHABET};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use shared::SharedStore;
pub use store::SequenceStore;
pub use types::{
    InsertStatus, Inserted, Overlap, OverlapKind, Sequence, SequenceId, ToSequenceId,
};
