// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a sequence store.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Sequence**: non-empty, every byte in `{A,C,G,T}`. The only constructor
//!   validates, so a `Sequence` you hold is always well-formed.
//!
//! - **SequenceId**: strictly positive. Ids are handed out by the store in
//!   increasing order starting at 1 and are never reused.
//!
//! Raw identifiers (user tokens, signed integers) go through [`ToSequenceId`],
//! which separates "not an identifier at all" (`InvalidArgument`) from
//! "an identifier that names nothing" (`Ok(None)`).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::alphabet;
use crate::error::{Result, StoreError};

// =============================================================================
// SEQUENCE
// =============================================================================

/// An immutable, validated nucleotide sequence.
///
/// Hashes and compares exactly like its `str` content, which is what lets the
/// store's reverse index be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(Box<str>);

impl Sequence {
    /// Validate `text` and wrap it.
    ///
    /// Fails with `InvalidInput` if `text` is empty or contains anything
    /// besides `A`, `C`, `G`, `T`. No case folding happens here.
    pub fn new(text: &str) -> Result<Self> {
        alphabet::check(text)?;
        Ok(Sequence(text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of symbols. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Sequence {
    type Error = StoreError;

    fn try_from(text: String) -> Result<Self> {
        alphabet::check(&text)?;
        Ok(Sequence(text.into_boxed_str()))
    }
}

impl From<Sequence> for String {
    fn from(sequence: Sequence) -> Self {
        sequence.0.into_string()
    }
}

impl FromStr for Sequence {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Sequence::new(s)
    }
}

impl Borrow<str> for Sequence {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a stored sequence. Strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SequenceId(NonZeroU64);

impl SequenceId {
    /// The first id a store hands out.
    pub const FIRST: SequenceId = SequenceId(NonZeroU64::MIN);

    /// Returns `None` for 0.
    #[inline]
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(SequenceId)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Slot of this id in the dense id-ordered storage (`id - 1`).
    ///
    /// `None` when the slot does not fit in `usize`; no store can hold it.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        usize::try_from(self.0.get() - 1).ok()
    }

    /// Inverse of [`SequenceId::slot`].
    #[inline]
    pub(crate) fn from_slot(slot: usize) -> Self {
        SequenceId(NonZeroU64::MIN.saturating_add(slot as u64))
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion of a raw identifier argument into a [`SequenceId`].
///
/// Modeled after `std::net::ToSocketAddrs`: store methods accept anything that
/// can be turned into an id, and the conversion decides which failure applies.
///
/// - `Err(InvalidArgument)`: the value is not an integer identifier at all
///   (e.g. the token `"abc"`).
/// - `Ok(None)`: a well-formed integer that can never name a sequence
///   (zero, negative, or beyond `u64`).
/// - `Ok(Some(id))`: a positive identifier, which may or may not be stored.
///
/// The `Display` form is what a `NotFound` error reports back.
pub trait ToSequenceId: fmt::Display {
    fn to_sequence_id(&self) -> Result<Option<SequenceId>>;
}

impl ToSequenceId for SequenceId {
    fn to_sequence_id(&self) -> Result<Option<SequenceId>> {
        Ok(Some(*self))
    }
}

macro_rules! integer_ids {
    ($($t:ty),*) => {$(
        impl ToSequenceId for $t {
            fn to_sequence_id(&self) -> Result<Option<SequenceId>> {
                Ok(u64::try_from(*self).ok().and_then(SequenceId::new))
            }
        }
    )*};
}

integer_ids!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Parses a raw token such as the shell reads from a user.
///
/// Surrounding whitespace is the caller's business; `" 1"` is not an integer.
impl ToSequenceId for str {
    fn to_sequence_id(&self) -> Result<Option<SequenceId>> {
        if let Ok(id) = self.parse::<u64>() {
            return Ok(SequenceId::new(id));
        }
        if let Ok(id) = self.parse::<i64>() {
            return id.to_sequence_id();
        }
        if is_integer_token(self) {
            return Ok(None);
        }
        Err(StoreError::invalid_argument(
            self,
            "sequence id must be an integer",
        ))
    }
}

/// An optional sign followed by at least one ASCII digit, of any length.
fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl ToSequenceId for String {
    fn to_sequence_id(&self) -> Result<Option<SequenceId>> {
        self.as_str().to_sequence_id()
    }
}

impl<T: ToSequenceId + ?Sized> ToSequenceId for &T {
    fn to_sequence_id(&self) -> Result<Option<SequenceId>> {
        (**self).to_sequence_id()
    }
}

// =============================================================================
// OPERATION OUTCOMES
// =============================================================================

/// Whether an insert allocated a new id or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertStatus {
    Created,
    Exists,
}

impl fmt::Display for InsertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertStatus::Created => f.write_str("created"),
            InsertStatus::Exists => f.write_str("exists"),
        }
    }
}

/// Result of [`SequenceStore::insert`](crate::SequenceStore::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inserted {
    pub id: SequenceId,
    pub status: InsertStatus,
}

impl Inserted {
    pub fn is_created(&self) -> bool {
        self.status == InsertStatus::Created
    }
}

/// Which rule made a sample overlap a stored sequence.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapKind {
    /// The sample occurs inside the stored sequence.
    SampleWithinSequence,
    /// The stored sequence occurs inside a longer sample.
    SequenceWithinSample,
    /// A suffix of the sample equals a prefix of the sequence.
    Front,
    /// A prefix of the sample equals a suffix of the sequence.
    Back,
}

impl OverlapKind {
    pub fn is_containment(self) -> bool {
        matches!(
            self,
            OverlapKind::SampleWithinSequence | OverlapKind::SequenceWithinSample
        )
    }
}

impl fmt::Display for OverlapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlapKind::SampleWithinSequence => "sample within sequence",
            OverlapKind::SequenceWithinSample => "sequence within sample",
            OverlapKind::Front => "front",
            OverlapKind::Back => "back",
        };
        f.write_str(name)
    }
}

/// A detected overlap and its length.
///
/// For containment, `length` is the length of the contained value. For front
/// and back overlaps it is the largest matching overlap length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overlap {
    pub kind: OverlapKind,
    pub length: usize,
}
