// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for store operations.
//!
//! Three ways a call can fail, and all of them are decided before any state is
//! touched:
//!
//! | Variant           | Raised by                    | Cause                              |
//! |-------------------|------------------------------|------------------------------------|
//! | `InvalidInput`    | `insert`, `find`, `overlap`  | Empty or out-of-alphabet sequence  |
//! | `InvalidArgument` | `get`, `overlap`, config     | Id token is not an integer         |
//! | `NotFound`        | `overlap`                    | Well-typed id references nothing   |
//!
//! `get` never raises `NotFound`; a missing id is an ordinary `Ok(None)`.

use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A sequence or sample is empty or contains symbols outside `{A,C,G,T}`.
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// An identifier (or configuration value) is not of the expected shape.
    #[error("invalid argument {argument:?}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A well-typed identifier does not reference a stored sequence.
    ///
    /// `id` is the argument as the caller gave it, so `-5` reads as `-5`.
    #[error("sequence id {id} does not match any sequence")]
    NotFound { id: String },
}

impl StoreError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument(argument: impl ToString, reason: impl Into<String>) -> Self {
        StoreError::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(id: impl ToString) -> Self {
        StoreError::NotFound { id: id.to_string() }
    }

    /// True for `InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StoreError::InvalidInput { .. })
    }

    /// True for `InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument { .. })
    }

    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
