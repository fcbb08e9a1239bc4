// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Types** (`Sequence`, `SequenceId`) that make invalid states
//!    unrepresentable. A `Sequence` cannot hold a lower-case letter and a
//!    `SequenceId` cannot be zero.
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant is
//!    violated. Zero-cost in release, but they run on every store operation
//!    the test suite performs.

pub mod contracts;
