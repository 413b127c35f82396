// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the fixture function workspace.
//!
//! - `collaborators` - ready-made collaborators, including one that counts calls
//! - `helpers` - timing and pending-state assertions, tracked module builders
//!
//! # Example
//!
//! ```rust
//! use fixture_test_utils::collaborators::double;
//! use fixture_core::ops;
//!
//! assert_eq!(ops::forward(&double, 5), 10);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod collaborators;
pub mod helpers;

pub use collaborators::{double, CountingCollaborator};
pub use helpers::{assert_pending, settle_timed, tracked_module, TrackedTokioModule};
