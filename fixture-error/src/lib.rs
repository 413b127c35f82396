// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the fixture function workspace
//!
//! This crate defines the root [`FixtureError`] type. Two of its variants are
//! the fixed failures produced by the fixtures themselves; the rest are raised
//! by the module host when a module or export cannot be found or registered.
//!
//! # Examples
//!
//! ```
//! use fixture_error::{FixtureError, Result};
//!
//! fn always_fails() -> Result<()> {
//!     Err(FixtureError::SomeError)
//! }
//!
//! assert_eq!(always_fails().unwrap_err().to_string(), "some error");
//! ```

/// Root error type for all fixture operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// Synchronous failure raised by `fail`
    #[error("some error")]
    SomeError,

    /// Asynchronous failure raised by `reject_after_delay` once its timer elapses
    #[error("rejected")]
    Rejected,

    /// A side module with the same name is already registered
    #[error("Duplicate side module: {name}")]
    DuplicateSideModule {
        /// Name that was registered twice
        name: String,
    },

    /// No side module is registered under the given name
    #[error("Unknown module: {name}")]
    UnknownModule {
        /// Name that was looked up
        name: String,
    },

    /// The module does not export an operation with the given name
    #[error("Unknown export: {name}")]
    UnknownExport {
        /// Export name that was looked up
        name: String,
    },
}

impl FixtureError {
    /// Create a duplicate side module error
    pub fn duplicate_side_module(name: impl Into<String>) -> Self {
        Self::DuplicateSideModule { name: name.into() }
    }

    /// Create an unknown module error
    pub fn unknown_module(name: impl Into<String>) -> Self {
        Self::UnknownModule { name: name.into() }
    }

    /// Create an unknown export error
    pub fn unknown_export(name: impl Into<String>) -> Self {
        Self::UnknownExport { name: name.into() }
    }

    /// Check if this is one of the two fixed failures produced by a fixture
    ///
    /// Host errors (registry and export lookups) return `false`.
    #[must_use]
    pub const fn is_fixture_failure(&self) -> bool {
        matches!(self, Self::SomeError | Self::Rejected)
    }
}

/// Specialized Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;
