// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixture functions for exercising a host's call, error and async paths.
//!
//! Four operations are exported:
//!
//! - `forward` - calls an injected [`Collaborator`] and returns its result unchanged
//! - `fail` - fails synchronously with `"some error"`
//! - `resolve_after_delay` - fulfils with its input after a fixed delay
//! - `reject_after_delay` - fails with `"rejected"` after the same delay
//!
//! They are available as free functions in [`ops`] and as methods on a
//! [`FixtureModule`], which binds a collaborator, a timer and a delay constant.
//! A [`ModuleRegistry`] hosts a main module and named side modules.
//!
//! The delayed operations arm their timer through `fixture_runtime::delay`,
//! which releases it on completion and when the pending future is dropped.
//! Wrapping the timer in a [`TrackedTimer`] makes that observable.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use fixture_core::{FixtureModule, TokioTimer, TrackedTimer};
//! use std::time::Duration;
//!
//! let module = FixtureModule::esm(|x: i32| x * 2, TrackedTimer::new(TokioTimer));
//! let live = module.timer().registry().clone();
//!
//! // Abandon a pending call before its timer fires
//! let outcome = tokio::time::timeout(Duration::from_millis(10), module.resolve_after_delay(42)).await;
//! assert!(outcome.is_err());
//! assert_eq!(live.live(), 0);
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod collaborator;
pub mod config;
pub mod module;
pub mod ops;
pub mod prelude;
pub mod registry;

pub use self::collaborator::Collaborator;
pub use self::config::{FixtureConfig, FAST_DELAY, SLOW_DELAY};
pub use self::module::{FixtureModule, ModuleKind, EXPORTS};
pub use self::registry::ModuleRegistry;

pub use fixture_error::{FixtureError, Result};
pub use fixture_runtime::{Timer, TimerRegistry, TrackedTimer};

#[cfg(feature = "runtime-tokio")]
pub use fixture_runtime::impls::tokio::TokioTimer;
