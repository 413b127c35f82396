// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and call a fixture module.
//!
//! ```rust
//! use fixture_core::prelude::*;
//! ```

pub use crate::collaborator::Collaborator;
pub use crate::config::{FixtureConfig, FAST_DELAY, SLOW_DELAY};
pub use crate::module::{FixtureModule, ModuleKind};
pub use crate::registry::ModuleRegistry;
pub use fixture_error::{FixtureError, Result};
pub use fixture_runtime::{Timer, TrackedTimer};

#[cfg(feature = "runtime-tokio")]
pub use fixture_runtime::impls::tokio::TokioTimer;
