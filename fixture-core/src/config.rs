// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Run-time configuration for a fixture module.

use crate::module::ModuleKind;
use core::time::Duration;

/// Delay used by the fast fixture variant.
pub const FAST_DELAY: Duration = Duration::from_millis(100);

/// Delay used by the slow fixture variant.
pub const SLOW_DELAY: Duration = Duration::from_millis(1000);

/// Module kind and delay constant of a fixture module.
///
/// The default is an ESM module with [`FAST_DELAY`].
///
/// # Example
///
/// ```
/// use fixture_core::{FixtureConfig, ModuleKind, SLOW_DELAY};
///
/// let config = FixtureConfig::slow().with_kind(ModuleKind::Cjs);
/// assert_eq!(config.delay(), SLOW_DELAY);
/// assert_eq!(config.kind(), ModuleKind::Cjs);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixtureConfig {
    kind: ModuleKind,
    delay: Duration,
}

impl FixtureConfig {
    pub const fn new(kind: ModuleKind, delay: Duration) -> Self {
        Self { kind, delay }
    }

    /// ESM module with [`FAST_DELAY`].
    pub const fn fast() -> Self {
        Self::new(ModuleKind::Esm, FAST_DELAY)
    }

    /// ESM module with [`SLOW_DELAY`].
    pub const fn slow() -> Self {
        Self::new(ModuleKind::Esm, SLOW_DELAY)
    }

    #[must_use]
    pub const fn with_kind(self, kind: ModuleKind) -> Self {
        Self { kind, ..self }
    }

    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub const fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::fast()
    }
}
