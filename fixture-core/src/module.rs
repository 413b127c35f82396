// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A fixture module: the four operations bound to one collaborator, one timer
//! and one delay constant.
//!
//! Modules come in two kinds that behave identically; the kind is kept so a
//! host can tell which loader flavour a module stands in for.

use crate::collaborator::Collaborator;
use crate::config::FixtureConfig;
use crate::ops;
use core::convert::Infallible;
use core::fmt;
use core::time::Duration;
use fixture_error::{FixtureError, Result};
use fixture_runtime::Timer;

/// Names of the operations every fixture module exports.
pub const EXPORTS: [&str; 4] = ["forward", "fail", "resolve_after_delay", "reject_after_delay"];

/// Flavour of module a fixture stands in for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Esm,
    Cjs,
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Esm => f.write_str("esm"),
            Self::Cjs => f.write_str("cjs"),
        }
    }
}

/// The four fixture operations with their dependencies bound.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "runtime-tokio")]
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use fixture_core::{FixtureModule, TokioTimer};
///
/// let module = FixtureModule::esm(|x: i32| x * 2, TokioTimer);
///
/// assert_eq!(module.forward(5), 10);
/// assert_eq!(module.fail().unwrap_err().to_string(), "some error");
/// assert_eq!(module.resolve_after_delay(42).await.unwrap(), 42);
/// assert_eq!(
///     module.reject_after_delay().await.unwrap_err().to_string(),
///     "rejected"
/// );
/// # }
/// # #[cfg(not(feature = "runtime-tokio"))]
/// # fn main() {}
/// ```
#[derive(Clone)]
pub struct FixtureModule<C, T> {
    config: FixtureConfig,
    collaborator: C,
    timer: T,
}

impl<C, T> FixtureModule<C, T>
where
    T: Timer,
{
    pub const EXPORTS: [&'static str; 4] = EXPORTS;

    pub fn with_config(config: FixtureConfig, collaborator: C, timer: T) -> Self {
        Self {
            config,
            collaborator,
            timer,
        }
    }

    /// ESM-flavoured module with the fast delay.
    pub fn esm(collaborator: C, timer: T) -> Self {
        Self::with_config(FixtureConfig::fast(), collaborator, timer)
    }

    /// CJS-flavoured module with the fast delay.
    pub fn cjs(collaborator: C, timer: T) -> Self {
        Self::with_config(
            FixtureConfig::fast().with_kind(ModuleKind::Cjs),
            collaborator,
            timer,
        )
    }

    pub fn config(&self) -> FixtureConfig {
        self.config
    }

    pub fn kind(&self) -> ModuleKind {
        self.config.kind()
    }

    pub fn delay(&self) -> Duration {
        self.config.delay()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub fn exports(&self) -> &'static [&'static str] {
        &EXPORTS
    }

    pub fn export_exists(&self, name: &str) -> bool {
        EXPORTS.contains(&name)
    }

    /// Look up an export by name.
    ///
    /// # Errors
    /// Returns `FixtureError::UnknownExport` if the module has no such export.
    pub fn require_export(&self, name: &str) -> Result<&'static str> {
        EXPORTS
            .iter()
            .copied()
            .find(|export| *export == name)
            .ok_or_else(|| FixtureError::unknown_export(name))
    }

    /// See [`ops::forward`].
    pub fn forward<V>(&self, value: V) -> C::Output
    where
        C: Collaborator<V>,
    {
        ops::forward(&self.collaborator, value)
    }

    /// See [`ops::fail`].
    ///
    /// # Errors
    /// Always returns `FixtureError::SomeError`.
    pub fn fail(&self) -> Result<Infallible> {
        ops::fail()
    }

    /// See [`ops::resolve_after_delay`]; waits for this module's delay.
    ///
    /// # Errors
    /// Never fails.
    pub async fn resolve_after_delay<V>(&self, value: V) -> Result<V> {
        ops::resolve_after_delay(&self.timer, self.delay(), value).await
    }

    /// See [`ops::reject_after_delay`]; waits for this module's delay.
    ///
    /// # Errors
    /// Always returns `FixtureError::Rejected` once the timer fires.
    pub async fn reject_after_delay(&self) -> Result<Infallible> {
        ops::reject_after_delay(&self.timer, self.delay()).await
    }
}

impl<C, T: fmt::Debug> fmt::Debug for FixtureModule<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureModule")
            .field("config", &self.config)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
