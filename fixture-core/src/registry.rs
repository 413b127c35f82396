// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host for one main fixture module and any number of named side modules.

use crate::module::FixtureModule;
use core::fmt;
use fixture_error::{FixtureError, Result};
use fixture_runtime::Timer;
use std::collections::HashMap;

/// Main module plus side modules keyed by name.
///
/// Side module names are unique; registering a name twice is an error and
/// leaves the first registration in place.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "runtime-tokio")]
/// # fn main() -> fixture_core::Result<()> {
/// use fixture_core::{FixtureModule, ModuleKind, ModuleRegistry, TokioTimer};
///
/// let deep: fn(i32) -> i32 = |x| x * 2;
/// let mut registry = ModuleRegistry::new(FixtureModule::esm(deep, TokioTimer));
/// registry.register_side_module("cjs", FixtureModule::cjs(deep, TokioTimer))?;
///
/// assert_eq!(registry.side_module("cjs")?.kind(), ModuleKind::Cjs);
/// assert!(registry.register_side_module("cjs", FixtureModule::cjs(deep, TokioTimer)).is_err());
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "runtime-tokio"))]
/// # fn main() {}
/// ```
pub struct ModuleRegistry<C, T> {
    main: FixtureModule<C, T>,
    side_modules: HashMap<String, FixtureModule<C, T>>,
}

impl<C, T> ModuleRegistry<C, T>
where
    T: Timer,
{
    pub fn new(main: FixtureModule<C, T>) -> Self {
        Self {
            main,
            side_modules: HashMap::new(),
        }
    }

    /// Build a registry and register every side module in order.
    ///
    /// # Errors
    /// Returns `FixtureError::DuplicateSideModule` on the first repeated name.
    pub fn with_side_modules<I, N>(main: FixtureModule<C, T>, side_modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, FixtureModule<C, T>)>,
        N: Into<String>,
    {
        let mut registry = Self::new(main);
        for (name, module) in side_modules {
            registry.register_side_module(name, module)?;
        }
        Ok(registry)
    }

    /// # Errors
    /// Returns `FixtureError::DuplicateSideModule` if `name` is already taken.
    pub fn register_side_module(
        &mut self,
        name: impl Into<String>,
        module: FixtureModule<C, T>,
    ) -> Result<()> {
        let name = name.into();
        if self.side_modules.contains_key(&name) {
            warn!("side module `{}` is already registered", name);
            return Err(FixtureError::duplicate_side_module(name));
        }

        info!("registered {} side module `{}`", module.kind(), name);
        self.side_modules.insert(name, module);
        Ok(())
    }

    pub fn main(&self) -> &FixtureModule<C, T> {
        &self.main
    }

    /// # Errors
    /// Returns `FixtureError::UnknownModule` if no side module has that name.
    pub fn side_module(&self, name: &str) -> Result<&FixtureModule<C, T>> {
        self.side_modules
            .get(name)
            .ok_or_else(|| FixtureError::unknown_module(name))
    }

    /// Registered side module names, sorted.
    pub fn side_module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.side_modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.side_modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.side_modules.is_empty()
    }
}

impl<C, T: Timer> fmt::Debug for ModuleRegistry<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("main", &self.main)
            .field("side_modules", &self.side_module_names())
            .finish()
    }
}
