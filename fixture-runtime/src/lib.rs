// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer abstraction used by the fixture functions.
//!
//! The crate provides three pieces:
//!
//! - [`Timer`] - the seam between the fixtures and an async runtime's clock
//! - [`TrackedTimer`] - a `Timer` wrapper that counts live timer handles in a
//!   [`TimerRegistry`], so a caller can check that abandoned delays release
//!   their timers
//! - [`delay`] / [`delay_default`] - the suspension helper every delayed
//!   fixture awaits
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use fixture_runtime::{delay, impls::tokio::TokioTimer, TrackedTimer};
//! use std::time::Duration;
//!
//! let timer = TrackedTimer::new(TokioTimer);
//! let pending = delay(&timer, Duration::from_millis(5), "done");
//! assert_eq!(timer.registry().live(), 1);
//!
//! assert_eq!(pending.await, "done");
//! assert_eq!(timer.registry().live(), 0);
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod delay;
pub mod impls;
pub mod timer;
pub mod tracked;

pub use self::delay::{delay, delay_default, Delay};
pub use self::timer::Timer;
pub use self::tracked::{TimerHandle, TimerRegistry, TrackedSleep, TrackedTimer};
