// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The four fixture operations as free functions.
//!
//! Each one is independently callable and holds no state between calls.
//! [`FixtureModule`](crate::FixtureModule) exposes the same operations with
//! its collaborator, timer and delay already bound.

use crate::collaborator::Collaborator;
use core::convert::Infallible;
use core::time::Duration;
use fixture_error::{FixtureError, Result};
use fixture_runtime::{delay, delay_default, Timer};

/// Call `collaborator` with `value` and return its result unchanged.
pub fn forward<C, V>(collaborator: &C, value: V) -> C::Output
where
    C: Collaborator<V>,
{
    collaborator.call(value)
}

/// Always fails with [`FixtureError::SomeError`].
///
/// # Errors
/// Every call returns `Err(FixtureError::SomeError)`.
///
/// # Example
///
/// ```
/// use fixture_core::ops;
///
/// let err = ops::fail().unwrap_err();
/// assert_eq!(err.to_string(), "some error");
/// ```
pub fn fail() -> Result<Infallible> {
    Err(FixtureError::SomeError)
}

/// Wait for `duration`, then fulfil with `value` unchanged.
///
/// # Errors
/// Never fails; the `Result` mirrors [`reject_after_delay`].
pub async fn resolve_after_delay<T, V>(timer: &T, duration: Duration, value: V) -> Result<V>
where
    T: Timer,
{
    let value = delay(timer, duration, value).await;
    debug!("resolved after {:?}", duration);
    Ok(value)
}

/// Wait for `duration`, then fail with [`FixtureError::Rejected`].
///
/// # Errors
/// Every call returns `Err(FixtureError::Rejected)` once the timer fires.
pub async fn reject_after_delay<T>(timer: &T, duration: Duration) -> Result<Infallible>
where
    T: Timer,
{
    delay_default::<_, ()>(timer, duration).await;
    debug!("rejected after {:?}", duration);
    Err(FixtureError::Rejected)
}
