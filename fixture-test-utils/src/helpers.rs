// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::time::Duration;
use fixture_core::{FixtureConfig, FixtureModule, Timer, TrackedTimer};
use fixture_runtime::impls::tokio::TokioTimer;
use futures::FutureExt;

/// Fixture module on the Tokio clock with live-timer accounting.
pub type TrackedTokioModule<C> = FixtureModule<C, TrackedTimer<TokioTimer>>;

/// Build a [`TrackedTokioModule`] with the given config.
pub fn tracked_module<C>(config: FixtureConfig, collaborator: C) -> TrackedTokioModule<C> {
    FixtureModule::with_config(config, collaborator, TrackedTimer::new(TokioTimer))
}

/// Await `future` and report how long it took on `timer`'s clock.
pub async fn settle_timed<T, F>(timer: &T, future: F) -> (F::Output, Duration)
where
    T: Timer,
    F: Future,
{
    let start = timer.now();
    let output = future.await;
    (output, timer.now() - start)
}

/// Poll `future` once and panic if it is already settled.
///
/// # Panics
/// Panics if the future returns `Poll::Ready`.
pub fn assert_pending<F>(future: Pin<&mut F>)
where
    F: Future,
{
    assert!(
        future.now_or_never().is_none(),
        "Expected future to still be pending, but it settled"
    );
}
