// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live-timer accounting.
//!
//! Every sleep created through a [`TrackedTimer`] holds a [`TimerHandle`]
//! acquired from a shared [`TimerRegistry`]. The handle is released when the
//! sleep completes or when it is dropped unfinished, so the registry count
//! returns to its previous value on every exit path.

use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::ready;
use pin_project::pin_project;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of timer handles that have been acquired and not yet released.
///
/// Clones share the same count.
///
/// # Example
///
/// ```
/// use fixture_runtime::TimerRegistry;
///
/// let registry = TimerRegistry::new();
/// let handle = registry.acquire();
/// assert_eq!(registry.live(), 1);
///
/// drop(handle);
/// assert_eq!(registry.live(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerRegistry {
    live: Arc<AtomicUsize>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire one timer handle. The count drops again when the handle is dropped.
    pub fn acquire(&self) -> TimerHandle {
        let live = self.live.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("timer acquired, {} live", live);
        TimerHandle {
            live: Arc::clone(&self.live),
        }
    }

    /// Number of handles currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }
}

/// One acquired timer. Releases itself on drop.
#[derive(Debug)]
pub struct TimerHandle {
    live: Arc<AtomicUsize>,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let live = self.live.fetch_sub(1, Ordering::AcqRel) - 1;
        debug!("timer released, {} live", live);
    }
}

/// [`Timer`] wrapper that registers every sleep it creates.
#[derive(Clone, Debug)]
pub struct TrackedTimer<T> {
    inner: T,
    registry: TimerRegistry,
}

impl<T: Timer> TrackedTimer<T> {
    /// Wrap `inner` with a fresh registry.
    pub fn new(inner: T) -> Self {
        Self::with_registry(inner, TimerRegistry::new())
    }

    /// Wrap `inner`, counting its sleeps in an existing registry.
    pub fn with_registry(inner: T, registry: TimerRegistry) -> Self {
        Self { inner, registry }
    }

    pub fn registry(&self) -> &TimerRegistry {
        &self.registry
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Timer> Timer for TrackedTimer<T> {
    type Sleep = TrackedSleep<T::Sleep>;

    type Instant = T::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        TrackedSleep {
            sleep: self.inner.sleep_future(duration),
            handle: Some(self.registry.acquire()),
        }
    }

    fn now(&self) -> Self::Instant {
        self.inner.now()
    }
}

/// Sleep future holding a [`TimerHandle`] until it completes or is dropped.
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct TrackedSleep<S> {
    #[pin]
    sleep: S,
    handle: Option<TimerHandle>,
}

impl<S: Future<Output = ()>> Future for TrackedSleep<S> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.project();
        ready!(this.sleep.poll(cx));
        this.handle.take();
        Poll::Ready(())
    }
}
