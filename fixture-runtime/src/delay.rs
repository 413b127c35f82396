// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timed suspension that yields a payload.
//!
//! [`delay`] arms a timer immediately and returns a [`Delay`] future. Awaiting
//! it suspends only the awaiting task; once the timer fires the future yields
//! the payload. The underlying sleep is dropped as soon as it completes, and
//! dropping a pending `Delay` drops the sleep with it, so the timer never
//! outlives the future.

use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::ready;
use pin_project::pin_project;

/// Future returned by [`delay`] and [`delay_default`].
///
/// # Panics
///
/// Polling again after it has returned `Poll::Ready` panics.
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct Delay<S, V> {
    #[pin]
    sleep: Option<S>,
    duration: Duration,
    payload: Option<V>,
}

impl<S, V> Delay<S, V> {
    /// Duration the timer was armed with.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the timer has already fired and been released.
    pub fn is_elapsed(&self) -> bool {
        self.sleep.is_none()
    }
}

impl<S, V> Future for Delay<S, V>
where
    S: Future<Output = ()>,
{
    type Output = V;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<V> {
        let mut this = self.project();

        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
            ready!(sleep.poll(cx));
            this.sleep.set(None);
            debug!("delay of {:?} elapsed", this.duration);
        }

        match this.payload.take() {
            Some(payload) => Poll::Ready(payload),
            None => panic!("`Delay` polled after completion"),
        }
    }
}

/// Suspend for `duration`, then yield `payload`.
///
/// The timer is armed by this call, so the returned future completes no
/// earlier than `duration` after `delay` returns, regardless of when it is
/// first polled.
///
/// # Panics
///
/// With [`TokioTimer`](crate::impls::tokio::TokioTimer), panics if called
/// outside a Tokio runtime, because the timer is armed here.
pub fn delay<T, V>(timer: &T, duration: Duration, payload: V) -> Delay<T::Sleep, V>
where
    T: Timer,
{
    debug!("delay of {:?} armed", duration);
    Delay {
        sleep: Some(timer.sleep_future(duration)),
        duration,
        payload: Some(payload),
    }
}

/// [`delay`] with the payload's empty value.
///
/// # Panics
///
/// Same as [`delay`]: panics outside a Tokio runtime when used with
/// [`TokioTimer`](crate::impls::tokio::TokioTimer).
pub fn delay_default<T, V>(timer: &T, duration: Duration) -> Delay<T::Sleep, V>
where
    T: Timer,
    V: Default,
{
    delay(timer, duration, V::default())
}
