// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fixture_runtime::impls::tokio::TokioTimer;
use fixture_runtime::{delay, delay_default, Timer};
use futures::FutureExt;
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_delay_yields_payload_after_duration() {
    // Arrange
    pause();
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    let value = delay(&timer, Duration::from_millis(100), 42).await;

    // Assert
    assert_eq!(value, 42);
    assert!(timer.now() - start >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_delay_is_pending_before_duration() {
    // Arrange
    pause();
    let timer = TokioTimer;
    let pending = delay(&timer, Duration::from_millis(100), "late");
    tokio::pin!(pending);

    // Act
    advance(Duration::from_millis(99)).await;

    // Assert
    assert_eq!(pending.as_mut().now_or_never(), None);
    assert_eq!(pending.await, "late");
}

#[tokio::test]
async fn test_delay_default_yields_empty_value() {
    pause();
    let timer = TokioTimer;

    let text: String = delay_default(&timer, Duration::from_millis(10)).await;
    let count: u32 = delay_default(&timer, Duration::from_millis(10)).await;

    assert_eq!(text, "");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_timer_armed_at_creation_not_first_poll() {
    // Arrange
    pause();
    let timer = TokioTimer;
    let start = timer.now();
    let pending = delay(&timer, Duration::from_millis(100), ());

    // Act
    advance(Duration::from_millis(60)).await;
    pending.await;

    // Assert
    let elapsed = timer.now() - start;
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(160));
}

#[tokio::test]
async fn test_concurrent_delays_complete_independently() {
    // Arrange
    pause();
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    let (short, long) = tokio::join!(
        delay(&timer, Duration::from_millis(100), "short"),
        delay(&timer, Duration::from_millis(1000), "long"),
    );

    // Assert
    assert_eq!((short, long), ("short", "long"));
    assert!(timer.now() - start >= Duration::from_millis(1000));
}
