// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fixture_core::{FixtureConfig, FixtureModule, TimerRegistry, TokioTimer, TrackedTimer};
use fixture_test_utils::{assert_pending, double, tracked_module};
use std::time::Duration;
use tokio::time::{pause, timeout};

#[tokio::test]
async fn test_dropping_pending_resolve_releases_timer() {
    // Arrange
    pause();
    let module = tracked_module(FixtureConfig::fast(), double);
    let before = module.timer().registry().live();

    // Act
    {
        let pending = module.resolve_after_delay(42);
        tokio::pin!(pending);
        assert_pending(pending.as_mut());
        assert_eq!(module.timer().registry().live(), before + 1);
    }

    // Assert
    assert_eq!(module.timer().registry().live(), before);
}

#[tokio::test]
async fn test_timeout_abandoning_resolve_releases_timer() {
    pause();
    let module = tracked_module(FixtureConfig::slow(), double);
    let before = module.timer().registry().live();

    let outcome = timeout(Duration::from_millis(10), module.resolve_after_delay(42)).await;

    assert!(outcome.is_err());
    assert_eq!(module.timer().registry().live(), before);
}

#[tokio::test]
async fn test_timeout_abandoning_reject_releases_timer() {
    pause();
    let module = tracked_module(FixtureConfig::slow(), double);

    let outcome = timeout(Duration::from_millis(10), module.reject_after_delay()).await;

    assert!(outcome.is_err());
    assert_eq!(module.timer().registry().live(), 0);
}

#[tokio::test]
async fn test_aborted_task_releases_timer() {
    // Arrange
    pause();
    let registry = TimerRegistry::new();
    let timer = TrackedTimer::with_registry(TokioTimer, registry.clone());
    let module = FixtureModule::with_config(FixtureConfig::slow(), double, timer);

    let handle = tokio::spawn(async move { module.resolve_after_delay(42).await });
    tokio::task::yield_now().await;
    assert_eq!(registry.live(), 1);

    // Act
    handle.abort();
    let joined = handle.await;

    // Assert
    assert!(joined.is_err_and(|e| e.is_cancelled()));
    assert_eq!(registry.live(), 0);
}

#[tokio::test]
async fn test_many_abandoned_calls_leave_no_live_timers() {
    pause();
    let module = tracked_module(FixtureConfig::fast(), double);

    for i in 0..50 {
        let _ = timeout(Duration::from_millis(1), module.resolve_after_delay(i)).await;
        let _ = timeout(Duration::from_millis(1), module.reject_after_delay()).await;
    }

    assert_eq!(module.timer().registry().live(), 0);
}
