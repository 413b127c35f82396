// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fixture_core::{
    FixtureConfig, FixtureModule, ModuleKind, TokioTimer, TrackedTimer, FAST_DELAY, SLOW_DELAY,
};
use fixture_test_utils::{double, settle_timed, tracked_module};
use std::time::Duration;
use tokio::time::pause;

#[test]
fn test_esm_and_cjs_share_fast_delay() {
    let esm = FixtureModule::esm(double, TokioTimer);
    let cjs = FixtureModule::cjs(double, TokioTimer);

    assert_eq!(esm.kind(), ModuleKind::Esm);
    assert_eq!(cjs.kind(), ModuleKind::Cjs);
    assert_eq!(esm.delay(), FAST_DELAY);
    assert_eq!(cjs.delay(), FAST_DELAY);
}

#[tokio::test]
async fn test_slow_variant_waits_at_least_one_second() -> anyhow::Result<()> {
    // Arrange
    pause();
    let module = tracked_module(FixtureConfig::slow().with_kind(ModuleKind::Cjs), double);

    // Act
    let (value, elapsed) = settle_timed(module.timer(), module.resolve_after_delay(42)).await;

    // Assert
    assert_eq!(value?, 42);
    assert!(elapsed >= SLOW_DELAY);
    Ok(())
}

#[tokio::test]
async fn test_custom_delay_is_honoured() {
    pause();
    let config = FixtureConfig::default().with_delay(Duration::from_millis(7));
    let module = FixtureModule::with_config(config, double, TrackedTimer::new(TokioTimer));

    let (outcome, elapsed) = settle_timed(module.timer(), module.reject_after_delay()).await;

    assert!(outcome.is_err());
    assert!(elapsed >= Duration::from_millis(7));
    assert_eq!(module.config(), config);
}

#[tokio::test]
async fn test_fast_settles_before_slow() -> anyhow::Result<()> {
    pause();
    let fast = tracked_module(FixtureConfig::fast(), double);
    let slow = tracked_module(FixtureConfig::slow(), double);

    let winner = tokio::select! {
        value = fast.resolve_after_delay("fast") => value?,
        value = slow.resolve_after_delay("slow") => value?,
    };

    assert_eq!(winner, "fast");
    assert_eq!(slow.timer().registry().live(), 0);
    Ok(())
}
