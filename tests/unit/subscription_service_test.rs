//! Unit tests for the subscription/trial gate, persisted as a process-local
//! JSON state file.

use std::fs;
use std::path::Path;

use markd::config::TRIAL_LENGTH_DAYS;
use markd::services::subscription_service::{SubscriptionService, SubscriptionServiceTrait};

fn temp_state_path() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("subscription.json").to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_defaults_when_no_state_file() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();

    assert!(!service.is_onboarding_completed());
    assert!(!service.is_subscribed());
    assert!(!service.is_trial_active());
    assert_eq!(service.trial_remaining_days(), 0);
}

#[test]
fn test_onboarding_flag_persists_across_instances() {
    let (_dir, path) = temp_state_path();

    let mut service = SubscriptionService::new(Some(path.clone()));
    service.load().unwrap();
    service.mark_onboarding_completed().unwrap();

    let mut second = SubscriptionService::new(Some(path));
    second.load().unwrap();
    assert!(second.is_onboarding_completed());
}

#[test]
fn test_trial_starts_with_full_length() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();

    service.start_trial().unwrap();
    assert_eq!(service.trial_remaining_days(), TRIAL_LENGTH_DAYS);
    assert!(service.is_trial_active());
}

#[test]
fn test_trial_expired_when_started_long_ago() {
    let (_dir, path) = temp_state_path();

    // State written by a past session, trial started well over the limit ago.
    let eight_days_ms: i64 = 8 * 24 * 60 * 60 * 1000;
    let started_at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
        - eight_days_ms;
    fs::write(
        Path::new(&path),
        format!(r#"{{"onboardingCompleted":true,"trialStartedAt":{}}}"#, started_at),
    )
    .unwrap();

    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();
    assert_eq!(service.trial_remaining_days(), 0);
    assert!(!service.is_trial_active());
}

#[test]
fn test_trial_never_started_is_zero_days() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();

    assert_eq!(service.trial_remaining_days(), 0);
    assert!(!service.is_trial_active());
}

#[test]
fn test_activate_and_deactivate_subscription() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path.clone()));
    service.load().unwrap();

    service.activate_subscription().unwrap();
    assert!(service.is_subscribed());

    let mut second = SubscriptionService::new(Some(path));
    second.load().unwrap();
    assert!(second.is_subscribed());

    second.deactivate_subscription().unwrap();
    assert!(!second.is_subscribed());
}

#[test]
fn test_activate_with_product_records_product_details() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();

    service
        .activate_subscription_with_product("com.markd.premium.yearly", Some(1_900_000_000_000))
        .unwrap();

    assert!(service.is_subscribed());
    assert_eq!(service.state().product_id.as_deref(), Some("com.markd.premium.yearly"));
    assert_eq!(service.state().expires_at, Some(1_900_000_000_000));

    service.deactivate_subscription().unwrap();
    assert_eq!(service.state().product_id, None);
    assert_eq!(service.state().expires_at, None);
}

#[test]
fn test_reset_clears_everything() {
    let (_dir, path) = temp_state_path();
    let mut service = SubscriptionService::new(Some(path.clone()));
    service.load().unwrap();

    service.mark_onboarding_completed().unwrap();
    service.start_trial().unwrap();
    service.activate_subscription().unwrap();

    service.reset().unwrap();
    assert!(!service.is_onboarding_completed());
    assert!(!service.is_subscribed());
    assert_eq!(service.trial_remaining_days(), 0);

    let mut second = SubscriptionService::new(Some(path));
    second.load().unwrap();
    assert!(!second.is_onboarding_completed());
}

#[test]
fn test_malformed_state_file_is_an_error() {
    let (_dir, path) = temp_state_path();
    fs::write(Path::new(&path), "{ broken").unwrap();

    let mut service = SubscriptionService::new(Some(path));
    assert!(service.load().is_err());
}

#[test]
fn test_state_file_ignores_unknown_fields_and_fills_missing_ones() {
    let (_dir, path) = temp_state_path();
    // A file written by an older build: missing the extended fields.
    fs::write(Path::new(&path), r#"{"subscriptionActive":true}"#).unwrap();

    let mut service = SubscriptionService::new(Some(path));
    service.load().unwrap();
    assert!(service.is_subscribed());
    assert_eq!(service.state().product_id, None);
}
