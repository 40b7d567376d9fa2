use std::env;
use std::sync::Mutex;

use synjar_core::deployment::{DeploymentMode, DeploymentResolver, MODE_ENV, SMTP_HOST_ENV};

// Process environment is shared across test threads; serialize every test
// that touches it.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_clean_env<F: FnOnce()>(f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var(MODE_ENV);
    env::remove_var(SMTP_HOST_ENV);
    f();
    env::remove_var(MODE_ENV);
    env::remove_var(SMTP_HOST_ENV);
}

#[test]
fn defaults_to_self_hosted() {
    with_clean_env(|| {
        let resolver = DeploymentResolver::new();

        assert_eq!(resolver.mode(), DeploymentMode::SelfHosted);
        assert!(resolver.is_self_hosted());
        assert!(!resolver.is_cloud());
        assert!(!resolver.is_email_configured());
    });
}

#[test]
fn invariant_cached_mode_survives_env_mutation() {
    with_clean_env(|| {
        let resolver = DeploymentResolver::new();

        env::set_var(MODE_ENV, "cloud");
        assert_eq!(resolver.mode(), DeploymentMode::Cloud);

        // Cache must not observe the mutation
        env::remove_var(MODE_ENV);
        assert_eq!(resolver.mode(), DeploymentMode::Cloud);
        assert!(resolver.is_cloud());

        resolver.reset_cache();
        assert_eq!(resolver.mode(), DeploymentMode::SelfHosted);
    });
}

#[test]
fn unrecognized_mode_value_falls_back() {
    with_clean_env(|| {
        let resolver = DeploymentResolver::new();

        env::set_var(MODE_ENV, "on-prem");
        assert_eq!(resolver.mode(), DeploymentMode::SelfHosted);
    });
}

#[test]
fn email_configured_reads_live() {
    with_clean_env(|| {
        let resolver = DeploymentResolver::new();
        assert!(!resolver.is_email_configured());

        env::set_var(SMTP_HOST_ENV, "smtp.synjar.io");
        assert!(resolver.is_email_configured());

        env::set_var(SMTP_HOST_ENV, "");
        assert!(!resolver.is_email_configured());
    });
}

#[test]
fn parse_accepts_exactly_two_literals() {
    assert_eq!(DeploymentMode::parse("cloud"), Some(DeploymentMode::Cloud));
    assert_eq!(
        DeploymentMode::parse("self-hosted"),
        Some(DeploymentMode::SelfHosted)
    );
    assert_eq!(DeploymentMode::parse("Cloud"), None);
    assert_eq!(DeploymentMode::parse("selfhosted"), None);
    assert_eq!(DeploymentMode::parse(""), None);
}

#[test]
fn mode_literals_round_trip() {
    assert_eq!(DeploymentMode::Cloud.as_str(), "cloud");
    assert_eq!(DeploymentMode::SelfHosted.as_str(), "self-hosted");
    assert_eq!(DeploymentMode::Cloud.to_string(), "cloud");
}
