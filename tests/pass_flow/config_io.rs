//! Config files on disk

use std::sync::Arc;

use tempfile::tempdir;
use tricolor_pass::clock::FixedClock;
use tricolor_pass::config::Config;
use tricolor_pass::service::PassService;
use tricolor_pass::Tier;

use crate::common::NOW;

#[test]
fn test_local_config_overrides_defaults() {
    let dir = tempdir().unwrap();
    let now = chrono::DateTime::from_timestamp_millis(NOW).unwrap();

    let mut config = Config::seeded(now);
    config.settings.code_prefix = "TRI".to_string();
    config.rewards.truncate(1);
    config
        .save_to_file(&dir.path().join(".tricolor/config.toml"))
        .unwrap();

    let loaded = Config::from_dir(dir.path()).unwrap();
    assert_eq!(loaded.settings.code_prefix, "TRI");
    assert_eq!(loaded.rewards.len(), 1);
    assert!(!dir.path().join(".tricolor/config.toml.tmp").exists());
}

#[test]
fn test_invalid_catalog_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[rewards]]
id = 1
title = "Camisa"
description = "Camisa oficial"
reward_type = "MERCHANDISE"
xp_required = 100
min_tier_required = "BRONZE"
total_supply = 2
claimed_supply = 3
valid_from = "2026-01-01T00:00:00Z"
valid_until = "2026-06-01T00:00:00Z"
"#,
    )
    .unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid supply"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[tokio::test]
async fn test_configured_prefix_reaches_codes() {
    let now = chrono::DateTime::from_timestamp_millis(NOW).unwrap();
    let mut config = Config::seeded(now);
    config.settings.code_prefix = "TRI".to_string();
    config.settings.contract_latency_ms = 0;
    config.settings.wrong_answer_xp_percent = 20;

    let service = PassService::from_config(&config, Arc::new(FixedClock::new(NOW)));
    service.mint_pass("0xfan", Tier::Bronze).await.unwrap();
    service.award_xp("0xfan", 100).await.unwrap();

    let claim = service.claim_reward("0xfan", 1).await.unwrap();
    assert!(claim.redemption_code.starts_with("TRI1"));

    let report = service
        .complete_quest("0xfan", 3, tricolor_pass::engine::AttemptOutcome::Incorrect)
        .await
        .unwrap();
    assert_eq!(report.completion.xp_earned, 10);
}
