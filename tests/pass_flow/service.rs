//! Service layer over the mock contract

use std::sync::Arc;

use tricolor_pass::clock::FixedClock;
use tricolor_pass::config::Config;
use tricolor_pass::contract::{MockPassContract, PassContract};
use tricolor_pass::engine::{AttemptOutcome, EngineError, PassEngine};
use tricolor_pass::service::{PassEvent, PassService, ServiceError};
use tricolor_pass::store::CatalogStore;
use tricolor_pass::{Pass, Tier};

use crate::common::{NOW, repeatable_quest, reward};

fn seeded_service() -> PassService {
    let now = chrono::DateTime::from_timestamp_millis(NOW).unwrap();
    let mut config = Config::seeded(now);
    config.settings.contract_latency_ms = 0;
    PassService::from_config(&config, Arc::new(FixedClock::new(NOW)))
}

#[tokio::test]
async fn test_concurrent_attempts_by_one_user_on_single_quest() {
    let service = seeded_service();
    service.mint_pass("0xfan", Tier::Bronze).await.unwrap();

    let (a, b) = tokio::join!(
        service.complete_quest("0xfan", 1, AttemptOutcome::Correct),
        service.complete_quest("0xfan", 1, AttemptOutcome::Correct),
    );
    let results = [a, b];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(ServiceError::Engine(EngineError::AlreadyCompleted { quest_id: 1 }))
    )));
    assert_eq!(service.pass("0xfan").await.unwrap().xp_points, 100);
}

#[tokio::test]
async fn test_racing_mints_for_one_owner() {
    let clock = Arc::new(FixedClock::new(NOW));
    let engine = Arc::new(PassEngine::new(Arc::new(CatalogStore::default()), clock));
    let service = PassService::new(engine, Arc::new(MockPassContract::from_millis(20)));

    // Both calls see no pass on lookup before either mint lands
    let (a, b) = tokio::join!(
        service.mint_pass("0xfan", Tier::Bronze),
        service.mint_pass("0xfan", Tier::Silver),
    );
    let results = [a, b];

    let minted: Vec<&Pass> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(minted.len(), 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(ServiceError::PassAlreadyMinted { owner, token_id })
            if owner == "0xfan" && *token_id == minted[0].token_id
    )));
    assert_eq!(service.take_events().len(), 1);
}

#[tokio::test]
async fn test_full_session_from_seed_catalog() {
    let service = seeded_service();
    service.mint_pass("0xfan", Tier::Bronze).await.unwrap();

    service
        .complete_quest("0xfan", 1, AttemptOutcome::Correct)
        .await
        .unwrap();
    service
        .complete_quest("0xfan", 2, AttemptOutcome::Correct)
        .await
        .unwrap();
    service
        .complete_quest("0xfan", 3, AttemptOutcome::Incorrect)
        .await
        .unwrap();
    assert_eq!(service.pass("0xfan").await.unwrap().xp_points, 200);

    service.award_xp("0xfan", 1_800).await.unwrap();
    let progress = service.progress("0xfan").await.unwrap();
    assert_eq!(progress.tier, Tier::Silver);
    assert_eq!(progress.xp_to_next, 3_000);

    let ids: Vec<_> = service
        .available_rewards("0xfan")
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let claim = service.claim_reward("0xfan", 2).await.unwrap();
    assert_eq!(
        service.engine().store().reward(2).unwrap().claimed_supply,
        13
    );
    service.redeem("0xfan", 2, &claim.redemption_code).unwrap();

    let events = service.take_events();
    assert!(events.contains(&PassEvent::TierUp {
        owner: "0xfan".to_string(),
        from: Tier::Bronze,
        to: Tier::Silver,
    }));
    assert!(matches!(events.last(), Some(PassEvent::RewardUsed { reward_id: 2, .. })));
    assert!(service.take_events().is_empty());
}

#[tokio::test]
async fn test_quest_cap_shared_between_users() {
    let clock = Arc::new(FixedClock::new(NOW));
    let store = Arc::new(CatalogStore::new(vec![repeatable_quest(1, 3)], vec![]));
    let engine = Arc::new(PassEngine::new(store, clock));
    let service = PassService::new(engine, Arc::new(MockPassContract::default()));

    for owner in ["0xa", "0xb"] {
        service.mint_pass(owner, Tier::Bronze).await.unwrap();
    }

    service.complete_quest("0xa", 1, AttemptOutcome::Correct).await.unwrap();
    service.complete_quest("0xa", 1, AttemptOutcome::Incorrect).await.unwrap();
    service.complete_quest("0xb", 1, AttemptOutcome::Correct).await.unwrap();

    let err = service
        .complete_quest("0xb", 1, AttemptOutcome::Correct)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Engine(EngineError::CapacityExceeded { quest_id: 1, max_completions: 3 })
    ));
    assert_eq!(service.quest_status("0xa", 1).unwrap().completion_count, 2);
    assert!(service.active_quests().is_empty());
}

#[tokio::test]
async fn test_claim_needs_pass_and_checks_seeded_pass() {
    let mut silver = Pass::mint(123, "0xvip", Tier::Silver);
    silver.xp_points = 2_150;
    let contract = Arc::new(MockPassContract::default().with_pass(silver));

    let clock = Arc::new(FixedClock::new(NOW));
    let store = Arc::new(CatalogStore::new(
        vec![],
        vec![reward(2, 500, Tier::Silver, 50), reward(4, 3_000, Tier::Gold, 5)],
    ));
    let service = PassService::new(Arc::new(PassEngine::new(store, clock)), contract.clone());

    assert!(matches!(
        service.claim_reward("0xnobody", 2).await,
        Err(ServiceError::PassNotFound { .. })
    ));
    assert!(service.claim_reward("0xvip", 2).await.is_ok());
    assert!(matches!(
        service.claim_reward("0xvip", 4).await,
        Err(ServiceError::Engine(EngineError::InsufficientXp { .. }))
    ));

    let minted = contract.mint_pass("0xnew", Tier::Bronze).await.unwrap();
    assert_eq!(minted.token_id, 124);
}
