//! Tier progression and eligibility scenarios

use tricolor_pass::clock::HOUR_MS;
use tricolor_pass::engine::quests::{active_quests, CompletionHistory};
use tricolor_pass::engine::tiers::{next_tier, progress_percent, tier_for, xp_to_next_tier};
use tricolor_pass::engine::{AttemptOutcome, EngineError};
use tricolor_pass::{QuestStatus, Tier};

use crate::common::{self, NOW, engine, pass, quest, reward};

#[test]
fn test_tier_for_is_monotonic() {
    let mut previous = Tier::Bronze;
    for xp in 0..=6_000 {
        let tier = tier_for(xp);
        assert!(tier >= previous, "tier went down at {} XP", xp);
        previous = tier;
    }
    assert_eq!(tier_for(1_999), Tier::Bronze);
    assert_eq!(tier_for(2_000), Tier::Silver);
    assert_eq!(tier_for(4_999), Tier::Silver);
    assert_eq!(tier_for(5_000), Tier::Gold);
}

#[test]
fn test_next_tier_never_downgrades() {
    assert_eq!(next_tier(Tier::Silver, 100), Tier::Silver);
    assert_eq!(next_tier(Tier::Gold, 0), Tier::Gold);
    for tier in Tier::all() {
        for xp in [0, 1_999, 2_000, 4_999, 5_000, 80_000] {
            assert!(next_tier(*tier, xp) >= *tier);
        }
    }
}

#[test]
fn test_gold_is_terminal() {
    for xp in [0, 5_000, 123_456] {
        assert_eq!(xp_to_next_tier(Tier::Gold, xp), 0);
        assert_eq!(progress_percent(Tier::Gold, xp), 100.0);
    }
}

#[test]
fn test_full_quest_excluded_from_active_set() {
    let full = quest(1, 1, 1);
    let open = quest(2, 1, 0);
    let catalog = vec![full, open];

    let active: Vec<_> = active_quests(&catalog, NOW).iter().map(|q| q.id).collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn test_active_quests_keep_catalog_order() {
    let mut paused = quest(2, 10, 0);
    paused.status = QuestStatus::Paused;
    let catalog = vec![quest(5, 10, 0), paused, quest(1, 10, 0), quest(3, 10, 0)];

    let active: Vec<_> = active_quests(&catalog, NOW).iter().map(|q| q.id).collect();
    assert_eq!(active, vec![5, 1, 3]);
}

#[test]
fn test_quest_window_is_inclusive() {
    let (engine, clock) = engine(vec![quest(1, 10, 0)], vec![]);
    let history = CompletionHistory::new();

    clock.set(NOW + HOUR_MS);
    assert!(engine.complete_quest(1, &history, AttemptOutcome::Correct).is_ok());

    clock.set(NOW + HOUR_MS + 1);
    assert_eq!(
        engine.complete_quest(1, &history, AttemptOutcome::Correct),
        Err(EngineError::QuestUnavailable { quest_id: 1 })
    );
}

#[test]
fn test_claim_xp_boundary_is_inclusive() {
    let (engine, _) = engine(vec![], vec![reward(1, 100, Tier::Bronze, 10)]);

    assert_eq!(
        engine.claim_reward(1, &pass("0xa", Tier::Bronze, 99)),
        Err(EngineError::InsufficientXp {
            required: 100,
            available: 99
        })
    );
    assert!(engine.claim_reward(1, &pass("0xa", Tier::Bronze, 100)).is_ok());
}

#[test]
fn test_claim_checks_tier_even_when_not_listed() {
    let (engine, _) = engine(vec![], vec![reward(2, 500, Tier::Silver, 50)]);
    let fan = pass("0xa", Tier::Bronze, 1_500);

    assert!(engine.available_rewards(&fan).is_empty());
    assert_eq!(
        engine.claim_reward(2, &fan),
        Err(EngineError::InsufficientTier {
            required: Tier::Silver,
            current: Tier::Bronze
        })
    );
}

#[test]
fn test_award_crossing_into_gold() {
    let (engine, _) = engine(vec![], vec![]);
    let award = engine.award_xp(&pass("0xa", Tier::Silver, 4_999), 1).unwrap();

    assert_eq!(award.pass.xp_points, 5_000);
    assert_eq!(award.new_tier, Tier::Gold);
    assert!(award.tier_changed);
    assert_eq!(award.tier_up(), Some((Tier::Silver, Tier::Gold)));
}

#[test]
fn test_award_within_band_reports_no_change() {
    let (engine, _) = engine(vec![], vec![]);
    let award = engine.award_xp(&pass("0xa", Tier::Silver, 2_100), 50).unwrap();
    assert!(!award.tier_changed);
    assert_eq!(award.tier_up(), None);

    assert_eq!(
        engine.award_xp(&pass("0xa", Tier::Silver, 2_100), 0),
        Err(EngineError::InvalidAmount { amount: 0 })
    );
}

#[test]
fn test_single_unit_reward_goes_to_first_claimer() {
    let (engine, _) = engine(vec![], vec![reward(1, 100, Tier::Bronze, 1)]);

    let claim = engine
        .claim_reward(1, &pass(&common::wallet(1), Tier::Bronze, 150))
        .unwrap();
    assert_eq!(claim.reward_id, 1);
    assert_eq!(engine.store().reward(1).unwrap().claimed_supply, 1);

    assert_eq!(
        engine.claim_reward(1, &pass(&common::wallet(2), Tier::Bronze, 150)),
        Err(EngineError::SupplyExhausted { reward_id: 1 })
    );
}
