//! Concurrent completions and claims against one record

use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use tricolor_pass::engine::{AttemptOutcome, CompletionHistory, EngineError};
use tricolor_pass::Tier;

use crate::common::{engine, pass, quest, repeatable_quest, reward, wallet};

#[test]
fn test_last_completion_slot_goes_to_exactly_one_caller() {
    for _ in 0..50 {
        let (engine, _) = engine(vec![quest(1, 5, 4)], vec![]);
        let barrier = Barrier::new(2);

        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    s.spawn(|| {
                        let history = CompletionHistory::new();
                        barrier.wait();
                        engine.complete_quest(1, &history, AttemptOutcome::Correct)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let capped = results
            .iter()
            .filter(|r| matches!(r, Err(EngineError::CapacityExceeded { quest_id: 1, .. })))
            .count();
        assert_eq!((ok, capped), (1, 1));
        assert_eq!(engine.store().quest(1).unwrap().current_completions, 5);
    }
}

#[test]
fn test_completion_counter_never_exceeds_cap() {
    let (engine, _) = engine(vec![repeatable_quest(3, 100)], vec![]);
    let threads = 16;
    let barrier = Barrier::new(threads);

    let successes: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    let history = CompletionHistory::new();
                    barrier.wait();
                    (0..10)
                        .filter(|_| {
                            engine
                                .complete_quest(3, &history, AttemptOutcome::Correct)
                                .is_ok()
                        })
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(successes, 100);
    let quest = engine.store().quest(3).unwrap();
    assert_eq!(quest.current_completions, quest.max_completions);
    assert!(engine.active_quests().is_empty());
}

#[test]
fn test_supply_race_hands_out_exactly_total_supply() {
    let (engine, _) = engine(vec![], vec![reward(1, 100, Tier::Bronze, 10)]);
    let threads = 32;
    let barrier = Barrier::new(threads);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let engine = &engine;
                let barrier = &barrier;
                s.spawn(move || {
                    let fan = pass(&wallet(i), Tier::Bronze, 150);
                    barrier.wait();
                    engine.claim_reward(1, &fan)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let claims: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(claims.len(), 10);
    assert!(
        results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(EngineError::SupplyExhausted { reward_id: 1 })))
    );

    let codes: HashSet<_> = claims.iter().map(|c| c.redemption_code.as_str()).collect();
    assert_eq!(codes.len(), 10);
    assert_eq!(engine.store().reward(1).unwrap().claimed_supply, 10);
    assert_eq!(engine.ledger().len(), 10);
}

#[test]
fn test_same_user_racing_claims_gets_one() {
    let (engine, _) = engine(vec![], vec![reward(1, 100, Tier::Bronze, 10)]);
    let fan = pass("0xfan", Tier::Bronze, 150);
    let barrier = Barrier::new(4);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    engine.claim_reward(1, &fan)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(engine.store().reward(1).unwrap().claimed_supply, 1);
}
