//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use tricolor_pass::clock::{FixedClock, HOUR_MS};
use tricolor_pass::engine::PassEngine;
use tricolor_pass::store::CatalogStore;
use tricolor_pass::{
    Pass, Quest, QuestId, QuestStatus, QuestType, Reward, RewardId, RewardType, Tier, Timestamp,
};

/// 2026-03-01T20:00:00Z, kickoff of the fixture match
pub const NOW: Timestamp = 1_772_395_200_000;

pub fn quest(id: QuestId, max_completions: u32, current_completions: u32) -> Quest {
    Quest {
        id,
        title: format!("Quest {}", id),
        description: "Escaneie o QR code no estádio".to_string(),
        quest_type: QuestType::ScanQr,
        xp_reward: 100,
        start_time: NOW - HOUR_MS,
        end_time: NOW + HOUR_MS,
        status: QuestStatus::Active,
        is_repeatable: false,
        max_completions,
        current_completions,
        verification_data: String::new(),
    }
}

pub fn repeatable_quest(id: QuestId, max_completions: u32) -> Quest {
    Quest {
        is_repeatable: true,
        quest_type: QuestType::Quiz,
        ..quest(id, max_completions, 0)
    }
}

pub fn reward(id: RewardId, xp_required: u64, min_tier: Tier, total_supply: u32) -> Reward {
    Reward {
        id,
        title: format!("Reward {}", id),
        description: "Benefício exclusivo".to_string(),
        reward_type: RewardType::DiscountCoupon,
        xp_required,
        min_tier_required: min_tier,
        total_supply,
        claimed_supply: 0,
        valid_from: NOW - HOUR_MS,
        valid_until: NOW + HOUR_MS,
        is_active: true,
        metadata_uri: String::new(),
        redeem_code: String::new(),
    }
}

pub fn pass(owner: &str, tier: Tier, xp: u64) -> Pass {
    let mut pass = Pass::mint(1, owner, tier);
    pass.xp_points = xp;
    pass
}

/// Engine over the given catalog with a clock frozen at [`NOW`]
pub fn engine(quests: Vec<Quest>, rewards: Vec<Reward>) -> (Arc<PassEngine>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(NOW));
    let store = Arc::new(CatalogStore::new(quests, rewards));
    (Arc::new(PassEngine::new(store, clock.clone())), clock)
}

pub fn wallet(i: usize) -> String {
    format!("0x{:040x}", i)
}
