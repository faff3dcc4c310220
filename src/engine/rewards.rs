//! Reward eligibility rules

use super::error::EngineError;
use crate::{Reward, Tier, Timestamp};

/// Whether a reward is active and inside its validity window at `now`
pub fn is_live(reward: &Reward, now: Timestamp) -> bool {
    reward.is_active && now >= reward.valid_from && now <= reward.valid_until
}

/// Rewards a member with `user_xp` / `user_tier` could claim at `now`
///
/// This list is a hint for display only; [`check_claim`] is the
/// authoritative gate.
pub fn available_rewards(
    catalog: &[Reward],
    user_xp: u64,
    user_tier: Tier,
    now: Timestamp,
) -> Vec<&Reward> {
    catalog
        .iter()
        .filter(|r| {
            is_live(r, now)
                && r.claimed_supply < r.total_supply
                && user_xp >= r.xp_required
                && user_tier >= r.min_tier_required
        })
        .collect()
}

/// Authoritative eligibility check for a claim
///
/// Order: availability, XP, tier, supply.
pub fn check_claim(
    reward: &Reward,
    user_xp: u64,
    user_tier: Tier,
    now: Timestamp,
) -> Result<(), EngineError> {
    check_eligibility(reward, user_xp, user_tier, now)?;
    check_supply(reward)
}

/// Member-side gates of a claim (availability, XP, tier), without supply
pub fn check_eligibility(
    reward: &Reward,
    user_xp: u64,
    user_tier: Tier,
    now: Timestamp,
) -> Result<(), EngineError> {
    if !is_live(reward, now) {
        return Err(EngineError::RewardUnavailable {
            reward_id: reward.id,
        });
    }
    if user_xp < reward.xp_required {
        return Err(EngineError::InsufficientXp {
            required: reward.xp_required,
            available: user_xp,
        });
    }
    if user_tier < reward.min_tier_required {
        return Err(EngineError::InsufficientTier {
            required: reward.min_tier_required,
            current: user_tier,
        });
    }
    Ok(())
}

pub fn check_supply(reward: &Reward) -> Result<(), EngineError> {
    if reward.claimed_supply >= reward.total_supply {
        return Err(EngineError::SupplyExhausted {
            reward_id: reward.id,
        });
    }
    Ok(())
}

/// Consume one unit of supply; returns the new claimed count
pub fn consume_supply(reward: &mut Reward) -> Result<u32, EngineError> {
    check_supply(reward)?;
    reward.claimed_supply += 1;
    Ok(reward.claimed_supply)
}
