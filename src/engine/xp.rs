//! XP awards and tier-up detection

use super::error::EngineError;
use super::tiers::next_tier;
use crate::{Pass, Tier};

/// Outcome of awarding XP to a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAward {
    pub pass: Pass,
    /// True only when this award crossed into a higher tier
    pub tier_changed: bool,
    pub previous_tier: Tier,
    pub new_tier: Tier,
}

impl XpAward {
    /// The crossing, if any, as (from, to)
    pub fn tier_up(&self) -> Option<(Tier, Tier)> {
        self.tier_changed
            .then_some((self.previous_tier, self.new_tier))
    }
}

/// Add `amount` XP to a copy of `pass` and recompute its tier
pub fn award_xp(pass: &Pass, amount: u64) -> Result<XpAward, EngineError> {
    if amount == 0 {
        return Err(EngineError::InvalidAmount { amount });
    }

    let new_xp = pass.xp_points.saturating_add(amount);
    let new_tier = next_tier(pass.tier, new_xp);

    let mut updated = pass.clone();
    updated.xp_points = new_xp;
    updated.tier = new_tier;

    Ok(XpAward {
        pass: updated,
        tier_changed: new_tier != pass.tier,
        previous_tier: pass.tier,
        new_tier,
    })
}
