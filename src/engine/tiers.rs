//! XP and tier system
//!
//! Defines tier thresholds and the progress math shown on the pass card.

use crate::Tier;

/// XP at which a pass reaches Silver
pub const SILVER_XP: u64 = 2_000;

/// XP at which a pass reaches Gold
pub const GOLD_XP: u64 = 5_000;

/// Tier band definition
#[derive(Debug, Clone)]
pub struct TierBand {
    pub tier: Tier,
    pub xp_required: u64,
}

/// All tier bands (must be sorted by xp_required)
pub static TIER_BANDS: &[TierBand] = &[
    TierBand {
        tier: Tier::Bronze,
        xp_required: 0,
    },
    TierBand {
        tier: Tier::Silver,
        xp_required: SILVER_XP,
    },
    TierBand {
        tier: Tier::Gold,
        xp_required: GOLD_XP,
    },
];

impl TierBand {
    /// Band for a given tier
    pub fn of(tier: Tier) -> &'static TierBand {
        TIER_BANDS
            .iter()
            .find(|b| b.tier == tier)
            .unwrap_or(&TIER_BANDS[0])
    }

    /// XP threshold of the band above this one (None for Gold)
    pub fn next_threshold(&self) -> Option<u64> {
        self.tier.next().map(|t| TierBand::of(t).xp_required)
    }
}

/// Tier implied by an XP total
pub fn tier_for(xp: u64) -> Tier {
    TIER_BANDS
        .iter()
        .rev()
        .find(|b| xp >= b.xp_required)
        .map(|b| b.tier)
        .unwrap_or(Tier::Bronze)
}

/// Tier after reaching `new_xp`, never lower than `current`
pub fn next_tier(current: Tier, new_xp: u64) -> Tier {
    current.max(tier_for(new_xp))
}

/// XP still missing to leave `tier` (0 at Gold or past the threshold)
pub fn xp_to_next_tier(tier: Tier, xp: u64) -> u64 {
    match TierBand::of(tier).next_threshold() {
        Some(threshold) => threshold.saturating_sub(xp),
        None => 0,
    }
}

/// Progress through the current band in percent (0.0 - 100.0)
pub fn progress_percent(tier: Tier, xp: u64) -> f64 {
    let band = TierBand::of(tier);
    match band.next_threshold() {
        Some(next) => {
            let xp_in_band = xp.saturating_sub(band.xp_required);
            let band_width = next - band.xp_required;
            ((xp_in_band as f64) / (band_width as f64) * 100.0).min(100.0)
        }
        None => 100.0,
    }
}

/// Snapshot of a pass's standing, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct TierProgress {
    pub tier: Tier,
    pub xp: u64,
    /// None if already Gold
    pub next_tier: Option<Tier>,
    pub xp_to_next: u64,
    pub progress_percent: f64,
}

impl TierProgress {
    pub fn new(tier: Tier, xp: u64) -> Self {
        Self {
            tier,
            xp,
            next_tier: tier.next(),
            xp_to_next: xp_to_next_tier(tier, xp),
            progress_percent: progress_percent(tier, xp),
        }
    }

    pub fn is_max_tier(&self) -> bool {
        self.next_tier.is_none()
    }
}
