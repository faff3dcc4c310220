use serde::{Deserialize, Serialize};

use super::{Tier, Timestamp};

/// Unique identifier for a reward
pub type RewardId = u64;

/// Kind of benefit a reward grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardType {
    DiscountCoupon,
    Merchandise,
    Experience,
    DigitalCollectible,
    RaffleEntry,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardType::DiscountCoupon => "discount_coupon",
            RewardType::Merchandise => "merchandise",
            RewardType::Experience => "experience",
            RewardType::DigitalCollectible => "digital_collectible",
            RewardType::RaffleEntry => "raffle_entry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewardType::DiscountCoupon => "Cupom de Desconto",
            RewardType::Merchandise => "Produto",
            RewardType::Experience => "Experiência",
            RewardType::DigitalCollectible => "Colecionável",
            RewardType::RaffleEntry => "Sorteio",
        }
    }
}

/// A redeemable benefit gated by XP, tier, time window and supply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub title: String,
    pub description: String,
    pub reward_type: RewardType,
    pub xp_required: u64,
    pub min_tier_required: Tier,
    pub total_supply: u32,
    /// Always <= total_supply
    pub claimed_supply: u32,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub is_active: bool,
    #[serde(default)]
    pub metadata_uri: String,
    /// Partner-side code shared by every claim of this reward
    #[serde(default)]
    pub redeem_code: String,
}

impl Reward {
    pub fn remaining_supply(&self) -> u32 {
        self.total_supply.saturating_sub(self.claimed_supply)
    }

    pub fn is_sold_out(&self) -> bool {
        self.claimed_supply >= self.total_supply
    }
}

/// Input for creating a reward through the admin surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReward {
    pub title: String,
    pub description: String,
    pub reward_type: RewardType,
    pub xp_required: u64,
    pub min_tier_required: Tier,
    pub total_supply: u32,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    #[serde(default)]
    pub metadata_uri: String,
    #[serde(default)]
    pub redeem_code: String,
}

/// Status of a claimed reward
///
/// `Expired` is never stored; it is derived at read time by
/// [`UserReward::status_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    Claimed,
    Used,
    Expired,
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClaimStatus::Claimed => "claimed",
            ClaimStatus::Used => "used",
            ClaimStatus::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

/// A reward claimed by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReward {
    pub reward_id: RewardId,
    pub user: String,
    pub claimed_at: Timestamp,
    pub status: ClaimStatus,
    /// Unique per claim within the process
    pub redemption_code: String,
    /// Set only on the Claimed -> Used transition
    pub used_at: Option<Timestamp>,
}

impl UserReward {
    /// Status as seen at `now`, given the reward's validity end
    pub fn status_at(&self, now: Timestamp, valid_until: Timestamp) -> ClaimStatus {
        match self.status {
            ClaimStatus::Claimed if now > valid_until => ClaimStatus::Expired,
            status => status,
        }
    }
}
