use serde::{Deserialize, Serialize};

use super::Tier;

/// Unique identifier for a minted pass
pub type TokenId = u64;

/// A member's pass (one per wallet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub token_id: TokenId,
    /// Wallet address of the holder
    pub owner: String,
    pub tier: Tier,
    /// Total XP earned, never decreases
    pub xp_points: u64,
    pub is_active: bool,
}

impl Pass {
    /// A freshly minted pass: chosen tier, no XP yet
    pub fn mint(token_id: TokenId, owner: impl Into<String>, tier: Tier) -> Self {
        Self {
            token_id,
            owner: owner.into(),
            tier,
            xp_points: 0,
            is_active: true,
        }
    }
}
