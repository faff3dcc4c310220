//! Business-rule rejections raised by the engine
//!
//! Every variant is a recoverable, user-facing condition. Callers map them to
//! messages; nothing here is retried.

use crate::{QuestId, RewardId, Tier};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("XP amount must be positive, got {amount}")]
    InvalidAmount { amount: u64 },

    #[error("Quest {quest_id} reached its limit of {max_completions} completions")]
    CapacityExceeded { quest_id: QuestId, max_completions: u32 },

    #[error("Insufficient XP: {required} XP required, {available} XP available")]
    InsufficientXp { required: u64, available: u64 },

    #[error("Insufficient tier: {required} required, pass is {current}")]
    InsufficientTier { required: Tier, current: Tier },

    #[error("Reward {reward_id} has no supply left")]
    SupplyExhausted { reward_id: RewardId },

    #[error("Reward {reward_id} not found")]
    RewardNotFound { reward_id: RewardId },

    #[error("Reward {reward_id} was already used")]
    AlreadyUsed { reward_id: RewardId },

    #[error("Invalid redemption code")]
    CodeMismatch,

    #[error("Quest {quest_id} not found")]
    QuestNotFound { quest_id: QuestId },

    #[error("Quest {quest_id} is not open for completion")]
    QuestUnavailable { quest_id: QuestId },

    #[error("Quest {quest_id} was already completed and is not repeatable")]
    AlreadyCompleted { quest_id: QuestId },

    #[error("Reward {reward_id} is not available for claiming")]
    RewardUnavailable { reward_id: RewardId },

    #[error("Reward {reward_id} was already claimed by this user")]
    AlreadyClaimed { reward_id: RewardId },

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalogEntry(String),
}
