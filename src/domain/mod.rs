//! Core domain types for Tricolor Pass

mod pass;
mod quest;
mod reward;
mod tier;

pub use pass::{Pass, TokenId};
pub use quest::{NewQuest, Quest, QuestId, QuestStatus, QuestType};
pub use reward::{ClaimStatus, NewReward, Reward, RewardId, RewardType, UserReward};
pub use tier::Tier;

/// Unix time in milliseconds
pub type Timestamp = i64;
