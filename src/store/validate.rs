//! Admin input validation

use crate::engine::EngineError;
use crate::{NewQuest, NewReward};

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidCatalogEntry(reason.to_string())
}

pub fn validate_new_quest(quest: &NewQuest) -> Result<(), EngineError> {
    if quest.title.trim().is_empty() {
        return Err(invalid("quest title is required"));
    }
    if quest.description.trim().is_empty() {
        return Err(invalid("quest description is required"));
    }
    if quest.start_time >= quest.end_time {
        return Err(invalid("quest must start before it ends"));
    }
    if quest.xp_reward == 0 {
        return Err(invalid("quest XP reward must be positive"));
    }
    if quest.max_completions == 0 {
        return Err(invalid("quest must allow at least one completion"));
    }
    Ok(())
}

pub fn validate_new_reward(reward: &NewReward) -> Result<(), EngineError> {
    if reward.title.trim().is_empty() {
        return Err(invalid("reward title is required"));
    }
    if reward.description.trim().is_empty() {
        return Err(invalid("reward description is required"));
    }
    if reward.valid_from >= reward.valid_until {
        return Err(invalid("reward must become valid before it expires"));
    }
    if reward.total_supply == 0 {
        return Err(invalid("reward supply must be positive"));
    }
    Ok(())
}
