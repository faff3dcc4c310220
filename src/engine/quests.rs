//! Quest eligibility and completion rules

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::{Quest, QuestId, QuestStatus, Timestamp};

/// Share of the XP reward granted for a wrong quiz answer
pub const DEFAULT_WRONG_ANSWER_XP_PERCENT: u8 = 50;

/// Result of a single completion attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptOutcome {
    /// Task verified (QR scanned, right answer, ...)
    Correct,
    /// Quiz answered wrongly; earns partial credit
    Incorrect,
}

/// Completions of one user, by quest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionHistory {
    counts: HashMap<QuestId, u32>,
}

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, quest_id: QuestId) {
        *self.counts.entry(quest_id).or_insert(0) += 1;
    }

    pub fn count(&self, quest_id: QuestId) -> u32 {
        self.counts.get(&quest_id).copied().unwrap_or(0)
    }

    pub fn has_completed(&self, quest_id: QuestId) -> bool {
        self.count(quest_id) > 0
    }
}

/// Per-user view of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserQuestStatus {
    pub can_complete: bool,
    pub has_completed: bool,
    pub completion_count: u32,
}

/// Whether a quest is open to completions at `now`
pub fn is_open(quest: &Quest, now: Timestamp) -> bool {
    quest.status == QuestStatus::Active && now >= quest.start_time && now <= quest.end_time
}

/// Quests that can be attempted at `now`, in catalog order
pub fn active_quests(catalog: &[Quest], now: Timestamp) -> Vec<&Quest> {
    catalog
        .iter()
        .filter(|q| is_open(q, now) && q.current_completions < q.max_completions)
        .collect()
}

/// Whether the user may (still) complete this quest
pub fn can_complete(quest: &Quest, history: &CompletionHistory) -> bool {
    quest.is_repeatable || !history.has_completed(quest.id)
}

pub fn user_status(quest: &Quest, history: &CompletionHistory) -> UserQuestStatus {
    UserQuestStatus {
        can_complete: can_complete(quest, history),
        has_completed: history.has_completed(quest.id),
        completion_count: history.count(quest.id),
    }
}

fn check_capacity(quest: &Quest) -> Result<(), EngineError> {
    if quest.current_completions >= quest.max_completions {
        return Err(EngineError::CapacityExceeded {
            quest_id: quest.id,
            max_completions: quest.max_completions,
        });
    }
    Ok(())
}

/// Consume one completion slot; returns the new completion count
///
/// Must run under the quest record's lock so the check and the increment
/// are observed together.
pub fn record_completion(quest: &mut Quest) -> Result<u32, EngineError> {
    check_capacity(quest)?;
    quest.current_completions += 1;
    Ok(quest.current_completions)
}

/// XP earned by an attempt
pub fn xp_for_attempt(quest: &Quest, outcome: AttemptOutcome, wrong_answer_percent: u8) -> u64 {
    match outcome {
        AttemptOutcome::Correct => quest.xp_reward,
        AttemptOutcome::Incorrect => {
            let percent = u64::from(wrong_answer_percent.min(100));
            quest.xp_reward * percent / 100
        }
    }
}

/// Full check-then-consume for one attempt, run under the record lock
///
/// Checks run window and status first, then the quest-wide cap, then the
/// user's own history.
pub fn attempt_completion(
    quest: &mut Quest,
    history: &CompletionHistory,
    now: Timestamp,
) -> Result<u32, EngineError> {
    if !is_open(quest, now) {
        return Err(EngineError::QuestUnavailable { quest_id: quest.id });
    }
    check_capacity(quest)?;
    if !can_complete(quest, history) {
        return Err(EngineError::AlreadyCompleted { quest_id: quest.id });
    }
    record_completion(quest)
}
