//! Catalog store
//!
//! Holds the quest and reward catalogs behind one lock per record, so the
//! check-then-increment on a completion or claim counter is atomic for that
//! record without blocking any other.
//!
//! ```text
//! CatalogStore
//!   quests:  RwLock<Vec<(QuestId, Arc<Mutex<Quest>>)>>    (insertion order)
//!   rewards: RwLock<Vec<(RewardId, Arc<Mutex<Reward>>)>>
//! ```
//!
//! The outer `RwLock` only guards catalog membership (admin inserts); it is
//! released before a record lock is taken. Ids are stored next to each record
//! so a lookup never touches another record's lock.

mod validate;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::engine::EngineError;
use crate::{NewQuest, NewReward, Quest, QuestId, QuestStatus, Reward, RewardId};

pub use validate::{validate_new_quest, validate_new_reward};

type Record<T> = Arc<Mutex<T>>;
type Entry<T> = (u64, Record<T>);

fn lock<T>(record: &Mutex<T>) -> MutexGuard<'_, T> {
    record.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Bump `last` and return the new id, failing once `u64::MAX` is taken
fn next_id(last: &AtomicU64, kind: &str) -> Result<u64, EngineError> {
    last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
        .map(|previous| previous + 1)
        .map_err(|_| EngineError::InvalidCatalogEntry(format!("{} ids exhausted", kind)))
}

/// Shared quest and reward catalogs
#[derive(Debug)]
pub struct CatalogStore {
    quests: RwLock<Vec<Entry<Quest>>>,
    rewards: RwLock<Vec<Entry<Reward>>>,
    /// Highest id handed out or seeded so far (0 when empty)
    last_quest_id: AtomicU64,
    last_reward_id: AtomicU64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl CatalogStore {
    /// Build a store from existing catalog entries (ids are kept as given)
    pub fn new(quests: Vec<Quest>, rewards: Vec<Reward>) -> Self {
        let last_quest_id = quests.iter().map(|q| q.id).max().unwrap_or(0);
        let last_reward_id = rewards.iter().map(|r| r.id).max().unwrap_or(0);

        Self {
            quests: RwLock::new(
                quests
                    .into_iter()
                    .map(|q| (q.id, Arc::new(Mutex::new(q))))
                    .collect(),
            ),
            rewards: RwLock::new(
                rewards
                    .into_iter()
                    .map(|r| (r.id, Arc::new(Mutex::new(r))))
                    .collect(),
            ),
            last_quest_id: AtomicU64::new(last_quest_id),
            last_reward_id: AtomicU64::new(last_reward_id),
        }
    }

    // ========================================
    // QUESTS
    // ========================================

    fn quest_record(&self, id: QuestId) -> Option<Record<Quest>> {
        let quests = self.quests.read().unwrap_or_else(PoisonError::into_inner);
        quests
            .iter()
            .find(|(quest_id, _)| *quest_id == id)
            .map(|(_, record)| Arc::clone(record))
    }

    /// Copy of every quest, in insertion order
    pub fn quests(&self) -> Vec<Quest> {
        let quests = self.quests.read().unwrap_or_else(PoisonError::into_inner);
        quests.iter().map(|(_, record)| lock(record).clone()).collect()
    }

    pub fn quest(&self, id: QuestId) -> Option<Quest> {
        self.quest_record(id).map(|r| lock(&r).clone())
    }

    /// Run `f` with exclusive access to one quest
    pub fn with_quest<R, F>(&self, id: QuestId, f: F) -> Result<R, EngineError>
    where
        F: FnOnce(&mut Quest) -> Result<R, EngineError>,
    {
        let record = self
            .quest_record(id)
            .ok_or(EngineError::QuestNotFound { quest_id: id })?;
        let mut quest = lock(&record);
        f(&mut quest)
    }

    /// Admin: add a quest, assigning the next id
    pub fn add_quest(&self, new: NewQuest) -> Result<Quest, EngineError> {
        validate_new_quest(&new)?;

        let quest = Quest {
            id: next_id(&self.last_quest_id, "quest")?,
            title: new.title,
            description: new.description,
            quest_type: new.quest_type,
            xp_reward: new.xp_reward,
            start_time: new.start_time,
            end_time: new.end_time,
            status: QuestStatus::Active,
            is_repeatable: new.is_repeatable,
            max_completions: new.max_completions,
            current_completions: 0,
            verification_data: new.verification_data,
        };

        self.quests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((quest.id, Arc::new(Mutex::new(quest.clone()))));
        Ok(quest)
    }

    /// Admin: pause, resume or end a quest
    pub fn set_quest_status(&self, id: QuestId, status: QuestStatus) -> Result<Quest, EngineError> {
        self.with_quest(id, |quest| {
            quest.status = status;
            Ok(quest.clone())
        })
    }

    // ========================================
    // REWARDS
    // ========================================

    fn reward_record(&self, id: RewardId) -> Option<Record<Reward>> {
        let rewards = self.rewards.read().unwrap_or_else(PoisonError::into_inner);
        rewards
            .iter()
            .find(|(reward_id, _)| *reward_id == id)
            .map(|(_, record)| Arc::clone(record))
    }

    /// Copy of every reward, in insertion order
    pub fn rewards(&self) -> Vec<Reward> {
        let rewards = self.rewards.read().unwrap_or_else(PoisonError::into_inner);
        rewards.iter().map(|(_, record)| lock(record).clone()).collect()
    }

    pub fn reward(&self, id: RewardId) -> Option<Reward> {
        self.reward_record(id).map(|r| lock(&r).clone())
    }

    /// Run `f` with exclusive access to one reward
    pub fn with_reward<R, F>(&self, id: RewardId, f: F) -> Result<R, EngineError>
    where
        F: FnOnce(&mut Reward) -> Result<R, EngineError>,
    {
        let record = self
            .reward_record(id)
            .ok_or(EngineError::RewardNotFound { reward_id: id })?;
        let mut reward = lock(&record);
        f(&mut reward)
    }

    /// Admin: add a reward, assigning the next id
    pub fn add_reward(&self, new: NewReward) -> Result<Reward, EngineError> {
        validate_new_reward(&new)?;

        let reward = Reward {
            id: next_id(&self.last_reward_id, "reward")?,
            title: new.title,
            description: new.description,
            reward_type: new.reward_type,
            xp_required: new.xp_required,
            min_tier_required: new.min_tier_required,
            total_supply: new.total_supply,
            claimed_supply: 0,
            valid_from: new.valid_from,
            valid_until: new.valid_until,
            is_active: true,
            metadata_uri: new.metadata_uri,
            redeem_code: new.redeem_code,
        };

        self.rewards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((reward.id, Arc::new(Mutex::new(reward.clone()))));
        Ok(reward)
    }

    /// Admin: switch a reward on or off
    pub fn set_reward_active(&self, id: RewardId, active: bool) -> Result<Reward, EngineError> {
        self.with_reward(id, |reward| {
            reward.is_active = active;
            Ok(reward.clone())
        })
    }
}
