//! Tier & eligibility engine
//!
//! Pure rules live in the submodules; [`PassEngine`] binds them to a catalog
//! store, a redemption ledger and an injected clock. Every operation is
//! synchronous and works on already-resolved values. The engine reports
//! outcomes as return values and never logs or notifies on its own.

mod error;
pub mod quests;
pub mod redemption;
pub mod rewards;
pub mod tiers;
pub mod xp;

pub use error::EngineError;
pub use quests::{AttemptOutcome, CompletionHistory, UserQuestStatus};
pub use redemption::RedemptionLedger;
pub use tiers::{TierProgress, tier_for};
pub use xp::XpAward;

use std::sync::Arc;

use crate::clock::Clock;
use crate::store::CatalogStore;
use crate::{ClaimStatus, Pass, Quest, QuestId, Reward, RewardId, Timestamp, UserReward};

/// Result of a successful quest attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompletion {
    pub quest_id: QuestId,
    pub outcome: AttemptOutcome,
    /// XP the attempt is worth (may be 0 for a wrong answer)
    pub xp_earned: u64,
    /// Quest-wide completion count after this attempt
    pub completions: u32,
}

/// A claim joined with its reward, as shown in "my rewards"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedReward {
    pub claim: UserReward,
    pub reward: Option<Reward>,
    /// Read-time status (Expired is derived here)
    pub status: ClaimStatus,
}

/// Engine facade over the shared catalog and ledger
pub struct PassEngine {
    store: Arc<CatalogStore>,
    ledger: RedemptionLedger,
    clock: Arc<dyn Clock>,
    wrong_answer_xp_percent: u8,
}

impl PassEngine {
    pub fn new(store: Arc<CatalogStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            ledger: RedemptionLedger::default(),
            clock,
            wrong_answer_xp_percent: quests::DEFAULT_WRONG_ANSWER_XP_PERCENT,
        }
    }

    /// Use a custom redemption code prefix
    pub fn with_code_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ledger = RedemptionLedger::new(prefix);
        self
    }

    /// Share of XP granted for a wrong quiz answer, in percent
    pub fn with_wrong_answer_percent(mut self, percent: u8) -> Self {
        self.wrong_answer_xp_percent = percent.min(100);
        self
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn ledger(&self) -> &RedemptionLedger {
        &self.ledger
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now_ms()
    }

    // ========================================
    // QUESTS
    // ========================================

    /// Quests open right now, in catalog order
    pub fn active_quests(&self) -> Vec<Quest> {
        let catalog = self.store.quests();
        quests::active_quests(&catalog, self.now())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn quest_status(
        &self,
        quest_id: QuestId,
        history: &CompletionHistory,
    ) -> Result<UserQuestStatus, EngineError> {
        let quest = self
            .store
            .quest(quest_id)
            .ok_or(EngineError::QuestNotFound { quest_id })?;
        Ok(quests::user_status(&quest, history))
    }

    /// Attempt a quest on behalf of a user
    ///
    /// Every attempt, right or wrong, consumes one completion slot. The
    /// caller records the completion in the user's history and awards the
    /// returned XP.
    pub fn complete_quest(
        &self,
        quest_id: QuestId,
        history: &CompletionHistory,
        outcome: AttemptOutcome,
    ) -> Result<QuestCompletion, EngineError> {
        let now = self.now();
        let percent = self.wrong_answer_xp_percent;

        self.store.with_quest(quest_id, |quest| {
            let completions = quests::attempt_completion(quest, history, now)?;
            Ok(QuestCompletion {
                quest_id,
                outcome,
                xp_earned: quests::xp_for_attempt(quest, outcome, percent),
                completions,
            })
        })
    }

    // ========================================
    // REWARDS
    // ========================================

    /// Rewards the pass could claim right now (display hint)
    pub fn available_rewards(&self, pass: &Pass) -> Vec<Reward> {
        let catalog = self.store.rewards();
        rewards::available_rewards(&catalog, pass.xp_points, pass.tier, self.now())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Claim a reward for the pass owner
    ///
    /// Eligibility is re-checked here regardless of any list the caller
    /// showed. The supply counter and the ledger entry change together or
    /// not at all.
    pub fn claim_reward(&self, reward_id: RewardId, pass: &Pass) -> Result<UserReward, EngineError> {
        let now = self.now();

        self.store.with_reward(reward_id, |reward| {
            rewards::check_eligibility(reward, pass.xp_points, pass.tier, now)?;
            self.ledger.issue_with(reward_id, &pass.owner, now, || {
                rewards::consume_supply(reward).map(|_| ())
            })
        })
    }

    /// Use a claimed reward by presenting its code
    ///
    /// Claims whose reward has ended are rejected like used ones.
    pub fn redeem(
        &self,
        user: &str,
        reward_id: RewardId,
        provided_code: &str,
    ) -> Result<UserReward, EngineError> {
        let reward = self
            .store
            .reward(reward_id)
            .ok_or(EngineError::RewardNotFound { reward_id })?;
        self.ledger
            .redeem(user, reward_id, provided_code, self.now(), reward.valid_until)
    }

    /// Claims of a user with their rewards and read-time status
    pub fn user_rewards(&self, user: &str) -> Vec<OwnedReward> {
        let now = self.now();
        self.ledger
            .claims_for(user)
            .into_iter()
            .map(|claim| {
                let reward = self.store.reward(claim.reward_id);
                let status = match &reward {
                    Some(r) => claim.status_at(now, r.valid_until),
                    None => claim.status,
                };
                OwnedReward {
                    claim,
                    reward,
                    status,
                }
            })
            .collect()
    }

    // ========================================
    // PROGRESSION
    // ========================================

    pub fn award_xp(&self, pass: &Pass, amount: u64) -> Result<XpAward, EngineError> {
        xp::award_xp(pass, amount)
    }

    pub fn progress(&self, pass: &Pass) -> TierProgress {
        TierProgress::new(pass.tier, pass.xp_points)
    }
}
