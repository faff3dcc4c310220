//! Pass service
//!
//! Caller-side orchestration on top of [`PassEngine`]: resolves passes through
//! the [`PassContract`] collaborator, keeps per-user completion histories,
//! turns engine results into [`PassEvent`]s and logs them. Contract calls are
//! awaited outside every engine lock.

mod error;

pub use error::ServiceError;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::Config;
use crate::contract::{MockPassContract, PassContract};
use crate::engine::{
    AttemptOutcome, CompletionHistory, OwnedReward, PassEngine, QuestCompletion, TierProgress,
    UserQuestStatus, XpAward,
};
use crate::{Pass, Quest, QuestId, Reward, RewardId, Tier, TokenId, UserReward};

/// Something the UI may want to surface (toast, badge, confetti)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassEvent {
    PassMinted {
        owner: String,
        token_id: TokenId,
        tier: Tier,
    },
    QuestCompleted {
        owner: String,
        quest_id: QuestId,
        outcome: AttemptOutcome,
        xp_earned: u64,
    },
    XpAwarded {
        owner: String,
        amount: u64,
        total: u64,
    },
    /// Emitted once per crossing
    TierUp { owner: String, from: Tier, to: Tier },
    RewardClaimed {
        owner: String,
        reward_id: RewardId,
        redemption_code: String,
    },
    RewardUsed { owner: String, reward_id: RewardId },
}

/// Result of a quest attempt made through the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestReport {
    pub completion: QuestCompletion,
    /// None when the attempt was worth 0 XP
    pub award: Option<XpAward>,
}

pub struct PassService {
    engine: Arc<PassEngine>,
    contract: Arc<dyn PassContract>,
    histories: Mutex<HashMap<String, CompletionHistory>>,
    events: Mutex<Vec<PassEvent>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PassService {
    pub fn new(engine: Arc<PassEngine>, contract: Arc<dyn PassContract>) -> Self {
        Self {
            engine,
            contract,
            histories: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Wire an engine and a mock contract from configuration
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let settings = &config.settings;
        let engine = PassEngine::new(Arc::new(config.build_store()), clock)
            .with_code_prefix(settings.code_prefix.clone())
            .with_wrong_answer_percent(settings.wrong_answer_xp_percent);
        let contract = MockPassContract::from_millis(settings.contract_latency_ms);

        Self::new(Arc::new(engine), Arc::new(contract))
    }

    pub fn engine(&self) -> &PassEngine {
        &self.engine
    }

    /// Take every event emitted since the last call, oldest first
    pub fn take_events(&self) -> Vec<PassEvent> {
        std::mem::take(&mut *lock(&self.events))
    }

    fn emit(&self, event: PassEvent) {
        lock(&self.events).push(event);
    }

    // ========================================
    // PASSES
    // ========================================

    /// Mint the one pass a user may hold
    pub async fn mint_pass(&self, owner: &str, tier: Tier) -> Result<Pass, ServiceError> {
        let existing = self
            .contract
            .pass_of(owner)
            .await
            .map_err(ServiceError::from_contract)?;
        if let Some(existing) = existing {
            return Err(ServiceError::PassAlreadyMinted {
                owner: owner.to_string(),
                token_id: existing.token_id,
            });
        }

        let pass = self
            .contract
            .mint_pass(owner, tier)
            .await
            .map_err(ServiceError::from_contract)?;

        info!("[tricolor:pass] Minted pass #{} ({}) for {}", pass.token_id, pass.tier, owner);
        self.emit(PassEvent::PassMinted {
            owner: owner.to_string(),
            token_id: pass.token_id,
            tier: pass.tier,
        });
        Ok(pass)
    }

    pub async fn pass(&self, owner: &str) -> Result<Pass, ServiceError> {
        self.contract
            .pass_of(owner)
            .await
            .map_err(ServiceError::from_contract)?
            .ok_or_else(|| ServiceError::PassNotFound {
                owner: owner.to_string(),
            })
    }

    async fn active_pass(&self, owner: &str) -> Result<Pass, ServiceError> {
        let pass = self.pass(owner).await?;
        if !pass.is_active {
            return Err(ServiceError::PassInactive {
                token_id: pass.token_id,
            });
        }
        Ok(pass)
    }

    pub async fn progress(&self, owner: &str) -> Result<TierProgress, ServiceError> {
        let pass = self.pass(owner).await?;
        Ok(self.engine.progress(&pass))
    }

    /// Award XP through the contract and surface the result
    pub async fn award_xp(&self, owner: &str, amount: u64) -> Result<XpAward, ServiceError> {
        // Validate before paying for a contract round trip
        let pass = self.active_pass(owner).await?;
        self.engine.award_xp(&pass, amount)?;

        let award = self
            .contract
            .award_xp(owner, amount)
            .await
            .map_err(ServiceError::from_contract)?;

        self.emit(PassEvent::XpAwarded {
            owner: owner.to_string(),
            amount,
            total: award.pass.xp_points,
        });
        if let Some((from, to)) = award.tier_up() {
            info!("[tricolor:pass] {} reached {} (was {})", owner, to, from);
            self.emit(PassEvent::TierUp {
                owner: owner.to_string(),
                from,
                to,
            });
        }
        Ok(award)
    }

    // ========================================
    // QUESTS
    // ========================================

    pub fn active_quests(&self) -> Vec<Quest> {
        self.engine.active_quests()
    }

    pub fn quest_status(&self, owner: &str, quest_id: QuestId) -> Result<UserQuestStatus, ServiceError> {
        let histories = lock(&self.histories);
        let empty = CompletionHistory::new();
        let history = histories.get(owner).unwrap_or(&empty);
        Ok(self.engine.quest_status(quest_id, history)?)
    }

    /// Attempt a quest and award the XP it earned
    pub async fn complete_quest(
        &self,
        owner: &str,
        quest_id: QuestId,
        outcome: AttemptOutcome,
    ) -> Result<QuestReport, ServiceError> {
        self.active_pass(owner).await?;

        let completion = {
            let mut histories = lock(&self.histories);
            let history = histories.entry(owner.to_string()).or_default();
            let completion = self.engine.complete_quest(quest_id, history, outcome)?;
            history.record(quest_id);
            completion
        };

        info!(
            "[tricolor:quest] {} completed quest #{} ({:?}, +{} XP, {} total completions)",
            owner, quest_id, outcome, completion.xp_earned, completion.completions
        );
        self.emit(PassEvent::QuestCompleted {
            owner: owner.to_string(),
            quest_id,
            outcome,
            xp_earned: completion.xp_earned,
        });

        if completion.xp_earned == 0 {
            return Ok(QuestReport {
                completion,
                award: None,
            });
        }

        let award = self
            .award_xp(owner, completion.xp_earned)
            .await
            .inspect_err(|e| {
                warn!(
                    "[tricolor:quest] Quest #{} recorded for {} but XP award failed: {}",
                    quest_id, owner, e
                )
            })?;

        Ok(QuestReport {
            completion,
            award: Some(award),
        })
    }

    // ========================================
    // REWARDS
    // ========================================

    pub async fn available_rewards(&self, owner: &str) -> Result<Vec<Reward>, ServiceError> {
        let pass = self.active_pass(owner).await?;
        Ok(self.engine.available_rewards(&pass))
    }

    pub async fn claim_reward(&self, owner: &str, reward_id: RewardId) -> Result<UserReward, ServiceError> {
        let pass = self.active_pass(owner).await?;
        let claim = self.engine.claim_reward(reward_id, &pass)?;

        info!("[tricolor:reward] {} claimed reward #{}", owner, reward_id);
        self.emit(PassEvent::RewardClaimed {
            owner: owner.to_string(),
            reward_id,
            redemption_code: claim.redemption_code.clone(),
        });
        Ok(claim)
    }

    pub fn redeem(&self, owner: &str, reward_id: RewardId, code: &str) -> Result<UserReward, ServiceError> {
        let used = self.engine.redeem(owner, reward_id, code).inspect_err(|e| {
            warn!("[tricolor:reward] Redemption of #{} by {} rejected: {}", reward_id, owner, e)
        })?;

        info!("[tricolor:reward] {} used reward #{}", owner, reward_id);
        self.emit(PassEvent::RewardUsed {
            owner: owner.to_string(),
            reward_id,
        });
        Ok(used)
    }

    pub fn user_rewards(&self, owner: &str) -> Vec<OwnedReward> {
        self.engine.user_rewards(owner)
    }
}
