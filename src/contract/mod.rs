//! Pass contract collaborator
//!
//! The smart contract that owns passes on chain sits behind [`PassContract`].
//! Calls are async and may fail; the engine only ever sees the resolved
//! [`Pass`] values. [`MockPassContract`] keeps passes in memory and simulates
//! network latency for demos and tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::engine::XpAward;
use crate::engine::xp;
use crate::{Pass, Tier, TokenId};

/// Typed contract rejections, carried inside the `anyhow::Error` of a call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("Pass #{token_id} already minted for {owner}")]
    AlreadyMinted { owner: String, token_id: TokenId },

    #[error("No pass minted for {owner}")]
    NoPass { owner: String },
}

fn no_pass(owner: &str) -> anyhow::Error {
    ContractError::NoPass {
        owner: owner.to_string(),
    }
    .into()
}

/// On-chain pass operations
#[async_trait]
pub trait PassContract: Send + Sync {
    /// Mint a new pass for `owner` at the given starting tier
    async fn mint_pass(&self, owner: &str, tier: Tier) -> Result<Pass>;

    /// The pass owned by `owner`, if any
    async fn pass_of(&self, owner: &str) -> Result<Option<Pass>>;

    /// Add XP to the owner's pass and return the resulting award
    async fn award_xp(&self, owner: &str, amount: u64) -> Result<XpAward>;
}

/// In-memory contract with a fixed simulated round trip
pub struct MockPassContract {
    passes: Mutex<HashMap<String, Pass>>,
    next_token_id: AtomicU64,
    latency: Duration,
}

impl Default for MockPassContract {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl MockPassContract {
    pub fn new(latency: Duration) -> Self {
        Self {
            passes: Mutex::new(HashMap::new()),
            next_token_id: AtomicU64::new(1),
            latency,
        }
    }

    pub fn from_millis(latency_ms: u64) -> Self {
        Self::new(Duration::from_millis(latency_ms))
    }

    /// Seed an existing pass (demo wallets)
    pub fn with_pass(self, pass: Pass) -> Self {
        self.next_token_id
            .fetch_max(pass.token_id.saturating_add(1), Ordering::SeqCst);
        self.passes_mut().insert(pass.owner.clone(), pass);
        self
    }

    /// Deactivate or reactivate a pass
    pub fn set_active(&self, owner: &str, active: bool) -> Result<Pass> {
        let mut passes = self.passes_mut();
        let pass = passes.get_mut(owner).ok_or_else(|| no_pass(owner))?;
        pass.is_active = active;
        Ok(pass.clone())
    }

    fn passes_mut(&self) -> MutexGuard<'_, HashMap<String, Pass>> {
        self.passes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl PassContract for MockPassContract {
    async fn mint_pass(&self, owner: &str, tier: Tier) -> Result<Pass> {
        self.round_trip().await;

        let mut passes = self.passes_mut();
        if let Some(existing) = passes.get(owner) {
            return Err(ContractError::AlreadyMinted {
                owner: owner.to_string(),
                token_id: existing.token_id,
            }
            .into());
        }

        let token_id: TokenId = self.next_token_id.fetch_add(1, Ordering::SeqCst);
        let pass = Pass::mint(token_id, owner, tier);
        passes.insert(owner.to_string(), pass.clone());

        debug!("[tricolor:contract] Minted pass #{} for {} ({})", token_id, owner, tier);
        Ok(pass)
    }

    async fn pass_of(&self, owner: &str) -> Result<Option<Pass>> {
        self.round_trip().await;
        Ok(self.passes_mut().get(owner).cloned())
    }

    async fn award_xp(&self, owner: &str, amount: u64) -> Result<XpAward> {
        self.round_trip().await;

        let mut passes = self.passes_mut();
        let pass = passes.get_mut(owner).ok_or_else(|| no_pass(owner))?;

        let award = xp::award_xp(pass, amount)?;
        *pass = award.pass.clone();

        debug!(
            "[tricolor:contract] +{} XP for {} (now {} XP, {})",
            amount, owner, award.pass.xp_points, award.new_tier
        );
        Ok(award)
    }
}
