//! Redemption ledger
//!
//! Records who claimed what, hands out redemption codes that are unique for
//! the lifetime of the process, and enforces the single Claimed -> Used
//! transition.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::error::EngineError;
use crate::{ClaimStatus, RewardId, Timestamp, UserReward};

/// Default display prefix of redemption codes
pub const DEFAULT_CODE_PREFIX: &str = "SPFC";

/// Random draws tried before falling back to the sequential suffix
const RANDOM_ATTEMPTS: usize = 8;

const SUFFIX_SPACE: u32 = 1_000_000;

/// Codes handed out by every ledger in this process
static ISSUED_CODES: Lazy<Mutex<CodeRegistry>> =
    Lazy::new(|| Mutex::new(CodeRegistry::default()));

fn issued_codes() -> MutexGuard<'static, CodeRegistry> {
    ISSUED_CODES.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct CodeRegistry {
    codes: HashSet<String>,
    /// Next suffix for the sequential fallback
    sequence: u64,
}

impl CodeRegistry {
    /// Reserve a fresh `<prefix><reward id><6 digit suffix>` code
    fn issue(&mut self, prefix: &str, reward_id: RewardId) -> String {
        let code = self.next_code_from(prefix, reward_id, random_suffix);
        self.codes.insert(code.clone());
        code
    }

    fn next_code_from<D>(&mut self, prefix: &str, reward_id: RewardId, mut draw: D) -> String
    where
        D: FnMut() -> Option<u32>,
    {
        for _ in 0..RANDOM_ATTEMPTS {
            let Some(suffix) = draw() else {
                break;
            };
            let code = format!("{}{}{:06}", prefix, reward_id, suffix);
            if !self.codes.contains(&code) {
                return code;
            }
        }

        loop {
            let code = format!("{}{}{:06}", prefix, reward_id, self.sequence);
            self.sequence += 1;
            if !self.codes.contains(&code) {
                return code;
            }
        }
    }
}

fn random_suffix() -> Option<u32> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf).ok()?;
    Some(u32::from_le_bytes(buf) % SUFFIX_SPACE)
}

#[derive(Debug, Default)]
struct LedgerState {
    claims: Vec<UserReward>,
}

impl LedgerState {
    fn position(&self, user: &str, reward_id: RewardId) -> Option<usize> {
        self.claims
            .iter()
            .position(|c| c.reward_id == reward_id && c.user == user)
    }
}

/// In-memory record of claimed and used rewards
#[derive(Debug)]
pub struct RedemptionLedger {
    code_prefix: String,
    state: Mutex<LedgerState>,
}

impl Default for RedemptionLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_PREFIX)
    }
}

impl RedemptionLedger {
    pub fn new(code_prefix: impl Into<String>) -> Self {
        Self {
            code_prefix: code_prefix.into(),
            state: Mutex::new(LedgerState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a new claim
    ///
    /// `consume` runs after the one-claim-per-user check and before the code
    /// is issued, all under the ledger lock. If it fails nothing is recorded.
    pub fn issue_with<F>(
        &self,
        reward_id: RewardId,
        user: &str,
        claimed_at: Timestamp,
        consume: F,
    ) -> Result<UserReward, EngineError>
    where
        F: FnOnce() -> Result<(), EngineError>,
    {
        let mut state = self.state();
        if state.position(user, reward_id).is_some() {
            return Err(EngineError::AlreadyClaimed { reward_id });
        }
        consume()?;

        let code = issued_codes().issue(&self.code_prefix, reward_id);

        let claim = UserReward {
            reward_id,
            user: user.to_string(),
            claimed_at,
            status: ClaimStatus::Claimed,
            redemption_code: code,
            used_at: None,
        };
        state.claims.push(claim.clone());
        Ok(claim)
    }

    /// Record a new claim with no extra precondition
    pub fn issue(
        &self,
        reward_id: RewardId,
        user: &str,
        claimed_at: Timestamp,
    ) -> Result<UserReward, EngineError> {
        self.issue_with(reward_id, user, claimed_at, || Ok(()))
    }

    /// Mark a claim as used
    ///
    /// Only a claim still `Claimed` at `now` can be used. A used claim, or
    /// one whose reward ended before `now`, fails with `AlreadyUsed`.
    pub fn redeem(
        &self,
        user: &str,
        reward_id: RewardId,
        provided_code: &str,
        now: Timestamp,
        valid_until: Timestamp,
    ) -> Result<UserReward, EngineError> {
        let mut state = self.state();
        let idx = state
            .position(user, reward_id)
            .ok_or(EngineError::RewardNotFound { reward_id })?;

        let claim = &mut state.claims[idx];
        if claim.status_at(now, valid_until) != ClaimStatus::Claimed {
            return Err(EngineError::AlreadyUsed { reward_id });
        }
        if claim.redemption_code != provided_code {
            return Err(EngineError::CodeMismatch);
        }

        claim.status = ClaimStatus::Used;
        claim.used_at = Some(now);
        Ok(claim.clone())
    }

    pub fn find(&self, user: &str, reward_id: RewardId) -> Option<UserReward> {
        let state = self.state();
        state.position(user, reward_id).map(|i| state.claims[i].clone())
    }

    /// All claims of a user, oldest first
    pub fn claims_for(&self, user: &str) -> Vec<UserReward> {
        self.state()
            .claims
            .iter()
            .filter(|c| c.user == user)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state().claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
