//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::engine::quests::DEFAULT_WRONG_ANSWER_XP_PERCENT;
use crate::engine::redemption::DEFAULT_CODE_PREFIX;

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix of generated redemption codes (`<prefix><reward id><suffix>`)
    #[serde(default = "default_code_prefix")]
    pub code_prefix: String,

    /// XP granted for a wrong quiz answer, as a percentage of the quest reward.
    /// Values above 100 are treated as 100.
    #[serde(default = "default_wrong_answer_xp_percent")]
    pub wrong_answer_xp_percent: u8,

    /// Simulated round trip of the mock contract, in milliseconds
    #[serde(default = "default_contract_latency_ms")]
    pub contract_latency_ms: u64,
}

fn default_code_prefix() -> String {
    DEFAULT_CODE_PREFIX.to_string()
}

fn default_wrong_answer_xp_percent() -> u8 {
    DEFAULT_WRONG_ANSWER_XP_PERCENT
}

fn default_contract_latency_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            code_prefix: default_code_prefix(),
            wrong_answer_xp_percent: default_wrong_answer_xp_percent(),
            contract_latency_ms: default_contract_latency_ms(),
        }
    }
}
