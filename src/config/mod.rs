//! Configuration loading and management

mod catalog;
mod io;
mod settings;

pub use catalog::{QuestEntry, RewardEntry, seed_quests, seed_rewards};
pub use settings::Settings;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::CatalogStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Quest catalog
    #[serde(default)]
    pub quests: Vec<QuestEntry>,

    /// Reward catalog
    #[serde(default)]
    pub rewards: Vec<RewardEntry>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid catalog in {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration for a directory
    /// Looks for: <dir>/.tricolor/config.toml, then ~/.tricolor/config.toml,
    /// then falls back to the built-in demo catalog
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join(".tricolor/config.toml");
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::with_defaults())
    }

    /// Default settings plus the demo catalog, timed around the current time
    pub fn with_defaults() -> Self {
        Self::seeded(Utc::now())
    }

    /// Default settings plus the demo catalog, timed around `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            settings: Settings::default(),
            quests: seed_quests(now),
            rewards: seed_rewards(now),
        }
    }

    /// Check catalog invariants that the engine relies on
    pub fn validate(&self) -> Result<()> {
        let mut quest_ids = HashSet::new();
        for quest in &self.quests {
            if !quest_ids.insert(quest.id) {
                bail!("Duplicate quest id {}", quest.id);
            }
            if quest.id == u64::MAX {
                bail!("Quest id {} leaves no room for new quests", quest.id);
            }
            if quest.starts_at >= quest.ends_at {
                bail!("Quest {} must start before it ends", quest.id);
            }
            if quest.xp_reward == 0 {
                bail!("Quest {} must reward a positive amount of XP", quest.id);
            }
            if quest.max_completions == 0 || quest.current_completions > quest.max_completions {
                bail!(
                    "Quest {} has invalid completions {}/{}",
                    quest.id,
                    quest.current_completions,
                    quest.max_completions
                );
            }
        }

        let mut reward_ids = HashSet::new();
        for reward in &self.rewards {
            if !reward_ids.insert(reward.id) {
                bail!("Duplicate reward id {}", reward.id);
            }
            if reward.id == u64::MAX {
                bail!("Reward id {} leaves no room for new rewards", reward.id);
            }
            if reward.valid_from >= reward.valid_until {
                bail!("Reward {} must become valid before it expires", reward.id);
            }
            if reward.total_supply == 0 || reward.claimed_supply > reward.total_supply {
                bail!(
                    "Reward {} has invalid supply {}/{}",
                    reward.id,
                    reward.claimed_supply,
                    reward.total_supply
                );
            }
        }

        Ok(())
    }

    /// Build a fresh in-memory store from the catalog
    pub fn build_store(&self) -> CatalogStore {
        CatalogStore::new(
            self.quests.iter().map(QuestEntry::to_quest).collect(),
            self.rewards.iter().map(RewardEntry::to_reward).collect(),
        )
    }
}
