//! Rewards command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use tricolor_pass::Tier;
use tricolor_pass::clock::{Clock, SystemClock};
use tricolor_pass::display::validity_period;
use tricolor_pass::engine::rewards::available_rewards;

use super::load_config;

/// List the rewards a profile with `xp` and `tier` could claim right now
pub fn rewards_command(
    work_dir: &Path,
    config_path: Option<&PathBuf>,
    xp: u64,
    tier: Tier,
    json: bool,
) -> Result<()> {
    let config = load_config(work_dir, config_path)?;
    let catalog = config.build_store().rewards();
    let now = SystemClock.now_ms();
    let rewards = available_rewards(&catalog, xp, tier, now);

    if json {
        let out = serde_json::to_string_pretty(&rewards).context("Failed to serialize rewards")?;
        println!("{}", out);
        return Ok(());
    }

    if rewards.is_empty() {
        println!("No rewards available for {} XP at {}.", xp, tier.label());
        return Ok(());
    }

    println!("Available rewards ({}):\n", rewards.len());

    for reward in rewards {
        println!(
            "  #{} [{}] {} - {} XP, {}+",
            reward.id,
            reward.reward_type.label(),
            reward.title,
            reward.xp_required,
            reward.min_tier_required.label()
        );
        println!("    {}", reward.description);
        println!(
            "    {} left, valid for {}",
            reward.remaining_supply(),
            validity_period(reward.valid_until, now)
        );
    }

    Ok(())
}
