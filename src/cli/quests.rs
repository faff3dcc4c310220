//! Quests command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use tricolor_pass::clock::{Clock, SystemClock};
use tricolor_pass::display::time_remaining;
use tricolor_pass::engine::quests::active_quests;

use super::load_config;

/// List the quests open right now
pub fn quests_command(work_dir: &Path, config_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let config = load_config(work_dir, config_path)?;
    let catalog = config.build_store().quests();
    let now = SystemClock.now_ms();
    let quests = active_quests(&catalog, now);

    if json {
        let out = serde_json::to_string_pretty(&quests).context("Failed to serialize quests")?;
        println!("{}", out);
        return Ok(());
    }

    if quests.is_empty() {
        println!("No active quests.");
        return Ok(());
    }

    println!("Active quests ({}):\n", quests.len());

    for quest in quests {
        println!(
            "  #{} [{}] {} - +{} XP",
            quest.id,
            quest.quest_type.label(),
            quest.title,
            quest.xp_reward
        );
        println!("    {}", quest.description);
        println!(
            "    {}/{} completions, ends in {}{}",
            quest.current_completions,
            quest.max_completions,
            time_remaining(quest.end_time, now),
            if quest.is_repeatable { ", repeatable" } else { "" }
        );
    }

    Ok(())
}
