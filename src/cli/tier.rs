//! Tier command implementation

use anyhow::Result;

use tricolor_pass::Tier;
use tricolor_pass::engine::TierProgress;
use tricolor_pass::engine::tiers::next_tier;

/// Show the tier, progress and XP to the next tier for an XP total
pub fn tier_command(xp: u64, current: Tier) -> Result<()> {
    let tier = next_tier(current, xp);
    let progress = TierProgress::new(tier, xp);

    println!("Tier:     {}", progress.tier.label());
    println!("XP:       {}", progress.xp);
    println!("Progress: {:.1}%", progress.progress_percent);

    match progress.next_tier {
        Some(next) => println!("Next:     {} ({} XP to go)", next.label(), progress.xp_to_next),
        None => println!("Next:     max tier reached"),
    }

    Ok(())
}
