//! Demo command implementation
//!
//! Scripted fan session against the mock contract.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tricolor_pass::Tier;
use tricolor_pass::clock::SystemClock;
use tricolor_pass::engine::AttemptOutcome;
use tricolor_pass::service::{PassEvent, PassService};

use super::load_config;

const DEMO_WALLET: &str = "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87";

/// Matchday bonus that pushes the demo pass over the Silver threshold
const MATCHDAY_BONUS_XP: u64 = 1_850;

pub async fn demo_command(work_dir: &Path, config_path: Option<&PathBuf>) -> Result<()> {
    let config = load_config(work_dir, config_path)?;
    let service = PassService::from_config(&config, Arc::new(SystemClock));

    let pass = service.mint_pass(DEMO_WALLET, Tier::Bronze).await?;
    println!("Minted pass #{} ({})", pass.token_id, pass.tier.label());

    if let Err(e) = service.mint_pass(DEMO_WALLET, Tier::Bronze).await {
        println!("Second mint rejected: {}", e);
    }

    let attempts = [
        (1, AttemptOutcome::Correct),
        (3, AttemptOutcome::Incorrect),
        (3, AttemptOutcome::Correct),
        (1, AttemptOutcome::Correct),
    ];
    for (quest_id, outcome) in attempts {
        match service.complete_quest(DEMO_WALLET, quest_id, outcome).await {
            Ok(report) => println!(
                "Quest #{} ({:?}): +{} XP",
                quest_id, outcome, report.completion.xp_earned
            ),
            Err(e) => println!("Quest #{} rejected: {}", quest_id, e),
        }
    }

    service.award_xp(DEMO_WALLET, MATCHDAY_BONUS_XP).await?;
    let progress = service.progress(DEMO_WALLET).await?;
    println!(
        "Pass now {} with {} XP ({:.1}% to next tier)",
        progress.tier.label(),
        progress.xp,
        progress.progress_percent
    );

    let rewards = service.available_rewards(DEMO_WALLET).await?;
    println!("Available rewards: {}", rewards.len());
    for reward in &rewards {
        println!("  #{} {} ({} XP)", reward.id, reward.title, reward.xp_required);
    }

    let Some(reward) = rewards.iter().max_by_key(|r| r.xp_required) else {
        println!("Nothing to claim.");
        return Ok(());
    };
    let claim = service.claim_reward(DEMO_WALLET, reward.id).await?;
    println!("Claimed #{} -> code {}", reward.id, claim.redemption_code);

    if let Err(e) = service.redeem(DEMO_WALLET, reward.id, "WRONGCODE") {
        println!("Wrong code rejected: {}", e);
    }
    service.redeem(DEMO_WALLET, reward.id, &claim.redemption_code)?;
    println!("Reward #{} used", reward.id);
    if let Err(e) = service.redeem(DEMO_WALLET, reward.id, &claim.redemption_code) {
        println!("Second use rejected: {}", e);
    }

    println!("\nEvents:");
    for event in service.take_events() {
        match event {
            PassEvent::TierUp { from, to, .. } => {
                println!("  Tier up: {} -> {}", from.label(), to.label())
            }
            other => println!("  {:?}", other),
        }
    }

    Ok(())
}
