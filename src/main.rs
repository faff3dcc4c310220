use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "tricolor")]
#[command(about = "Tricolor Pass - tiers, quests and rewards for the fan membership pass")]
#[command(version)]
struct Cli {
    /// Working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .tricolor/config.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tier and progress for an XP total
    Tier {
        /// XP total
        xp: u64,

        /// Current tier (a pass never moves down)
        #[arg(long, default_value = "bronze")]
        current: String,
    },

    /// List the quests open right now
    Quests {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rewards a profile could claim right now
    Rewards {
        /// XP of the profile
        #[arg(long)]
        xp: u64,

        /// Tier of the profile
        #[arg(long, default_value = "bronze")]
        tier: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new .tricolor/config.toml with the demo catalog
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Run a scripted session against the mock contract
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Tier { xp, current } => {
            cli::tier::tier_command(xp, cli::parse_tier(&current)?)?;
        }
        Commands::Quests { json } => {
            cli::quests::quests_command(&work_dir, cli.config.as_ref(), json)?;
        }
        Commands::Rewards { xp, tier, json } => {
            let tier = cli::parse_tier(&tier)?;
            cli::rewards::rewards_command(&work_dir, cli.config.as_ref(), xp, tier, json)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(&work_dir, cli.config, force)?;
        }
        Commands::Demo => {
            cli::demo::demo_command(&work_dir, cli.config.as_ref()).await?;
        }
    }

    Ok(())
}
