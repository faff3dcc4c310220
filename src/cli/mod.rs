//! CLI command implementations

pub mod demo;
pub mod init;
pub mod quests;
pub mod rewards;
pub mod tier;

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use tricolor_pass::Tier;
use tricolor_pass::config::Config;

/// Load the config given with --config, or look it up from the work dir
pub fn load_config(work_dir: &Path, config_path: Option<&PathBuf>) -> Result<Config> {
    match config_path {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(work_dir),
    }
}

pub fn parse_tier(value: &str) -> Result<Tier> {
    match Tier::from_str(value) {
        Some(tier) => Ok(tier),
        None => bail!("Unknown tier: {} (expected bronze, silver or gold)", value),
    }
}
