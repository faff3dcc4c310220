//! Init command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use tricolor_pass::config::Config;

/// Write the default configuration (settings plus demo catalog)
pub fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| work_dir.join(".tricolor").join("config.toml"));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
