//! Config file locations and saving

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Written above the serialized settings and catalog
const FILE_HEADER: &str = "# Tricolor Pass settings and catalog\n\
                           # Timestamps are RFC 3339. Quest and reward ids must stay unique.\n\n";

impl Config {
    /// Get the global config directory path (~/.tricolor/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tricolor")
    }

    /// Get the global config file path (~/.tricolor/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Validate, then replace the file at `path` in one rename
    ///
    /// Concurrent savers queue on `<path>.lock`. Readers see either the old
    /// catalog or the new one.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()
            .context("Refusing to save an invalid catalog")?;
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let _lock = SaveLock::acquire(path)?;
        replace_file(path, &format!("{}{}", FILE_HEADER, body))
    }
}

/// Exclusive lock on the sibling `.lock` file, held for one save
struct SaveLock {
    file: File,
}

impl SaveLock {
    fn acquire(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let lock_path = path.with_extension("toml.lock");
        let file = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to lock {}", lock_path.display()))?;
        Ok(Self { file })
    }
}

impl Drop for SaveLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Stage `contents` next to `path`, flush it to disk, then rename over `path`
fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let staged = path.with_extension("toml.tmp");
    let mut file = File::create(&staged)
        .with_context(|| format!("Failed to create temp file: {}", staged.display()))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .with_context(|| format!("Failed to write {}", staged.display()))?;
    drop(file);

    fs::rename(&staged, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))
}
