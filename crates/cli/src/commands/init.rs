//! Initialize .checkframe.toml configuration

use anyhow::{Context, Result};
use checkframe_core::config::CONFIG_FILE_NAME;
use checkframe_core::CheckframeConfig;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Write the default configuration into `dir`.
///
/// Returns `None` when a configuration file is already there; an existing
/// file is never overwritten.
pub fn write_default_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(None);
    }

    CheckframeConfig::default()
        .save(&config_path)
        .with_context(|| format!("write {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "wrote default configuration");
    Ok(Some(config_path))
}

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_dir = path.unwrap_or_else(|| Path::new("."));

    match write_default_config(target_dir)? {
        Some(config_path) => {
            println!("✅ Created {}", config_path.display());
            println!("\nEdit [log_level] to choose what each checker reports, then run:");
            println!("  {}", "checkframe report --tsc tsc.json --eslint eslint.json".bold());
        }
        None => {
            println!(
                "⚠️  {} already exists in {}",
                CONFIG_FILE_NAME,
                target_dir.display()
            );
        }
    }

    Ok(())
}
