use crate::config::{self, CONFIG_FILE_NAME};
use crate::errors::Error;
use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

/// Validate a configuration file, printing every issue found.
pub fn validate_config_file(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if !path.exists() {
        anyhow::bail!("Configuration file {} not found", path.display());
    }

    match config::load_config_from_path(&path) {
        Ok(config) => {
            println!(
                "{} {} ({} aspects, {:?} matching)",
                "✓".green(),
                path.display(),
                config.catalog().len(),
                config.match_mode()
            );
            Ok(())
        }
        Err(Error::InvalidConfig(issues)) => {
            println!("{} {}", "✗".red(), path.display());
            for issue in &issues {
                println!("  - {issue}");
            }
            anyhow::bail!("{} configuration issue(s) found", issues.len())
        }
        Err(e) => Err(e.into()),
    }
}
