use std::fs;
use std::path::{Path, PathBuf};

use super::core::AspectlensConfig;
use super::validation::validate_config_result;
use crate::errors::{Error, Result};

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = ".aspectlens.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AspectlensConfig> {
    parse_config_impl(contents, None)
}

fn parse_config_impl(contents: &str, path: Option<&Path>) -> Result<AspectlensConfig> {
    let config = toml::from_str::<AspectlensConfig>(contents)
        .map_err(|e| Error::config_parse(path, e.to_string()))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load a specific config file; any failure is returned to the caller.
pub fn load_config_from_path(path: &Path) -> Result<AspectlensConfig> {
    let contents = read_config_file(path)?;
    let config = parse_config_impl(&contents, Some(path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, logging and skipping failures
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AspectlensConfig> {
    match load_config_from_path(config_path) {
        Ok(config) => Some(config),
        Err(Error::Io { source, .. }) => {
            handle_read_error(config_path, &source);
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user configuration file, e.g. `~/.config/aspectlens/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aspectlens").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config, for a config file.
pub fn load_config_from(start: PathBuf) -> AspectlensConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AspectlensConfig::default()
        })
}

pub fn load_config() -> AspectlensConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AspectlensConfig::default()
        }
    }
}
