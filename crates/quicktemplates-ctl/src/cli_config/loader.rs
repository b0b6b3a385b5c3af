//! Config file discovery and loading for `.quicktemplates.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.quicktemplates.toml` (project-local)
//! 2. `~/.config/quicktemplates.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".quicktemplates.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "quicktemplates.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    find_config_file()
        .and_then(|path| load_from(&path))
        .unwrap_or_default()
}

fn load_from(path: &Path) -> Option<CliConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            return None;
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => {
            tracing::debug!(?path, "Loaded CLI config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
            None
        }
    }
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    home_dir()
        .map(|home| home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME))
        .filter(|global| global.is_file())
}

/// Expand a configured path, resolving `~` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
