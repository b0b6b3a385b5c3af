//! CLI configuration for project location and developer preferences.
//!
//! Separate from the project's `*.qtconfig.toml` asset; this controls how the
//! CLI finds and scans a project, not what gets generated.

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use serde::Deserialize;

use quicktemplates_sdk::builders::DEFAULT_EDITOR_SYMBOL;
use quicktemplates_sdk::discovery::DEFAULT_SEARCH_PATH;

fn default_search_paths() -> Vec<String> {
    vec![DEFAULT_SEARCH_PATH.to_string()]
}

fn default_editor_symbol() -> String {
    DEFAULT_EDITOR_SYMBOL.to_string()
}

/// CLI-specific configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Project directory used when `--project` is not given.
    pub project_root: Option<String>,

    /// Folders scanned for template files. Default: `["Assets/"]`.
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,

    /// Preprocessor symbol guarding generated methods. Default: `UNITY_EDITOR`.
    #[serde(default = "default_editor_symbol")]
    pub editor_symbol: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            search_paths: default_search_paths(),
            editor_symbol: default_editor_symbol(),
        }
    }
}
