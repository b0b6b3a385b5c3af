//! Command handlers for `quicktemplates-ctl`.
//!
//! Each module handles one command group and delegates to `quicktemplates-sdk`.

pub(crate) mod generate;
pub(crate) mod init;
pub(crate) mod menu;
pub(crate) mod scan;
pub(crate) mod templates;

pub(crate) use generate::handle_generate_command;
pub(crate) use init::handle_init_command;
pub(crate) use menu::handle_menu_command;
pub(crate) use scan::handle_scan_command;
pub(crate) use templates::handle_templates_command;

use std::path::PathBuf;

use quicktemplates_sdk::discovery::{self, LoadedConfig};
use quicktemplates_sdk::host::FsAssetStore;

use crate::cli_config::{expand_path, CliConfig};
use crate::error::{CtlError, CtlResult};

/// The project a command operates on.
#[derive(Debug)]
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub store: FsAssetStore,
    config_path: Option<String>,
}

impl ProjectContext {
    /// `--project` wins over `project-root` from the CLI config; the current
    /// directory is the fallback.
    pub(crate) fn resolve(
        project: Option<PathBuf>,
        config_path: Option<String>,
        cli_config: &CliConfig,
    ) -> CtlResult<Self> {
        let root = project
            .or_else(|| cli_config.project_root.as_deref().map(expand_path))
            .unwrap_or_else(|| PathBuf::from("."));

        if !root.is_dir() {
            return Err(CtlError::MissingProject(root.display().to_string()));
        }

        tracing::debug!(root = %root.display(), "Resolved project");
        Ok(Self {
            store: FsAssetStore::new(root.clone()),
            root,
            config_path,
        })
    }

    /// The configuration asset named by `--config`, or the single one in the project.
    pub(crate) fn load_config(&self) -> CtlResult<LoadedConfig> {
        let loaded = match &self.config_path {
            Some(path) => discovery::load_config_at(&self.store, path)?,
            None => discovery::load_config(&self.store)?,
        };
        Ok(loaded)
    }
}
