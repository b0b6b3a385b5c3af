//! Persisted configuration asset (`*.qtconfig.toml`).
//!
//! One asset per project holds the generation settings and the curated list of
//! templates. Example:
//!
//! ```toml
//! path-mode = "relative"
//! folder-path = "/Editor/Generated/"
//! template-prefix = "Template_"
//!
//! [[templates]]
//! menu-path = "Assets/Create/Templates/Behaviour"
//! file-name = "NewBehaviour.cs"
//! template = "Assets/Templates/Template_Behaviour.cs.txt"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::descriptor::TemplateList;
use crate::error::ConfigError;
use crate::naming::{directory_of, sanitize_directory, TemplateNaming, DEFAULT_TEMPLATE_PREFIX};

/// Root folder every asset path starts with.
pub const ASSETS_ROOT: &str = "Assets/";

/// File name given to configuration assets created by `init`.
pub const DEFAULT_CONFIG_ASSET_NAME: &str = "NewTemplateConfig.qtconfig.toml";

fn default_folder_path() -> String {
    "/Editor/Generated/".to_string()
}

fn default_template_prefix() -> String {
    DEFAULT_TEMPLATE_PREFIX.to_string()
}

fn default_template_path() -> String {
    "Templates/".to_string()
}

fn default_namespace() -> String {
    "QuickTemplates.Editor.Generated".to_string()
}

fn default_class_name() -> String {
    "QuickTemplateMenuItems".to_string()
}

/// How `folder-path` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathMode {
    /// From the project root, always under `Assets/`.
    Absolute,
    /// Relative to the folder containing the configuration asset.
    #[default]
    Relative,
}

/// How the unique suffix of generated method names is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierMode {
    /// Fresh random token per run.
    #[default]
    Random,
    /// Token derived from the template path; output is reproducible.
    Stable,
}

/// The configuration asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigAsset {
    #[serde(default)]
    pub path_mode: PathMode,

    /// Folder the generated script is written to.
    #[serde(default = "default_folder_path")]
    pub folder_path: String,

    /// Prefix identifying template files.
    #[serde(default = "default_template_prefix")]
    pub template_prefix: String,

    /// Menu folder (under `Assets/Create/`) for discovered templates.
    #[serde(default = "default_template_path")]
    pub default_template_path: String,

    /// Namespace of the generated class.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Name of the generated class and of its file.
    #[serde(default = "default_class_name")]
    pub class_name: String,

    #[serde(default)]
    pub identifier_mode: IdentifierMode,

    #[serde(default)]
    pub templates: TemplateList,
}

impl Default for ConfigAsset {
    fn default() -> Self {
        Self {
            path_mode: PathMode::default(),
            folder_path: default_folder_path(),
            template_prefix: default_template_prefix(),
            default_template_path: default_template_path(),
            namespace: default_namespace(),
            class_name: default_class_name(),
            identifier_mode: IdentifierMode::default(),
            templates: TemplateList::default(),
        }
    }
}

impl ConfigAsset {
    /// Parse an asset; `origin` is only used for error messages.
    pub fn parse(contents: &str, origin: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.into(),
            source: e,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Naming rules for the configured prefix.
    pub fn naming(&self) -> TemplateNaming {
        TemplateNaming::new(self.template_prefix.clone())
    }

    /// Project-relative folder the generated script is written to, with a
    /// trailing `/`.
    ///
    /// `asset_path` is the project-relative location of this configuration asset.
    pub fn output_directory(&self, asset_path: &str) -> Result<String, ConfigError> {
        match self.path_mode {
            PathMode::Absolute => {
                let folder = sanitize_directory(&self.folder_path, false, true)?;
                if folder.starts_with(ASSETS_ROOT) {
                    Ok(folder)
                } else {
                    sanitize_directory(&format!("{ASSETS_ROOT}{folder}"), false, true)
                }
            }
            PathMode::Relative => sanitize_directory(
                &format!("{}{}", directory_of(asset_path), self.folder_path),
                false,
                true,
            ),
        }
    }

    /// Project-relative path of the generated script.
    pub fn output_file(&self, asset_path: &str) -> Result<String, ConfigError> {
        Ok(format!(
            "{}{}.generated.cs",
            self.output_directory(asset_path)?,
            self.class_name
        ))
    }
}
