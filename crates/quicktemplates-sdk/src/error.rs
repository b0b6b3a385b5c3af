//! Error types shared across the SDK.

use std::path::PathBuf;

/// Construction errors raised by the source builders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("class name is a required field and cannot be empty")]
    MissingTypeName,

    #[error("method name is a required field and cannot be empty")]
    MissingMemberName,
}

/// Errors raised while locating, reading or writing configuration assets.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration asset (*.qtconfig.toml) found in project")]
    NotFound,

    #[error("a configuration asset already exists: {}", format_paths(.existing))]
    AlreadyExists { existing: Vec<PathBuf> },

    #[error("input path cannot be empty")]
    EmptyPath,
}

/// Errors raised by host-side collaborators.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template asset not found: {0}")]
    TemplateMissing(PathBuf),

    #[error("no menu item registered at '{0}'")]
    UnknownMenuItem(String),

    #[error("menu item '{0}' is currently disabled")]
    MenuItemDisabled(String),
}

/// Errors raised by the generation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("script construction failed: {0}")]
    Build(#[from] BuildError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
