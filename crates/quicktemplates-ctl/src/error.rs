//! CLI error type.

use quicktemplates_sdk::{ConfigError, GenerateError, HostError};

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no template at index {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("project directory '{0}' does not exist")]
    MissingProject(String),
}

pub(crate) type CtlResult<T> = Result<T, CtlError>;
