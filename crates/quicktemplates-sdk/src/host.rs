//! Seams to the editor host: asset lookup, file-from-template creation and
//! asset refresh.
//!
//! Filesystem implementations treat a project directory as the asset store.
//! Asset paths are project-relative and `/`-separated (`Assets/Editor/Foo.txt`),
//! matching how the editor names assets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::HostError;
use crate::naming::split_extension;

/// File extension of configuration assets.
pub const CONFIG_ASSET_SUFFIX: &str = ".qtconfig.toml";

/// Which assets a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFilter {
    /// Plain text assets (`*.txt`), candidates for templates.
    TextAssets,
    /// Configuration assets (`*.qtconfig.toml`).
    ConfigAssets,
}

impl AssetFilter {
    pub fn matches(self, file_name: &str) -> bool {
        match self {
            Self::TextAssets => file_name.ends_with(".txt"),
            Self::ConfigAssets => file_name.ends_with(CONFIG_ASSET_SUFFIX),
        }
    }
}

/// Asset lookup used for discovery.
pub trait AssetStore {
    /// Project-relative paths of assets matching `filter` under any of `scope`.
    ///
    /// An empty scope searches the whole project.
    fn find_assets(&self, filter: AssetFilter, scope: &[String]) -> Vec<String>;

    /// Whether an asset exists at the project-relative `path`.
    fn exists(&self, path: &str) -> bool;

    /// Read a text asset.
    fn read_asset(&self, path: &str) -> std::io::Result<String>;

    /// Create or overwrite a text asset, creating parent folders as needed.
    fn write_asset(&self, path: &str, content: &str) -> std::io::Result<()>;
}

/// Creates a new file from a template asset. Template contents are copied verbatim.
pub trait TemplateInstantiator: Send + Sync {
    fn create_file_from_template(
        &self,
        template_path: &str,
        desired_name: &str,
    ) -> Result<PathBuf, HostError>;
}

/// Asks the host to re-import assets after generation. Fire-and-forget.
pub trait AssetRefresher {
    fn request_refresh(&self);
}

/// Asset store backed by a project directory.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a project-relative asset path.
    pub fn absolute(&self, asset_path: &str) -> PathBuf {
        self.root.join(asset_path)
    }

    fn walk(&self, dir: &Path, filter: AssetFilter, found: &mut Vec<String>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(?dir, error = %e, "Cannot read asset directory");
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            // Hidden entries and `Folder~` directories are ignored by the editor.
            if name.starts_with('.') || name.ends_with('~') {
                continue;
            }

            if path.is_dir() {
                self.walk(&path, filter, found);
            } else if filter.matches(name) {
                if let Some(relative) = self.relative(&path) {
                    found.push(relative);
                }
            }
        }
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        Some(parts.join("/"))
    }
}

impl AssetStore for FsAssetStore {
    fn find_assets(&self, filter: AssetFilter, scope: &[String]) -> Vec<String> {
        let mut found = Vec::new();

        if scope.is_empty() {
            self.walk(&self.root, filter, &mut found);
            return found;
        }

        for dir in scope {
            let base = self.absolute(dir.trim_start_matches('/'));
            if !base.is_dir() {
                tracing::debug!(?base, "Asset search path does not exist, skipping");
                continue;
            }
            self.walk(&base, filter, &mut found);
        }

        // Overlapping scopes may visit the same asset twice.
        let mut seen = HashSet::new();
        found.retain(|p| seen.insert(p.clone()));
        found
    }

    fn exists(&self, path: &str) -> bool {
        self.absolute(path).is_file()
    }

    fn read_asset(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.absolute(path))
    }

    fn write_asset(&self, path: &str, content: &str) -> std::io::Result<()> {
        let target = self.absolute(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(target, content)
    }
}

/// Copies template assets into a target directory, never overwriting.
#[derive(Debug, Clone)]
pub struct FsTemplateInstantiator {
    project_root: PathBuf,
    target_dir: PathBuf,
}

impl FsTemplateInstantiator {
    pub fn new(project_root: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            target_dir: target_dir.into(),
        }
    }

    /// First free name of the form `Name.ext`, `Name 1.ext`, `Name 2.ext`, ...
    fn unique_destination(&self, desired_name: &str) -> PathBuf {
        let candidate = self.target_dir.join(desired_name);
        if !candidate.exists() {
            return candidate;
        }

        let (stem, extension) = split_extension(desired_name);
        (1..)
            .map(|n| self.target_dir.join(format!("{stem} {n}{extension}")))
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}

impl TemplateInstantiator for FsTemplateInstantiator {
    fn create_file_from_template(
        &self,
        template_path: &str,
        desired_name: &str,
    ) -> Result<PathBuf, HostError> {
        let source = self.project_root.join(template_path);
        if !source.is_file() {
            return Err(HostError::TemplateMissing(source));
        }

        std::fs::create_dir_all(&self.target_dir).map_err(|e| HostError::Io {
            path: self.target_dir.clone(),
            source: e,
        })?;

        let destination = self.unique_destination(desired_name);
        std::fs::copy(&source, &destination).map_err(|e| HostError::Io {
            path: destination.clone(),
            source: e,
        })?;

        tracing::info!(template = %template_path, created = ?destination, "Created file from template");
        Ok(destination)
    }
}

/// Refresher that only records the request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRefresher;

impl AssetRefresher for LoggingRefresher {
    fn request_refresh(&self) {
        tracing::info!("Asset refresh requested");
    }
}
