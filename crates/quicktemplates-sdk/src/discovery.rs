//! Template and configuration asset discovery.
//!
//! Template files are any text assets in the search scope whose name passes
//! [`TemplateNaming::is_template`]; everything else is skipped without error.
//! Configuration assets are looked up across the whole project, and exactly one
//! is expected.

use crate::config::{ConfigAsset, DEFAULT_CONFIG_ASSET_NAME};
use crate::descriptor::{TemplateDescriptor, ASSET_CREATE_PATH};
use crate::error::ConfigError;
use crate::host::{AssetFilter, AssetStore};
use crate::naming::{resolve, sanitize_directory, TemplateNaming};

/// Default discovery scope.
pub const DEFAULT_SEARCH_PATH: &str = "Assets/";

/// A configuration asset together with its project-relative location.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: String,
    pub asset: ConfigAsset,
}

impl LoadedConfig {
    /// Write the asset back to where it was loaded from.
    pub fn save(&self, store: &dyn AssetStore) -> Result<(), ConfigError> {
        let contents = self.asset.to_toml_string()?;
        store
            .write_asset(&self.path, &contents)
            .map_err(|e| ConfigError::Io {
                path: self.path.clone().into(),
                source: e,
            })?;
        tracing::debug!(path = %self.path, "Saved configuration asset");
        Ok(())
    }
}

/// Paths of every template asset in `scope`.
pub fn discover_template_paths(
    store: &dyn AssetStore,
    naming: &TemplateNaming,
    scope: &[String],
) -> Vec<String> {
    store
        .find_assets(AssetFilter::TextAssets, scope)
        .into_iter()
        .filter(|path| {
            let keep = naming.is_template(path);
            if !keep {
                tracing::debug!(%path, "Not a template, skipping");
            }
            keep
        })
        .collect()
}

/// Descriptor suggested for a newly discovered template.
///
/// `Assets/Templates/Template_Foo.cs.txt` becomes menu path
/// `Assets/Create/<default-template-path>/Foo` and file name `NewFoo.cs`.
pub fn descriptor_for(path: &str, config: &ConfigAsset) -> Result<TemplateDescriptor, ConfigError> {
    let naming = config.naming();
    let info = resolve(path);
    let name = naming.strip_prefix(&info.name);

    let menu_path = sanitize_directory(
        &format!(
            "{ASSET_CREATE_PATH}{}/{name}",
            config.default_template_path
        ),
        false,
        false,
    )?;

    Ok(TemplateDescriptor::new(
        menu_path,
        format!("New{name}{}", info.extension),
        path,
    ))
}

/// Append every discovered template not yet referenced by `config`.
///
/// Returns the number of descriptors added.
pub fn load_templates(
    config: &mut ConfigAsset,
    store: &dyn AssetStore,
    scope: &[String],
) -> Result<usize, ConfigError> {
    let naming = config.naming();
    let mut added = 0;

    for path in discover_template_paths(store, &naming, scope) {
        if config.templates.references(&path) {
            continue;
        }
        let descriptor = descriptor_for(&path, config)?;
        tracing::info!(template = %path, menu = %descriptor.menu_path, "Registered template");
        config.templates.push(descriptor);
        added += 1;
    }

    Ok(added)
}

/// Project-relative paths of every configuration asset.
pub fn find_config_assets(store: &dyn AssetStore) -> Vec<String> {
    store.find_assets(AssetFilter::ConfigAssets, &[])
}

/// Load the project's configuration asset.
///
/// Fails when none exists. When several exist the first one is used and the
/// conflicting locations are logged.
pub fn load_config(store: &dyn AssetStore) -> Result<LoadedConfig, ConfigError> {
    let found = find_config_assets(store);

    let Some(first) = found.first() else {
        return Err(ConfigError::NotFound);
    };

    if found.len() > 1 {
        tracing::warn!(
            count = found.len(),
            locations = %found.join(", "),
            using = %first,
            "Multiple configuration assets found in project"
        );
    }

    load_config_at(store, first)
}

/// Load the configuration asset at a known location.
pub fn load_config_at(store: &dyn AssetStore, path: &str) -> Result<LoadedConfig, ConfigError> {
    let contents = store.read_asset(path).map_err(|e| ConfigError::Io {
        path: path.into(),
        source: e,
    })?;
    let asset = ConfigAsset::parse(&contents, path)?;
    tracing::debug!(%path, templates = asset.templates.len(), "Loaded configuration asset");
    Ok(LoadedConfig {
        path: path.to_string(),
        asset,
    })
}

/// Create a default configuration asset in `folder`.
///
/// Refuses when the project already has one.
pub fn create_config_asset(store: &dyn AssetStore, folder: &str) -> Result<LoadedConfig, ConfigError> {
    let existing = find_config_assets(store);
    if !existing.is_empty() {
        tracing::warn!(
            locations = %existing.join(", "),
            "Cannot create multiple configuration assets in project"
        );
        return Err(ConfigError::AlreadyExists {
            existing: existing.into_iter().map(Into::into).collect(),
        });
    }

    let folder = sanitize_directory(folder, false, true)?;
    let loaded = LoadedConfig {
        path: format!("{folder}{DEFAULT_CONFIG_ASSET_NAME}"),
        asset: ConfigAsset::default(),
    };
    loaded.save(store)?;
    tracing::info!(path = %loaded.path, "Created configuration asset");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FsAssetStore;
    use std::fs;
    use std::path::Path;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// template").unwrap();
    }

    fn scope() -> Vec<String> {
        vec![DEFAULT_SEARCH_PATH.to_string()]
    }

    #[test]
    fn test_discover_filters_non_templates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Assets/Templates/Template_Behaviour.cs.txt");
        touch(dir.path(), "Assets/Templates/Readme.txt");
        touch(dir.path(), "Assets/Templates/MyTemplate_X.cs.txt");
        touch(dir.path(), "Assets/Templates/Template_Single.txt");

        let store = FsAssetStore::new(dir.path());
        let found = discover_template_paths(&store, &TemplateNaming::default(), &scope());
        assert_eq!(found, vec!["Assets/Templates/Template_Behaviour.cs.txt"]);
    }

    #[test]
    fn test_descriptor_for_template() {
        let config = ConfigAsset::default();
        let descriptor =
            descriptor_for("Assets/Templates/Template_Behaviour.cs.txt", &config).unwrap();
        assert_eq!(descriptor.menu_path, "Assets/Create/Templates/Behaviour");
        assert_eq!(descriptor.file_name, "NewBehaviour.cs");
        assert_eq!(
            descriptor.template,
            "Assets/Templates/Template_Behaviour.cs.txt"
        );
    }

    #[test]
    fn test_load_templates_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Assets/Templates/Template_A.cs.txt");
        touch(dir.path(), "Assets/Templates/Template_B.json.txt");

        let store = FsAssetStore::new(dir.path());
        let mut config = ConfigAsset::default();
        config.templates.push(TemplateDescriptor::new(
            "Custom/A",
            "MyA.cs",
            "Assets/Templates/Template_A.cs.txt",
        ));

        let added = load_templates(&mut config, &store, &scope()).unwrap();
        assert_eq!(added, 1);
        assert_eq!(config.templates.len(), 2);
        assert_eq!(config.templates.as_slice()[0].menu_path, "Custom/A");
        assert_eq!(config.templates.as_slice()[1].file_name, "NewB.json");

        // Second pass finds nothing new.
        assert_eq!(load_templates(&mut config, &store, &scope()).unwrap(), 0);
    }

    #[test]
    fn test_load_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path());
        assert!(matches!(
            load_config(&store),
            Err(ConfigError::NotFound)
        ));
    }

    #[test]
    fn test_create_then_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path());

        let created = create_config_asset(&store, "Assets/QuickTemplates").unwrap();
        assert_eq!(
            created.path,
            "Assets/QuickTemplates/NewTemplateConfig.qtconfig.toml"
        );

        let loaded = load_config(&store).unwrap();
        assert_eq!(loaded.path, created.path);
        assert_eq!(loaded.asset, ConfigAsset::default());

        let err = create_config_asset(&store, "Assets/Other").unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { existing } if existing.len() == 1));
    }

    #[test]
    fn test_multiple_configs_uses_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path());
        store
            .write_asset("Assets/A/a.qtconfig.toml", "class-name = \"First\"")
            .unwrap();
        store
            .write_asset("Assets/B/b.qtconfig.toml", "class-name = \"Second\"")
            .unwrap();

        let loaded = load_config(&store).unwrap();
        assert_eq!(loaded.path, "Assets/A/a.qtconfig.toml");
        assert_eq!(loaded.asset.class_name, "First");
    }
}
