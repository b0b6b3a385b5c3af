//! Discovery and list curation against a project on disk.
//!
//! Flow: seed templates → create config asset → load → sort/reorder → save → reload

use anyhow::Result;

use quicktemplates::descriptor::SortKey;
use quicktemplates::discovery::{discover_template_paths, load_config, load_templates};
use quicktemplates::naming::TemplateNaming;
use quicktemplates::ConfigError;

use crate::common::project::TestProject;

#[test]
fn test_discovery_respects_naming_rules() -> Result<()> {
    let project = TestProject::with_templates()?;

    let found = discover_template_paths(
        &project.store,
        &TemplateNaming::default(),
        &TestProject::scope(),
    );
    assert_eq!(
        found,
        vec![
            "Assets/Shaders/template_Unlit.shader.txt",
            "Assets/Templates/Template_Behaviour.cs.txt",
            "Assets/Templates/Template_Settings.json.txt",
        ]
    );
    Ok(())
}

#[test]
fn test_load_sort_and_persist() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut config = project.init()?;

    let added = load_templates(&mut config.asset, &project.store, &TestProject::scope())?;
    assert_eq!(added, 3);

    // Case-insensitive prefix match still strips the prefix.
    let unlit = &config.asset.templates.as_slice()[0];
    assert_eq!(unlit.menu_path, "Assets/Create/Templates/Unlit");
    assert_eq!(unlit.file_name, "NewUnlit.shader");

    config.asset.templates.sort(SortKey::Name);
    config.save(&project.store)?;

    let reloaded = load_config(&project.store)?;
    let names: Vec<&str> = reloaded
        .asset
        .templates
        .iter()
        .map(|d| d.file_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["NewBehaviour.cs", "NewSettings.json", "NewUnlit.shader"]
    );

    // The asset on disk is plain kebab-case TOML.
    let raw: toml::Table = toml::from_str(&project.read(&reloaded.path)?)?;
    assert_eq!(raw["templates"].as_array().map(Vec::len), Some(3));
    assert_eq!(raw["path-mode"].as_str(), Some("relative"));
    Ok(())
}

#[test]
fn test_user_edits_survive_reload() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut config = project.init()?;
    load_templates(&mut config.asset, &project.store, &TestProject::scope())?;

    assert!(config.asset.templates.move_item(2, 0));
    let removed = config.asset.templates.remove(1);
    assert!(removed.is_some());
    config.save(&project.store)?;

    // A fresh load does not re-add entries the user kept, only missing ones.
    let mut reloaded = load_config(&project.store)?;
    assert_eq!(reloaded.asset.templates.len(), 2);
    let added = load_templates(&mut reloaded.asset, &project.store, &TestProject::scope())?;
    assert_eq!(added, 1);
    Ok(())
}

#[test]
fn test_custom_prefix_changes_discovery() -> Result<()> {
    let project = TestProject::with_templates()?;
    project.write(
        "Assets/QuickTemplates/Studio.qtconfig.toml",
        "template-prefix = \"MyTemplate_\"\ndefault-template-path = \"Studio\"\n",
    )?;

    let mut config = load_config(&project.store)?;
    let added = load_templates(&mut config.asset, &project.store, &TestProject::scope())?;
    assert_eq!(added, 1);
    assert_eq!(
        config.asset.templates.as_slice()[0].menu_path,
        "Assets/Create/Studio/Wrong"
    );
    Ok(())
}

#[test]
fn test_second_config_asset_is_refused() -> Result<()> {
    let project = TestProject::new()?;
    project.init()?;

    let err = quicktemplates::discovery::create_config_asset(&project.store, "Assets/Elsewhere")
        .unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists { .. }));
    assert!(err.to_string().contains("NewTemplateConfig.qtconfig.toml"));
    Ok(())
}
