//! Script generation from a curated list.
//!
//! Flow: seed templates → init → load → generate → inspect the written script

use std::cell::Cell;

use anyhow::Result;

use quicktemplates::config::{IdentifierMode, PathMode};
use quicktemplates::discovery::{load_config, load_templates};
use quicktemplates::generate::GenerationPipeline;
use quicktemplates::host::AssetRefresher;

use crate::common::project::TestProject;

#[derive(Debug, Default)]
struct RecordingRefresher {
    requests: Cell<u32>,
}

impl AssetRefresher for RecordingRefresher {
    fn request_refresh(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn test_generated_script_layout() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut config = project.init()?;
    load_templates(&mut config.asset, &project.store, &TestProject::scope())?;
    config.asset.identifier_mode = IdentifierMode::Stable;

    let refresher = RecordingRefresher::default();
    let report = GenerationPipeline::new().run(&config, &project.store, &refresher)?;

    assert_eq!(
        report.output_path,
        "Assets/QuickTemplates/Editor/Generated/QuickTemplateMenuItems.generated.cs"
    );
    assert_eq!(refresher.requests.get(), 1);

    let script = project.read(&report.output_path)?;
    assert_eq!(script, report.content);

    let first = &report.entries[0];
    let expected_method = format!(
        "\t\t#if UNITY_EDITOR\n\
         \t\t[UnityEditor.MenuItem(\"Assets/Create/Templates/Unlit\", priority = -100)]\n\
         \t\tprivate static void {}()\n\
         \t\t{{\n\
         \t\t\tUnityEditor.ProjectWindowUtil.CreateScriptAssetFromTemplateFile(\"Assets/Shaders/template_Unlit.shader.txt\", \"NewUnlit.shader\");\n\
         \t\t}}\n\
         \t\t#endif",
        first.method_name
    );
    assert!(
        script.contains(&expected_method),
        "unexpected script:\n{script}"
    );
    assert!(first.method_name.starts_with("Createtemplate_Unlit_"));

    let priorities: Vec<i32> = report.entries.iter().map(|e| e.priority).collect();
    assert_eq!(priorities, vec![-100, -99, -98]);
    Ok(())
}

#[test]
fn test_regeneration_in_stable_mode_is_byte_identical() -> Result<()> {
    let project = TestProject::with_templates()?;
    project.write(
        "Assets/Tools/Menus.qtconfig.toml",
        "identifier-mode = \"stable\"\npath-mode = \"absolute\"\nfolder-path = \"Editor/Menus\"\n",
    )?;

    let mut config = load_config(&project.store)?;
    assert_eq!(config.asset.path_mode, PathMode::Absolute);
    load_templates(&mut config.asset, &project.store, &TestProject::scope())?;
    config.save(&project.store)?;

    let pipeline = GenerationPipeline::new();
    let refresher = RecordingRefresher::default();
    let first = pipeline.run(&load_config(&project.store)?, &project.store, &refresher)?;
    let second = pipeline.run(&load_config(&project.store)?, &project.store, &refresher)?;

    assert_eq!(
        first.output_path,
        "Assets/Editor/Menus/QuickTemplateMenuItems.generated.cs"
    );
    assert_eq!(first.content, second.content);
    assert_eq!(refresher.requests.get(), 2);
    Ok(())
}

#[test]
fn test_random_mode_changes_only_method_suffixes() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut config = project.init()?;
    load_templates(&mut config.asset, &project.store, &TestProject::scope())?;

    let pipeline = GenerationPipeline::new();
    let first = pipeline.render(&config.asset)?;
    let second = pipeline.render(&config.asset)?;
    assert_ne!(first.content, second.content);

    let mask = |content: &str, entries: &[quicktemplates::generate::GeneratedEntry]| {
        entries.iter().fold(content.to_string(), |acc, e| {
            acc.replace(&e.method_name, "METHOD")
        })
    };
    assert_eq!(
        mask(&first.content, &first.entries),
        mask(&second.content, &second.entries)
    );
    Ok(())
}

#[test]
fn test_empty_list_still_generates_class() -> Result<()> {
    let project = TestProject::new()?;
    let config = project.init()?;

    let report =
        GenerationPipeline::new().run(&config, &project.store, &RecordingRefresher::default())?;
    assert!(report.entries.is_empty());
    assert!(project
        .read(&report.output_path)?
        .contains("internal static class QuickTemplateMenuItems\n\t{\n\t}"));
    Ok(())
}
