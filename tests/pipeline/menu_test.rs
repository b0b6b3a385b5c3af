//! Menu registration and template instantiation on disk.
//!
//! Flow: load list → populate registry once → invoke items → teardown

use std::sync::Arc;

use anyhow::Result;

use quicktemplates::discovery::load_templates;
use quicktemplates::host::FsTemplateInstantiator;
use quicktemplates::menu::{InMemoryMenuRegistry, MenuRegistry, MenuSession, UnavailableMenuRegistry};
use quicktemplates::HostError;

use crate::common::project::TestProject;

fn session_for(
    project: &TestProject,
    registry: &mut dyn MenuRegistry,
) -> Result<MenuSession> {
    let mut config = project.init()?;
    load_templates(&mut config.asset, &project.store, &TestProject::scope())?;

    let instantiator = Arc::new(FsTemplateInstantiator::new(
        project.root(),
        project.store.absolute("Assets/Scripts"),
    ));
    let mut session = MenuSession::new();
    session.initialize(&config.asset.templates, registry, instantiator);
    Ok(session)
}

#[test]
fn test_menu_items_create_files_from_templates() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut registry = InMemoryMenuRegistry::new();
    let mut session = session_for(&project, &mut registry)?;

    let paths: Vec<(&str, i32)> = registry
        .items()
        .into_iter()
        .map(|item| (item.path.as_str(), item.priority))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("Assets/Create/Templates/Unlit", -100),
            ("Assets/Create/Templates/Behaviour", -99),
            ("Assets/Create/Templates/Settings", -98),
        ]
    );

    let created = registry.invoke("Assets/Create/Templates/Behaviour")?;
    assert_eq!(created, project.root().join("Assets/Scripts/NewBehaviour.cs"));
    assert_eq!(
        project.read("Assets/Scripts/NewBehaviour.cs")?,
        project.read("Assets/Templates/Template_Behaviour.cs.txt")?
    );

    // Existing files are never overwritten.
    let again = registry.invoke("Assets/Create/Templates/Behaviour")?;
    assert_eq!(again, project.root().join("Assets/Scripts/NewBehaviour 1.cs"));

    assert_eq!(session.teardown(&mut registry), 3);
    assert!(registry.is_empty());
    Ok(())
}

#[test]
fn test_deleted_template_reports_missing() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut registry = InMemoryMenuRegistry::new();
    let _session = session_for(&project, &mut registry)?;

    std::fs::remove_file(project.root().join("Assets/Templates/Template_Settings.json.txt"))?;
    let err = registry
        .invoke("Assets/Create/Templates/Settings")
        .unwrap_err();
    assert!(matches!(err, HostError::TemplateMissing(_)));
    Ok(())
}

#[test]
fn test_unavailable_menu_api_is_harmless() -> Result<()> {
    let project = TestProject::with_templates()?;
    let mut registry = UnavailableMenuRegistry;
    let mut session = session_for(&project, &mut registry)?;

    assert!(session.is_initialized());
    assert!(!registry.exists("Assets/Create/Templates/Unlit"));
    assert_eq!(session.teardown(&mut registry), 0);
    Ok(())
}
