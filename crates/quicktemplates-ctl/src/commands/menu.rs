//! `quicktemplates-ctl menu`: register the template menu in memory and inspect
//! or run it.

use std::sync::Arc;

use quicktemplates_sdk::host::FsTemplateInstantiator;
use quicktemplates_sdk::menu::{InMemoryMenuRegistry, MenuSession};

use super::ProjectContext;
use crate::error::CtlResult;
use crate::output;
use crate::MenuCommands;

pub(crate) fn handle_menu_command(cmd: MenuCommands, ctx: &ProjectContext) -> CtlResult<()> {
    let loaded = ctx.load_config()?;
    let target = match &cmd {
        MenuCommands::List => String::new(),
        MenuCommands::Invoke { target, .. } => target.clone(),
    };

    let instantiator = Arc::new(FsTemplateInstantiator::new(
        ctx.root.clone(),
        ctx.store.absolute(&target),
    ));
    let mut registry = InMemoryMenuRegistry::new();
    let mut session = MenuSession::new();
    session.initialize(&loaded.asset.templates, &mut registry, instantiator);

    match cmd {
        MenuCommands::List => {
            if registry.is_empty() {
                output::warning("No menu items registered.");
                return Ok(());
            }
            output::header("Template menu:");
            output::blank();
            for item in registry.items() {
                output::entry(item.priority, &item.path, "");
            }
        }
        MenuCommands::Invoke { path, .. } => {
            let created = registry.invoke(&path)?;
            output::success(format!("Created {}", created.display()));
        }
    }

    session.teardown(&mut registry);
    Ok(())
}
