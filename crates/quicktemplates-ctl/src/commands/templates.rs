//! `quicktemplates-ctl templates`: curate the configured template list.

use quicktemplates_sdk::descriptor::SortKey;
use quicktemplates_sdk::discovery::{load_templates, LoadedConfig};

use super::ProjectContext;
use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;
use crate::TemplatesCommands;

pub(crate) fn handle_templates_command(
    cmd: TemplatesCommands,
    ctx: &ProjectContext,
    cli_config: &CliConfig,
) -> CtlResult<()> {
    let mut loaded = ctx.load_config()?;

    match cmd {
        TemplatesCommands::List { json } => list_templates(&loaded, json),
        TemplatesCommands::Load => {
            let added = load_templates(&mut loaded.asset, &ctx.store, &cli_config.search_paths)?;
            if added == 0 {
                output::hint("No new templates found.");
                return Ok(());
            }
            loaded.save(&ctx.store)?;
            output::success(format!("Registered {added} new template(s) in {}", loaded.path));
            Ok(())
        }
        TemplatesCommands::Sort { by } => sort_templates(&mut loaded, ctx, by),
        TemplatesCommands::Remove { index } => {
            let len = loaded.asset.templates.len();
            let removed = loaded
                .asset
                .templates
                .remove(index)
                .ok_or(CtlError::IndexOutOfRange { index, len })?;
            loaded.save(&ctx.store)?;
            output::success(format!("Removed {}", removed.menu_path));
            Ok(())
        }
        TemplatesCommands::Move { from, to } => {
            let len = loaded.asset.templates.len();
            if !loaded.asset.templates.move_item(from, to) {
                return Err(CtlError::IndexOutOfRange {
                    index: from.max(to),
                    len,
                });
            }
            loaded.save(&ctx.store)?;
            output::success(format!("Moved entry {from} to {to}"));
            Ok(())
        }
    }
}

fn list_templates(loaded: &LoadedConfig, json: bool) -> CtlResult<()> {
    let templates = &loaded.asset.templates;

    if json {
        output::plain(serde_json::to_string_pretty(templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        output::warning(format!("No templates configured in {}.", loaded.path));
        output::hint("Run `quicktemplates-ctl templates load` to register discovered templates.");
        return Ok(());
    }

    output::header(format!("Templates in {}:", loaded.path));
    output::blank();
    for (index, descriptor) in templates.iter().enumerate() {
        output::entry(
            index,
            descriptor.normalized_menu_path(),
            format!("{} <- {}", descriptor.file_name, descriptor.template),
        );
    }

    Ok(())
}

fn sort_templates(loaded: &mut LoadedConfig, ctx: &ProjectContext, by: SortKey) -> CtlResult<()> {
    if loaded.asset.templates.len() < 2 {
        output::warning("Nothing to sort: fewer than two templates configured.");
        return Ok(());
    }

    loaded.asset.templates.sort(by);
    loaded.save(&ctx.store)?;
    output::success(format!("Sorted {} templates by {by}", loaded.asset.templates.len()));
    Ok(())
}
