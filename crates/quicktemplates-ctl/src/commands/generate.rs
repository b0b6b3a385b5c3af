//! `quicktemplates-ctl generate`: write the menu item script.

use quicktemplates_sdk::generate::GenerationPipeline;
use quicktemplates_sdk::host::LoggingRefresher;

use super::ProjectContext;
use crate::cli_config::CliConfig;
use crate::error::CtlResult;
use crate::output;

pub(crate) fn handle_generate_command(
    ctx: &ProjectContext,
    cli_config: &CliConfig,
    dry_run: bool,
    json: bool,
) -> CtlResult<()> {
    let loaded = ctx.load_config()?;
    let pipeline = GenerationPipeline::new().with_editor_symbol(cli_config.editor_symbol.clone());

    if dry_run {
        let rendered = pipeline.render(&loaded.asset)?;
        output::plain(rendered.content);
        return Ok(());
    }

    let report = pipeline.run(&loaded, &ctx.store, &LoggingRefresher)?;

    if json {
        output::plain(serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::success(format!("Generated {}", report.output_path));
    let class = if loaded.asset.namespace.trim().is_empty() {
        loaded.asset.class_name.clone()
    } else {
        format!("{}.{}", loaded.asset.namespace, loaded.asset.class_name)
    };
    output::label("Class", class);
    output::label("Menu items", report.entries.len());
    if report.entries.is_empty() {
        output::warning("The template list is empty; the generated class has no menu items.");
        return Ok(());
    }

    output::blank();
    for entry in &report.entries {
        output::entry(entry.priority, &entry.menu_path, &entry.method_name);
    }

    Ok(())
}
