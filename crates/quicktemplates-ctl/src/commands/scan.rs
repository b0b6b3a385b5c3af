//! `quicktemplates-ctl scan`: list template files in the search paths.

use serde::Serialize;

use quicktemplates_sdk::discovery::discover_template_paths;
use quicktemplates_sdk::naming::resolve;
use quicktemplates_sdk::ConfigError;

use super::ProjectContext;
use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct ScannedTemplate {
    path: String,
    name: String,
    extension: String,
    configured: bool,
}

pub(crate) fn handle_scan_command(
    ctx: &ProjectContext,
    cli_config: &CliConfig,
    json: bool,
) -> CtlResult<()> {
    // Without a configuration asset, scan with the default prefix.
    let config = match ctx.load_config() {
        Ok(loaded) => Some(loaded.asset),
        Err(CtlError::Config(ConfigError::NotFound)) => None,
        Err(e) => return Err(e),
    };
    let naming = config.as_ref().map(|c| c.naming()).unwrap_or_default();

    let found: Vec<ScannedTemplate> =
        discover_template_paths(&ctx.store, &naming, &cli_config.search_paths)
            .into_iter()
            .map(|path| {
                let info = resolve(&path);
                ScannedTemplate {
                    configured: config
                        .as_ref()
                        .is_some_and(|c| c.templates.references(&path)),
                    name: naming.strip_prefix(&info.name).to_string(),
                    extension: info.extension,
                    path,
                }
            })
            .collect();

    if json {
        output::plain(serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        output::warning(format!(
            "No template files (prefix '{}', ending in .txt) found.",
            naming.prefix()
        ));
        output::blank();
        output::plain("Searched paths:");
        for path in &cli_config.search_paths {
            output::plain(format!("  - {path}"));
        }
        return Ok(());
    }

    output::header(format!("Found {} template file(s):", found.len()));
    output::blank();
    for (index, template) in found.iter().enumerate() {
        let status = if template.configured { "configured" } else { "new" };
        output::entry(
            index,
            &template.path,
            format!("{}{} ({status})", template.name, template.extension),
        );
    }

    Ok(())
}
