//! `quicktemplates-ctl init`: create the project's configuration asset.

use quicktemplates_sdk::discovery::create_config_asset;
use quicktemplates_sdk::ConfigError;

use super::ProjectContext;
use crate::error::CtlResult;
use crate::output;

pub(crate) fn handle_init_command(ctx: &ProjectContext, folder: &str) -> CtlResult<()> {
    let created = match create_config_asset(&ctx.store, folder) {
        Ok(created) => created,
        Err(e @ ConfigError::AlreadyExists { .. }) => {
            output::warning("This project already has a configuration asset.");
            output::hint("Only one is allowed per project; edit the existing one instead.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    output::success(format!("Created {}", created.path));
    output::blank();
    output::hint("Next steps:");
    output::plain("  quicktemplates-ctl templates load     # Register discovered templates");
    output::plain("  quicktemplates-ctl generate           # Write the menu item script");

    Ok(())
}
