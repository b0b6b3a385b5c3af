//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Green: success messages.
pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);

/// Red: errors.
pub(crate) const ERROR: Style = fg(AnsiColor::Red);

/// Yellow: warnings.
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

/// Bold: section headers and labels.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Cyan: menu paths and asset locations.
pub(crate) const PATH: Style = fg(AnsiColor::Cyan);

/// Dimmed: secondary information and hints.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Clap help styles matching the output palette.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let heading = fg(AnsiColor::Green).effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(PATH)
        .placeholder(PATH)
        .error(ERROR.effects(Effects::BOLD))
        .valid(SUCCESS)
        .invalid(WARNING)
}
