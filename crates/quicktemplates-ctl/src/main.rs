//! `quicktemplates-ctl`: manage template "Create" menus for a Unity project
//! from the command line.

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use quicktemplates_sdk::descriptor::SortKey;
use tracing_subscriber::EnvFilter;

use crate::commands::ProjectContext;

#[derive(Debug, Parser)]
#[command(name = "quicktemplates-ctl", version, about, styles = output::clap_styles())]
pub(crate) struct Cli {
    /// Project directory (the folder containing `Assets/`)
    #[arg(long, global = true, env = "QUICKTEMPLATES_PROJECT")]
    project: Option<PathBuf>,

    /// Project-relative path of the configuration asset to use
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create a default configuration asset
    Init {
        /// Project-relative folder for the new asset
        #[arg(long, default_value = "Assets/QuickTemplates")]
        folder: String,
    },
    /// List template files found in the search paths
    Scan {
        #[arg(long)]
        json: bool,
    },
    /// Curate the configured template list
    #[command(subcommand)]
    Templates(TemplatesCommands),
    /// Generate the menu item script
    Generate {
        /// Print the script instead of writing it
        #[arg(long)]
        dry_run: bool,

        #[arg(long)]
        json: bool,
    },
    /// Inspect or exercise the template menu
    #[command(subcommand)]
    Menu(MenuCommands),
}

#[derive(Debug, Subcommand)]
pub(crate) enum TemplatesCommands {
    /// Show the configured templates in menu order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add discovered templates that are not configured yet
    Load,
    /// Sort the list
    Sort {
        /// path, name or extension
        #[arg(long)]
        by: SortKey,
    },
    /// Remove the entry at an index
    Remove { index: usize },
    /// Move an entry to a new position
    Move { from: usize, to: usize },
}

#[derive(Debug, Subcommand)]
pub(crate) enum MenuCommands {
    /// Show the menu items that would be registered
    List,
    /// Run a menu item, creating a file from its template
    Invoke {
        /// Full menu path, e.g. `Assets/Create/Templates/Behaviour`
        path: String,

        /// Project-relative folder receiving the new file
        #[arg(long, default_value = "Assets")]
        target: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "quicktemplates_ctl={level},quicktemplates_sdk={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cli_config = cli_config::load_cli_config();
    let result = ProjectContext::resolve(cli.project, cli.config, &cli_config).and_then(|ctx| {
        match cli.command {
            Commands::Init { folder } => commands::handle_init_command(&ctx, &folder),
            Commands::Scan { json } => commands::handle_scan_command(&ctx, &cli_config, json),
            Commands::Templates(cmd) => commands::handle_templates_command(cmd, &ctx, &cli_config),
            Commands::Generate { dry_run, json } => {
                commands::handle_generate_command(&ctx, &cli_config, dry_run, json)
            }
            Commands::Menu(cmd) => commands::handle_menu_command(cmd, &ctx),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e);
            ExitCode::FAILURE
        }
    }
}
