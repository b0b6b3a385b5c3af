//! QuickTemplates: template-driven "Create" menu generation for Unity projects.
//!
//! Template files named `Template_<Name>.<ext>.txt` are discovered in the
//! project, curated into an ordered list stored in a `*.qtconfig.toml` asset,
//! and turned into a generated C# class whose editor-only methods register one
//! menu entry per template.
//!
//! This crate re-exports [`quicktemplates_sdk`]; the command-line front end
//! lives in `quicktemplates-ctl`.
//!
//! ```no_run
//! use quicktemplates::discovery::{load_config, load_templates, DEFAULT_SEARCH_PATH};
//! use quicktemplates::generate::GenerationPipeline;
//! use quicktemplates::host::{FsAssetStore, LoggingRefresher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FsAssetStore::new("path/to/UnityProject");
//! let mut config = load_config(&store)?;
//! load_templates(&mut config.asset, &store, &[DEFAULT_SEARCH_PATH.to_string()])?;
//! config.save(&store)?;
//!
//! let report = GenerationPipeline::new().run(&config, &store, &LoggingRefresher)?;
//! println!("wrote {}", report.output_path);
//! # Ok(())
//! # }
//! ```

pub use quicktemplates_sdk::*;
