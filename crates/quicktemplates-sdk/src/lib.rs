//! Shared SDK for QuickTemplates: template naming, C# source builders, menu
//! registration and the menu-item generation pipeline.
//!
//! This crate is consumed by `quicktemplates-ctl` (CLI). Everything that talks to
//! the editor host goes through the traits in [`host`] and [`menu`], so the same
//! pipeline runs against a project directory on disk or against in-memory fakes.
//!
//! # Modules
//!
//! ## Source synthesis
//! - [`naming`]: Template file classification and name/extension derivation
//! - [`builders`]: Member and type builders rendering C# source text
//! - [`generate`]: Config asset → generated `MenuItem` script
//!
//! ## Project integration
//! - [`config`]: Persisted configuration asset (`*.qtconfig.toml`)
//! - [`descriptor`]: Template descriptors and list curation (sorting, reordering)
//! - [`discovery`]: Template and config asset discovery
//! - [`host`]: Asset store, template instantiation and refresh seams
//! - [`menu`]: Menu registry abstraction and one-shot menu population

pub mod builders;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod host;
pub mod menu;
pub mod naming;

pub use error::{BuildError, ConfigError, GenerateError, HostError};
