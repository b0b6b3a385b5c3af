//! Generation pipeline: configuration asset → editor menu script.
//!
//! Every template in the list becomes one editor-only static method carrying a
//! `MenuItem` attribute. The methods are collected into a single internal static
//! class and written to `<class-name>.generated.cs` in the configured folder.

use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;
use uuid::Uuid;

use crate::builders::{MemberBuilder, TypeBuilder, DEFAULT_EDITOR_SYMBOL};
use crate::config::{ConfigAsset, IdentifierMode};
use crate::descriptor::TemplateDescriptor;
use crate::discovery::LoadedConfig;
use crate::error::GenerateError;
use crate::host::{AssetRefresher, AssetStore};
use crate::menu::priority_for;
use crate::naming::{resolve, simple_identifier};

/// Host call that creates a file from a template asset.
const CREATE_FROM_TEMPLATE: &str = "UnityEditor.ProjectWindowUtil.CreateScriptAssetFromTemplateFile";

/// Attribute registering a method in the editor menu.
const MENU_ITEM_ATTRIBUTE: &str = "UnityEditor.MenuItem";

/// One generated menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratedEntry {
    pub menu_path: String,
    pub method_name: String,
    pub priority: i32,
}

/// Result of rendering a configuration asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript {
    pub entries: Vec<GeneratedEntry>,
    pub content: String,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationReport {
    /// Project-relative path of the written script.
    pub output_path: String,
    pub entries: Vec<GeneratedEntry>,
    pub content: String,
}

/// Renders configuration assets and writes the resulting script.
#[derive(Debug, Clone)]
pub struct GenerationPipeline {
    editor_symbol: String,
}

impl Default for GenerationPipeline {
    fn default() -> Self {
        Self {
            editor_symbol: DEFAULT_EDITOR_SYMBOL.to_string(),
        }
    }
}

impl GenerationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocessor symbol used to guard the generated methods.
    pub fn with_editor_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.editor_symbol = symbol.into();
        self
    }

    /// Render the script for `asset` without touching the project.
    pub fn render(&self, asset: &ConfigAsset) -> Result<RenderedScript, GenerateError> {
        if asset.templates.is_empty() {
            tracing::warn!(class = %asset.class_name, "No templates configured, generating an empty class");
        }

        let mut script = TypeBuilder::new()
            .with_name(asset.class_name.clone())
            .with_namespace(asset.namespace.clone())
            .with_editor_symbol(self.editor_symbol.clone())
            .as_internal()
            .as_static();
        let mut entries = Vec::with_capacity(asset.templates.len());
        let mut used_names = HashSet::with_capacity(asset.templates.len());

        for (index, descriptor) in asset.templates.iter().enumerate() {
            let menu_path = descriptor.menu_item_path()?;
            let mut name = method_name(descriptor, &menu_path, asset.identifier_mode);
            // Identical entries hash to the same stable token.
            if !used_names.insert(name.clone()) {
                name = format!("{name}_{index}");
                used_names.insert(name.clone());
            }
            let entry = GeneratedEntry {
                menu_path,
                method_name: name,
                priority: priority_for(index),
            };

            let method = MemberBuilder::new()
                .with_name(entry.method_name.clone())
                .with_attribute(format!(
                    "{MENU_ITEM_ATTRIBUTE}(\"{}\", priority = {})",
                    escape_literal(&entry.menu_path),
                    entry.priority
                ))
                .with_body(format!(
                    "{CREATE_FROM_TEMPLATE}(\"{}\", \"{}\")",
                    escape_literal(&descriptor.template),
                    escape_literal(&descriptor.file_name)
                ))
                .as_private()
                .as_static()
                .build()?;

            tracing::debug!(menu = %entry.menu_path, method = %entry.method_name, priority = entry.priority, "Generated menu method");
            script = script.with_member(method.to_string(), true);
            entries.push(entry);
        }

        Ok(RenderedScript {
            entries,
            content: script.build()?.to_string(),
        })
    }

    /// Render `config`, write the script next to it and request an asset refresh.
    pub fn run(
        &self,
        config: &LoadedConfig,
        store: &dyn AssetStore,
        refresher: &dyn AssetRefresher,
    ) -> Result<GenerationReport, GenerateError> {
        let rendered = self.render(&config.asset)?;
        let output_path = config.asset.output_file(&config.path)?;

        store
            .write_asset(&output_path, &rendered.content)
            .map_err(|e| GenerateError::Io {
                path: output_path.clone().into(),
                source: e,
            })?;

        tracing::info!(
            output = %output_path,
            methods = rendered.entries.len(),
            "Wrote menu script"
        );
        refresher.request_refresh();

        Ok(GenerationReport {
            output_path,
            entries: rendered.entries,
            content: rendered.content,
        })
    }
}

/// `Create<BaseName>_<token>` for the entry placed at `menu_path`.
pub fn method_name(descriptor: &TemplateDescriptor, menu_path: &str, mode: IdentifierMode) -> String {
    let info = resolve(&descriptor.template);
    let base: String = info.name.split_whitespace().collect();
    format!(
        "Create{}_{}",
        simple_identifier(&base),
        identifier_token(&descriptor.template, menu_path, mode)
    )
}

/// Method suffix: random per call, or derived from the template and menu paths.
pub fn identifier_token(template_path: &str, menu_path: &str, mode: IdentifierMode) -> String {
    let id = match mode {
        IdentifierMode::Random => Uuid::new_v4(),
        IdentifierMode::Stable => {
            let key = format!("{template_path}\n{menu_path}");
            Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes())
        }
    };
    id.as_simple().to_string()
}

/// Escape a value for a regular C# string literal.
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
