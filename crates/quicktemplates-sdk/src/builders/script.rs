//! Class / compilation-unit builder.

use std::fmt;

use super::{conditional_region, Visibility, DEFAULT_EDITOR_SYMBOL};
use crate::error::BuildError;
use crate::naming::indent;

/// Optional class modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeModifier {
    #[default]
    None,
    Static,
    Abstract,
    Sealed,
}

impl TypeModifier {
    fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Static => Some("static"),
            Self::Abstract => Some("abstract"),
            Self::Sealed => Some("sealed"),
        }
    }
}

/// A text entry (member body or import name) and whether it is editor-only.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    content: String,
    conditional: bool,
}

/// A finished class declaration with its imports, rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    base_type: Option<String>,
    namespace: Option<String>,
    members: Vec<Entry>,
    imports: Vec<Entry>,
    partial: bool,
    visibility: Visibility,
    modifier: TypeModifier,
    editor_symbol: String,
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn render_imports(&self) -> String {
        self.imports
            .iter()
            .map(|import| {
                let line = format!("using {};", import.content);
                if import.conditional {
                    conditional_region(&self.editor_symbol, &line)
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_members(&self) -> String {
        self.members
            .iter()
            .map(|member| {
                if member.conditional {
                    conditional_region(&self.editor_symbol, &member.content)
                } else {
                    member.content.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_class(&self) -> String {
        let mut header = vec![self.visibility.keyword()];
        if let Some(modifier) = self.modifier.keyword() {
            header.push(modifier);
        }
        if self.partial {
            header.push("partial");
        }
        header.push("class");

        let declaration = match &self.base_type {
            Some(base) => format!("{} : {base}", self.name),
            None => self.name.clone(),
        };

        format!(
            "{} {declaration}\n{}",
            header.join(" "),
            braced(&self.render_members())
        )
    }
}

/// `{`, the indented block, `}`; an empty block collapses to `{\n}`.
fn braced(content: &str) -> String {
    if content.is_empty() {
        "{\n}".to_string()
    } else {
        format!("{{\n{}\n}}", indent(content))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.imports.is_empty() {
            write!(f, "{}\n\n", self.render_imports())?;
        }

        let class = self.render_class();
        match &self.namespace {
            Some(namespace) => write!(f, "namespace {namespace}\n{}", braced(&class)),
            None => f.write_str(&class),
        }
    }
}

/// Fluent builder for [`TypeDescriptor`].
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    name: String,
    base_type: Option<String>,
    namespace: Option<String>,
    members: Vec<Entry>,
    imports: Vec<Entry>,
    partial: bool,
    visibility: Visibility,
    modifier: TypeModifier,
    editor_symbol: String,
}

impl Default for TypeBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_type: None,
            namespace: None,
            members: Vec::new(),
            imports: Vec::new(),
            partial: false,
            visibility: Visibility::Public,
            modifier: TypeModifier::None,
            editor_symbol: DEFAULT_EDITOR_SYMBOL.to_string(),
        }
    }
}

impl TypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the enclosing namespace. A blank namespace renders no namespace block.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = if namespace.trim().is_empty() {
            None
        } else {
            Some(namespace)
        };
        self
    }

    /// Add pre-rendered member text; `conditional` wraps it in an editor-only region.
    pub fn with_member(mut self, content: impl Into<String>, conditional: bool) -> Self {
        self.members.push(Entry {
            content: content.into(),
            conditional,
        });
        self
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        self.members
            .extend(members.into_iter().map(|(content, conditional)| Entry {
                content: content.into(),
                conditional,
            }));
        self
    }

    /// Add a `using` directive (name without `using`/`;`).
    pub fn with_import(mut self, name: impl Into<String>, conditional: bool) -> Self {
        self.imports.push(Entry {
            content: name.into(),
            conditional,
        });
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        self.imports
            .extend(imports.into_iter().map(|(content, conditional)| Entry {
                content: content.into(),
                conditional,
            }));
        self
    }

    /// Base class or implemented interface, rendered as `Name : Base`.
    pub fn with_base_type(mut self, base: impl Into<String>) -> Self {
        self.base_type = Some(base.into());
        self
    }

    /// Preprocessor symbol guarding conditional entries.
    pub fn with_editor_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.editor_symbol = symbol.into();
        self
    }

    pub fn as_public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn as_internal(mut self) -> Self {
        self.visibility = Visibility::Internal;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.modifier = TypeModifier::Static;
        self
    }

    pub fn as_sealed(mut self) -> Self {
        self.modifier = TypeModifier::Sealed;
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.modifier = TypeModifier::Abstract;
        self
    }

    pub fn as_partial(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Freeze the builder. Fails if no class name was given.
    pub fn build(self) -> Result<TypeDescriptor, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::MissingTypeName);
        }

        Ok(TypeDescriptor {
            name: self.name,
            base_type: self.base_type,
            namespace: self.namespace,
            members: self.members,
            imports: self.imports,
            partial: self.partial,
            visibility: self.visibility,
            modifier: self.modifier,
            editor_symbol: self.editor_symbol,
        })
    }
}
