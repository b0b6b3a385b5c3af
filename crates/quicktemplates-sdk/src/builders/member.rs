//! Method builder.

use std::fmt;

use super::Visibility;
use crate::error::BuildError;
use crate::naming::indent;

/// Optional modifier placed between visibility and return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberModifier {
    #[default]
    None,
    Static,
    Abstract,
    Virtual,
}

impl MemberModifier {
    fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Static => Some("static"),
            Self::Abstract => Some("abstract"),
            Self::Virtual => Some("virtual"),
        }
    }
}

/// A finished method signature and body, rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    name: String,
    parameters: Vec<(String, String)>,
    return_type: Option<String>,
    attributes: Vec<String>,
    body: String,
    visibility: Visibility,
    modifier: MemberModifier,
}

impl MemberDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn modifier(&self) -> MemberModifier {
        self.modifier
    }
}

/// Fluent builder for [`MemberDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct MemberBuilder {
    name: String,
    parameters: Vec<(String, String)>,
    return_type: Option<String>,
    attributes: Vec<String>,
    body: String,
    visibility: Visibility,
    modifier: MemberModifier,
}

impl MemberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a `type name` parameter. Order is kept; duplicates are allowed.
    pub fn with_parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push((ty.into(), name.into()));
        self
    }

    pub fn with_parameters<I, T, N>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: Into<String>,
        N: Into<String>,
    {
        self.parameters
            .extend(parameters.into_iter().map(|(t, n)| (t.into(), n.into())));
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add an attribute; brackets are added at render time when missing.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Set the method body. Non-blank bodies are terminated with `;` if needed.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if !body.trim().is_empty() && !body.ends_with(';') {
            body.push(';');
        }
        self.body = body;
        self
    }

    pub fn as_public(self) -> Self {
        self.with_visibility(Visibility::Public)
    }

    pub fn as_private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    pub fn as_protected(self) -> Self {
        self.with_visibility(Visibility::Protected)
    }

    pub fn as_internal(self) -> Self {
        self.with_visibility(Visibility::Internal)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_static(self) -> Self {
        self.with_modifier(MemberModifier::Static)
    }

    pub fn as_abstract(self) -> Self {
        self.with_modifier(MemberModifier::Abstract)
    }

    pub fn as_virtual(self) -> Self {
        self.with_modifier(MemberModifier::Virtual)
    }

    pub fn with_modifier(mut self, modifier: MemberModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Freeze the builder.
    ///
    /// A blank name is a construction error; a blank body only logs a warning.
    pub fn build(self) -> Result<MemberDescriptor, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::MissingMemberName);
        }

        if self.body.trim().is_empty() {
            tracing::warn!(
                method = %self.name,
                "No logic found in method, but method was still built"
            );
        }

        Ok(MemberDescriptor {
            name: self.name,
            parameters: self.parameters,
            return_type: self.return_type,
            attributes: self.attributes,
            body: self.body,
            visibility: self.visibility,
            modifier: self.modifier,
        })
    }
}

/// Wrap an attribute in `[...]`, adding only the brackets that are missing.
pub fn bracket_attribute(attribute: &str) -> String {
    let open = if attribute.starts_with('[') { "" } else { "[" };
    let close = if attribute.ends_with(']') { "" } else { "]" };
    format!("{open}{attribute}{close}")
}

impl fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in &self.attributes {
            writeln!(f, "{}", bracket_attribute(attribute))?;
        }

        write!(f, "{} ", self.visibility)?;
        if let Some(modifier) = self.modifier.keyword() {
            write!(f, "{modifier} ")?;
        }
        write!(f, "{} ", self.return_type.as_deref().unwrap_or("void"))?;

        let parameters = self
            .parameters
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "{}({parameters})", self.name)?;
        writeln!(f, "{{")?;
        writeln!(f, "{}", indent(&self.body))?;
        write!(f, "}}")
    }
}
