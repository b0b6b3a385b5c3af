//! Template file classification and name derivation.
//!
//! Template assets are named `<Prefix><Base>.<TargetExt>.txt`, e.g.
//! `Template_Foo.cs.txt`. Everything here is a pure function of the path string;
//! both `/` and `\` are accepted as separators so asset paths behave the same on
//! every platform.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;

/// Prefix a file name must start with to be treated as a template.
pub const DEFAULT_TEMPLATE_PREFIX: &str = "Template_";

/// Final extension every template asset carries.
pub const TEMPLATE_FILE_EXTENSION: &str = ".txt";

static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("identifier pattern is valid"));

static INVALID_PATH_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\x00-\x1f"<>|]"#).expect("path pattern is valid"));

static REPEATED_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/+").expect("separator pattern is valid"));

/// Names derived from a template asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAssetInfo {
    /// The full asset path as given.
    pub path: String,
    /// Directory portion, `/`-separated with a trailing `/` (empty for bare names).
    pub directory: String,
    /// File name with both the `.txt` and the target extension removed.
    pub name: String,
    /// Target extension including the dot (e.g. `.cs`), empty when absent.
    pub extension: String,
}

/// Template naming rules parameterized by the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNaming {
    prefix: String,
}

impl Default for TemplateNaming {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_PREFIX)
    }
}

impl TemplateNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the file at `path` qualifies as a template.
    ///
    /// Requires the prefix (case-insensitive) at the very start of the file name,
    /// at least two dots, and a literal `.txt` ending.
    pub fn is_template(&self, path: &str) -> bool {
        let file_name = file_name(path);
        if file_name.is_empty() {
            return false;
        }

        let has_prefix = self.has_prefix(file_name);
        let has_nested_extension = file_name.matches('.').count() > 1;
        let is_text_file = file_name.ends_with(TEMPLATE_FILE_EXTENSION);

        has_prefix && has_nested_extension && is_text_file
    }

    /// Base name of the template, optionally with the leading prefix removed.
    pub fn template_name(&self, path: &str, include_prefix: bool) -> String {
        let name = resolve(path).name;
        if include_prefix || !self.has_prefix(&name) {
            return name;
        }
        name[self.prefix.len()..].to_string()
    }

    /// Strip the prefix from the start of `name` if present.
    pub fn strip_prefix<'a>(&self, name: &'a str) -> &'a str {
        if self.has_prefix(name) {
            &name[self.prefix.len()..]
        } else {
            name
        }
    }

    fn has_prefix(&self, name: &str) -> bool {
        name.get(..self.prefix.len())
            .is_some_and(|lead| lead.eq_ignore_ascii_case(&self.prefix))
    }
}

/// Split a template path into directory, base name and target extension.
///
/// `Assets/Foo/Template_Bar.cs.txt` → directory `Assets/Foo/`, name
/// `Template_Bar`, extension `.cs`.
pub fn resolve(path: &str) -> TemplateAssetInfo {
    let file = file_name(path);
    let directory = directory_of(path);

    // Template_Bar.cs.txt -> Template_Bar.cs
    let (full_template_name, _) = split_extension(file);
    // Template_Bar.cs -> Template_Bar + .cs
    let (name, extension) = split_extension(full_template_name);

    TemplateAssetInfo {
        path: path.to_string(),
        directory,
        name: name.to_string(),
        extension: extension.to_string(),
    }
}

/// Final path component, accepting either separator.
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Everything before the final path component, `/`-normalized with a trailing `/`.
pub fn directory_of(path: &str) -> String {
    match path.rfind(['/', '\\']) {
        Some(idx) => format!("{}/", path[..idx].replace('\\', "/")),
        None => String::new(),
    }
}

/// Remove the outermost extension, returning `(stem, extension)`.
///
/// The extension keeps its leading dot. A trailing dot or a name without dots
/// yields an empty extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => (&file_name[..idx], &file_name[idx..]),
        Some(idx) => (&file_name[..idx], ""),
        None => (file_name, ""),
    }
}

/// Remove every character that cannot appear in a C# identifier.
pub fn simple_identifier(input: &str) -> String {
    NON_IDENTIFIER.replace_all(input, "").into_owned()
}

/// Prefix every non-blank line with one tab.
pub fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("\t{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize a directory-like path to `/` separators.
///
/// Invalid path characters become `_`, repeated separators collapse, and the
/// leading/trailing separator is forced on or off.
pub fn sanitize_directory(
    input: &str,
    leading_separator: bool,
    trailing_separator: bool,
) -> Result<String, ConfigError> {
    if input.is_empty() {
        return Err(ConfigError::EmptyPath);
    }

    let replaced = INVALID_PATH_CHARS.replace_all(input, "_").replace('\\', "/");
    let mut sanitized = REPEATED_SEPARATORS.replace_all(&replaced, "/").into_owned();

    if leading_separator {
        if !sanitized.starts_with('/') {
            sanitized.insert(0, '/');
        }
    } else if let Some(rest) = sanitized.strip_prefix('/') {
        sanitized = rest.to_string();
    }

    if trailing_separator {
        if !sanitized.ends_with('/') {
            sanitized.push('/');
        }
    } else if sanitized.ends_with('/') {
        sanitized.pop();
    }

    Ok(sanitized)
}
