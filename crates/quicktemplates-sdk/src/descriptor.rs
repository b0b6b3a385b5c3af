//! Template descriptors and list curation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming::{self, directory_of, file_name, sanitize_directory};

/// Root every registered menu path lives under.
pub const ASSET_CREATE_PATH: &str = "Assets/Create/";

/// One registered template: where it appears in the menu, what file it creates,
/// and which template asset is copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateDescriptor {
    /// Menu location, e.g. `Assets/Create/Templates/MonoBehaviour`.
    pub menu_path: String,

    /// Name of the file created from the template, e.g. `NewMonoBehaviour.cs`.
    pub file_name: String,

    /// Project-relative path of the template asset.
    pub template: String,
}

impl TemplateDescriptor {
    pub fn new(
        menu_path: impl Into<String>,
        file_name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            menu_path: menu_path.into(),
            file_name: file_name.into(),
            template: template.into(),
        }
    }

    /// Menu path rooted under [`ASSET_CREATE_PATH`].
    pub fn normalized_menu_path(&self) -> String {
        normalize_menu_path(&self.menu_path)
    }

    /// The path registered with the menu: rooted, `/`-separated, no trailing `/`.
    pub fn menu_item_path(&self) -> Result<String, ConfigError> {
        if self.menu_path.trim().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        sanitize_directory(&self.normalized_menu_path(), false, false)
    }
}

/// Prefix `Assets/Create/` unless the path already starts with it.
pub fn normalize_menu_path(menu_path: &str) -> String {
    if menu_path.starts_with(ASSET_CREATE_PATH) {
        menu_path.to_string()
    } else {
        format!("{ASSET_CREATE_PATH}{menu_path}")
    }
}

/// Sort keys for [`TemplateList::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Directory part of the menu path.
    Path,
    /// Final segment of the menu path.
    Name,
    /// Target extension of the template asset.
    Extension,
}

impl SortKey {
    fn key<'a>(self, descriptor: &'a TemplateDescriptor) -> std::borrow::Cow<'a, str> {
        match self {
            Self::Path => directory_of(&descriptor.menu_path).into(),
            Self::Name => file_name(&descriptor.menu_path).into(),
            Self::Extension => naming::resolve(&descriptor.template).extension.into(),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "name" => Ok(Self::Name),
            "extension" | "ext" => Ok(Self::Extension),
            other => Err(format!(
                "unknown sort key '{other}' (expected path, name or extension)"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => f.write_str("path"),
            Self::Name => f.write_str("name"),
            Self::Extension => f.write_str("extension"),
        }
    }
}

/// Ordered, user-curated list of templates. Order drives menu priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateList(Vec<TemplateDescriptor>);

impl TemplateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TemplateDescriptor] {
        &self.0
    }

    pub fn push(&mut self, descriptor: TemplateDescriptor) {
        self.0.push(descriptor);
    }

    /// Remove the entry at `index`, returning it if it existed.
    pub fn remove(&mut self, index: usize) -> Option<TemplateDescriptor> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Move an entry to a new position. Returns `false` if either index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.0.len() || to >= self.0.len() {
            return false;
        }
        let item = self.0.remove(from);
        self.0.insert(to, item);
        true
    }

    /// Whether any entry already references the template at `path`.
    pub fn references(&self, path: &str) -> bool {
        self.0.iter().any(|d| d.template == path)
    }

    /// Stable sort by ordinal comparison of the chosen key.
    ///
    /// Lists with fewer than two entries are left alone and a warning is logged.
    pub fn sort(&mut self, key: SortKey) {
        if self.0.len() < 2 {
            tracing::warn!(
                count = self.0.len(),
                %key,
                "Cannot sort with fewer than two templates"
            );
            return;
        }

        self.0
            .sort_by(|a, b| compare_ordinal(&key.key(a), &key.key(b)));
    }
}

fn compare_ordinal(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

impl From<Vec<TemplateDescriptor>> for TemplateList {
    fn from(items: Vec<TemplateDescriptor>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a TemplateList {
    type Item = &'a TemplateDescriptor;
    type IntoIter = std::slice::Iter<'a, TemplateDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(menu: &str, template: &str) -> TemplateDescriptor {
        TemplateDescriptor::new(menu, "NewFile.cs", template)
    }

    fn menu_paths(list: &TemplateList) -> Vec<&str> {
        list.iter().map(|d| d.menu_path.as_str()).collect()
    }

    #[test]
    fn test_normalize_menu_path() {
        assert_eq!(normalize_menu_path("Scripts/Foo"), "Assets/Create/Scripts/Foo");
        assert_eq!(
            normalize_menu_path("Assets/Create/Scripts/Foo"),
            "Assets/Create/Scripts/Foo"
        );
    }

    #[test]
    fn test_menu_item_path() {
        let d = TemplateDescriptor::new("Scripts//Foo/", "NewFoo.cs", "x");
        assert_eq!(d.menu_item_path().unwrap(), "Assets/Create/Scripts/Foo");

        let empty = TemplateDescriptor::new("  ", "NewFoo.cs", "x");
        assert!(matches!(empty.menu_item_path(), Err(ConfigError::EmptyPath)));
    }

    #[test]
    fn test_sort_by_name_is_ordinal() {
        let mut list = TemplateList::from(vec![
            descriptor("Templates/beta", "a.cs.txt"),
            descriptor("Templates/Zeta", "b.cs.txt"),
            descriptor("Other/Alpha", "c.cs.txt"),
        ]);
        list.sort(SortKey::Name);
        // Uppercase sorts before lowercase in ordinal order.
        assert_eq!(
            menu_paths(&list),
            vec!["Other/Alpha", "Templates/Zeta", "Templates/beta"]
        );
    }

    #[test]
    fn test_sort_by_path_is_stable() {
        let mut list = TemplateList::from(vec![
            descriptor("b/One", "1.cs.txt"),
            descriptor("a/Two", "2.cs.txt"),
            descriptor("b/Three", "3.cs.txt"),
        ]);
        list.sort(SortKey::Path);
        assert_eq!(menu_paths(&list), vec!["a/Two", "b/One", "b/Three"]);
    }

    #[test]
    fn test_sort_by_extension() {
        let mut list = TemplateList::from(vec![
            descriptor("A", "Assets/Template_A.shader.txt"),
            descriptor("B", "Assets/Template_B.cs.txt"),
            descriptor("C", "Assets/Template_C.json.txt"),
        ]);
        list.sort(SortKey::Extension);
        assert_eq!(menu_paths(&list), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_small_list_is_noop() {
        let mut list = TemplateList::from(vec![descriptor("Only", "x.cs.txt")]);
        list.sort(SortKey::Name);
        assert_eq!(menu_paths(&list), vec!["Only"]);

        let mut empty = TemplateList::new();
        empty.sort(SortKey::Path);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_and_move() {
        let mut list = TemplateList::from(vec![
            descriptor("A", "a"),
            descriptor("B", "b"),
            descriptor("C", "c"),
        ]);
        assert!(list.move_item(2, 0));
        assert_eq!(menu_paths(&list), vec!["C", "A", "B"]);
        assert!(!list.move_item(5, 0));

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.menu_path, "A");
        assert!(list.remove(9).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("Path".parse::<SortKey>().unwrap(), SortKey::Path);
        assert_eq!("ext".parse::<SortKey>().unwrap(), SortKey::Extension);
        assert!("size".parse::<SortKey>().is_err());
    }
}
