//! Menu registry abstraction and one-shot menu population.
//!
//! The editor's menu API is private, so registration goes through the
//! [`MenuRegistry`] trait. [`InMemoryMenuRegistry`] records items and can invoke
//! them; [`UnavailableMenuRegistry`] stands in when the host API cannot be
//! resolved and turns every call into a no-op.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::descriptor::TemplateList;
use crate::error::HostError;
use crate::host::TemplateInstantiator;

/// Offset applied to list indices so generated entries sort ahead of the host's
/// own items, which start at priority 0.
pub const PRIORITY_OFFSET: i32 = -100;

/// Action run when a menu item is selected.
pub type MenuAction = Arc<dyn Fn() -> Result<PathBuf, HostError> + Send + Sync>;

/// Predicate deciding whether a menu item is enabled.
pub type MenuValidator = Arc<dyn Fn() -> bool + Send + Sync>;

/// Priority for the entry at `index` in the template list.
pub fn priority_for(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_add(PRIORITY_OFFSET)
}

/// A single menu entry.
#[derive(Clone)]
pub struct MenuItem {
    pub path: String,
    pub shortcut: String,
    pub checked: bool,
    pub priority: i32,
    pub execute: MenuAction,
    pub validate: MenuValidator,
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("path", &self.path)
            .field("shortcut", &self.shortcut)
            .field("checked", &self.checked)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Host menu registration.
pub trait MenuRegistry {
    fn add(&mut self, item: MenuItem);

    /// Remove the item at `path`; returns whether anything was removed.
    fn remove(&mut self, path: &str) -> bool;

    fn exists(&self, path: &str) -> bool;
}

/// Registry that keeps items in memory, keyed by path.
#[derive(Debug, Default)]
pub struct InMemoryMenuRegistry {
    items: BTreeMap<String, MenuItem>,
}

impl InMemoryMenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registered items ordered by priority, then path.
    pub fn items(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.values().collect();
        items.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.path.cmp(&b.path)));
        items
    }

    /// Run the item at `path` if it exists and validates.
    pub fn invoke(&self, path: &str) -> Result<PathBuf, HostError> {
        let item = self
            .items
            .get(path)
            .ok_or_else(|| HostError::UnknownMenuItem(path.to_string()))?;

        if !(item.validate)() {
            return Err(HostError::MenuItemDisabled(path.to_string()));
        }

        (item.execute)()
    }
}

impl MenuRegistry for InMemoryMenuRegistry {
    fn add(&mut self, item: MenuItem) {
        if let Some(previous) = self.items.insert(item.path.clone(), item) {
            tracing::debug!(path = %previous.path, "Replaced existing menu item");
        }
    }

    fn remove(&mut self, path: &str) -> bool {
        self.items.remove(path).is_some()
    }

    fn exists(&self, path: &str) -> bool {
        self.items.contains_key(path)
    }
}

/// Registry used when the host menu API could not be resolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableMenuRegistry;

impl MenuRegistry for UnavailableMenuRegistry {
    fn add(&mut self, item: MenuItem) {
        tracing::debug!(path = %item.path, "Menu API unavailable, ignoring add");
    }

    fn remove(&mut self, path: &str) -> bool {
        tracing::debug!(%path, "Menu API unavailable, ignoring remove");
        false
    }

    fn exists(&self, _path: &str) -> bool {
        false
    }
}

/// Registers one menu item per template, exactly once, and removes them again
/// on teardown.
#[derive(Debug, Default)]
pub struct MenuSession {
    registered: Vec<String>,
    initialized: bool,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Menu paths this session registered.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Populate `registry` from `templates`. Subsequent calls are no-ops until
    /// [`teardown`](Self::teardown). Returns the number of items added.
    pub fn initialize(
        &mut self,
        templates: &TemplateList,
        registry: &mut dyn MenuRegistry,
        instantiator: Arc<dyn TemplateInstantiator>,
    ) -> usize {
        if self.initialized {
            tracing::debug!("Menu session already initialized");
            return 0;
        }
        self.initialized = true;

        for (index, descriptor) in templates.iter().enumerate() {
            let path = match descriptor.menu_item_path() {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping template with invalid menu path");
                    continue;
                }
            };

            let instantiator = Arc::clone(&instantiator);
            let template = descriptor.template.clone();
            let file_name = descriptor.file_name.clone();

            registry.add(MenuItem {
                path: path.clone(),
                shortcut: String::new(),
                checked: false,
                priority: priority_for(index),
                execute: Arc::new(move || {
                    instantiator.create_file_from_template(&template, &file_name)
                }),
                validate: Arc::new(|| true),
            });
            self.registered.push(path);
        }

        tracing::info!(count = self.registered.len(), "Populated template menu");
        self.registered.len()
    }

    /// Remove every item this session registered. Returns how many were removed.
    pub fn teardown(&mut self, registry: &mut dyn MenuRegistry) -> usize {
        let removed = self
            .registered
            .drain(..)
            .filter(|path| registry.remove(path))
            .count();
        self.initialized = false;
        removed
    }
}
