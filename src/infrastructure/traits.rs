//! Collaborator boundary traits
//!
//! The menu core only sees modules and translations through these traits,
//! so the surrounding application decides where menu fragments and labels
//! come from.

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::{MenuEntryConfig, ModuleMenuConfig};
use crate::domain::{MenuNode, MenuSection};

/// A loaded module that contributes entries to the navigation menu.
pub trait MenuContributor: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Standalone menu trees to merge into the root, in order.
    fn menu_items(&self) -> Vec<MenuNode>;

    /// Flat sections for the config-driven loader.
    fn menu_sections(&self) -> Vec<MenuSection> {
        Vec::new()
    }
}

/// Label lookup for static entry titles.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

/// Returns every label unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Catalog based translator; unknown labels pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    catalog: BTreeMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(catalog: BTreeMap<String, String>) -> Self {
        Self { catalog }
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str) -> String {
        match self.catalog.get(text) {
            Some(translated) => translated.clone(),
            None => {
                trace!(label = text, "no translation");
                text.to_string()
            }
        }
    }
}

/// Module whose menu contribution is fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticModule {
    config: ModuleMenuConfig,
}

impl StaticModule {
    pub fn new(config: ModuleMenuConfig) -> Self {
        Self { config }
    }
}

impl From<ModuleMenuConfig> for StaticModule {
    fn from(config: ModuleMenuConfig) -> Self {
        Self::new(config)
    }
}

/// Build a standalone tree; nested entries are merged level by level.
pub fn entry_to_node(entry: &MenuEntryConfig) -> MenuNode {
    let mut node = MenuNode::new(entry.id.clone(), Some(entry.properties()));
    node.merge_sub_menus(entry.children.iter().map(entry_to_node));
    node
}

impl MenuContributor for StaticModule {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn menu_items(&self) -> Vec<MenuNode> {
        self.config.items.iter().map(entry_to_node).collect()
    }

    fn menu_sections(&self) -> Vec<MenuSection> {
        self.config
            .sections
            .iter()
            .flat_map(MenuEntryConfig::sections)
            .collect()
    }
}
