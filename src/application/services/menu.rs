//! Menu assembly service
//!
//! Builds the navigation menu from the static main entries plus whatever
//! the loaded modules contribute, then orders it for display.

use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::{MenuEntryConfig, Settings};
use crate::domain::{flatten_configs, MenuNode, MenuSection, PATH_SEPARATOR};
use crate::infrastructure::traits::{MenuContributor, Translator};

/// Service for assembling navigation menus.
pub struct MenuService {
    settings: Arc<Settings>,
    translator: Arc<dyn Translator>,
}

impl MenuService {
    /// Create a new menu service.
    pub fn new(settings: Arc<Settings>, translator: Arc<dyn Translator>) -> Self {
        Self {
            settings,
            translator,
        }
    }

    /// Build the ordered menu.
    ///
    /// Static entries come first, then each module's items are merged in
    /// the given (load) order, so later modules are renamed on conflict
    /// against earlier ones.
    #[instrument(level = "debug", skip_all, fields(modules = modules.len()))]
    pub fn load(&self, modules: &[Arc<dyn MenuContributor>]) -> MenuNode {
        let mut menu = MenuNode::new(self.settings.root_id.clone(), None);
        self.add_main_menu_items(&mut menu);
        debug!(order = %modules.iter().map(|m| m.name()).join(", "), "module load order");

        for module in modules {
            let items = module.menu_items();
            debug!(module = module.name(), items = items.len(), "merging module menu");
            menu.merge_sub_menus(items);
        }

        menu.order();
        info!(entries = menu.depth_first().count(), "menu loaded");
        menu
    }

    /// Add the configured static entries below `menu`.
    ///
    /// Ids and titles go through the translator; an existing child with
    /// the same (translated) id is replaced.
    #[instrument(level = "debug", skip_all)]
    pub fn add_main_menu_items(&self, menu: &mut MenuNode) {
        for entry in &self.settings.main_menu {
            self.add_entry(menu, entry);
        }
    }

    fn add_entry(&self, parent: &mut MenuNode, entry: &MenuEntryConfig) {
        let id = self.translator.translate(&entry.id);
        let mut props = entry.properties();
        props.title = props.title.map(|title| self.translator.translate(&title));

        let node = parent.add_sub_menu(&id, Some(props));
        for child in &entry.children {
            self.add_entry(node, child);
        }
    }

    /// Build the ordered menu from flat config sections only.
    ///
    /// Application sections come first, followed by the sections of every
    /// module that has any. Ids repeated across configs are suffixed with
    /// `_dup` instead of being merged.
    #[instrument(level = "debug", skip_all, fields(modules = modules.len()))]
    pub fn load_from_config(&self, modules: &[Arc<dyn MenuContributor>]) -> MenuNode {
        let app_sections: Vec<MenuSection> = self
            .settings
            .sections
            .iter()
            .flat_map(MenuEntryConfig::sections)
            .collect();

        let mut configs = vec![app_sections];
        for module in modules {
            let sections = module.menu_sections();
            if !sections.is_empty() {
                debug!(module = module.name(), sections = sections.len(), "module menu config");
                configs.push(sections);
            }
        }

        let mut menu = MenuNode::new(self.settings.root_id.clone(), None);
        menu.load_sub_menus(flatten_configs(configs));
        menu.order();
        menu
    }

    /// Look up a nested entry by dotted path, e.g. `System.Modules`.
    ///
    /// The path is user input, so a missing segment is reported as
    /// [`ApplicationError::NotFound`] naming the whole path.
    pub fn find<'a>(&self, menu: &'a MenuNode, path: &str) -> ApplicationResult<&'a MenuNode> {
        let mut node = menu;
        for segment in path.split(PATH_SEPARATOR) {
            if !node.has_sub_menu(segment) {
                debug!(path, segment, "menu path not found");
                return Err(ApplicationError::NotFound {
                    path: path.to_string(),
                });
            }
            node = node.get_sub_menu(segment)?;
        }
        Ok(node)
    }
}
