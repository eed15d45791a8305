//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::MenuService;
use crate::config::Settings;
use crate::domain::MenuNode;
use crate::infrastructure::traits::{CatalogTranslator, MenuContributor, StaticModule, Translator};

/// Container holding settings and collaborators.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Label translation
    pub translator: Arc<dyn Translator>,

    /// Loaded modules, in load order
    pub modules: Vec<Arc<dyn MenuContributor>>,
}

impl ServiceContainer {
    /// Create a container from settings: labels become the translation
    /// catalog and configured modules become static contributors.
    pub fn new(settings: Settings) -> Self {
        let translator = Arc::new(CatalogTranslator::new(settings.labels.clone()));
        let modules = settings
            .modules
            .iter()
            .cloned()
            .map(|m| Arc::new(StaticModule::from(m)) as Arc<dyn MenuContributor>)
            .collect();
        Self::with_deps(settings, translator, modules)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        translator: Arc<dyn Translator>,
        modules: Vec<Arc<dyn MenuContributor>>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            translator,
            modules,
        }
    }

    pub fn menu_service(&self) -> MenuService {
        MenuService::new(Arc::clone(&self.settings), Arc::clone(&self.translator))
    }

    /// Build the ordered menu from the static entries and all modules.
    pub fn load_menu(&self) -> MenuNode {
        self.menu_service().load(&self.modules)
    }
}
