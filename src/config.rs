//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the built-in main menu)
//! 2. Global config: `$XDG_CONFIG_HOME/webmenu/webmenu.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `WEBMENU_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{MenuProperties, MenuSection, PATH_SEPARATOR};

/// One configured menu entry with optional nested entries.
///
/// Only the four menu properties are accepted next to `id` and `children`;
/// anything else is rejected when the file is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MenuEntryConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntryConfig>,
}

impl MenuEntryConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
            icon: None,
            priority: None,
            title: None,
            children: Vec::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn child(mut self, child: MenuEntryConfig) -> Self {
        self.children.push(child);
        self
    }

    pub fn properties(&self) -> MenuProperties {
        MenuProperties {
            url: self.url.clone(),
            icon: self.icon.clone(),
            priority: self.priority,
            title: self.title.clone(),
        }
    }

    /// This entry and its descendants as flat sections with dotted ids.
    pub fn sections(&self) -> Vec<MenuSection> {
        let mut out = Vec::new();
        self.collect_sections(None, &mut out);
        out
    }

    fn collect_sections(&self, prefix: Option<&str>, out: &mut Vec<MenuSection>) {
        let id = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, PATH_SEPARATOR, self.id),
            None => self.id.clone(),
        };
        out.push((id.clone(), self.properties()));
        for child in &self.children {
            child.collect_sections(Some(&id), out);
        }
    }
}

/// Menu entries contributed by a statically configured module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModuleMenuConfig {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuEntryConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<MenuEntryConfig>,
}

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified, inherit from the lower layer".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub root_id: Option<String>,
    pub main_menu: Option<Vec<MenuEntryConfig>>,
    pub sections: Option<Vec<MenuEntryConfig>>,
    pub modules: Option<Vec<ModuleMenuConfig>>,
    pub labels: Option<BTreeMap<String, String>>,
}

/// Unified configuration for webmenu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Id of the root node (default: "menu")
    pub root_id: String,
    /// Static entries added before any module contribution
    pub main_menu: Vec<MenuEntryConfig>,
    /// Application-level flat sections for the config-driven loader
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<MenuEntryConfig>,
    /// Statically configured module contributions, in load order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<ModuleMenuConfig>,
    /// Translation catalog for static entry labels
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_id: "menu".to_string(),
            main_menu: default_main_menu(),
            sections: Vec::new(),
            modules: Vec::new(),
            labels: BTreeMap::new(),
        }
    }
}

/// The application's built-in navigation entries.
pub fn default_main_menu() -> Vec<MenuEntryConfig> {
    vec![
        MenuEntryConfig::new("Dashboard")
            .url("dashboard")
            .icon("img/icons/dashboard.png")
            .priority(10),
        MenuEntryConfig::new("System")
            .icon("img/icons/configuration.png")
            .priority(200)
            .child(MenuEntryConfig::new("Preferences").url("preference").priority(200))
            .child(MenuEntryConfig::new("Configuration").url("config").priority(300))
            .child(MenuEntryConfig::new("Modules").url("config/modules").priority(400))
            .child(
                MenuEntryConfig::new("ApplicationLog")
                    .url("list/applicationlog")
                    .priority(500),
            ),
        MenuEntryConfig::new("Logout")
            .url("authentication/logout")
            .icon("img/icons/logout.png")
            .priority(300),
    ]
}

/// Get the XDG config directory for webmenu.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "webmenu").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("webmenu.toml"))
}

/// Expand `~` and `$VAR` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// - `root_id`: overlay wins if Some
    /// - `main_menu`, `sections`: overlay replaces when specified
    /// - `modules`: appended after the base modules
    /// - `labels`: union, overlay wins per key
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut modules = self.modules.clone();
        if let Some(extra) = &overlay.modules {
            modules.extend(extra.iter().cloned());
        }
        let mut labels = self.labels.clone();
        if let Some(extra) = &overlay.labels {
            labels.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Self {
            root_id: overlay
                .root_id
                .clone()
                .unwrap_or_else(|| self.root_id.clone()),
            main_menu: overlay
                .main_menu
                .clone()
                .unwrap_or_else(|| self.main_menu.clone()),
            sections: overlay
                .sections
                .clone()
                .unwrap_or_else(|| self.sections.clone()),
            modules,
            labels,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file, layered over the global one
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        let settings = Self::load_from(global.as_deref(), config_file)?;
        Self::apply_env_overrides(settings)
    }

    /// Load defaults plus the given files, without environment overrides.
    ///
    /// A missing `global` file is skipped; a missing `config_file` is an error.
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            let path = expand_path(path);
            debug!("load config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        Ok(current)
    }

    /// Apply WEBMENU_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("WEBMENU").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("root_id") {
            settings.root_id = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# webmenu configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/webmenu/webmenu.toml
#   File:   --config <path>
#   Env:    WEBMENU_* environment variables (WEBMENU_ROOT_ID)
#
# main_menu and sections REPLACE lower layers when given,
# modules are APPENDED, labels are merged per key.
# Entries accept only: id, url, icon, priority, title, children.

# Id of the root node
# root_id = "menu"

# Static entries (default: Dashboard, System, Logout)
# [[main_menu]]
# id = "Dashboard"
# url = "dashboard"
# icon = "img/icons/dashboard.png"
# priority = 10

# Translations for entry labels
# [labels]
# Dashboard = "Übersicht"

# Module contributions, merged in the order given
# [[modules]]
# name = "monitoring"
#
# [[modules.items]]
# id = "Monitoring"
# priority = 50
#
# [[modules.items.children]]
# id = "Hosts"
# url = "monitoring/list/hosts"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
