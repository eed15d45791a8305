//! Tests for MenuService and the service container

use std::collections::BTreeMap;
use std::sync::Arc;

use webmenu::application::{ApplicationError, MenuService};
use webmenu::config::{MenuEntryConfig, ModuleMenuConfig, Settings};
use webmenu::domain::{MenuNode, MenuProperties, MenuSection};
use webmenu::infrastructure::{
    IdentityTranslator, MenuContributor, ServiceContainer, StaticModule, Translator,
};
use webmenu::util::testing;

fn child_ids(node: &MenuNode) -> Vec<&str> {
    node.sub_menus().keys().map(String::as_str).collect()
}

struct FixedModule {
    name: &'static str,
    items: Vec<MenuNode>,
    sections: Vec<MenuSection>,
}

impl MenuContributor for FixedModule {
    fn name(&self) -> &str {
        self.name
    }

    fn menu_items(&self) -> Vec<MenuNode> {
        self.items.clone()
    }

    fn menu_sections(&self) -> Vec<MenuSection> {
        self.sections.clone()
    }
}

fn service(settings: Settings) -> MenuService {
    MenuService::new(Arc::new(settings), Arc::new(IdentityTranslator))
}

#[test]
fn given_no_modules_when_loading_then_static_menu_in_display_order() {
    testing::init_test_setup();
    let menu = service(Settings::default()).load(&[]);

    assert_eq!(menu.id(), "menu");
    assert_eq!(child_ids(&menu), vec!["Dashboard", "System", "Logout"]);
    let system = menu.get_sub_menu("System").unwrap();
    assert_eq!(
        child_ids(system),
        vec!["Preferences", "Configuration", "Modules", "ApplicationLog"]
    );
    let dashboard = menu.get_sub_menu("Dashboard").unwrap();
    assert_eq!(dashboard.icon(), Some("img/icons/dashboard.png"));
    assert_eq!(dashboard.priority(), 10);
}

#[test]
fn given_modules_when_loading_then_merged_in_load_order_and_sorted() {
    let mut monitoring = MenuNode::new("Monitoring", Some(MenuProperties::new().with_priority(30)));
    monitoring.add_sub_menu("Hosts", Some(MenuProperties::new().with_url("monitoring/list/hosts")));
    let mut system_extra = MenuNode::new("System", None);
    system_extra.add_sub_menu(
        "Backup",
        Some(MenuProperties::new().with_url("backup").with_priority(250)),
    );

    let first: Arc<dyn MenuContributor> = Arc::new(FixedModule {
        name: "monitoring",
        items: vec![monitoring],
        sections: vec![],
    });
    let second: Arc<dyn MenuContributor> = Arc::new(FixedModule {
        name: "backup",
        items: vec![
            system_extra,
            MenuNode::new("Monitoring", Some(MenuProperties::new().with_url("other/monitoring"))),
        ],
        sections: vec![],
    });

    let menu = service(Settings::default()).load(&[first, second]);

    assert_eq!(
        child_ids(&menu),
        vec!["Dashboard", "Monitoring", "System", "Logout"]
    );
    let system = menu.get_sub_menu("System").unwrap();
    assert_eq!(
        child_ids(system),
        vec!["Preferences", "Backup", "Configuration", "Modules", "ApplicationLog"]
    );
    let monitoring = menu.get_sub_menu("Monitoring").unwrap();
    assert_eq!(monitoring.url(), Some("other/monitoring"));
    assert!(monitoring.has_sub_menu("Hosts"));
}

#[test]
fn given_translator_when_loading_then_static_ids_translated() {
    let upper: Arc<dyn Translator> = Arc::new(|s: &str| s.to_uppercase());
    let service = MenuService::new(Arc::new(Settings::default()), upper);

    let menu = service.load(&[]);

    assert_eq!(child_ids(&menu), vec!["DASHBOARD", "SYSTEM", "LOGOUT"]);
    assert!(menu.get_sub_menu("SYSTEM").unwrap().has_sub_menu("APPLICATIONLOG"));
}

#[test]
fn given_sections_when_loading_from_config_then_duplicates_suffixed() {
    let settings = Settings {
        sections: vec![
            MenuEntryConfig::new("Reports")
                .url("reports")
                .child(MenuEntryConfig::new("Daily").url("reports/daily")),
        ],
        ..Settings::default()
    };
    let module: Arc<dyn MenuContributor> = Arc::new(FixedModule {
        name: "reporting",
        items: vec![],
        sections: vec![(
            "Reports".to_string(),
            MenuProperties::new().with_url("reporting/reports").with_priority(5),
        )],
    });
    let empty: Arc<dyn MenuContributor> = Arc::new(FixedModule {
        name: "empty",
        items: vec![],
        sections: vec![],
    });

    let menu = service(settings).load_from_config(&[module, empty]);

    assert_eq!(child_ids(&menu), vec!["Reports_dup", "Reports"]);
    assert!(menu.get_sub_menu("Reports").unwrap().has_sub_menu("Daily"));
    assert!(!menu.has_sub_menu("Dashboard"), "static entries are not part of the config path");
}

#[test]
fn given_settings_with_modules_and_labels_when_container_loads_then_wired() {
    let settings = Settings {
        labels: BTreeMap::from([("Logout".to_string(), "Abmelden".to_string())]),
        modules: vec![ModuleMenuConfig {
            name: "monitoring".into(),
            items: vec![MenuEntryConfig::new("Monitoring")
                .priority(30)
                .child(MenuEntryConfig::new("Hosts").url("monitoring/list/hosts"))],
            sections: vec![],
        }],
        ..Settings::default()
    };

    let container = ServiceContainer::new(settings);
    let menu = container.load_menu();

    assert_eq!(container.modules.len(), 1);
    assert_eq!(
        child_ids(&menu),
        vec!["Dashboard", "Monitoring", "System", "Abmelden"]
    );
}

#[test]
fn given_custom_deps_when_building_container_then_uses_them() {
    let module: Arc<dyn MenuContributor> = Arc::new(StaticModule::new(ModuleMenuConfig {
        name: "help".into(),
        items: vec![MenuEntryConfig::new("Help").url("help").priority(400)],
        sections: vec![],
    }));
    let container = ServiceContainer::with_deps(
        Settings::default(),
        Arc::new(IdentityTranslator),
        vec![module],
    );

    let menu = container.load_menu();

    assert_eq!(child_ids(&menu).last(), Some(&"Help"));
}

#[test]
fn given_dotted_path_when_finding_then_returns_nested_entry() {
    let service = service(Settings::default());
    let menu = service.load(&[]);

    let modules = service.find(&menu, "System.Modules").unwrap();
    assert_eq!(modules.url(), Some("config/modules"));

    let err = service.find(&menu, "System.Nope").unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound { ref path } if path == "System.Nope"));
    assert!(!err.is_configuration());
}
