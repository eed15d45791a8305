//! Menu tree nodes: construction, merging of module fragments and ordering.

use std::cmp::Ordering;
use std::sync::OnceLock;

use indexmap::map::Entry;
use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::domain::cursor::{DepthFirst, MenuCursor};
use crate::domain::error::{MenuError, MenuResult};
use crate::domain::properties::{MenuProperties, PropertyValue, DEFAULT_PRIORITY};

/// Separator of nested ids passed to [`MenuNode::add_sub_menu`].
pub const PATH_SEPARATOR: char = '.';

/// Child map of a node, keyed by child id.
pub type SubMenus = IndexMap<String, MenuNode>;

/// One entry of a navigation menu, owning its sub menus.
///
/// Children keep insertion order until [`MenuNode::order`] sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    id: String,
    properties: MenuProperties,
    children: SubMenus,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, properties: Option<MenuProperties>) -> Self {
        Self {
            id: id.into(),
            properties: properties.unwrap_or_default(),
            children: SubMenus::new(),
        }
    }

    /// Create a node from plain property pairs, rejecting unknown keys.
    pub fn with_properties<I, K, V>(id: impl Into<String>, pairs: I) -> MenuResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        Ok(Self::new(id, Some(MenuProperties::from_pairs(pairs)?)))
    }

    /// Apply plain property pairs to this node.
    ///
    /// Validation happens before anything is written, so a rejected bag
    /// leaves the node untouched.
    pub fn set_properties<I, K, V>(&mut self, pairs: I) -> MenuResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        let props = MenuProperties::from_pairs(pairs)?;
        self.properties.overlay(&props);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// Explicit title if set, otherwise the id.
    pub fn title(&self) -> &str {
        match self.properties.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.id,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.properties.title = Some(title.into());
        self
    }

    pub fn priority(&self) -> i64 {
        self.properties.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn set_priority(&mut self, priority: i64) -> &mut Self {
        self.properties.priority = Some(priority);
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.properties.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.properties.url = Some(url.into());
        self
    }

    pub fn icon(&self) -> Option<&str> {
        self.properties.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.properties.icon = Some(icon.into());
        self
    }

    /// The explicitly set properties; the unit transferred by a merge.
    pub fn properties(&self) -> &MenuProperties {
        &self.properties
    }

    /// Two nodes conflict iff both have a url and the urls differ.
    pub fn conflicts_with(&self, other: &MenuNode) -> bool {
        match (self.url(), other.url()) {
            (Some(mine), Some(theirs)) => mine != theirs,
            _ => false,
        }
    }

    pub fn has_sub_menus(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_sub_menu(&self, id: &str) -> bool {
        self.children.contains_key(id)
    }

    /// Direct child lookup. A missing id is a caller bug: check
    /// [`MenuNode::has_sub_menu`] first.
    pub fn get_sub_menu(&self, id: &str) -> MenuResult<&MenuNode> {
        self.children.get(id).ok_or_else(|| MenuError::MissingSubMenu {
            id: id.to_string(),
        })
    }

    pub fn sub_menus(&self) -> &SubMenus {
        &self.children
    }

    /// Add a sub menu, creating missing ancestors of a dotted id.
    ///
    /// `"system.config"` looks up or creates `system` and adds `config`
    /// below it; `properties` only apply to the leaf. A plain id replaces
    /// an existing child of the same id in place. Returns the leaf.
    #[instrument(level = "trace", skip(self, properties))]
    pub fn add_sub_menu(&mut self, id: &str, properties: Option<MenuProperties>) -> &mut MenuNode {
        match id.split_once(PATH_SEPARATOR) {
            None => {
                let node = MenuNode::new(id, properties);
                match self.children.entry(id.to_string()) {
                    Entry::Occupied(mut slot) => {
                        slot.insert(node);
                        slot.into_mut()
                    }
                    Entry::Vacant(slot) => slot.insert(node),
                }
            }
            Some((parent_id, rest)) => {
                let parent = self
                    .children
                    .entry(parent_id.to_string())
                    .or_insert_with(|| MenuNode::new(parent_id, None));
                parent.add_sub_menu(rest, properties)
            }
        }
    }

    /// Like [`MenuNode::add_sub_menu`], taking plain property pairs.
    pub fn add<I, K, V>(&mut self, name: &str, pairs: I) -> MenuResult<&mut MenuNode>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        let props = MenuProperties::from_pairs(pairs)?;
        Ok(self.add_sub_menu(name, Some(props)))
    }

    /// Add every `(id, properties)` section in order.
    pub fn load_sub_menus<I>(&mut self, sections: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, MenuProperties)>,
    {
        for (id, props) in sections {
            self.add_sub_menu(&id, Some(props));
        }
        self
    }

    /// Fold a standalone node into this node's children.
    ///
    /// - no child with the same id: `other` is adopted as is
    /// - same id, conflicting urls: `other` is stored next to the existing
    ///   child under a fresh key (see [`next_conflict_key`]) and its id is
    ///   changed to that key
    /// - otherwise: `other`'s set properties overwrite the existing child's
    ///   and `other`'s children are merged into it recursively
    ///
    /// Returns the node stored under the final key.
    #[instrument(level = "debug", skip_all, fields(parent = %self.id, id = %other.id))]
    pub fn merge_sub_menu(&mut self, mut other: MenuNode) -> &mut MenuNode {
        let conflict = self
            .children
            .get(&other.id)
            .map(|current| current.conflicts_with(&other));

        match conflict {
            Some(true) => {
                let key = self.unique_child_key(&other.id);
                warn!(
                    parent = %self.id,
                    from = %other.id,
                    to = %key,
                    url = other.url().unwrap_or_default(),
                    "conflicting menu entry renamed"
                );
                other.id = key.clone();
                self.children.entry(key).or_insert(other)
            }
            Some(false) => match self.children.entry(other.id.clone()) {
                Entry::Occupied(slot) => {
                    let current = slot.into_mut();
                    current.absorb(other);
                    current
                }
                Entry::Vacant(slot) => slot.insert(other),
            },
            None => {
                debug!(id = %other.id, "adopting menu entry");
                self.children.entry(other.id.clone()).or_insert(other)
            }
        }
    }

    /// Merge each node in order; later nodes may be renamed against keys
    /// introduced by earlier ones.
    pub fn merge_sub_menus<I>(&mut self, menus: I) -> &mut Self
    where
        I: IntoIterator<Item = MenuNode>,
    {
        for menu in menus {
            self.merge_sub_menu(menu);
        }
        self
    }

    /// Sort children by priority, then effective title, recursively.
    ///
    /// The sort is stable, so equal keys keep their relative order.
    #[instrument(level = "trace", skip(self), fields(id = %self.id))]
    pub fn order(&mut self) -> &mut Self {
        self.children.sort_by(|_, a, _, b| compare_sub_menus(a, b));
        for child in self.children.values_mut() {
            child.order();
        }
        self
    }

    /// Cursor over the direct children, positioned at the first one.
    pub fn cursor(&self) -> MenuCursor<'_> {
        MenuCursor::new(&self.children)
    }

    /// Pre-order traversal of all descendants (the node itself excluded).
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self)
    }

    fn absorb(&mut self, other: MenuNode) {
        self.properties.overlay(&other.properties);
        for child in other.children.into_values() {
            self.merge_sub_menu(child);
        }
    }

    fn unique_child_key(&self, name: &str) -> String {
        let mut key = name.to_string();
        while self.children.contains_key(&key) {
            key = next_conflict_key(&key);
        }
        key
    }
}

fn compare_sub_menus(a: &MenuNode, b: &MenuNode) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.title().cmp(b.title()))
}

fn numeric_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| Regex::new(r"_(\d+)$").expect("static regex"))
}

/// Next candidate key when `key` is taken by a conflicting entry.
///
/// `name_<n>` becomes `name_<n+1>`, anything else gets `_2` appended.
pub fn next_conflict_key(key: &str) -> String {
    if let Some(caps) = numeric_suffix().captures(key) {
        if let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) {
            if let Some(next) = digits
                .as_str()
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
            {
                return format!("{}_{}", &key[..whole.start()], next);
            }
        }
    }
    format!("{}_2", key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dashboard", "dashboard_2")]
    #[case("dashboard_2", "dashboard_3")]
    #[case("dashboard_9", "dashboard_10")]
    #[case("log_2019_1", "log_2019_2")]
    #[case("a_b", "a_b_2")]
    #[case("_7", "_8")]
    #[case("x_99999999999999999999999", "x_99999999999999999999999_2")]
    fn given_key_when_computing_next_conflict_key_then_suffix_advances(
        #[case] key: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(next_conflict_key(key), expected);
    }

    #[test]
    fn given_taken_suffixes_when_finding_unique_key_then_skips_all_of_them() {
        let mut menu = MenuNode::new("menu", None);
        for id in ["dashboard", "dashboard_2", "dashboard_3"] {
            menu.add_sub_menu(id, None);
        }
        assert_eq!(menu.unique_child_key("dashboard"), "dashboard_4");
        assert_eq!(menu.unique_child_key("other"), "other");
    }

    #[test]
    fn given_empty_title_when_reading_title_then_falls_back_to_id() {
        let node = MenuNode::new("Logout", Some(MenuProperties::new().with_title("")));
        assert_eq!(node.title(), "Logout");
    }
}
