//! Read-only traversal of a menu tree.
//!
//! A [`MenuCursor`] walks the direct children of one node; the renderer
//! recurses by asking the cursor for the children of its current entry.
//! Cursors borrow the tree, so any number of traversals can run side by
//! side and the tree cannot change underneath them.

use tracing::instrument;

use crate::domain::node::{MenuNode, SubMenus};

/// Position within the child list of a single node.
#[derive(Debug, Clone)]
pub struct MenuCursor<'a> {
    entries: &'a SubMenus,
    position: usize,
}

impl<'a> MenuCursor<'a> {
    pub(crate) fn new(entries: &'a SubMenus) -> Self {
        Self {
            entries,
            position: 0,
        }
    }

    /// Back to the first child in current order.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn valid(&self) -> bool {
        self.position < self.entries.len()
    }

    pub fn current(&self) -> Option<&'a MenuNode> {
        self.entries.get_index(self.position).map(|(_, node)| node)
    }

    pub fn key(&self) -> Option<&'a str> {
        self.entries
            .get_index(self.position)
            .map(|(key, _)| key.as_str())
    }

    /// Move to the next child. Past the end the cursor stays invalid.
    pub fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }

    /// Whether the current entry has sub menus to descend into.
    pub fn has_children(&self) -> bool {
        self.current().is_some_and(MenuNode::has_sub_menus)
    }

    /// Cursor over the current entry's children.
    pub fn children(&self) -> Option<MenuCursor<'a>> {
        self.current().map(MenuNode::cursor)
    }
}

/// An entry produced by [`DepthFirst`].
#[derive(Debug, Clone, Copy)]
pub struct MenuItemRef<'a> {
    /// 0 for children of the traversal root
    pub depth: usize,
    pub key: &'a str,
    pub node: &'a MenuNode,
}

/// Pre-order iterator over every descendant of a node.
#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<MenuCursor<'a>>,
}

impl<'a> DepthFirst<'a> {
    #[instrument(level = "trace", skip_all, fields(root = %root.id()))]
    pub(crate) fn new(root: &'a MenuNode) -> Self {
        Self {
            stack: vec![root.cursor()],
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = MenuItemRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let top = self.stack.last_mut()?;
            if !top.valid() {
                self.stack.pop();
                continue;
            }

            let item = match (top.key(), top.current()) {
                (Some(key), Some(node)) => MenuItemRef { depth, key, node },
                _ => {
                    self.stack.pop();
                    continue;
                }
            };
            let children = if top.has_children() {
                top.children()
            } else {
                None
            };
            top.advance();
            if let Some(children) = children {
                self.stack.push(children);
            }
            return Some(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MenuNode {
        let mut menu = MenuNode::new("menu", None);
        menu.add_sub_menu("a.x", None);
        menu.add_sub_menu("a.y", None);
        menu.add_sub_menu("b", None);
        menu
    }

    #[test]
    fn given_cursor_when_walking_then_follows_child_order() {
        let menu = sample();
        let mut cursor = menu.cursor();
        let mut keys = Vec::new();
        while cursor.valid() {
            keys.push(cursor.key().unwrap());
            cursor.advance();
        }
        assert_eq!(keys, vec!["a", "b"]);
        assert!(cursor.current().is_none());

        cursor.rewind();
        assert_eq!(cursor.key(), Some("a"));
        assert!(cursor.has_children());
    }

    #[test]
    fn given_nested_tree_when_iterating_depth_first_then_pre_order_with_depth() {
        let menu = sample();
        let visited: Vec<_> = menu
            .depth_first()
            .map(|item| (item.depth, item.key))
            .collect();
        assert_eq!(visited, vec![(0, "a"), (1, "x"), (1, "y"), (0, "b")]);
    }

    #[test]
    fn given_leaf_when_iterating_then_yields_nothing() {
        let leaf = MenuNode::new("leaf", None);
        assert_eq!(leaf.depth_first().count(), 0);
        assert!(!leaf.cursor().valid());
        assert!(leaf.cursor().children().is_none());
    }
}
