//! Tree rendering for terminals, driven only through the cursor API so it
//! sees exactly what any other renderer sees.

use termtree::Tree;
use tracing::instrument;

use crate::domain::cursor::MenuCursor;
use crate::domain::node::MenuNode;

pub trait MenuTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl MenuTreeConvert for MenuNode {
    #[instrument(level = "debug", skip(self), fields(id = %self.id()))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(mut cursor: MenuCursor<'_>, parent: &mut Tree<String>) {
            cursor.rewind();
            while let Some(node) = cursor.current() {
                let mut leaf = Tree::new(label(node));
                if cursor.has_children() {
                    if let Some(children) = cursor.children() {
                        build(children, &mut leaf);
                    }
                }
                parent.push(leaf);
                cursor.advance();
            }
        }

        let mut tree = Tree::new(label(self));
        build(self.cursor(), &mut tree);
        tree
    }
}

/// `title (url)`, or just the title for entries without a url.
pub fn label(node: &MenuNode) -> String {
    match node.url() {
        Some(url) => format!("{} ({})", node.title(), url),
        None => node.title().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::properties::MenuProperties;

    #[test]
    fn given_menu_when_rendering_tree_then_lists_titles_and_urls() {
        let mut menu = MenuNode::new("menu", None);
        menu.add_sub_menu(
            "System.Modules",
            Some(MenuProperties::new().with_url("config/modules")),
        );

        let rendered = menu.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "menu");
        assert!(lines[1].ends_with("System"));
        assert!(lines[2].ends_with("Modules (config/modules)"));
    }
}
