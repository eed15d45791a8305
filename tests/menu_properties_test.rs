//! Property tests for conflict detection, renaming and ordering

use proptest::prelude::*;

use webmenu::domain::{next_conflict_key, MenuNode, MenuProperties};

fn arb_url() -> impl Strategy<Value = Option<String>> {
    prop::option::of("/[a-c]{1,2}")
}

fn arb_node() -> impl Strategy<Value = MenuNode> {
    ("[a-d]", arb_url(), prop::option::of(0i64..4), prop::option::of("[A-D]")).prop_map(
        |(id, url, priority, title)| {
            MenuNode::new(
                id,
                Some(MenuProperties {
                    url,
                    icon: None,
                    priority,
                    title,
                }),
            )
        },
    )
}

fn keys(node: &MenuNode) -> Vec<String> {
    node.depth_first()
        .map(|item| format!("{}/{}", item.depth, item.key))
        .collect()
}

proptest! {
    #[test]
    fn conflicts_with_is_symmetric(a in arb_node(), b in arb_node()) {
        prop_assert_eq!(a.conflicts_with(&b), b.conflicts_with(&a));
        if a.url().is_none() || b.url().is_none() {
            prop_assert!(!a.conflicts_with(&b));
        }
    }

    #[test]
    fn merging_absent_id_equals_insertion(existing in prop::collection::vec(arb_node(), 0..6), incoming in arb_node()) {
        let mut root = MenuNode::new("menu", None);
        root.merge_sub_menus(existing);
        prop_assume!(!root.has_sub_menu(incoming.id()));

        let before = root.sub_menus().len();
        root.merge_sub_menu(incoming.clone());

        prop_assert_eq!(root.sub_menus().len(), before + 1);
        prop_assert_eq!(root.get_sub_menu(incoming.id()).unwrap(), &incoming);
    }

    #[test]
    fn conflict_rename_yields_fresh_key(nodes in prop::collection::vec(arb_node(), 1..12)) {
        let mut root = MenuNode::new("menu", None);
        for node in nodes {
            let before: Vec<String> = root.sub_menus().keys().cloned().collect();
            let renamed = before.contains(&node.id().to_string())
                && root.get_sub_menu(node.id()).unwrap().conflicts_with(&node);
            let key = root.merge_sub_menu(node).id().to_string();
            if renamed {
                prop_assert!(!before.contains(&key));
            }
            prop_assert!(root.has_sub_menu(&key));
        }
    }

    #[test]
    fn order_is_idempotent(nodes in prop::collection::vec(arb_node(), 0..12)) {
        let mut root = MenuNode::new("menu", None);
        root.merge_sub_menus(nodes);
        root.order();
        let once = keys(&root);
        root.order();
        prop_assert_eq!(once, keys(&root));
    }

    #[test]
    fn ordered_siblings_are_sorted(nodes in prop::collection::vec(arb_node(), 0..12)) {
        let mut root = MenuNode::new("menu", None);
        root.merge_sub_menus(nodes);
        root.order();
        let sort_keys: Vec<(i64, String)> = root
            .sub_menus()
            .values()
            .map(|n| (n.priority(), n.title().to_string()))
            .collect();
        prop_assert!(sort_keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn next_conflict_key_differs(key in "[a-z]{1,4}(_[0-9]{1,3})?") {
        prop_assert_ne!(next_conflict_key(&key), key);
    }
}
