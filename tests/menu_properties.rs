//! Menu tree construction properties.

use proptest::prelude::*;
use sitenav::menu::{count, walk, HtmlMenuRenderer, LinkItem, MenuRenderer, MenuTreeBuilder};

mod common;

fn indented(depth: usize, label: &str) -> LinkItem {
    LinkItem::new(format!("{}{}", "_".repeat(depth), label), format!("/{label}"))
}

/// Labels paired with raw depths; depths may jump arbitrarily.
fn any_links() -> impl Strategy<Value = Vec<LinkItem>> {
    prop::collection::vec((0usize..5, "[A-Za-z][A-Za-z0-9]{0,8}"), 0..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(depth, label)| indented(depth, &label))
            .collect()
    })
}

/// Like `any_links`, but every depth is at most one deeper than the previous.
fn well_formed_links() -> impl Strategy<Value = Vec<LinkItem>> {
    prop::collection::vec((0usize..5, "[A-Za-z][A-Za-z0-9]{0,8}"), 0..40).prop_map(|raw| {
        let mut prev: Option<usize> = None;
        raw.into_iter()
            .map(|(wanted, label)| {
                let depth = match prev {
                    None => 0,
                    Some(p) => wanted.min(p + 1),
                };
                prev = Some(depth);
                indented(depth, &label)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn well_formed_input_loses_nothing(items in well_formed_links()) {
        let build = MenuTreeBuilder::new().build_report(&items);

        prop_assert!(build.skipped.is_empty());
        prop_assert_eq!(count(&build.roots), items.len());

        let labels: Vec<_> = walk(&build.roots).map(|(_, n)| n.label.clone()).collect();
        let expected: Vec<_> = items.iter().map(|i| i.clean_name().to_string()).collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn malformed_entries_are_the_only_losses(items in any_links()) {
        let build = MenuTreeBuilder::new().build_report(&items);

        prop_assert_eq!(count(&build.roots), items.len() - build.skipped.len());

        let kept: Vec<_> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| !build.skipped.iter().any(|s| s.index == *i))
            .map(|(_, item)| (item.depth(), item.clean_name().to_string()))
            .collect();
        let walked: Vec<_> = walk(&build.roots).map(|(d, n)| (d, n.label.clone())).collect();
        prop_assert_eq!(walked, kept);
    }

    #[test]
    fn every_skipped_entry_jumps_past_its_level(items in any_links()) {
        let build = MenuTreeBuilder::new().build_report(&items);
        for skipped in &build.skipped {
            prop_assert!(skipped.depth > skipped.level);
            prop_assert_eq!(&items[skipped.index].name, &skipped.name);
        }
    }
}

#[test]
fn test_parent_children_sibling() {
    let items = common::links(&["Parent", "_Child1", "_Child2", "Sibling"]);
    let roots = MenuTreeBuilder::new().build(&items);

    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].label, "Parent");
    let children: Vec<_> = roots[0].children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(children, vec!["Child1", "Child2"]);
    assert_eq!(roots[1].label, "Sibling");
    assert!(roots[1].children.is_empty());
}

#[test]
fn test_grandchild_without_child_is_skipped() {
    let build = MenuTreeBuilder::new().build_report(&common::links(&["Parent", "__Grandchild"]));

    assert_eq!(build.roots.len(), 1);
    assert_eq!(build.roots[0].label, "Parent");
    assert!(build.roots[0].children.is_empty());
    assert_eq!(build.skipped.len(), 1);
    assert_eq!(build.skipped[0].name, "__Grandchild");
}

#[test]
fn test_json_shape() {
    let roots = MenuTreeBuilder::new().build(&common::links(&["Shop", "_Shoes", "About"]));

    let json = serde_json::to_value(&roots).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"label": "Shop", "target": "/shop", "children": [
                {"label": "Shoes", "target": "/shoes"}
            ]},
            {"label": "About", "target": "/about"}
        ])
    );
}

#[test]
fn test_links_deserialize_from_json() {
    let json = r#"[
        {"name": "Blog", "target": "/blog"},
        {"name": "_2024", "target": "/blog/2024"}
    ]"#;
    let items: Vec<LinkItem> = serde_json::from_str(json).unwrap();
    let roots = MenuTreeBuilder::new().build(&items);

    let html = HtmlMenuRenderer::default().render(&roots);
    assert!(html.contains("<a href=\"/blog/2024\">2024</a>"));
}
