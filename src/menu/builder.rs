//! Flat link list to nested menu tree.
//!
//! # Algorithm
//! ```text
//! scan(level):
//!     depth == level  → new sibling; if next depth > level, children = scan(level + 1)
//!     depth <  level  → return to caller, item left unconsumed
//!     depth >  level  → level was skipped: warn, drop the item, continue
//! ```
//!
//! # Design Decisions
//! - Single left-to-right pass, recursion depth equals nesting depth
//! - Output order mirrors input order (no sorting, no dedup)
//! - Malformed entries never abort the build

use serde::Serialize;
use thiserror::Error;

use super::link::{LinkItem, MenuNode};

/// A link whose depth jumps past the level it appeared at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("link {name:?} at position {index} has depth {depth} but the menu is at level {level}")]
pub struct MalformedLink {
    /// Position of the link in the input.
    pub index: usize,
    /// Raw name as given.
    pub name: String,
    pub depth: usize,
    /// Level the builder was at when the link was seen.
    pub level: usize,
}

/// Result of a build: the root forest plus every skipped entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuBuild {
    pub roots: Vec<MenuNode>,
    pub skipped: Vec<MalformedLink>,
}

/// Builds nested menus from depth-annotated link lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuTreeBuilder;

impl MenuTreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the root forest, dropping malformed entries.
    pub fn build(&self, items: &[LinkItem]) -> Vec<MenuNode> {
        self.build_report(items).roots
    }

    /// Build the root forest and report what was dropped.
    pub fn build_report(&self, items: &[LinkItem]) -> MenuBuild {
        let mut scan = Scan {
            items,
            pos: 0,
            skipped: Vec::new(),
        };
        let roots = scan.level(0);

        tracing::debug!(
            links = items.len(),
            nodes = super::link::count(&roots),
            skipped = scan.skipped.len(),
            "Menu built"
        );

        MenuBuild {
            roots,
            skipped: scan.skipped,
        }
    }
}

/// Cursor shared by all recursion levels of one build.
struct Scan<'a> {
    items: &'a [LinkItem],
    pos: usize,
    skipped: Vec<MalformedLink>,
}

impl Scan<'_> {
    fn peek_depth(&self) -> Option<usize> {
        self.items.get(self.pos).map(LinkItem::depth)
    }

    fn level(&mut self, level: usize) -> Vec<MenuNode> {
        let mut nodes = Vec::new();

        while let Some(item) = self.items.get(self.pos) {
            let depth = item.depth();

            if depth < level {
                break;
            }

            if depth > level {
                tracing::warn!(
                    index = self.pos,
                    name = %item.name,
                    depth,
                    level,
                    "Skipping menu link that skips a nesting level"
                );
                self.skipped.push(MalformedLink {
                    index: self.pos,
                    name: item.name.clone(),
                    depth,
                    level,
                });
                self.pos += 1;
                continue;
            }

            let mut node = MenuNode::leaf(item);
            self.pos += 1;

            if self.peek_depth().is_some_and(|next| next > level) {
                node.children = self.level(level + 1);
            }

            nodes.push(node);
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::link::walk;
    use tracing_test::traced_test;

    fn links(names: &[&str]) -> Vec<LinkItem> {
        names
            .iter()
            .map(|n| LinkItem::new(*n, format!("/{}", n.trim_start_matches('_'))))
            .collect()
    }

    fn labels(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let build = MenuTreeBuilder::new().build_report(&[]);
        assert!(build.roots.is_empty());
        assert!(build.skipped.is_empty());
    }

    #[test]
    fn test_groups_children_under_parent() {
        let items = links(&["Parent", "_Child1", "_Child2", "Sibling"]);
        let roots = MenuTreeBuilder::new().build(&items);

        assert_eq!(labels(&roots), vec!["Parent", "Sibling"]);
        assert_eq!(labels(&roots[0].children), vec!["Child1", "Child2"]);
        assert!(roots[1].is_leaf());
        assert_eq!(roots[0].children[0].target, "/Child1");
    }

    #[test]
    fn test_closes_multiple_levels_at_once() {
        let roots = MenuTreeBuilder::new().build(&links(&["A", "_B", "__C", "___D", "E"]));

        assert_eq!(labels(&roots), vec!["A", "E"]);
        let d = &roots[0].children[0].children[0].children[0];
        assert_eq!(d.label, "D");
        assert!(d.is_leaf());
    }

    #[test]
    fn test_returns_to_middle_level() {
        let roots = MenuTreeBuilder::new().build(&links(&["A", "_B", "__C", "_D"]));

        assert_eq!(labels(&roots), vec!["A"]);
        assert_eq!(labels(&roots[0].children), vec!["B", "D"]);
        assert_eq!(labels(&roots[0].children[0].children), vec!["C"]);
    }

    #[test]
    fn test_skipped_level_is_dropped() {
        let build = MenuTreeBuilder::new().build_report(&links(&["Parent", "__Grandchild"]));

        assert_eq!(labels(&build.roots), vec!["Parent"]);
        assert!(build.roots[0].is_leaf());
        assert_eq!(
            build.skipped,
            vec![MalformedLink {
                index: 1,
                name: "__Grandchild".into(),
                depth: 2,
                level: 1,
            }]
        );
    }

    #[test]
    fn test_leading_nested_link_is_dropped() {
        let build = MenuTreeBuilder::new().build_report(&links(&["_Orphan", "Home"]));

        assert_eq!(labels(&build.roots), vec!["Home"]);
        assert_eq!(build.skipped.len(), 1);
        assert_eq!(build.skipped[0].level, 0);
    }

    #[test]
    fn test_valid_siblings_after_malformed_entry_survive() {
        let build = MenuTreeBuilder::new().build_report(&links(&["A", "__X", "_B", "C"]));

        let order: Vec<_> = walk(&build.roots).map(|(_, n)| n.label.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(build.skipped[0].index, 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let roots = MenuTreeBuilder::new().build(&links(&["Same", "Same"]));
        assert_eq!(labels(&roots), vec!["Same", "Same"]);
    }

    #[test]
    #[traced_test]
    fn test_skipped_link_is_logged() {
        MenuTreeBuilder::new().build(&links(&["Parent", "__Grandchild"]));
        assert!(logs_contain("Skipping menu link that skips a nesting level"));
        assert!(logs_contain("__Grandchild"));
    }
}
