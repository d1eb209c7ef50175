//! Input and output units of the menu builder.

use serde::{Deserialize, Serialize};

/// Marker character encoding one level of nesting in a link label.
pub const DEPTH_MARKER: char = '_';

/// A raw labeled link, as scraped from a navigation container.
///
/// The nesting depth is encoded as a run of leading underscores in `name`:
/// `"Shoes"` is top level, `"_Sneakers"` sits one level below it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkItem {
    /// Raw label, possibly prefixed with depth markers.
    pub name: String,

    /// Link target (URL or path).
    pub target: String,
}

impl LinkItem {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }

    /// Number of leading depth markers in the raw name.
    pub fn depth(&self) -> usize {
        self.name.chars().take_while(|c| *c == DEPTH_MARKER).count()
    }

    /// Label with depth markers stripped and surrounding whitespace trimmed.
    pub fn clean_name(&self) -> &str {
        self.name.trim_start_matches(DEPTH_MARKER).trim()
    }
}

/// A node of the nested menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuNode {
    pub label: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a childless node from a link.
    pub fn leaf(item: &LinkItem) -> Self {
        Self {
            label: item.clean_name().to_string(),
            target: item.target.clone(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn size(&self) -> usize {
        1 + count(&self.children)
    }
}

/// Total number of nodes in a forest.
pub fn count(roots: &[MenuNode]) -> usize {
    roots.iter().map(MenuNode::size).sum()
}

/// Pre-order walk over a forest, yielding each node with its depth.
pub fn walk(roots: &[MenuNode]) -> Walk<'_> {
    Walk {
        stack: roots.iter().rev().map(|n| (0, n)).collect(),
    }
}

/// Iterator returned by [`walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a MenuNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
