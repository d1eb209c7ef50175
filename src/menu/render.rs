//! Rendering adapters for built menus.
//!
//! Tree construction lives in [`super::builder`]; renderers only walk the
//! finished forest. Expand/collapse behavior belongs to the page script and
//! is represented here by the `aria-expanded` marker on sub-menu toggles.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::link::MenuNode;

/// Turns a menu forest into presentation markup.
pub trait MenuRenderer {
    fn render(&self, roots: &[MenuNode]) -> String;
}

/// CSS class names used by [`HtmlMenuRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuClasses {
    /// Class of the outermost list.
    pub menu: String,
    /// Class of nested lists.
    pub sub_menu: String,
    /// Class of list items that own a nested list.
    pub has_sub: String,
}

impl Default for MenuClasses {
    fn default() -> Self {
        Self {
            menu: "menu".to_string(),
            sub_menu: "sub-menu".to_string(),
            has_sub: "has-sub".to_string(),
        }
    }
}

/// Renders nested `<ul>` dropdown markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlMenuRenderer {
    classes: MenuClasses,
}

impl HtmlMenuRenderer {
    pub fn new(classes: MenuClasses) -> Self {
        Self { classes }
    }

    fn list(&self, out: &mut String, nodes: &[MenuNode], class: &str) {
        let _ = write!(out, "<ul class=\"{}\">", escape_attr(class));
        for node in nodes {
            self.item(out, node);
        }
        out.push_str("</ul>");
    }

    fn item(&self, out: &mut String, node: &MenuNode) {
        let href = escape_attr(&node.target);
        let label = escape_text(&node.label);

        if node.is_leaf() {
            let _ = write!(out, "<li><a href=\"{href}\">{label}</a></li>");
            return;
        }

        let _ = write!(
            out,
            "<li class=\"{}\"><a href=\"{href}\" \
             aria-haspopup=\"true\" aria-expanded=\"false\">{label}</a>",
            escape_attr(&self.classes.has_sub)
        );
        self.list(out, &node.children, &self.classes.sub_menu);
        out.push_str("</li>");
    }
}

impl MenuRenderer for HtmlMenuRenderer {
    fn render(&self, roots: &[MenuNode]) -> String {
        let mut out = String::new();
        self.list(&mut out, roots, &self.classes.menu);
        out
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}
