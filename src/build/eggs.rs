//! Nested listing of the pages under a namespace (the "eggs" index).
//!
//! Pages such as `eggs/dir/one.html` and `eggs/dir/two.html` are grouped
//! into a tree keyed by path segment, serialized as nested `<ul>` lists,
//! and injected into the namespace index page's own content fragment.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::config::PageManifest;
use crate::util::page_stem;

static LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<ul>.*</ul>").unwrap());

/// One path segment in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EggNode {
    /// A manifest page; may also group pages nested under its name
    Page {
        title: String,
        path: String,
        children: BTreeMap<String, EggNode>,
    },
    /// A directory grouping with no page of its own
    Directory { children: BTreeMap<String, EggNode> },
}

impl EggNode {
    fn directory() -> Self {
        EggNode::Directory {
            children: BTreeMap::new(),
        }
    }

    pub fn children(&self) -> &BTreeMap<String, EggNode> {
        match self {
            EggNode::Page { children, .. } | EggNode::Directory { children } => children,
        }
    }

    fn children_mut(&mut self) -> &mut BTreeMap<String, EggNode> {
        match self {
            EggNode::Page { children, .. } | EggNode::Directory { children } => children,
        }
    }

    fn into_children(self) -> BTreeMap<String, EggNode> {
        match self {
            EggNode::Page { children, .. } | EggNode::Directory { children } => children,
        }
    }
}

/// The namespace's pages arranged by path segment.
///
/// Children are kept in a `BTreeMap`, so every level serializes in
/// lexicographic segment order regardless of manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EggTree {
    roots: BTreeMap<String, EggNode>,
}

impl EggTree {
    /// Collect every manifest page under `<namespace>/` into a tree.
    ///
    /// The namespace's own index page (`<namespace>.html`) is not part of it.
    pub fn build(manifest: &PageManifest, namespace: &str) -> Self {
        let prefix = format!("{namespace}/");
        let mut tree = Self::default();

        for (page_name, config) in &manifest.pages {
            if let Some(relative) = page_name.strip_prefix(&prefix) {
                tree.insert(relative, page_name, &config.title);
            }
        }

        tree
    }

    /// Insert a page at `relative` (its name with the namespace stripped).
    fn insert(&mut self, relative: &str, page_name: &str, title: &str) {
        let segments: Vec<&str> = relative.split('/').collect();
        let Some((leaf, dirs)) = segments.split_last() else {
            return;
        };

        let mut level = &mut self.roots;
        for dir in dirs {
            level = level
                .entry((*dir).to_string())
                .or_insert_with(EggNode::directory)
                .children_mut();
        }

        let name = page_stem(leaf).to_string();
        let children = level
            .remove(&name)
            .map(EggNode::into_children)
            .unwrap_or_default();
        level.insert(
            name,
            EggNode::Page {
                title: title.to_string(),
                path: page_name.to_string(),
                children,
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Serialize the tree as `<li>` items (without the outer `<ul>`).
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        write_level(&self.roots, &mut html);
        html
    }
}

fn write_level(level: &BTreeMap<String, EggNode>, html: &mut String) {
    for (name, node) in level {
        html.push_str("<li>\n");
        match node {
            EggNode::Page { title, path, .. } => {
                html.push_str(&format!("  <a href=\"{path}\">{name}: {title}</a>\n"));
            }
            EggNode::Directory { .. } => {
                html.push_str(&format!("  {name}:\n"));
            }
        }

        let children = node.children();
        if !children.is_empty() {
            html.push_str("  <ul>\n");
            write_level(children, html);
            html.push_str("  </ul>\n");
        }
        html.push_str("</li>\n");
    }
}

/// Replace the list in `fragment` with `items`.
///
/// The span from the first `<ul>` to the last `</ul>` is replaced. Returns
/// `None` when the fragment has no list to replace.
pub fn inject_list(fragment: &str, items: &str) -> Option<String> {
    if !LIST_RE.is_match(fragment) {
        return None;
    }
    let list = format!("<ul>\n{items}</ul>");
    Some(LIST_RE.replacen(fragment, 1, NoExpand(&list)).into_owned())
}
