//! Sidebar navigation tree.

use serde::{Deserialize, Serialize};

/// A single navigation entry: a page path and its display label.
///
/// Order within a group is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Page path relative to the docs root, e.g. `reactivity/effect`
    pub path: String,

    /// Display label shown in the sidebar
    pub label: String,
}

impl NavEntry {
    pub fn new(path: &str, label: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
        }
    }
}

/// A named, ordered cluster of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup {
    /// Group heading
    pub title: String,

    /// Whether the group can be collapsed in the rendered sidebar
    #[serde(default = "default_collapsible")]
    pub collapsible: bool,

    /// Optional heading depth rendered for this group's pages
    #[serde(default)]
    pub depth: Option<u8>,

    /// Entries in display order
    pub children: Vec<NavEntry>,
}

fn default_collapsible() -> bool {
    true
}

impl SidebarGroup {
    /// Create a non-collapsible group from (path, label) pairs.
    pub fn pinned(title: &str, children: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            collapsible: false,
            depth: None,
            children: children
                .iter()
                .map(|&(path, label)| NavEntry::new(path, label))
                .collect(),
        }
    }
}

/// Find the first page path that appears more than once across all groups.
///
/// Entry paths must be unique across the whole sidebar for the generated
/// site to link correctly.
pub fn duplicate_path(groups: &[SidebarGroup]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();

    for group in groups {
        for entry in &group.children {
            if !seen.insert(entry.path.as_str()) {
                return Some(entry.path.as_str());
            }
        }
    }

    None
}
