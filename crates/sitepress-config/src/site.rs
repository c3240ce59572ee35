//! The site configuration descriptor.

use serde::{Deserialize, Serialize};

use crate::head::HeadTag;
use crate::sidebar::{duplicate_path, SidebarGroup};

/// The full declarative record consumed by the static-site generator.
///
/// Field names (camelCase on the wire) are the contract with the
/// generator; a substitute generator must honor the same option names
/// and effects. The descriptor performs no rendering itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Site description used for SEO metadata
    pub description: String,

    /// Tags injected into the generated `<head>`
    #[serde(default)]
    pub head_injections: Vec<HeadTag>,

    /// Project repository URL shown in the navbar
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Custom label for the repository link
    #[serde(default)]
    pub repo_label: Option<String>,

    /// Documentation repository, when docs live apart from the project
    #[serde(default)]
    pub docs_repo_url: Option<String>,

    /// Directory of the docs sources inside the docs repository
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Branch the "edit this page" links point at
    #[serde(default = "default_docs_branch")]
    pub docs_branch: String,

    /// Whether the generator renders an "edit this page" link per page
    #[serde(default)]
    pub edit_links_enabled: bool,

    /// Text of the "edit this page" link
    #[serde(default = "default_edit_link_text")]
    pub edit_link_text: String,

    /// Ordered sidebar groups
    #[serde(default)]
    pub sidebar_groups: Vec<SidebarGroup>,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown_options: MarkdownOptions,
}

/// Options forwarded to the generator's markdown renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownOptions {
    /// Render line numbers in fenced code blocks
    #[serde(default)]
    pub line_numbers: bool,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_docs_branch() -> String {
    "master".to_string()
}

fn default_edit_link_text() -> String {
    "Edit this page".to_string()
}

impl SiteConfig {
    /// Parse a descriptor from its TOML rendition.
    ///
    /// Shape errors (missing required field, wrong type) fail here, before
    /// anything is generated: a partial configuration produces a broken
    /// site, not a degraded one.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check the descriptor's invariants.
    ///
    /// Entry paths must be unique across the whole sidebar, and the
    /// fields the generator renders verbatim must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::EmptyField("title"));
        }

        for group in &self.sidebar_groups {
            if group.title.is_empty() {
                return Err(ConfigError::EmptyField("sidebar group title"));
            }

            for entry in &group.children {
                if entry.path.is_empty() {
                    return Err(ConfigError::EmptyField("sidebar entry path"));
                }
                if entry.label.is_empty() {
                    return Err(ConfigError::EmptyField("sidebar entry label"));
                }
            }
        }

        if let Some(path) = duplicate_path(&self.sidebar_groups) {
            return Err(ConfigError::DuplicatePath(path.to_string()));
        }

        tracing::debug!(
            "Validated site config: {} sidebar groups, {} head tags",
            self.sidebar_groups.len(),
            self.head_injections.len()
        );

        Ok(())
    }

    /// All entry paths, flattened across groups in display order.
    pub fn sidebar_paths(&self) -> Vec<&str> {
        self.sidebar_groups
            .iter()
            .flat_map(|g| g.children.iter().map(|e| e.path.as_str()))
            .collect()
    }
}

/// Errors that can occur loading or validating the descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(String),

    #[error("Duplicate sidebar path: {0}")]
    DuplicatePath(String),

    #[error("Empty {0} in site config")]
    EmptyField(&'static str),
}
