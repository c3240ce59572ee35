//! Site configuration descriptor for the sitepress documentation site.
//!
//! This crate defines the declarative record an external static-site
//! generator consumes at build time: site metadata, head injections, and
//! the sidebar navigation tree. Everything here is plain data, constructed
//! once and read-only thereafter.

pub mod data;
pub mod head;
pub mod sidebar;
pub mod site;

pub use head::HeadTag;
pub use sidebar::{NavEntry, SidebarGroup};
pub use site::{ConfigError, MarkdownOptions, SiteConfig};
