//! CLI subcommands.

pub mod check;
pub mod emit;
pub mod list;
pub mod show;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sitepress_config::{data, SiteConfig};

/// Load the site descriptor.
///
/// A TOML file at `path` overrides the embedded canonical descriptor;
/// a malformed file is a fatal error rather than a fallback, since a
/// partial configuration produces a broken site.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = SiteConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        tracing::info!("Loaded site config from {}", path.display());
        return Ok(config);
    }

    let config = data::canonical();
    config.validate()?;
    Ok(config)
}
