//! Validate the site descriptor and demo registry.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Result};
use sitepress_examples::demos;

/// Run the check command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = super::load_config(config_path)?;

    tracing::info!(
        "Site config ok: \"{}\" with {} sidebar groups, {} pages",
        config.title,
        config.sidebar_groups.len(),
        config.sidebar_paths().len()
    );

    let registry = demos::builtin();

    if registry.is_empty() {
        bail!("Demo registry is empty");
    }

    let mut seen = HashSet::new();
    for key in registry.keys() {
        if !seen.insert(key) {
            bail!("Demo key '{}' enumerated twice", key);
        }

        let doc = registry.get(key)?;
        if doc.as_str().trim().is_empty() {
            bail!("Demo '{}' has an empty document", key);
        }
    }

    tracing::info!("Demo registry ok: {} documents", registry.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_passes_check() {
        run(Path::new("does-not-exist.toml")).unwrap();
    }
}
