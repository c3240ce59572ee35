//! Emit the generator-facing descriptor and demo pages.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sitepress_examples::demos;

use crate::pages::DemoShell;

/// Run the emit command.
///
/// Writes `config.json` (the descriptor in the generator's wire shape)
/// and one shell page per demo under `demos/<key>/index.html`.
pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let config = super::load_config(config_path)?;

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    fs::write(output.join("config.json"), json).context("Failed to write config.json")?;

    let registry = demos::builtin();
    let shell = DemoShell::new();
    let demos_dir = output.join("demos");
    let mut pages = 0;

    for key in registry.keys() {
        let doc = registry.get(key)?;
        let html = shell
            .render(key, doc, &config.title)
            .with_context(|| format!("Failed to render demo page '{}'", key))?;

        let page_dir = demos_dir.join(key);
        fs::create_dir_all(&page_dir)
            .with_context(|| format!("Failed to create {}", page_dir.display()))?;
        fs::write(page_dir.join("index.html"), html)
            .with_context(|| format!("Failed to write demo page '{}'", key))?;

        pages += 1;
    }

    tracing::info!(
        "Emitted config.json and {} demo pages to {}",
        pages,
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn emits_config_and_demo_pages() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        run(Path::new("does-not-exist.toml"), &out).unwrap();

        let config = fs::read_to_string(out.join("config.json")).unwrap();
        assert!(config.contains("Vue3.0 JS"));
        assert!(config.contains("sidebarGroups"));
        assert!(config.contains("editLinkText"));

        assert!(out.join("demos/start/index.html").exists());
        assert!(out.join("demos/nextTick-demo-1/index.html").exists());

        let page = fs::read_to_string(out.join("demos/start/index.html")).unwrap();
        assert!(page.contains("Hello Vue!"));
        assert!(page.contains("srcdoc="));
    }

    #[test]
    fn config_override_flows_into_pages() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "title = \"Other Docs\"\ndescription = \"d\"\n").unwrap();
        let out = temp.path().join("dist");

        run(&config_path, &out).unwrap();

        let page = fs::read_to_string(out.join("demos/h/index.html")).unwrap();
        assert!(page.contains("Other Docs"));
    }
}
