//! Print one demo document verbatim.

use anyhow::Result;
use sitepress_examples::demos;

/// Run the show command.
///
/// An unknown key surfaces as a fatal error, never as empty output.
pub fn run(key: &str) -> Result<()> {
    let registry = demos::builtin();
    let doc = registry.get(key)?;

    print!("{}", doc.as_str());

    Ok(())
}
