//! List registered demo keys.

use anyhow::Result;
use sitepress_examples::demos;

/// Run the list command.
pub fn run() -> Result<()> {
    let registry = demos::builtin();

    for key in registry.keys() {
        println!("{}", key);
    }

    Ok(())
}
