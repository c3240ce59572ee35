//! Registry of live demo documents for the documentation site.
//!
//! Documentation pages reference demos by string key; the registry hands
//! back the corresponding self-contained HTML document verbatim. It never
//! parses, escapes, or templates the payloads — that belongs to the page
//! layer that embeds them.

pub mod demos;
pub mod document;
pub mod registry;

pub use document::ExampleDoc;
pub use registry::{ExampleRegistry, RegistryError};
