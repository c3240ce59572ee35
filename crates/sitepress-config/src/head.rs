//! Head injection tags.

use serde::{Deserialize, Serialize};

/// A tag injected into the generated site's `<head>`.
///
/// Attributes keep their authored order so the emitted markup is stable
/// across builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Tag name, e.g. `link`, `meta`, `script`
    pub tag: String,

    /// Ordered (name, value) attribute pairs
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
}

impl HeadTag {
    /// Create a head tag from a tag name and attribute pairs.
    pub fn new<I, K, V>(tag: &str, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: tag.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
