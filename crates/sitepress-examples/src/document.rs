//! Typed opaque demo payload.

/// A single demo document.
///
/// The payload is opaque to the registry: independently authored HTML,
/// carried verbatim. The content type is recorded so validation or
/// sanitization can be added later without changing the registry
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDoc {
    /// MIME type of the payload
    pub content_type: &'static str,

    /// The verbatim document source
    pub source: String,
}

impl ExampleDoc {
    /// Wrap an HTML document.
    pub fn html(source: impl Into<String>) -> Self {
        Self {
            content_type: "text/html",
            source: source.into(),
        }
    }

    /// The raw document source.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_doc_is_tagged_text_html() {
        let doc = ExampleDoc::html("<html></html>");

        assert_eq!(doc.content_type, "text/html");
        assert_eq!(doc.as_str(), "<html></html>");
    }
}
