//! Demo page shell.
//!
//! Wraps a registry document in a minimal "try it yourself" page. The
//! document is embedded through an `<iframe srcdoc>`, so HTML-escaping
//! happens here, in the page layer - the registry hands payloads over
//! verbatim and never escapes them itself.

use minijinja::{context, Environment};
use sitepress_examples::ExampleDoc;

/// Renders demo shell pages using minijinja.
pub struct DemoShell {
    env: Environment<'static>,
}

impl DemoShell {
    /// Create a shell renderer with the built-in template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("demo.html".to_string(), DEMO_TEMPLATE.to_string())
            .expect("Failed to add demo template");

        Self { env }
    }

    /// Render the shell page embedding one demo document.
    pub fn render(
        &self,
        key: &str,
        doc: &ExampleDoc,
        site_title: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("demo.html")?;

        tmpl.render(context! {
            key => key,
            source => doc.as_str(),
            site_title => site_title,
        })
    }
}

impl Default for DemoShell {
    fn default() -> Self {
        Self::new()
    }
}

const DEMO_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ key }} - {{ site_title }}</title>
</head>
<body>
  <div class="demo">
    <h1 class="demo-title">{{ key }}</h1>
    <iframe class="demo-frame" sandbox="allow-scripts allow-modals" srcdoc="{{ source }}"></iframe>
  </div>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_shell_with_title() {
        let shell = DemoShell::new();
        let doc = ExampleDoc::html("<html><body>Hello Vue!</body></html>");

        let html = shell.render("start", &doc, "Vue3.0 JS").unwrap();

        assert!(html.contains("<title>start - Vue3.0 JS</title>"));
        assert!(html.contains("srcdoc="));
    }

    #[test]
    fn escapes_document_inside_srcdoc() {
        let shell = DemoShell::new();
        let doc = ExampleDoc::html("<script>alert(1)</script>");

        let html = shell.render("x", &doc, "Docs").unwrap();

        // The payload must not appear unescaped in the shell markup.
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
    }
}
