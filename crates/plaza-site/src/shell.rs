//! Page shell template.

use crate::escape::html_escape;

/// Head content for a page.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links
            .push(format!(r#"<link rel="stylesheet" href="{}">"#, href));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                name,
                html_escape(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Whole-page shell: head plus body wrapper around rendered sections.
///
/// Pages here are written out as static files, so the shell renders in
/// one piece rather than streaming opening and closing halves.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML between `<body>` and the page content (site header, etc.).
    pub body_start: String,
    /// HTML after the page content (footer, scripts).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render a complete HTML document around the given body content.
    pub fn render(&self, content: &str) -> String {
        let mut html = String::with_capacity(content.len() + 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html.push_str(content);
        html.push_str(&self.body_end);

        html
    }
}
