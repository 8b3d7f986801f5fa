//! Not-found page for unknown vendor slugs.

use super::{site_shell, SITE_NAME};

/// Render the 404 page shown for unknown vendors or paths.
pub fn render_not_found() -> String {
    let content = r#"<section class="not-found" data-section="not-found">
    <h1>404</h1>
    <h2>Vendor not found</h2>
    <p>We couldn't find that storefront.</p>
    <p><a href="/">Back to all vendors</a></p>
</section>"#;

    let title = format!("Not Found - {}", SITE_NAME);
    site_shell(&title).render(content)
}
