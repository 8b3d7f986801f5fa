//! Home page: the vendor directory.

use plaza_catalog::{Catalog, Vendor};

use crate::escape::html_escape;

use super::{site_shell, vendor_path, SITE_NAME};

/// Render the home page listing every vendor in the catalog.
pub fn render_home(catalog: &Catalog) -> String {
    let cards: String = catalog.vendors().iter().map(render_vendor_card).collect();

    let content = format!(
        r#"<section class="vendors" data-section="vendors">
    <div class="vendor-grid">
        {}
    </div>
</section>"#,
        cards
    );

    site_shell(SITE_NAME).render(&content)
}

fn render_vendor_card(vendor: &Vendor) -> String {
    let count = vendor.product_count();
    let count_label = if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    };

    format!(
        r#"<a href="{href}" class="vendor-card" data-vendor="{slug}">
    <img src="{logo}" alt="" width="48" height="48">
    <h2>{name}</h2>
    <p>{description}</p>
    <span class="count">{count}</span>
</a>"#,
        href = vendor_path(&vendor.slug),
        slug = html_escape(&vendor.slug),
        logo = html_escape(&vendor.logo),
        name = html_escape(&vendor.name),
        description = html_escape(&vendor.description),
        count = count_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_every_vendor() {
        let catalog = Catalog::embedded();
        let html = render_home(&catalog);

        for vendor in catalog.vendors() {
            assert!(html.contains(&html_escape(&vendor.name)));
            assert!(html.contains(&format!(r#"href="{}""#, vendor_path(&vendor.slug))));
        }
    }

    #[test]
    fn test_home_shows_product_counts() {
        let catalog = Catalog::embedded();
        let html = render_home(&catalog);
        assert!(html.contains("14 products"));
    }

    #[test]
    fn test_home_is_complete_document() {
        let html = render_home(&Catalog::embedded());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}
