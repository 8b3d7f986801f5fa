//! Vendor page: hero, toolbar, product grid, pagination.

use plaza_catalog::Vendor;
use plaza_query::QueryParams;
use tracing::debug;

use crate::sections::{
    render_empty_state, render_pagination, render_product_grid, render_toolbar,
    render_vendor_hero, toolbar_scripts,
};

use super::{site_shell, vendor_path, SITE_NAME};

/// Render a vendor page for one set of query parameters.
///
/// Runs the full query pipeline over the vendor's products, so the
/// rendered page reflects the search, sort, and page the params carry.
pub fn render_vendor_page(vendor: &Vendor, params: &QueryParams, page_size: usize) -> String {
    let base = vendor_path(&vendor.slug);
    let page = plaza_query::run(&vendor.products, params, page_size);

    debug!(
        vendor = %vendor.slug,
        page = page.current_page,
        total = page.total_items,
        "rendering vendor page"
    );

    let results = if page.is_empty() {
        render_empty_state(&base, &params.search)
    } else {
        render_product_grid(&page.items)
    };

    let content = format!(
        "{}\n{}\n{}\n{}",
        render_vendor_hero(vendor),
        render_toolbar(&base, params, page.total_items),
        results,
        render_pagination(&page, &base, params),
    );

    let title = format!("{} - {}", vendor.name, SITE_NAME);
    let body_end = format!("</main>\n{}\n</body>\n</html>", toolbar_scripts());

    site_shell(&title).with_body_end(body_end).render(&content)
}
