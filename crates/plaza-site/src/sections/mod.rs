//! Page sections: reusable HTML fragments composed into full pages.

mod header;
mod pagination;
mod products;

pub use header::{render_toolbar, render_vendor_hero, toolbar_scripts};
pub use pagination::render_pagination;
pub use products::{render_empty_state, render_product_grid};

use plaza_query::{QueryParams, SortKey};

/// Build a link to `base` carrying the given params at `page`.
///
/// Default-query pages exist on disk as static `page/<n>/` directories,
/// so links with no search and the default sort target those paths.
/// Links carrying search or sort state use a query string instead.
pub(crate) fn page_href(base: &str, params: &QueryParams, page: u32) -> String {
    if params.search.is_empty() && params.sort == SortKey::default() {
        if page <= 1 {
            base.to_string()
        } else {
            format!("{}page/{}/", base, page)
        }
    } else {
        format!("{}?{}", base, params.with_page(page).to_query_string())
    }
}
