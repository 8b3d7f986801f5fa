//! Vendor hero banner and the search/sort toolbar.

use plaza_catalog::Vendor;
use plaza_query::{QueryParams, SortKey};

use crate::escape::html_escape;

/// Render the vendor hero banner. The brand color is a display hint
/// only; it feeds the `--brand` CSS variable for this page.
pub fn render_vendor_hero(vendor: &Vendor) -> String {
    format!(
        r#"<section class="vendor-hero" style="--brand: {color}; background-image: url('{hero}'); background-size: cover;">
    <img src="{logo}" alt="" width="48" height="48">
    <h1>{name}</h1>
    <p>{description}</p>
</section>"#,
        color = html_escape(&vendor.brand_color),
        hero = html_escape(&vendor.hero_image),
        logo = html_escape(&vendor.logo),
        name = html_escape(&vendor.name),
        description = html_escape(&vendor.description),
    )
}

/// Render the toolbar: search form, result count, and sort dropdown.
///
/// The form submits GET to the vendor page and carries the current sort
/// along; submitting a new search resets to page 1 by simply not
/// emitting a `page` field.
pub fn render_toolbar(base_path: &str, params: &QueryParams, total_items: usize) -> String {
    let count_label = if params.search.is_empty() {
        format!("{} products", total_items)
    } else {
        format!(
            "{} results for \u{201c}{}\u{201d}",
            total_items,
            html_escape(&params.search)
        )
    };

    let sort_field = if params.sort != SortKey::default() {
        format!(
            r#"<input type="hidden" name="sort" value="{}">"#,
            params.sort.as_str()
        )
    } else {
        String::new()
    };

    let options: String = SortKey::all()
        .iter()
        .map(|key| {
            let selected = if *key == params.sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                selected,
                key.display_name()
            )
        })
        .collect();

    format!(
        r#"<div class="toolbar">
    <form action="{base}" method="GET" class="search-form" role="search">
        <input type="search" name="search" value="{search}" placeholder="Search products..." aria-label="Search products">
        {sort_field}
        <button type="submit">Search</button>
    </form>
    <span class="result-count">{count}</span>
    <div class="sort-control">
        <label for="sort-select">Sort</label>
        <select id="sort-select" onchange="updateSort(this.value)">
            {options}
        </select>
    </div>
</div>"#,
        base = base_path,
        search = html_escape(&params.search),
        sort_field = sort_field,
        count = count_label,
        options = options,
    )
}

/// Inline script backing the sort dropdown: changing the sort updates
/// the query string and resets to page 1, dropping any static
/// `page/<n>/` path segment first.
pub fn toolbar_scripts() -> &'static str {
    r#"<script>
function updateSort(value) {
    const url = new URL(window.location);
    url.pathname = url.pathname.replace(/page\/\d+\/?$/, '');
    if (value === 'newest') {
        url.searchParams.delete('sort');
    } else {
        url.searchParams.set('sort', value);
    }
    url.searchParams.delete('page');
    window.location = url;
}
</script>"#
}
