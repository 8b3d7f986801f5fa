//! Pagination controls.

use plaza_query::{PageResult, QueryParams};

use super::page_href;

/// How many numbered page links to show around the current page.
const MAX_VISIBLE_PAGES: usize = 5;

/// Render the pagination nav. Links preserve the current search and
/// sort; single-page results render nothing.
pub fn render_pagination<T>(page: &PageResult<T>, base_path: &str, params: &QueryParams) -> String {
    if page.total_pages <= 1 {
        return String::new();
    }

    let current = page.current_page;
    let window = page.page_numbers(MAX_VISIBLE_PAGES);

    let mut pages_html = String::new();

    if let Some(&first) = window.first() {
        if first > 1 {
            pages_html.push_str(&page_link(base_path, params, 1, current));
            if first > 2 {
                pages_html.push_str(r#"<span class="pagination-ellipsis">...</span>"#);
            }
        }
    }

    for &p in &window {
        pages_html.push_str(&page_link(base_path, params, p, current));
    }

    if let Some(&last) = window.last() {
        if last < page.total_pages {
            if last < page.total_pages - 1 {
                pages_html.push_str(r#"<span class="pagination-ellipsis">...</span>"#);
            }
            pages_html.push_str(&page_link(base_path, params, page.total_pages, current));
        }
    }

    let prev_link = if page.has_previous_page {
        format!(
            r#"<a href="{}" class="pagination-prev" aria-label="Previous page">&larr; Prev</a>"#,
            page_href(base_path, params, current - 1)
        )
    } else {
        r#"<span class="pagination-prev disabled">&larr; Prev</span>"#.to_string()
    };

    let next_link = if page.has_next_page {
        format!(
            r#"<a href="{}" class="pagination-next" aria-label="Next page">Next &rarr;</a>"#,
            page_href(base_path, params, current + 1)
        )
    } else {
        r#"<span class="pagination-next disabled">Next &rarr;</span>"#.to_string()
    };

    format!(
        r#"<nav class="pagination" aria-label="Product pages">
    {}
    <div class="pagination-pages">
        {}
    </div>
    {}
</nav>"#,
        prev_link, pages_html, next_link
    )
}

fn page_link(base_path: &str, params: &QueryParams, p: u32, current: u32) -> String {
    if p == current {
        format!(
            r#"<span class="pagination-page current" aria-current="page">{}</span>"#,
            p
        )
    } else {
        format!(
            r#"<a href="{}" class="pagination-page">{}</a>"#,
            page_href(base_path, params, p),
            p
        )
    }
}
