//! The product list query pipeline: filter, sort, paginate.
//!
//! Three pure stages composed by [`process_products`]. Every stage is
//! total over its declared domain: empty lists, zero matches, and
//! out-of-range page numbers are all valid inputs, clamped or passed
//! through rather than rejected. No stage mutates its input; each
//! produces a new owned sequence, so the shared source list in the
//! catalog is never touched.

use plaza_catalog::Product;
use tracing::debug;

use crate::page::PageResult;
use crate::params::QueryParams;
use crate::sort::SortKey;

/// Filter stage: case-insensitive substring search over name,
/// description, and category.
///
/// An empty or whitespace-only search is the identity. The filter is
/// stable: surviving products keep their relative order.
pub fn filter_products(products: &[Product], search: &str) -> Vec<Product> {
    if search.trim().is_empty() {
        return products.to_vec();
    }

    let needle = search.to_lowercase();
    let matched: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_search(&needle))
        .cloned()
        .collect();

    debug!(
        search = %search,
        matched = matched.len(),
        total = products.len(),
        "filtered products"
    );
    matched
}

/// Sort stage: produce a new sequence ordered by the given key.
///
/// Uses a stable sort, so products with equal keys keep their input
/// order under every key.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::PriceAsc => {
            sorted.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents));
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
        }
        SortKey::Newest => {
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
    sorted
}

/// Paginate stage: slice one page out of a sorted sequence.
///
/// Accepts any requested page number; values outside `[1, total_pages]`
/// are clamped. An empty input still reports page 1 of 1. `page_size`
/// below 1 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> PageResult<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = if total_items == 0 {
        1
    } else {
        ((total_items + page_size - 1) / page_size) as u32
    };

    let current_page = page.clamp(1, total_pages as i64) as u32;
    if current_page as i64 != page {
        debug!(requested = page, clamped = current_page, "page clamped");
    }

    let start = (current_page as usize - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let page_items = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        items: page_items,
        total_items,
        total_pages,
        current_page,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
    }
}

/// The full pipeline: filter, then sort, then paginate.
pub fn process_products(
    products: &[Product],
    search: &str,
    sort: SortKey,
    page: i64,
    page_size: usize,
) -> PageResult<Product> {
    let filtered = filter_products(products, search);
    let sorted = sort_products(&filtered, sort);
    paginate(&sorted, page, page_size)
}

/// Run the pipeline from a parsed [`QueryParams`].
pub fn run(products: &[Product], params: &QueryParams, page_size: usize) -> PageResult<Product> {
    process_products(
        products,
        &params.search,
        params.sort,
        params.page as i64,
        page_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use plaza_catalog::{Currency, Money, Product, ProductId, VendorId};

    /// Build a product with a creation time `days_ago` days before a
    /// fixed reference date.
    fn product(id: &str, name: &str, category: &str, cents: i64, days_ago: i64) -> Product {
        let reference = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        Product {
            id: ProductId::new(id),
            vendor_id: VendorId::new("vend-test"),
            name: name.to_string(),
            description: format!("{} description", name),
            price: Money::new(cents, Currency::USD),
            image: format!("/images/{}.jpg", id),
            category: category.to_string(),
            created_at: reference - Duration::days(days_ago),
        }
    }

    /// Fourteen products: ids p01..p14, each one day older than the
    /// previous, so `Newest` order is p01, p02, ..., p14.
    fn fourteen_products() -> Vec<Product> {
        (1..=14)
            .map(|i| {
                product(
                    &format!("p{:02}", i),
                    &format!("Item {:02}", i),
                    "General",
                    1000 + i * 100,
                    i,
                )
            })
            .collect()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    // -- Filter stage --

    #[test]
    fn test_filter_empty_search_is_identity() {
        let products = fourteen_products();
        assert_eq!(filter_products(&products, ""), products);
        assert_eq!(filter_products(&products, "   "), products);
    }

    #[test]
    fn test_filter_is_stable_subset() {
        let products = vec![
            product("a", "Jasmine Tea", "Tea", 1000, 1),
            product("b", "Coffee Grinder", "Coffee", 2000, 2),
            product("c", "Tea Towel", "Linens", 1500, 3),
            product("d", "Mug", "Drinkware", 1200, 4),
        ];
        let matched = filter_products(&products, "tea");
        assert_eq!(ids(&matched), vec!["a", "c"]);
    }

    #[test]
    fn test_filter_case_insensitive_across_fields() {
        let products = vec![
            product("a", "Jasmine Blend", "Green", 1000, 1),
            product("b", "Plain Kettle", "TEAWARE", 2000, 2),
        ];
        // "JASMINE" hits the name of a; "teaware" hits the category of b.
        assert_eq!(ids(&filter_products(&products, "JASMINE")), vec!["a"]);
        assert_eq!(ids(&filter_products(&products, "teaware")), vec!["b"]);
        // Descriptions are generated as "<name> description".
        assert_eq!(ids(&filter_products(&products, "kettle desc")), vec!["b"]);
    }

    #[test]
    fn test_filter_no_match_is_empty_not_error() {
        let products = fourteen_products();
        assert!(filter_products(&products, "zzz-nomatch").is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let products = fourteen_products();
        let snapshot = products.clone();
        let _ = filter_products(&products, "item 03");
        assert_eq!(products, snapshot);
    }

    // -- Sort stage --

    #[test]
    fn test_sort_price_asc_non_decreasing() {
        let products = fourteen_products();
        let sorted = sort_products(&products, SortKey::PriceAsc);
        for pair in sorted.windows(2) {
            assert!(pair[0].price.amount_cents <= pair[1].price.amount_cents);
        }
    }

    #[test]
    fn test_sort_price_desc_non_increasing() {
        let products = fourteen_products();
        let sorted = sort_products(&products, SortKey::PriceDesc);
        for pair in sorted.windows(2) {
            assert!(pair[0].price.amount_cents >= pair[1].price.amount_cents);
        }
    }

    #[test]
    fn test_sort_newest_descending_by_created_at() {
        let mut products = fourteen_products();
        products.reverse(); // oldest first on input
        let sorted = sort_products(&products, SortKey::Newest);
        assert_eq!(ids(&sorted)[0], "p01");
        for pair in sorted.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_sort_ties_preserve_input_order() {
        // Same price and same timestamp for b and c: their relative
        // order must survive every sort key.
        let products = vec![
            product("a", "A", "X", 3000, 5),
            product("b", "B", "X", 1000, 2),
            product("c", "C", "X", 1000, 2),
            product("d", "D", "X", 2000, 9),
        ];

        let asc = sort_products(&products, SortKey::PriceAsc);
        assert_eq!(ids(&asc), vec!["b", "c", "d", "a"]);

        let desc = sort_products(&products, SortKey::PriceDesc);
        assert_eq!(ids(&desc), vec!["a", "d", "b", "c"]);

        let newest = sort_products(&products, SortKey::Newest);
        assert_eq!(ids(&newest), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_sort_does_not_mutate_source() {
        let products = fourteen_products();
        let snapshot = products.clone();
        let _ = sort_products(&products, SortKey::PriceAsc);
        assert_eq!(products, snapshot);
    }

    // -- Paginate stage --

    #[test]
    fn test_paginate_first_page_of_fourteen() {
        let products = fourteen_products();
        let page = paginate(&products, 1, 12);
        assert_eq!(page.total_items, 14);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.len(), 12);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_paginate_last_page_of_fourteen() {
        let products = fourteen_products();
        let page = paginate(&products, 2, 12);
        assert_eq!(page.len(), 2);
        assert_eq!(page.current_page, 2);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn test_paginate_clamps_low_pages() {
        let products = fourteen_products();
        assert_eq!(paginate(&products, 0, 12).current_page, 1);
        assert_eq!(paginate(&products, -5, 12).current_page, 1);
    }

    #[test]
    fn test_paginate_clamps_high_pages() {
        let products = fourteen_products();
        let page = paginate(&products, 99, 12);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_paginate_empty_list_reports_page_one_of_one() {
        let empty: Vec<Product> = Vec::new();
        let page = paginate(&empty, 1, 12);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_paginate_page_length_never_exceeds_page_size() {
        let products = fourteen_products();
        for size in 1..=15 {
            for page_no in -2..=5 {
                let page = paginate(&products, page_no, size);
                assert!(page.len() <= size);
                assert!(page.current_page >= 1);
                assert!(page.current_page <= page.total_pages);
            }
        }
    }

    #[test]
    fn test_paginate_concatenation_reconstructs_list() {
        let products = sort_products(&fourteen_products(), SortKey::PriceAsc);
        for size in [1, 3, 5, 12, 14, 20] {
            let first = paginate(&products, 1, size);
            let mut collected = Vec::new();
            for page_no in 1..=first.total_pages {
                collected.extend(paginate(&products, page_no as i64, size).items);
            }
            assert_eq!(collected, products, "page size {}", size);
        }
    }

    // -- Composition --

    #[test]
    fn test_process_search_tea_scenario() {
        // 14 products, 3 of which mention "tea".
        let mut products = fourteen_products();
        products[2] = product("p03", "Jasmine Tea", "Tea", 1300, 3);
        products[7] = product("p08", "Kettle", "Teaware", 1800, 8);
        products[11] = product("p12", "Herbal Steeper", "Tea Tools", 2200, 12);

        let result = process_products(&products, "tea", SortKey::Newest, 1, 12);
        assert_eq!(result.total_items, 3);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
        assert_eq!(ids(&result.items), vec!["p03", "p08", "p12"]);
    }

    #[test]
    fn test_process_no_match_scenario() {
        let products = fourteen_products();
        let result = process_products(&products, "zzz-nomatch", SortKey::Newest, 1, 12);
        assert!(result.items.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
        assert!(!result.has_next_page);
        assert!(!result.has_previous_page);
    }

    #[test]
    fn test_process_sorts_before_paginating() {
        let products = fourteen_products();
        // Cheapest product is p01 (1100 cents); under PriceAsc it must
        // appear on page 1 even though Newest would also put it first.
        let asc = process_products(&products, "", SortKey::PriceAsc, 1, 5);
        assert_eq!(asc.items[0].id.as_str(), "p01");

        // Under PriceDesc the most expensive (p14) leads page 1.
        let desc = process_products(&products, "", SortKey::PriceDesc, 1, 5);
        assert_eq!(desc.items[0].id.as_str(), "p14");
    }

    #[test]
    fn test_run_uses_boundary_params() {
        let products = fourteen_products();
        let params = QueryParams::from_query_string("page=2");
        let result = run(&products, &params, 12);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.len(), 2);
    }
}
