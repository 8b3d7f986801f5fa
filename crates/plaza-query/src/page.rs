//! Page result: the pipeline's output contract.

use serde::{Deserialize, Serialize};

/// One page of results plus pagination metadata.
///
/// Produced by the paginate stage; `current_page` is always within
/// `[1, total_pages]` and `total_pages` is at least 1, even for an empty
/// list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Total items across all pages.
    pub total_items: usize,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
    /// Current page (1-indexed, clamped).
    pub current_page: u32,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Whether a previous page exists.
    pub has_previous_page: bool,
}

impl<T> PageResult<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers for a windowed pagination strip
    /// (e.g., `[3, 4, 5, 6, 7]` around page 5).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<u32> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = (max_visible / 2) as u32;
        let start = self.current_page.saturating_sub(half).max(1);
        let end = (start + max_visible as u32 - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible as u32).max(1);

        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: u32, total_pages: u32, items: usize, total_items: usize) -> PageResult<u32> {
        PageResult {
            items: vec![0; items],
            total_items,
            total_pages,
            current_page: current,
            has_next_page: current < total_pages,
            has_previous_page: current > 1,
        }
    }

    #[test]
    fn test_page_numbers_all_visible() {
        let p = page(1, 3, 12, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_numbers_window_middle() {
        let p = page(5, 10, 12, 120);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_numbers_window_clamped_at_edges() {
        let p = page(1, 10, 12, 120);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3, 4, 5]);

        let p = page(10, 10, 12, 120);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let p = page(2, 2, 2, 14);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());

        let p = page(1, 1, 0, 0);
        assert!(p.is_empty());
    }
}
