//! Product type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, VendorId};
use crate::money::Money;

/// A sellable item belonging to exactly one vendor.
///
/// Products are immutable once loaded from the catalog; every query over
/// them produces new sequences rather than touching the source list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Owning vendor.
    pub vendor_id: VendorId,
    /// Product name.
    pub name: String,
    /// Full description shown on listings.
    pub description: String,
    /// Price.
    pub price: Money,
    /// Image URI.
    pub image: String,
    /// Category label used for browsing and search.
    pub category: String,
    /// Creation timestamp, RFC 3339 UTC in the catalog source.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Case-insensitive substring test against name, description, and
    /// category. `needle_lower` must already be lowercased; the fields
    /// are lowercased here per call.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }

    /// Format the price for display (e.g., "$24.50").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use chrono::TimeZone;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("prod-1"),
            vendor_id: VendorId::new("vend-1"),
            name: "Jasmine Green Tea".to_string(),
            description: "Loose-leaf green tea scented with jasmine blossoms".to_string(),
            price: Money::new(1450, Currency::USD),
            image: "/images/jasmine-green.jpg".to_string(),
            category: "Tea".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_matches_search_by_name() {
        let p = sample_product();
        assert!(p.matches_search("jasmine"));
        assert!(p.matches_search("green tea"));
    }

    #[test]
    fn test_matches_search_by_description() {
        let p = sample_product();
        assert!(p.matches_search("blossoms"));
    }

    #[test]
    fn test_matches_search_by_category() {
        let p = sample_product();
        assert!(p.matches_search("tea"));
    }

    #[test]
    fn test_matches_search_no_match() {
        let p = sample_product();
        assert!(!p.matches_search("coffee"));
    }

    #[test]
    fn test_price_display() {
        let p = sample_product();
        assert_eq!(p.price_display(), "$14.50");
    }
}
