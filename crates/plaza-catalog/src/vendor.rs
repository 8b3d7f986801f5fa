//! Vendor type.

use serde::{Deserialize, Serialize};

use crate::ids::VendorId;
use crate::product::Product;

/// A storefront entity owning a catalog of products.
///
/// Vendors are addressed by their unique, URL-safe `slug`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// URL-safe routing key (unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Logo image URI.
    pub logo: String,
    /// Hero image URI for the vendor page banner.
    pub hero_image: String,
    /// Short description shown on the vendor card and page.
    pub description: String,
    /// Brand accent color (display hint only, e.g., "#2563eb").
    pub brand_color: String,
    /// The vendor's products, in catalog order.
    pub products: Vec<Product>,
}

impl Vendor {
    /// Number of products this vendor carries.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_count_empty() {
        let vendor = Vendor {
            id: VendorId::new("vend-1"),
            slug: "empty-shop".to_string(),
            name: "Empty Shop".to_string(),
            logo: String::new(),
            hero_image: String::new(),
            description: String::new(),
            brand_color: "#000000".to_string(),
            products: Vec::new(),
        };
        assert_eq!(vendor.product_count(), 0);
    }
}
