//! The vendor catalog container.
//!
//! The catalog is an explicitly constructed, immutable data structure:
//! it is built once (from the embedded seed or a JSON document) and then
//! only read. There is no ambient global state; callers pass a
//! `&Catalog` into lookups and the query pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::vendor::Vendor;

/// Embedded seed catalog, compiled into the binary.
const SEED_CATALOG: &str = include_str!("data/catalog.json");

/// An immutable collection of vendors and their products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    vendors: Vec<Vendor>,
}

impl Catalog {
    /// Build a catalog from a list of vendors.
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(vendors = catalog.vendors.len(), "catalog parsed");
        Ok(catalog)
    }

    /// The compiled-in seed catalog.
    ///
    /// The seed is validated by tests, so parsing it cannot fail at
    /// runtime.
    pub fn embedded() -> Self {
        Self::from_json(SEED_CATALOG).expect("embedded seed catalog is valid JSON")
    }

    /// Look up a vendor by slug.
    ///
    /// `None` is the not-found signal; it is distinct from a vendor that
    /// exists but has zero matching products.
    pub fn vendor_by_slug(&self, slug: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.slug == slug)
    }

    /// Look up a vendor by slug, treating not-found as an error.
    pub fn require_vendor(&self, slug: &str) -> Result<&Vendor, CatalogError> {
        self.vendor_by_slug(slug)
            .ok_or_else(|| CatalogError::VendorNotFound(slug.to_string()))
    }

    /// All vendor slugs, in catalog order.
    pub fn vendor_slugs(&self) -> Vec<&str> {
        self.vendors.iter().map(|v| v.slug.as_str()).collect()
    }

    /// All vendors, in catalog order.
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Number of vendors.
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Check if the catalog has no vendors.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_embedded_slugs_unique() {
        let catalog = Catalog::embedded();
        let mut slugs = catalog.vendor_slugs();
        let total = slugs.len();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), total);
    }

    #[test]
    fn test_vendor_by_slug_found() {
        let catalog = Catalog::embedded();
        let slug = catalog.vendor_slugs()[0].to_string();
        let vendor = catalog.vendor_by_slug(&slug);
        assert!(vendor.is_some());
        assert_eq!(vendor.unwrap().slug, slug);
    }

    #[test]
    fn test_vendor_by_slug_not_found() {
        let catalog = Catalog::embedded();
        assert!(catalog.vendor_by_slug("no-such-vendor").is_none());
    }

    #[test]
    fn test_require_vendor_not_found_is_error() {
        let catalog = Catalog::embedded();
        let err = catalog.require_vendor("no-such-vendor").unwrap_err();
        assert!(err.to_string().contains("no-such-vendor"));
    }

    #[test]
    fn test_products_belong_to_their_vendor() {
        let catalog = Catalog::embedded();
        for vendor in catalog.vendors() {
            for product in &vendor.products {
                assert_eq!(product.vendor_id, vendor.id);
            }
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("not json").is_err());
    }
}
