//! Marketplace domain types and the embedded vendor catalog for Plaza.
//!
//! This crate provides the static data layer of the storefront:
//!
//! - **Domain types**: [`Vendor`], [`Product`], newtype IDs, and a
//!   cents-based [`Money`] type.
//! - **Catalog**: an immutable, explicitly constructed container with
//!   slug-based vendor lookup and an embedded seed dataset.
//!
//! The catalog is loaded once and never mutated; concurrent readers need
//! no coordination.
//!
//! # Example
//!
//! ```
//! use plaza_catalog::Catalog;
//!
//! let catalog = Catalog::embedded();
//! let vendor = catalog.vendor_by_slug("amber-leaf").expect("seed vendor");
//! assert!(vendor.product_count() > 0);
//! assert!(catalog.vendor_by_slug("no-such-vendor").is_none());
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod product;
pub mod vendor;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use ids::{ProductId, VendorId};
pub use money::{Currency, Money};
pub use product::Product;
pub use vendor::Vendor;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::ids::{ProductId, VendorId};
    pub use crate::money::{Currency, Money};
    pub use crate::product::Product;
    pub use crate::vendor::Vendor;
}
