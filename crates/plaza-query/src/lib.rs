//! Product list query pipeline for Plaza.
//!
//! Turns a vendor's full product list plus three URL query parameters
//! (`search`, `sort`, `page`) into one bounded page of results with
//! pagination metadata:
//!
//! - **Filter**: case-insensitive substring search over name,
//!   description, and category.
//! - **Sort**: stable ordering by price (both directions) or recency.
//! - **Paginate**: clamped page slicing that never fails, even for empty
//!   lists or out-of-range page numbers.
//!
//! # Example
//!
//! ```
//! use plaza_catalog::Catalog;
//! use plaza_query::{process_products, QueryParams, SortKey, DEFAULT_PAGE_SIZE};
//!
//! let catalog = Catalog::embedded();
//! let vendor = catalog.vendor_by_slug("amber-leaf").expect("seed vendor");
//!
//! let page = process_products(
//!     &vendor.products,
//!     "tea",
//!     SortKey::PriceAsc,
//!     1,
//!     DEFAULT_PAGE_SIZE,
//! );
//! assert!(page.len() <= DEFAULT_PAGE_SIZE);
//! assert_eq!(page.current_page, 1);
//! ```

pub mod page;
pub mod params;
pub mod pipeline;
pub mod sort;

pub use page::PageResult;
pub use params::{QueryParams, DEFAULT_PAGE_SIZE};
pub use pipeline::{filter_products, paginate, process_products, run, sort_products};
pub use sort::SortKey;
