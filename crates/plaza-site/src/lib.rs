//! Static HTML rendering for the Plaza storefront.
//!
//! Pages are assembled from section fragments (hero, toolbar, product
//! grid, pagination) inside a shared shell, and returned as complete
//! documents ready to be written to disk.
//!
//! ```
//! use plaza_catalog::Catalog;
//! use plaza_query::{QueryParams, DEFAULT_PAGE_SIZE};
//! use plaza_site::pages::render_vendor_page;
//!
//! let catalog = Catalog::embedded();
//! let vendor = catalog.vendor_by_slug("amber-leaf").unwrap();
//! let html = render_vendor_page(vendor, &QueryParams::default(), DEFAULT_PAGE_SIZE);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod escape;
pub mod pages;
pub mod sections;
pub mod shell;
pub mod styles;

pub use escape::html_escape;
pub use pages::{render_home, render_not_found, render_vendor_page, vendor_path, SITE_NAME};
pub use shell::{HeadContent, Shell};
