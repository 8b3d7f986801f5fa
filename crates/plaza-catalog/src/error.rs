//! Catalog error types.

use thiserror::Error;

/// Errors that can occur loading or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No vendor with the given slug.
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// The catalog document could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
