//! Sort keys for product listings.

use serde::{Deserialize, Serialize};

/// How a product list is ordered.
///
/// The wire form is the `sort` query parameter; any value outside the
/// recognized set behaves as the default (`Newest`) rather than being
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Most recently created first.
    #[default]
    Newest,
}

impl SortKey {
    /// Parse the `sort` query parameter, falling back to the default for
    /// unrecognized values.
    pub fn from_param(s: &str) -> Self {
        match s {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Newest,
        }
    }

    /// The wire form used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
        }
    }

    /// The label shown in the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest",
        }
    }

    /// All sort keys, in dropdown order.
    pub fn all() -> [SortKey; 3] {
        [SortKey::Newest, SortKey::PriceAsc, SortKey::PriceDesc]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_recognized() {
        assert_eq!(SortKey::from_param("price-asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::from_param("price-desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::from_param("newest"), SortKey::Newest);
    }

    #[test]
    fn test_from_param_fallback() {
        assert_eq!(SortKey::from_param(""), SortKey::Newest);
        assert_eq!(SortKey::from_param("rating"), SortKey::Newest);
        assert_eq!(SortKey::from_param("PRICE-ASC"), SortKey::Newest);
    }

    #[test]
    fn test_wire_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_param(key.as_str()), key);
        }
    }

    #[test]
    fn test_default_is_newest() {
        assert_eq!(SortKey::default(), SortKey::Newest);
    }
}
