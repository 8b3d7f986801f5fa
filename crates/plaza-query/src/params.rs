//! Query parameter parsing.
//!
//! URL query parameters are validated and clamped once here, at the
//! boundary, so the pipeline itself only ever sees well-formed input.

use serde::{Deserialize, Serialize};

use crate::sort::SortKey;

/// Items per vendor page. The pipeline takes page size as a free
/// parameter; this is the storefront's fixed choice.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The three query parameters driving a vendor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Free-text search, empty when absent.
    pub search: String,
    /// Sort key, `Newest` when absent or unrecognized.
    pub sort: SortKey,
    /// Requested page, 1-based. Non-numeric or non-positive values are
    /// coerced to 1.
    pub page: u32,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl QueryParams {
    /// Parse query parameters from a URL query string
    /// (e.g., `search=tea&sort=price-asc&page=2`). Unknown keys are
    /// ignored.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = QueryParams::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = percent_decode(value);

            match key {
                "search" => params.search = decoded,
                "sort" => params.sort = SortKey::from_param(&decoded),
                "page" => {
                    // Clamp in i64 before narrowing so huge values
                    // saturate instead of wrapping through the cast.
                    params.page =
                        decoded.parse::<i64>().unwrap_or(1).clamp(1, u32::MAX as i64) as u32;
                }
                _ => {}
            }
        }

        params
    }

    /// Re-encode as a URL query string, omitting parameters at their
    /// default values. Returns an empty string when everything is
    /// default.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();

        if !self.search.is_empty() {
            pairs.push(format!("search={}", percent_encode(&self.search)));
        }
        if self.sort != SortKey::default() {
            pairs.push(format!("sort={}", self.sort.as_str()));
        }
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }

        pairs.join("&")
    }

    /// The same parameters pointed at a different page. Used when
    /// building pagination links that preserve search and sort state.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

/// Percent-encode a query parameter value (`+` for spaces).
pub fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

/// Decode a percent-encoded query parameter value.
pub fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
