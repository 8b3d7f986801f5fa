//! HTML escaping for catalog-sourced text.

/// Escape text for safe interpolation into HTML content and attribute
/// values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            html_escape(r#"<b>"Salt & Pepper"</b>"#),
            "&lt;b&gt;&quot;Salt &amp; Pepper&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(html_escape("Stoneware Mug"), "Stoneware Mug");
    }
}
