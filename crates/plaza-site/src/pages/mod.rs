//! Full pages: each function renders a complete HTML document.

mod home;
mod not_found;
mod vendor;

pub use home::render_home;
pub use not_found::render_not_found;
pub use vendor::render_vendor_page;

use crate::shell::{HeadContent, Shell};
use crate::styles::SITE_STYLES;

/// Canonical URL path for a vendor page.
pub fn vendor_path(slug: &str) -> String {
    format!("/{}/", slug)
}

/// Site name shown in the header and page titles.
pub const SITE_NAME: &str = "Plaza";

pub(crate) fn site_shell(title: &str) -> Shell {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(SITE_STYLES);

    Shell::new(head).with_body_start(format!(
        "<body>\n<header class=\"site-header\"><a href=\"/\" class=\"logo\">{}</a></header>\n<main>\n",
        SITE_NAME
    ))
}
