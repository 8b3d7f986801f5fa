//! Render the full static site to disk.

use std::path::Path;

use anyhow::{Context as _, Result};
use plaza_query::{paginate, QueryParams};
use plaza_site::pages::{render_home, render_not_found, render_vendor_page};

use super::BuildArgs;
use crate::context::Context;
use crate::output::format_bytes;

/// Run the build command.
///
/// Writes the home page, the 404 page, and one page per vendor per
/// default-query page number. Page 1 of each vendor lands at
/// `<slug>/index.html`; later pages at `<slug>/page/<n>/index.html`.
pub async fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let out_dir = match args.out {
        Some(ref path) => ctx.resolve_path(path),
        None => ctx.out_dir(),
    };
    let page_size = args.page_size.unwrap_or(ctx.config.build.page_size);

    ctx.output.header("Building site");
    ctx.output.kv("Output", &out_dir.display().to_string());

    if ctx.config.build.clean && !args.no_clean && out_dir.exists() {
        std::fs::remove_dir_all(&out_dir)
            .with_context(|| format!("Failed to clean {}", out_dir.display()))?;
    }
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = 0usize;
    let mut total_bytes = 0u64;

    ctx.output.step(1, 3, "Rendering home page");
    total_bytes += write_page(&out_dir.join("index.html"), &render_home(&catalog))?;
    total_bytes += write_page(&out_dir.join("404.html"), &render_not_found())?;
    written += 2;

    ctx.output.step(2, 3, "Rendering vendor pages");
    let pb = ctx
        .output
        .progress(catalog.len() as u64, "vendors");

    for vendor in catalog.vendors() {
        // Probe once to learn how many default-query pages exist.
        let probe = paginate(&vendor.products, 1, page_size);

        for page_num in 1..=probe.total_pages {
            let params = QueryParams::default().with_page(page_num);
            let html = render_vendor_page(vendor, &params, page_size);

            let path = if page_num == 1 {
                out_dir.join(&vendor.slug).join("index.html")
            } else {
                out_dir
                    .join(&vendor.slug)
                    .join("page")
                    .join(page_num.to_string())
                    .join("index.html")
            };

            total_bytes += write_page(&path, &html)?;
            written += 1;
        }

        ctx.output
            .debug(&format!("{}: {} pages", vendor.slug, probe.total_pages));
        pb.inc(1);
    }
    pb.finish_and_clear();

    ctx.output.step(3, 3, "Done");
    ctx.output.success(&format!(
        "Wrote {} pages ({})",
        written,
        format_bytes(total_bytes)
    ));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "pages": written,
            "bytes": total_bytes,
            "out_dir": out_dir.display().to_string(),
        }));
    }

    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<u64> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(html.len() as u64)
}
