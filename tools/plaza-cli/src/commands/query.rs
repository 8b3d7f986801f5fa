//! Run a product query against one vendor.

use anyhow::{Context as _, Result};
use plaza_query::{process_products, SortKey, DEFAULT_PAGE_SIZE};

use super::QueryArgs;
use crate::context::Context;

/// Run the query command.
///
/// Exercises the same filter, sort, and paginate pipeline the rendered
/// pages use, so any parameter combination can be inspected from the
/// terminal.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let vendor = catalog
        .require_vendor(&args.vendor)
        .with_context(|| format!("Unknown vendor: {}", args.vendor))?;

    let sort = SortKey::from_param(&args.sort);
    let page_size = args.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let page = process_products(&vendor.products, &args.search, sort, args.page, page_size);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&vendor.name);
    ctx.output.kv(
        "Query",
        &format!(
            "search={:?} sort={} page={}/{}",
            args.search,
            sort.as_str(),
            page.current_page,
            page.total_pages
        ),
    );
    ctx.output
        .kv("Matches", &format!("{} of {}", page.len(), page.total_items));

    for product in &page.items {
        ctx.output.list_item(&format!(
            "{}  {}  [{}]",
            product.name,
            product.price_display(),
            product.category
        ));
    }

    if page.has_next_page {
        ctx.output
            .info(&format!("More results: --page {}", page.current_page + 1));
    }

    Ok(())
}
