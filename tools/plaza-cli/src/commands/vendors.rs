//! List vendors in the catalog.

use anyhow::Result;

use super::VendorsArgs;
use crate::context::Context;

/// Run the vendors command.
pub async fn run(args: VendorsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    if ctx.output.is_json() {
        let vendors: Vec<_> = catalog
            .vendors()
            .iter()
            .map(|v| {
                serde_json::json!({
                    "slug": v.slug,
                    "name": v.name,
                    "products": v.product_count(),
                })
            })
            .collect();
        ctx.output.json(&vendors);
        return Ok(());
    }

    ctx.output.header("Vendors");

    let slug_width = catalog
        .vendors()
        .iter()
        .map(|v| v.slug.len())
        .max()
        .unwrap_or(0);

    for vendor in catalog.vendors() {
        ctx.output.table_row(
            &[
                &vendor.slug,
                &vendor.name,
                &format!("{} products", vendor.product_count()),
            ],
            &[slug_width, 28, 12],
        );

        if args.detailed {
            for product in &vendor.products {
                ctx.output
                    .list_item(&format!("{} ({})", product.name, product.price_display()));
            }
        }
    }

    Ok(())
}
