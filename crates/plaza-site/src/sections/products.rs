//! Product grid and empty state.

use plaza_catalog::Product;

use crate::escape::html_escape;

/// Render the product grid for one page of results.
pub fn render_product_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="products" data-section="products">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

fn render_product_card(product: &Product) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-image">
        <img src="{image}" alt="{name}" loading="lazy">
    </div>
    <div class="product-info">
        <h3 class="product-title">{name}</h3>
        <p class="product-category">{category}</p>
        <p class="product-description">{description}</p>
        <div class="product-price">{price}</div>
    </div>
</article>"#,
        id = html_escape(product.id.as_str()),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        description = html_escape(&product.description),
        price = product.price_display(),
    )
}

/// Render the empty state shown when a vendor page has zero matching
/// products. This is a normal page state, distinct from the not-found
/// page for unknown vendor slugs.
pub fn render_empty_state(base_path: &str, search: &str) -> String {
    if search.trim().is_empty() {
        r#"<section class="empty-state" data-section="empty">
    <h2>No products yet</h2>
    <p>This vendor hasn't listed any products.</p>
</section>"#
            .to_string()
    } else {
        format!(
            r#"<section class="empty-state" data-section="empty">
    <h2>No matching products</h2>
    <p>Nothing matches “{}”.</p>
    <p><a href="{}">Clear search</a></p>
</section>"#,
            html_escape(search),
            base_path
        )
    }
}
