//! Shared stylesheet inlined into every page shell.

pub const SITE_STYLES: &str = r##"
:root {
    --brand: #2563eb;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.site-header .logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text);
    text-decoration: none;
}

main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}

/* Vendor directory (home page) */
.vendor-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}

.vendor-card {
    display: block;
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 1.5rem;
    text-decoration: none;
    color: inherit;
    transition: box-shadow 0.2s;
}

.vendor-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }

.vendor-card img {
    width: 48px;
    height: 48px;
    border-radius: 8px;
    margin-bottom: 0.75rem;
}

.vendor-card h2 { font-size: 1.125rem; margin-bottom: 0.25rem; }
.vendor-card p { color: var(--text-muted); font-size: 0.9rem; }
.vendor-card .count { margin-top: 0.75rem; font-size: 0.8rem; color: var(--brand); }

/* Vendor page hero */
.vendor-hero {
    border-radius: 12px;
    padding: 3rem 2rem;
    margin-bottom: 2rem;
    background: var(--card-bg);
    border-left: 6px solid var(--brand);
}

.vendor-hero h1 { font-size: 2rem; margin-bottom: 0.5rem; }
.vendor-hero p { color: var(--text-muted); max-width: 60ch; }

/* Toolbar: search + sort + result count */
.toolbar {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.search-form { display: flex; flex: 1; max-width: 420px; }

.search-form input {
    flex: 1;
    padding: 0.6rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px 0 0 8px;
    font-size: 1rem;
}

.search-form button {
    padding: 0.6rem 1.25rem;
    background: var(--brand);
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
}

.result-count { color: var(--text-muted); }

.sort-control select {
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
}

/* Product grid */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
}

.product-image {
    aspect-ratio: 1;
    background: #f1f5f9;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.product-info { padding: 1rem; }
.product-title { font-size: 1rem; font-weight: 500; margin-bottom: 0.25rem; }
.product-category { font-size: 0.8rem; color: var(--text-muted); margin-bottom: 0.5rem; }
.product-description { font-size: 0.875rem; color: var(--text-muted); margin-bottom: 0.75rem; }
.product-price { font-size: 1.125rem; font-weight: 700; }

/* Pagination */
.pagination {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 0.5rem;
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
}

.pagination-page, .pagination-prev, .pagination-next {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    text-decoration: none;
    color: var(--text);
    background: var(--card-bg);
}

.pagination-page.current {
    background: var(--brand);
    color: white;
    border-color: var(--brand);
}

.pagination-ellipsis { padding: 0.5rem; color: var(--text-muted); }

.disabled { opacity: 0.5; cursor: not-allowed; }

/* Empty and not-found states */
.empty-state, .not-found {
    text-align: center;
    padding: 4rem 2rem;
    color: var(--text-muted);
}

.empty-state h2, .not-found h1 { color: var(--text); margin-bottom: 0.5rem; }
.not-found h1 { font-size: 3rem; }
.empty-state a, .not-found a { color: var(--brand); }

@media (max-width: 640px) {
    .toolbar { flex-direction: column; align-items: stretch; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
}
"##;
