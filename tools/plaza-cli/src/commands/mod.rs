//! CLI command implementations.

pub mod build;
pub mod init;
pub mod query;
pub mod vendors;

use clap::Args;

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Output directory (overrides config).
    #[arg(short, long)]
    pub out: Option<String>,

    /// Products per page (overrides config).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Keep existing files in the output directory.
    #[arg(long)]
    pub no_clean: bool,
}

/// Arguments for the vendors command.
#[derive(Args)]
pub struct VendorsArgs {
    /// Show per-vendor product details.
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the query command.
#[derive(Args)]
pub struct QueryArgs {
    /// Vendor slug to query.
    pub vendor: String,

    /// Search text.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: newest, price-asc, or price-desc.
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// Page number.
    #[arg(short, long, default_value = "1")]
    pub page: i64,

    /// Products per page.
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Site name.
    #[arg(default_value = "Plaza")]
    pub name: String,

    /// Force overwrite an existing config file.
    #[arg(short, long)]
    pub force: bool,
}
