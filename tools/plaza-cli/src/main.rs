//! Plaza CLI - Command line tool for the Plaza marketplace storefront.
//!
//! Commands:
//! - `plaza build` - Render the full static site to disk
//! - `plaza vendors` - List vendors in the catalog
//! - `plaza query` - Run a product query against one vendor
//! - `plaza init` - Write a starter config file

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BuildArgs, InitArgs, QueryArgs, VendorsArgs};

/// Plaza CLI - Build and inspect the marketplace storefront
#[derive(Parser)]
#[command(name = "plaza")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full static site to disk
    Build(BuildArgs),

    /// List vendors in the catalog
    Vendors(VendorsArgs),

    /// Run a product query against one vendor
    Query(QueryArgs),

    /// Write a starter config file
    Init(InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args, &ctx).await,
        Commands::Vendors(args) => commands::vendors::run(args, &ctx).await,
        Commands::Query(args) => commands::query::run(args, &ctx).await,
        Commands::Init(args) => commands::init::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
