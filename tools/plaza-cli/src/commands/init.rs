//! Write a starter config file.

use anyhow::{bail, Result};

use super::InitArgs;
use crate::config::generate_default_config;
use crate::context::Context;

const CONFIG_FILE: &str = "plaza.toml";

/// Run the init command.
pub async fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config(&args.name))?;

    ctx.output
        .success(&format!("Wrote {}", path.display()));
    ctx.output.info("Run `plaza build` to render the site");

    Ok(())
}
