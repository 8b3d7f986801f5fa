//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use plaza_catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["plaza.toml", ".plaza.toml", "plaza.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog: the configured file if set, else the embedded
    /// seed data.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.config.site.catalog {
            Some(ref path) => {
                let resolved = self.resolve_path(path);
                let content = std::fs::read_to_string(&resolved)
                    .with_context(|| format!("Failed to read catalog: {}", resolved.display()))?;
                let catalog = Catalog::from_json(&content)
                    .with_context(|| format!("Failed to parse catalog: {}", resolved.display()))?;
                self.output
                    .debug(&format!("loaded catalog from {}", resolved.display()));
                Ok(catalog)
            }
            None => Ok(Catalog::embedded()),
        }
    }

    /// Get the build output directory.
    pub fn out_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.build.out_dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
