//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Site metadata.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build configuration.
    #[serde(default)]
    pub build: BuildConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in logs.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Catalog file to load instead of the embedded seed data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_site_name() -> String {
    "Plaza".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            catalog: None,
        }
    }
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for rendered pages.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Remove the output directory before building.
    #[serde(default = "default_true")]
    pub clean: bool,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_page_size() -> usize {
    plaza_query::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            page_size: default_page_size(),
            clean: true,
        }
    }
}

/// Generate a default plaza.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Plaza storefront configuration

[site]
name = "{name}"
# catalog = "catalog.json"

[build]
out_dir = "dist"
page_size = 12
clean = true
"#,
        name = name
    )
}
