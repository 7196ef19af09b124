//! Site configuration (tilview.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::route::DEFAULT_CONTENT_DIR;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title injected into the shell.
    pub title: String,

    // Network
    /// Origin the markdown sources are fetched from.
    pub url: String,
    /// User-Agent header sent with every fetch.
    pub user_agent: String,

    // Content
    /// Content root all markdown sources live under.
    pub content_dir: String,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,
    /// Optional path to a custom page shell, relative to the base directory.
    pub shell: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TIL".to_string(),
            url: "http://localhost:8000".to_string(),
            user_agent: concat!("tilview/", env!("CARGO_PKG_VERSION")).to_string(),
            content_dir: DEFAULT_CONTENT_DIR.to_string(),
            highlight: HighlightConfig::default(),
            shell: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site origin without a trailing slash, ready for location joining
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme applied to fenced code blocks.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}
