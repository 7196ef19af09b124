//! tilview: a fetch-and-render page viewer for TIL-style markdown sites
//!
//! This crate maps browser-style page paths to markdown files under a
//! site's content directory, fetches them over HTTP and renders them to
//! HTML with GitHub-flavored heading ids and syntax-highlighted code.

pub mod commands;
pub mod config;
pub mod content;
pub mod fetch;
pub mod page;
pub mod route;
pub mod shell;

use anyhow::Result;
use std::path::Path;

/// The main Tilview application
#[derive(Clone)]
pub struct Tilview {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Tilview {
    /// Create a new Tilview instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("tilview.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Create an instance from an already built configuration
    pub fn from_config(config: config::SiteConfig) -> Self {
        Self {
            config,
            base_dir: std::path::PathBuf::from("."),
        }
    }

    /// The page shell documents are rendered into
    pub fn shell(&self) -> Result<shell::PageShell> {
        match &self.config.shell {
            Some(path) => shell::PageShell::from_file(self.base_dir.join(path)),
            None => Ok(shell::PageShell::builtin()),
        }
    }

    /// Load one page from the configured site
    pub async fn load_page(&self, path: &str) -> Result<page::LoadedPage> {
        let loader = page::PageLoader::new(self)?;
        Ok(loader.load(path).await)
    }
}
