//! Page loading pipeline - resolve, fetch, render, never fail the caller

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::MarkdownRenderer;
use crate::fetch::{FetchError, PageFetcher};
use crate::route;
use crate::shell::PageShell;
use crate::Tilview;

/// Markup shown in the content slot when a page cannot be loaded
pub const ERROR_MARKUP: &str = "<p>Oh nooo, error :(</p>";

/// Terminal state of one load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The markdown was fetched and rendered.
    Rendered,
    /// Something failed; the content is the fixed error markup.
    Failed,
}

/// What a load produced, failure included
#[derive(Debug, Clone)]
pub struct LoadedPage {
    /// Requested page path, as given.
    pub path: String,
    /// Resolved markdown file location.
    pub location: String,
    /// HTML for the content slot. On failure this is [`ERROR_MARKUP`].
    pub content: String,
    /// Full document: the shell with the content slot filled.
    pub document: String,
    /// How the load ended.
    pub outcome: LoadOutcome,
}

/// Failure inside the load pipeline, logged but never surfaced
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to render markdown: {0}")]
    Render(anyhow::Error),
}

/// Loads pages for one site
pub struct PageLoader<'a> {
    tilview: &'a Tilview,
    fetcher: PageFetcher,
    renderer: MarkdownRenderer,
    shell: PageShell,
}

impl<'a> PageLoader<'a> {
    pub fn new(tilview: &'a Tilview) -> Result<Self> {
        let config = &tilview.config;
        let fetcher = PageFetcher::new(config.origin(), &config.user_agent)?;
        let renderer = MarkdownRenderer::with_theme(&config.highlight.theme);
        let shell = tilview.shell()?;
        Ok(PageLoader {
            tilview,
            fetcher,
            renderer,
            shell,
        })
    }

    /// Load one page.
    ///
    /// Infallible by design: any failure along the pipeline ends up as the
    /// fixed error markup in the returned content, with one warning in the
    /// log. Callers cannot retry-by-error; a fresh `load` is the only way
    /// to try again.
    pub async fn load(&self, path: &str) -> LoadedPage {
        let location = route::file_location(&self.tilview.config.content_dir, path);
        info!("Opening page: {}", path);
        debug!("Markdown file: {}", location);

        let (content, outcome) = match self.try_load(&location).await {
            Ok(content) => (content, LoadOutcome::Rendered),
            Err(err) => {
                warn!("Failed to fetch content: {}", err);
                (ERROR_MARKUP.to_string(), LoadOutcome::Failed)
            }
        };

        let document = self.shell.render(&self.tilview.config.title, &content);
        LoadedPage {
            path: path.to_string(),
            location,
            content,
            document,
            outcome,
        }
    }

    async fn try_load(&self, location: &str) -> Result<String, LoadError> {
        let markdown = self.fetcher.fetch(location).await?;
        self.renderer.render(&markdown).map_err(LoadError::Render)
    }
}
