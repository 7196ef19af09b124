//! HTTP boundary - fetches markdown sources and classifies failures

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

/// Why a fetch produced no markdown
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{location} returned HTTP {status}")]
    NotFound { location: String, status: u16 },

    /// Success status but an HTML body. Hosts that fall back to index.html
    /// answer 200 for paths that do not exist, so an HTML content type means
    /// the requested file was not actually there.
    #[error("{location} answered with an HTML document ({content_type})")]
    HtmlFallback {
        location: String,
        content_type: String,
    },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetches page sources from the site origin
pub struct PageFetcher {
    client: Client,
    origin: String,
}

impl PageFetcher {
    /// Create a fetcher for one site origin.
    ///
    /// The client carries the configured User-Agent and no timeout: a load
    /// runs until the server answers or the transport fails, and there is no
    /// cancellation path.
    pub fn new(origin: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for a resolved file location
    pub fn url_for(&self, location: &str) -> String {
        format!("{}{}", self.origin, location)
    }

    /// GET one markdown source and return its body text
    pub async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let url = self.url_for(location);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NotFound {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        // A missing Content-Type header is taken as markdown.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if is_html(content_type) {
            return Err(FetchError::HtmlFallback {
                location: location.to_string(),
                content_type: content_type.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// True when a Content-Type announces an HTML document
fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("TEXT/HTML"));
        assert!(!is_html("text/plain"));
        assert!(!is_html("text/markdown"));
        assert!(!is_html(""));
    }

    #[test]
    fn test_url_for_joins_origin_and_location() {
        let fetcher = PageFetcher::new("https://til.example.com", "tilview-test").unwrap();
        assert_eq!(
            fetcher.url_for("/tils/index.md"),
            "https://til.example.com/tils/index.md"
        );

        let fetcher = PageFetcher::new("https://til.example.com/", "tilview-test").unwrap();
        assert_eq!(
            fetcher.url_for("/tils/rust.md"),
            "https://til.example.com/tils/rust.md"
        );
    }
}
