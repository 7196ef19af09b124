//! Page shell - the fixed document the loader writes into

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Marker replaced with the rendered page content.
pub const CONTENT_MARKER: &str = "<!-- tilview:content -->";
/// Marker replaced with the site title. Optional in custom shells.
pub const TITLE_MARKER: &str = "<!-- tilview:title -->";

/// Shell embedded in the binary, used when the site does not ship its own.
const DEFAULT_SHELL: &str = include_str!("page.html");

/// HTML document template with a content slot.
///
/// Rendering always starts from the pristine template, so consecutive loads
/// replace the slot's contents instead of accumulating.
#[derive(Debug, Clone)]
pub struct PageShell {
    template: String,
}

impl PageShell {
    /// The built-in shell
    pub fn builtin() -> Self {
        Self {
            template: DEFAULT_SHELL.to_string(),
        }
    }

    /// Load a custom shell from a file.
    ///
    /// The file must contain the content marker; without it a load would
    /// have nowhere to put the page.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let template = fs::read_to_string(path.as_ref())?;
        if !template.contains(CONTENT_MARKER) {
            bail!(
                "shell {} has no content marker ({})",
                path.as_ref().display(),
                CONTENT_MARKER
            );
        }
        Ok(Self { template })
    }

    /// Produce the full document with the slot filled
    pub fn render(&self, title: &str, content_html: &str) -> String {
        self.template
            .replace(TITLE_MARKER, title)
            .replace(CONTENT_MARKER, content_html)
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::builtin()
    }
}
