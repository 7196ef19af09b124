//! Fetch one page and print or write the rendered document

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::page::PageLoader;
use crate::Tilview;

/// Fetch and render the page at `path`.
///
/// The full document goes to stdout, or to `output` when given. With
/// `fragment` only the content-slot HTML is emitted. A page that failed to
/// load still prints (it carries the error markup), so the exit code stays
/// zero once setup succeeded.
pub async fn run(
    tilview: &Tilview,
    path: &str,
    output: Option<&Path>,
    fragment: bool,
) -> Result<()> {
    let loader = PageLoader::new(tilview)?;
    let page = loader.load(&normalize(path)).await;

    let document = if fragment { page.content } else { page.document };

    match output {
        Some(file) => {
            fs::write(file, &document)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::info!("Wrote {}", file.display());
        }
        None => println!("{}", document),
    }

    Ok(())
}

/// Bring a typed page path into the leading-slash form a browser address
/// bar produces. The resolver itself stays literal; only this command's
/// argument is normalized.
fn normalize(path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        return path.to_string();
    }
    format!("/{}", path)
}
