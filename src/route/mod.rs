//! Path resolution - maps requested page paths to markdown file locations

/// Content directory used when none is configured.
pub const DEFAULT_CONTENT_DIR: &str = "/tils";

/// Map a requested page path to the location of its markdown source.
///
/// The empty path and a bare `/` resolve to the content root's index file.
/// Every other path is spliced in verbatim between the content directory and
/// the `.md` extension: no separator is inserted, traversal segments and
/// repeated or trailing slashes pass through untouched, and already-encoded
/// characters stay encoded. Callers are expected to hand in a leading-slash
/// path, which is what a browser location always carries; a path without one
/// concatenates directly onto the content directory.
///
/// # Examples
/// ```
/// use tilview::route::file_location;
///
/// assert_eq!(file_location("/tils", "/gdb/attach"), "/tils/gdb/attach.md");
/// assert_eq!(file_location("/tils", "/"), "/tils/index.md");
/// ```
pub fn file_location(content_dir: &str, path: &str) -> String {
    if path.is_empty() || path == "/" {
        return format!("{}/index.md", content_dir);
    }
    format!("{}{}.md", content_dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_forms_resolve_to_index() {
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, ""), "/tils/index.md");
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, "/"), "/tils/index.md");
    }

    #[test]
    fn test_page_path_resolution() {
        assert_eq!(
            file_location(DEFAULT_CONTENT_DIR, "/gdb/attaching-gdb-to-other-processes"),
            "/tils/gdb/attaching-gdb-to-other-processes.md"
        );
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, "/rust"), "/tils/rust.md");
    }

    #[test]
    fn test_missing_leading_slash_concatenates_verbatim() {
        // Deliberately preserved: callers are responsible for the slash.
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, "rust"), "/tilsrust.md");
    }

    #[test]
    fn test_unusual_paths_pass_through() {
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, "/a/"), "/tils/a/.md");
        assert_eq!(file_location(DEFAULT_CONTENT_DIR, "/a//b"), "/tils/a//b.md");
        assert_eq!(
            file_location(DEFAULT_CONTENT_DIR, "/../secret"),
            "/tils/../secret.md"
        );
        assert_eq!(
            file_location(DEFAULT_CONTENT_DIR, "/with%20space"),
            "/tils/with%20space.md"
        );
    }

    #[test]
    fn test_custom_content_dir() {
        assert_eq!(file_location("/notes", "/vim/macros"), "/notes/vim/macros.md");
        assert_eq!(file_location("/notes", ""), "/notes/index.md");
    }
}
