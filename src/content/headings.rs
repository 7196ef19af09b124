//! GitHub-flavored heading IDs

use std::collections::HashMap;

/// Allocates heading IDs for one document, deduplicating repeats
/// with `-1`, `-2`, ... suffixes the way GitHub does.
#[derive(Debug, Default)]
pub struct HeadingIds {
    counts: HashMap<String, usize>,
}

impl HeadingIds {
    /// Create an allocator with no IDs handed out yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug the heading text and return a document-unique ID for it.
    ///
    /// Headings with no sluggable characters fall back to `section`.
    pub fn assign(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_string();
        }
        let count = self.counts.entry(base.clone()).or_default();
        let id = match *count {
            0 => base,
            n => format!("{}-{}", base, n),
        };
        *count += 1;
        id
    }

    /// Record an explicitly written `{#id}` so later generated IDs
    /// cannot collide with it.
    pub fn claim(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_default() += 1;
    }
}

/// Convert heading text to a GitHub-flavored slug.
///
/// Lowercases, keeps alphanumerics (Unicode included) plus `-` and `_`,
/// collapses whitespace runs to single hyphens, and drops other
/// punctuation without a trace.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for c in text.trim().chars() {
        if c == '-' || c == '_' {
            // Surrounding whitespace collapses into the explicit separator
            pending_dash = false;
            slug.push(c);
        } else if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("C++ tips"), "c-tips");
        assert_eq!(slugify("Hi"), "hi");
    }

    #[test]
    fn test_slugify_keeps_unicode() {
        assert_eq!(slugify("Überblick"), "überblick");
        assert_eq!(slugify("第一条 内容"), "第一条-内容");
    }

    #[test]
    fn test_slugify_punctuation_only() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_assign_deduplicates() {
        let mut ids = HeadingIds::new();
        assert_eq!(ids.assign("FAQ"), "faq");
        assert_eq!(ids.assign("FAQ"), "faq-1");
        assert_eq!(ids.assign("FAQ"), "faq-2");
        assert_eq!(ids.assign("Other"), "other");
    }

    #[test]
    fn test_assign_empty_heading() {
        let mut ids = HeadingIds::new();
        assert_eq!(ids.assign("!!!"), "section");
        assert_eq!(ids.assign(""), "section-1");
    }

    #[test]
    fn test_claim_blocks_generated_ids() {
        let mut ids = HeadingIds::new();
        ids.claim("faq");
        assert_eq!(ids.assign("FAQ"), "faq-1");
    }
}
