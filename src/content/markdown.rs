//! Markdown rendering with heading IDs and syntax highlighting

use anyhow::Result;
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::headings::HeadingIds;

/// Markdown renderer producing page-ready HTML
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

/// Fenced or indented code block being collected from the event stream.
struct CodeCapture {
    lang: Option<String>,
    content: String,
}

/// Heading being collected so its ID can be computed from the full text.
struct HeadingCapture<'a> {
    level: u8,
    explicit: Option<CowStr<'a>>,
    text: String,
    inner: Vec<Event<'a>>,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create with a specific highlighting theme
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render markdown to HTML.
    ///
    /// Headings get GitHub-flavored IDs (an explicit `{#id}` wins) and every
    /// code block is run through the highlighter. IDs are allocated fresh per
    /// call, so rendering the same document twice gives the same output.
    pub fn render(&self, markdown: &str) -> Result<String> {
        // GFM surface the site's pages use. Smart punctuation stays off so
        // heading text, and therefore IDs, comes through verbatim.
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut ids = HeadingIds::new();
        let mut code: Option<CodeCapture> = None;
        let mut heading: Option<HeadingCapture> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            let lang = info
                                .split(|c: char| c == ',' || c.is_whitespace())
                                .next()
                                .unwrap_or("")
                                .to_string();
                            if lang.is_empty() {
                                None
                            } else {
                                Some(lang)
                            }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code = Some(CodeCapture {
                        lang,
                        content: String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        let highlighted =
                            self.highlight_code(&block.content, block.lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Start(Tag::Heading { level, id, .. }) => {
                    heading = Some(HeadingCapture {
                        level: heading_level_num(level),
                        explicit: id,
                        text: String::new(),
                        inner: Vec::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(capture) = heading.take() {
                        let id = match capture.explicit {
                            Some(explicit) => {
                                ids.claim(&explicit);
                                explicit.to_string()
                            }
                            None => ids.assign(&capture.text),
                        };
                        events.push(Event::Html(CowStr::from(format!(
                            r#"<h{} id="{}">"#,
                            capture.level, id
                        ))));
                        events.extend(capture.inner);
                        events.push(Event::Html(CowStr::from(format!("</h{}>", capture.level))));
                    }
                }
                Event::Text(text) => {
                    if let Some(block) = code.as_mut() {
                        block.content.push_str(&text);
                    } else if let Some(capture) = heading.as_mut() {
                        capture.text.push_str(&text);
                        capture.inner.push(Event::Text(text));
                    } else {
                        events.push(Event::Text(text));
                    }
                }
                Event::Code(text) => {
                    if let Some(capture) = heading.as_mut() {
                        capture.text.push_str(&text);
                        capture.inner.push(Event::Code(text));
                    } else {
                        events.push(Event::Code(text));
                    }
                }
                brk @ (Event::SoftBreak | Event::HardBreak) => {
                    if let Some(capture) = heading.as_mut() {
                        capture.text.push(' ');
                        capture.inner.push(brk);
                    } else {
                        events.push(brk);
                    }
                }
                other => {
                    if let Some(capture) = heading.as_mut() {
                        capture.inner.push(other);
                    } else {
                        events.push(other);
                    }
                }
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight one code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        // Try to find syntax for the language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            // syntect emits its own <pre> wrapper with inline styles
            Ok(highlighted) => highlighted,
            Err(_) => {
                // Fallback to a plain escaped code block
                let escaped = html_escape(code);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang, escaped
                )
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains(r#"<h1 id="hello-world">Hello World</h1>"#));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_single_word_heading() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hi").unwrap();
        assert!(html.contains(r#"<h1 id="hi">Hi</h1>"#));
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## FAQ\n\n## FAQ\n\n## FAQ").unwrap();
        assert!(html.contains(r#"<h2 id="faq">"#));
        assert!(html.contains(r#"<h2 id="faq-1">"#));
        assert!(html.contains(r#"<h2 id="faq-2">"#));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Install `npm`").unwrap();
        assert!(html.contains(r#"<h2 id="install-npm">"#));
        assert!(html.contains("<code>npm</code>"));
    }

    #[test]
    fn test_explicit_heading_id_wins() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Setup {#getting-started}").unwrap();
        assert!(html.contains(r#"<h2 id="getting-started">"#));
    }

    #[test]
    fn test_render_code_block_is_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains("<pre"));
        assert!(html.contains("background-color"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_render_unknown_language_falls_back_to_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("```no-such-language\nplain words\n```")
            .unwrap();
        assert!(html.contains("<pre"));
        assert!(html.contains("plain words"));
    }

    #[test]
    fn test_render_indented_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("    indented code\n").unwrap();
        assert!(html.contains("<pre"));
        assert!(html.contains("indented code"));
    }

    #[test]
    fn test_render_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| A | B |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = MarkdownRenderer::new();
        let doc = "# Top\n\n## FAQ\n\n## FAQ\n\n```sh\nls\n```\n";
        let first = renderer.render(doc).unwrap();
        let second = renderer.render(doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }
}
