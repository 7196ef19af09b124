//! Content module - markdown rendering and heading IDs

pub mod headings;
mod markdown;

pub use headings::HeadingIds;
pub use markdown::MarkdownRenderer;
