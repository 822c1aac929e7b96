//! Post body rendering

use pulldown_cmark::{html, Options, Parser};

/// One display block of a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading(String),
    Subheading(String),
    Paragraph(String),
}

/// Split a body into blocks on blank lines.
///
/// `## ` opens a heading and `### ` a subheading; everything else is a
/// paragraph.
pub fn content_blocks(content: &str) -> Vec<ContentBlock> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if let Some(text) = block.strip_prefix("## ") {
                ContentBlock::Heading(text.to_string())
            } else if let Some(text) = block.strip_prefix("### ") {
                ContentBlock::Subheading(text.to_string())
            } else {
                ContentBlock::Paragraph(block.to_string())
            }
        })
        .collect()
}

/// Markdown to HTML renderer for exported posts
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        // No YAML metadata blocks; front-matter is stripped before rendering
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
