//! Turning parsed front-matter and body text into posts
//!
//! Every field has a fallback, so a post with a thin or broken header still
//! comes out with a title, a date, an excerpt and a reading time. The only
//! way a document produces no post is when its author asked for that with
//! `draft: true` or `status: hidden`.

use lazy_static::lazy_static;
use regex::Regex;

use super::frontmatter::{FieldValue, FrontMatter};
use super::post::Post;
use crate::config::SiteConfig;

/// Assumed reading speed in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 220;

/// Longest derived excerpt, in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 180;

/// Date given to posts without one; sorts below every real date
pub const EPOCH_DATE: &str = "1970-01-01";

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Applies the defaulting rules that turn a document into a [`Post`]
#[derive(Debug, Clone)]
pub struct Deriver {
    words_per_minute: u32,
    excerpt_length: usize,
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE, DEFAULT_EXCERPT_LENGTH)
    }
}

impl Deriver {
    pub fn new(words_per_minute: u32, excerpt_length: usize) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
            excerpt_length: excerpt_length.max(ELLIPSIS.len() + 1),
        }
    }

    /// Build a deriver from the site's writing settings
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.words_per_minute, config.excerpt_length)
    }

    /// Derive a post from one document.
    ///
    /// Returns `None` for drafts and hidden documents.
    pub fn derive(&self, source: &str, fm: &FrontMatter, body: &str) -> Option<Post> {
        if is_excluded(fm) {
            tracing::debug!("Skipping draft or hidden document {}", source);
            return None;
        }

        let slug = non_empty_str(fm, "slug")
            .map(str::to_string)
            .unwrap_or_else(|| slug_from_source(source));

        let title = non_empty_str(fm, "title")
            .map(str::to_string)
            .unwrap_or_else(|| slug.clone());

        let date = non_empty_str(fm, "date").unwrap_or(EPOCH_DATE).to_string();

        Some(Post {
            slug,
            title,
            date,
            read_time: self.read_time(fm, body),
            excerpt: self.excerpt(fm, body),
            tags: tags(fm),
            content: body.to_string(),
        })
    }

    fn read_time(&self, fm: &FrontMatter, body: &str) -> u32 {
        let minutes = match fm.get("readTime").and_then(FieldValue::as_f64) {
            Some(n) if n.is_finite() => n.round(),
            _ => {
                let words = body.split_whitespace().count();
                (words as f64 / f64::from(self.words_per_minute)).round()
            }
        };
        minutes.max(1.0) as u32
    }

    fn excerpt(&self, fm: &FrontMatter, body: &str) -> String {
        let text = match non_empty_str(fm, "excerpt") {
            Some(excerpt) => excerpt,
            None => match first_paragraph(body) {
                Some(paragraph) => paragraph,
                None => return String::new(),
            },
        };
        truncate(text, self.excerpt_length)
    }
}

/// `draft: true`, or a `status` that reads `hidden` in any case
fn is_excluded(fm: &FrontMatter) -> bool {
    let draft = fm
        .get("draft")
        .and_then(FieldValue::as_bool)
        .unwrap_or(false);
    let hidden = fm
        .get("status")
        .and_then(FieldValue::as_str)
        .map(|status| status.trim().to_lowercase() == "hidden")
        .unwrap_or(false);
    draft || hidden
}

fn non_empty_str<'a>(fm: &'a FrontMatter, key: &str) -> Option<&'a str> {
    fm.get(key)
        .and_then(FieldValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn tags(fm: &FrontMatter) -> Vec<String> {
    let clean = |tag: &str| {
        let tag = tag.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    };

    match fm.get("tags") {
        Some(FieldValue::StringList(items)) => items.iter().filter_map(|t| clean(t.as_str())).collect(),
        Some(FieldValue::String(joined)) => joined.split(',').filter_map(clean).collect(),
        _ => Vec::new(),
    }
}

/// Final path segment of `source` without its markdown extension
pub fn slug_from_source(source: &str) -> String {
    let name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    let lower = name.to_ascii_lowercase();

    for ext in [".md", ".markdown"] {
        if lower.len() > ext.len() && lower.ends_with(ext) {
            return name[..name.len() - ext.len()].to_string();
        }
    }

    name.to_string()
}

/// First blank-line separated paragraph that is not a heading
fn first_paragraph(body: &str) -> Option<&str> {
    PARAGRAPH_BREAK
        .split(body)
        .map(str::trim)
        .find(|p| !p.is_empty() && !p.starts_with('#'))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max - ELLIPSIS.len()).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}
