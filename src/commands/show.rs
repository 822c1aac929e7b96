//! Show a single post

use anyhow::{anyhow, Result};
use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::{content_blocks, ContentBlock, Post};
use crate::helpers::{display_date, full_url_for, post_accent, post_path};
use crate::Site;

pub fn run(site: &Site, slug: &str) -> Result<()> {
    let posts = site.load_posts()?;
    print!("{}", render(&site.config, &posts, slug)?);
    Ok(())
}

/// Render a post as plain text, followed by a pointer to the next one
pub fn render(config: &SiteConfig, posts: &[Post], slug: &str) -> Result<String> {
    let post = Post::find(posts, slug).ok_or_else(|| anyhow!("Post not found: {}", slug))?;
    let mut out = String::new();

    writeln!(out, "{}", post.title)?;
    writeln!(
        out,
        "{} · {} min read · {}",
        display_date(&post.date, &config.date_format),
        post.read_time,
        if post.tags.is_empty() {
            "Untagged".to_string()
        } else {
            post.tags.join(", ")
        }
    )?;
    writeln!(out, "accent: {}", post_accent(post))?;
    writeln!(out, "{}", full_url_for(config, &post_path(config, &post.slug)))?;

    if !post.excerpt.is_empty() {
        writeln!(out, "\n{}", post.excerpt)?;
    }

    for block in content_blocks(&post.content) {
        match block {
            ContentBlock::Heading(text) => {
                writeln!(out, "\n{}\n{}", text, "=".repeat(text.chars().count()))?
            }
            ContentBlock::Subheading(text) => {
                writeln!(out, "\n{}\n{}", text, "-".repeat(text.chars().count()))?
            }
            ContentBlock::Paragraph(text) => writeln!(out, "\n{}", text)?,
        }
    }

    if let Some(next) = post.next(posts) {
        writeln!(
            out,
            "\nNext post: {} ({} min) {}",
            next.title,
            next.read_time,
            post_path(config, &next.slug)
        )?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{assemble, Deriver, Documents};

    fn posts() -> Vec<Post> {
        let mut docs = Documents::new();
        docs.insert(
            "newer.md".into(),
            "---\ntitle: Newer\ndate: 2025-11-14\ntags: [Career, Dev]\nexcerpt: Short.\n---\n## Part One\n\nBody text."
                .into(),
        );
        docs.insert(
            "older.md".into(),
            "---\ntitle: Older\ndate: 2025-05-03\n---\nOld body.".into(),
        );
        assemble(&docs, &Deriver::default())
    }

    #[test]
    fn test_show_post() {
        let out = render(&SiteConfig::default(), &posts(), "newer").unwrap();
        let expected = "Newer\n\
            14 November 2025 · 1 min read · Career, Dev\n\
            accent: pink\n\
            http://localhost/blog/newer\n\
            \n\
            Short.\n\
            \n\
            Part One\n\
            ========\n\
            \n\
            Body text.\n\
            \n\
            Next post: Older (1 min) /blog/older\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_last_post_has_no_next() {
        let out = render(&SiteConfig::default(), &posts(), "older").unwrap();
        assert!(out.contains("Untagged"));
        assert!(out.contains("accent: violet"));
        assert!(!out.contains("Next post"));
    }

    #[test]
    fn test_unknown_slug() {
        let err = render(&SiteConfig::default(), &posts(), "missing").unwrap_err();
        assert_eq!(err.to_string(), "Post not found: missing");
    }
}
