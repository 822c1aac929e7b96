//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::{tag_index, Post};
use crate::helpers::tag_path;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let posts = site.load_posts()?;
    print!("{}", render(&site.config, &posts, content_type)?);
    Ok(())
}

/// Render the listing for `content_type` (post or tag)
pub fn render(config: &SiteConfig, posts: &[Post], content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}] ({} min)",
                    post.date, post.title, post.slug, post.read_time
                )?;
            }
        }
        "tag" | "tags" => {
            let tags = tag_index(posts);
            writeln!(out, "Tags ({}):", tags.len())?;
            for tag in tags {
                writeln!(
                    out,
                    "  {} ({}) {}",
                    tag.name,
                    tag.count,
                    tag_path(config, &tag.slug)
                )?;
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
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
            "a.md".into(),
            "---\ntitle: Alpha\ndate: 2025-01-02\ntags: [Dev, Open Source]\n---\nAlpha.".into(),
        );
        docs.insert(
            "b.md".into(),
            "---\ntitle: Beta\ndate: 2025-03-04\ntags: Dev\n---\nBeta.".into(),
        );
        assemble(&docs, &Deriver::default())
    }

    #[test]
    fn test_list_posts() {
        let out = render(&SiteConfig::default(), &posts(), "post").unwrap();
        assert_eq!(
            out,
            "Posts (2):\n  2025-03-04 - Beta [b] (1 min)\n  2025-01-02 - Alpha [a] (1 min)\n"
        );
    }

    #[test]
    fn test_list_tags() {
        let out = render(&SiteConfig::default(), &posts(), "tags").unwrap();
        assert_eq!(
            out,
            "Tags (2):\n  Dev (2) /blog/tags/dev\n  Open Source (1) /blog/tags/open-source\n"
        );
    }

    #[test]
    fn test_unknown_type() {
        assert!(render(&SiteConfig::default(), &[], "category").is_err());
    }
}
