//! Tag accent colours
//!
//! Each post is colour-coded by its primary (first) tag.

use std::fmt;

use crate::content::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Violet,
    Pink,
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Accent::Cyan => "cyan",
            Accent::Violet => "violet",
            Accent::Pink => "pink",
        };
        f.write_str(name)
    }
}

/// Accent for a tag; unknown tags are violet
pub fn tag_accent(tag: &str) -> Accent {
    match tag {
        "Dev" | "AI" => Accent::Cyan,
        "Career" | "Life" => Accent::Pink,
        _ => Accent::Violet,
    }
}

/// Accent of a post's primary tag; untagged posts are violet
pub fn post_accent(post: &Post) -> Accent {
    post.primary_tag().map(tag_accent).unwrap_or(Accent::Violet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_accent() {
        assert_eq!(tag_accent("Dev"), Accent::Cyan);
        assert_eq!(tag_accent("AI"), Accent::Cyan);
        assert_eq!(tag_accent("Life"), Accent::Pink);
        assert_eq!(tag_accent("Architecture"), Accent::Violet);
        assert_eq!(tag_accent("Open Source"), Accent::Violet);
        assert_eq!(tag_accent("dev"), Accent::Violet);
    }

    #[test]
    fn test_accent_names() {
        let names: Vec<String> = [Accent::Cyan, Accent::Violet, Accent::Pink]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["cyan", "violet", "pink"]);
    }

    #[test]
    fn test_post_accent_uses_first_tag() {
        let mut post = Post {
            slug: "p".into(),
            title: "P".into(),
            date: "2025-01-01".into(),
            read_time: 1,
            excerpt: String::new(),
            tags: vec!["Career".into(), "Dev".into()],
            content: String::new(),
        };
        assert_eq!(post_accent(&post), Accent::Pink);
        assert_eq!(post_accent(&post).to_string(), "pink");

        post.tags.clear();
        assert_eq!(post_accent(&post), Accent::Violet);
    }
}
