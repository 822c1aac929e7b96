//! Post and tag models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A blog post
///
/// Serialises with the field names the site's views expect
/// (`slug, title, date, readTime, excerpt, tags, content`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Slug (URL-friendly name)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date, nominally `YYYY-MM-DD`
    pub date: String,

    /// Estimated reading time in minutes, never zero
    pub read_time: u32,

    /// Short summary for list views
    pub excerpt: String,

    /// Post tags; the first one is the primary tag
    pub tags: Vec<String>,

    /// Body text, paragraphs separated by blank lines
    pub content: String,
}

impl Post {
    /// Find a post by slug. With duplicate slugs the first one wins.
    pub fn find<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
        posts.iter().find(|p| p.slug == slug)
    }

    /// The tag that drives the post's accent colour
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Position of this very post in `posts`; slugs may repeat, so match
    /// by identity
    fn position_in(&self, posts: &[Post]) -> Option<usize> {
        posts.iter().position(|p| std::ptr::eq(p, self))
    }

    /// Get the previous (newer) post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        posts.get(pos + 1)
    }
}

/// Posts carrying `tag`, keeping their order
pub fn filter_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| p.has_tag(tag)).collect()
}

/// A tag with the number of posts that carry it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl TagSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            count: 0,
        }
    }
}

/// Every tag used by `posts`, sorted alphabetically ignoring case
pub fn tag_index(posts: &[Post]) -> Vec<TagSummary> {
    let mut tags: BTreeMap<(String, &str), TagSummary> = BTreeMap::new();
    for post in posts {
        for tag in &post.tags {
            tags.entry((tag.to_lowercase(), tag.as_str()))
                .or_insert_with(|| TagSummary::new(tag))
                .count += 1;
        }
    }
    tags.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: "2025-01-01".to_string(),
            read_time: 1,
            excerpt: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: String::new(),
        }
    }

    #[test]
    fn test_serialises_camel_case() {
        let json = serde_json::to_value(post("a", &["Dev"])).unwrap();
        assert_eq!(json["readTime"], 1);
        assert!(json.get("read_time").is_none());
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["slug", "title", "date", "readTime", "excerpt", "tags", "content"]
        );
    }

    #[test]
    fn test_navigation() {
        let posts = vec![post("new", &[]), post("mid", &[]), post("old", &[])];
        let mid = &posts[1];
        assert_eq!(mid.prev(&posts).map(|p| p.slug.as_str()), Some("new"));
        assert_eq!(mid.next(&posts).map(|p| p.slug.as_str()), Some("old"));
        assert!(posts[0].prev(&posts).is_none());
        assert!(posts[2].next(&posts).is_none());
    }

    #[test]
    fn test_navigation_with_duplicate_slugs() {
        let mut posts = vec![post("same", &[]), post("same", &[]), post("last", &[])];
        posts[0].title = "first".to_string();
        posts[1].title = "second".to_string();

        let second = &posts[1];
        assert_eq!(second.prev(&posts).map(|p| p.title.as_str()), Some("first"));
        assert_eq!(second.next(&posts).map(|p| p.slug.as_str()), Some("last"));
        assert_eq!(posts[0].next(&posts).map(|p| p.title.as_str()), Some("second"));

        // A copy is not part of the list
        let detached = posts[1].clone();
        assert!(detached.next(&posts).is_none());
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let mut posts = vec![post("same", &["A"]), post("same", &["B"])];
        posts[1].title = "second".to_string();
        assert_eq!(Post::find(&posts, "same").unwrap().title, "same");
        assert!(Post::find(&posts, "missing").is_none());
    }

    #[test]
    fn test_tag_index() {
        let posts = vec![
            post("a", &["Dev", "Open Source"]),
            post("b", &["Career", "Dev"]),
            post("c", &[]),
        ];
        let index = tag_index(&posts);
        let names: Vec<_> = index.iter().map(|t| (t.name.as_str(), t.count)).collect();
        assert_eq!(names, vec![("Career", 1), ("Dev", 2), ("Open Source", 1)]);
        assert_eq!(index[2].slug, "open-source");
    }

    #[test]
    fn test_tag_index_ignores_case_when_sorting() {
        let posts = vec![post("a", &["rust", "AI", "Zig", "career"])];
        let names: Vec<_> = tag_index(&posts).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["AI", "career", "rust", "Zig"]);
    }

    #[test]
    fn test_filter_by_tag() {
        let posts = vec![post("a", &["Dev"]), post("b", &["Life"]), post("c", &["AI", "Dev"])];
        let slugs: Vec<_> = filter_by_tag(&posts, "Dev").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
        assert_eq!(posts[2].primary_tag(), Some("AI"));
    }
}
