//! Content loader - turns a set of raw documents into the ordered post list

use anyhow::Result;

use super::deriver::Deriver;
use super::frontmatter::FrontMatter;
use super::post::Post;
use super::source::{DirectorySource, DocumentSource, Documents};
use crate::helpers::parse_date;
use crate::Site;

/// Loads posts from a document source
pub struct ContentLoader {
    source: Box<dyn DocumentSource>,
    deriver: Deriver,
}

impl ContentLoader {
    /// Create a loader reading the site's content directory
    pub fn new(site: &Site) -> Result<Self> {
        let source = DirectorySource::new(&site.content_dir, &site.config.content_pattern)?;
        Ok(Self::with_source(source, Deriver::from_config(&site.config)))
    }

    /// Create a loader over any document source
    pub fn with_source<S: DocumentSource + 'static>(source: S, deriver: Deriver) -> Self {
        Self {
            source: Box::new(source),
            deriver,
        }
    }

    /// Load all published posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let documents = self.source.documents()?;
        let posts = assemble(&documents, &self.deriver);
        tracing::info!(
            "Loaded {} posts from {} documents",
            posts.len(),
            documents.len()
        );
        Ok(posts)
    }
}

/// Parse and derive every document, drop drafts and hidden posts, and sort
/// the rest by date descending.
pub fn assemble(documents: &Documents, deriver: &Deriver) -> Vec<Post> {
    let mut posts: Vec<Post> = documents
        .iter()
        .filter_map(|(source, raw)| {
            let (fm, body) = FrontMatter::parse(raw);
            deriver.derive(source, &fm, body)
        })
        .collect();

    sort_by_date(&mut posts);
    posts
}

/// Stable sort, newest first. Dates that do not parse sort after all
/// others.
pub fn sort_by_date(posts: &mut [Post]) {
    posts.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
}
