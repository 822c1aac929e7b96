//! Content module - parses markdown documents into posts

mod deriver;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod source;

pub use deriver::{
    slug_from_source, Deriver, DEFAULT_EXCERPT_LENGTH, DEFAULT_WORDS_PER_MINUTE, EPOCH_DATE,
};
pub use frontmatter::{FieldValue, FrontMatter};
pub use loader::{assemble, ContentLoader};
pub use markdown::{content_blocks, ContentBlock, MarkdownRenderer};
pub use post::{filter_by_tag, tag_index, Post, TagSummary};
pub use source::{DirectorySource, DocumentSource, Documents};
