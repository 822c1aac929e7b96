//! Error types for document sources

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while enumerating or reading content documents.
///
/// Parsing and deriving posts never fail; only the collaborator that
/// reads the files can.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
