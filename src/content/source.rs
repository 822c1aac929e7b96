//! Document sources - where raw post text comes from

use glob::Pattern;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SourceError;

/// Raw documents keyed by source path, in enumeration order
pub type Documents = IndexMap<String, String>;

/// Supplies the raw documents a load works on
pub trait DocumentSource {
    fn documents(&self) -> Result<Documents, SourceError>;
}

/// An in-memory set of documents is its own source
impl DocumentSource for Documents {
    fn documents(&self) -> Result<Documents, SourceError> {
        Ok(self.clone())
    }
}

/// Reads markdown files from a directory tree
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    pattern: Pattern,
}

impl DirectorySource {
    /// `pattern` is a glob matched against each file's name and its path
    /// relative to `root`
    pub fn new<P: Into<PathBuf>>(root: P, pattern: &str) -> Result<Self, SourceError> {
        Ok(Self {
            root: root.into(),
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matches(&self, relative: &str, file_name: &str) -> bool {
        self.pattern.matches(relative) || self.pattern.matches(file_name)
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Documents, SourceError> {
        let mut documents = Documents::new();

        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Ok(documents);
        }

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping entry: {}", SourceError::from(e));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if !self.matches(&key, &entry.file_name().to_string_lossy()) {
                continue;
            }

            match read_document(path) {
                Ok(text) => {
                    documents.insert(key, text);
                }
                Err(e) => tracing::warn!("Skipping document: {}", e),
            }
        }

        tracing::debug!(
            "Found {} documents under {:?}",
            documents.len(),
            self.root
        );
        Ok(documents)
    }
}

fn read_document(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "second").unwrap();
        fs::write(dir.path().join("a.md"), "first").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.md"), "third").unwrap();
        fs::write(dir.path().join("broken.md"), [0xff, 0xfe, 0x00]).unwrap();

        let source = DirectorySource::new(dir.path(), "*.md").unwrap();
        let documents = source.documents().unwrap();

        let keys: Vec<&str> = documents.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.md", "b.md", "nested/c.md"]);
        assert_eq!(documents["nested/c.md"], "third");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.md"), "kept").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.md"), dir.path().join("broken.md"))
            .unwrap();

        let source = DirectorySource::new(dir.path(), "*.md").unwrap();
        let documents = source.documents().unwrap();

        assert_eq!(documents.keys().collect::<Vec<_>>(), vec!["good.md"]);
        assert_eq!(documents["good.md"], "kept");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("nope"), "*.md").unwrap();
        assert!(source.documents().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            DirectorySource::new("content", "[md"),
            Err(SourceError::Pattern(_))
        ));
    }

    #[test]
    fn test_in_memory_source() {
        let mut documents = Documents::new();
        documents.insert("z.md".to_string(), "z".to_string());
        documents.insert("a.md".to_string(), "a".to_string());
        let loaded = documents.documents().unwrap();
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["z.md", "a.md"]);
    }
}
