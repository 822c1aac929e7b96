//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{DEFAULT_EXCERPT_LENGTH, DEFAULT_WORDS_PER_MINUTE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,
    pub blog_dir: String,
    pub tag_dir: String,

    // Content
    pub content_dir: String,
    pub content_pattern: String,

    // Writing
    pub words_per_minute: u32,
    pub excerpt_length: usize,

    // Date format (chrono strftime)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),

            url: "http://localhost".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),

            content_dir: "content/blog".to_string(),
            content_pattern: "*.md".to_string(),

            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,

            date_format: "%-d %B %Y".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}
