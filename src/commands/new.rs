//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Create a draft post in the content directory
pub fn create_post(site: &Site, title: &str, tags: &[String]) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", title);
    }

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    fs::write(&file_path, scaffold(title, &date, tags))?;
    tracing::info!("Created draft {:?}", file_path);

    Ok(file_path)
}

/// Front-matter skeleton for a new post; starts out as a draft
fn scaffold(title: &str, date: &str, tags: &[String]) -> String {
    let mut content = format!("---\ntitle: \"{}\"\ndate: {}\n", title, date);

    if tags.is_empty() {
        content.push_str("tags: []\n");
    } else {
        content.push_str("tags:\n");
        for tag in tags {
            content.push_str(&format!("  - {}\n", tag));
        }
    }

    content.push_str("draft: true\n---\n\n");
    content
}
