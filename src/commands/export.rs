//! Export posts as JSON for the site's front-end

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::{MarkdownRenderer, Post};
use crate::Site;

#[derive(Serialize)]
struct ExportedPost<'a> {
    #[serde(flatten)]
    post: &'a Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

pub fn run(site: &Site, output: Option<&Path>, pretty: bool, html: bool) -> Result<()> {
    let posts = site.load_posts()?;
    let json = to_json(&posts, pretty, html)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json + "\n")?;
            tracing::info!("Exported {} posts to {:?}", posts.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Serialise posts as a JSON array, optionally with rendered HTML bodies
pub fn to_json(posts: &[Post], pretty: bool, html: bool) -> Result<String> {
    let renderer = MarkdownRenderer::new();
    let exported: Vec<ExportedPost> = posts
        .iter()
        .map(|post| ExportedPost {
            post,
            html: html.then(|| renderer.render(&post.content)),
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&exported)?
    } else {
        serde_json::to_string(&exported)?
    };
    Ok(json)
}
