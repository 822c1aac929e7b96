//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/hello/") // -> "/site/blog/hello/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Path of a post page
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("{}/{}", config.blog_dir.trim_matches('/'), slug))
}

/// Path of a tag listing
pub fn tag_path(config: &SiteConfig, tag_slug: &str) -> String {
    url_for(
        config,
        &format!(
            "{}/{}/{}",
            config.blog_dir.trim_matches('/'),
            config.tag_dir.trim_matches('/'),
            tag_slug
        ),
    )
}
