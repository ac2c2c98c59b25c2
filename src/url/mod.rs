//! URL handling module for Gallerist
//!
//! This module provides link classification and gallery-path resolution
//! against the configured root listing.

mod resolve;

use crate::config::SiteConfig;
use url::Url;

// Re-export main functions
pub use resolve::{gallery_path, leaf_url, normalize_root, GalleryPath};

/// Suffix that marks a leaf content page
pub const LEAF_SUFFIX: &str = ".html";

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    /// Not worth following: empty label, known system entry, blacklisted, or asset
    Ignore,
    /// Directory listing - enqueue for further crawling
    Directory,
    /// Leaf content page - record in the manifest
    Leaf,
}

impl LinkClass {
    /// Returns true if the link should be followed or recorded
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Directory | Self::Leaf)
    }
}

/// Classifies a discovered link according to the site configuration
///
/// Both the extractor and the crawler use this single function, so filtering
/// behaves identically whether a link is dropped at parse time or at enqueue
/// time. Classification order:
///
/// 1. Empty anchor text or a known ignorable label -> `Ignore`
/// 2. Any blacklist substring in the anchor text or the URL -> `Ignore`
/// 3. Path ends with the leaf suffix (`.html`) -> `Leaf`
/// 4. URL ends with a non-content asset extension -> `Ignore`
/// 5. Everything else is assumed to be a directory listing -> `Directory`
///
/// # Arguments
///
/// * `text` - The anchor's visible text
/// * `url` - The resolved absolute URL
/// * `site` - The site configuration (blacklist, skip lists)
pub fn classify_link(text: &str, url: &Url, site: &SiteConfig) -> LinkClass {
    if ignorable_text(text, site) {
        return LinkClass::Ignore;
    }

    let url_str = url.as_str();
    if site
        .blacklist
        .iter()
        .any(|entry| url_str.contains(entry.as_str()))
    {
        return LinkClass::Ignore;
    }

    if url.path().ends_with(LEAF_SUFFIX) {
        return LinkClass::Leaf;
    }

    if site
        .skip_extensions
        .iter()
        .any(|ext| url_str.ends_with(ext.as_str()))
    {
        return LinkClass::Ignore;
    }

    LinkClass::Directory
}

/// Returns true if an anchor's visible text disqualifies it outright
///
/// The extractor applies this during parsing; `classify_link` applies it
/// again, so filtering is identical at both stages. Disqualifiers: empty
/// text, a known ignorable label, or a blacklist substring in the text.
pub fn ignorable_text(text: &str, site: &SiteConfig) -> bool {
    let text = text.trim();

    if text.is_empty() {
        return true;
    }

    if site.skip_filenames.iter().any(|name| name == text) {
        return true;
    }

    site.blacklist
        .iter()
        .any(|entry| text.contains(entry.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site() -> SiteConfig {
        SiteConfig {
            root_url: "https://galleries.example.com/galleries/".to_string(),
            blacklist: vec!["sponsored".to_string()],
            skip_filenames: vec![
                "..".to_string(),
                ".DS_Store".to_string(),
                "favicon.ico".to_string(),
                "v-proxy.js".to_string(),
            ],
            skip_extensions: vec![
                ".ico".to_string(),
                ".js".to_string(),
                ".css".to_string(),
                ".png".to_string(),
                ".jpg".to_string(),
                ".gif".to_string(),
                ".txt".to_string(),
            ],
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_empty_text_ignored() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/a/");
        assert_eq!(classify_link("", &u, &site), LinkClass::Ignore);
        assert_eq!(classify_link("   ", &u, &site), LinkClass::Ignore);
    }

    #[test]
    fn test_parent_marker_ignored() {
        let site = test_site();
        let u = url("https://galleries.example.com/");
        assert_eq!(classify_link("..", &u, &site), LinkClass::Ignore);
    }

    #[test]
    fn test_system_files_ignored() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/.DS_Store");
        assert_eq!(classify_link(".DS_Store", &u, &site), LinkClass::Ignore);
        let u = url("https://galleries.example.com/favicon.ico");
        assert_eq!(classify_link("favicon.ico", &u, &site), LinkClass::Ignore);
    }

    #[test]
    fn test_blacklist_matches_text_substring() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/a/");
        assert_eq!(
            classify_link("a sponsored gallery", &u, &site),
            LinkClass::Ignore
        );
    }

    #[test]
    fn test_blacklist_matches_url_substring() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/sponsored/");
        assert_eq!(classify_link("gallery", &u, &site), LinkClass::Ignore);
    }

    #[test]
    fn test_html_is_leaf() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/a/index.html");
        assert_eq!(classify_link("index.html", &u, &site), LinkClass::Leaf);
    }

    #[test]
    fn test_asset_extensions_ignored() {
        let site = test_site();
        for asset in [
            "https://galleries.example.com/style.css",
            "https://galleries.example.com/script.js",
            "https://galleries.example.com/photo.jpg",
            "https://galleries.example.com/readme.txt",
        ] {
            assert_eq!(
                classify_link("asset", &url(asset), &site),
                LinkClass::Ignore,
                "{} should be ignored",
                asset
            );
        }
    }

    #[test]
    fn test_everything_else_is_directory() {
        let site = test_site();
        let u = url("https://galleries.example.com/galleries/artist/");
        assert_eq!(classify_link("artist", &u, &site), LinkClass::Directory);

        // No trailing slash still counts as a directory
        let u = url("https://galleries.example.com/galleries/artist");
        assert_eq!(classify_link("artist", &u, &site), LinkClass::Directory);
    }

    #[test]
    fn test_is_content() {
        assert!(!LinkClass::Ignore.is_content());
        assert!(LinkClass::Directory.is_content());
        assert!(LinkClass::Leaf.is_content());
    }
}
