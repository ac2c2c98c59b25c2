//! Link extraction from directory-listing HTML
//!
//! Listing pages normally render entries as anchors inside table rows. Some
//! hand-rolled gallery indexes drop the table markup, so extraction runs an
//! ordered chain of strategies and the first one that yields candidates
//! wins.

use crate::config::SiteConfig;
use crate::url::ignorable_text;
use scraper::{Html, Selector};
use url::Url;

/// A link pulled out of a listing page, before crawl-time classification
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The anchor's visible text
    pub text: String,
    /// The resolved absolute URL
    pub url: Url,
}

/// An extraction strategy: document plus base URL in, candidates out
type Strategy = fn(&Html, &Url, &SiteConfig) -> Vec<Candidate>;

/// Strategies in the order they are tried
const STRATEGIES: &[(&str, Strategy)] = &[
    ("table-rows", extract_table_rows),
    ("all-anchors", extract_all_anchors),
];

/// Extracts candidate links from a listing page
///
/// Strategies run in order; the first non-empty result is returned.
/// Duplicates are allowed - deduplication is the crawler's concern. Anchors
/// whose visible text is empty, a known ignorable label, or blacklisted are
/// dropped here; URL-level classification happens at enqueue time.
///
/// # Arguments
///
/// * `html` - Raw HTML content of the listing page
/// * `base_url` - The URL the page was fetched from, for reference resolution
/// * `site` - Site configuration (skip lists, blacklist)
pub fn extract_candidates(html: &str, base_url: &Url, site: &SiteConfig) -> Vec<Candidate> {
    let document = Html::parse_document(html);

    for (name, strategy) in STRATEGIES {
        let candidates = strategy(&document, base_url, site);
        if !candidates.is_empty() {
            tracing::debug!(
                "Strategy '{}' extracted {} candidates",
                name,
                candidates.len()
            );
            return candidates;
        }
    }

    Vec::new()
}

/// Primary strategy: anchors inside table rows (default listing markup)
///
/// The base URL gets a trailing slash enforced before joining, so
/// `artist/set.html` under `.../artist` resolves into the directory rather
/// than alongside it.
fn extract_table_rows(document: &Html, base_url: &Url, site: &SiteConfig) -> Vec<Candidate> {
    let selector = match Selector::parse("tr a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let base = ensure_trailing_slash(base_url);
    collect_anchors(document, &selector, &base, site)
}

/// Fallback strategy: every anchor on the page
fn extract_all_anchors(document: &Html, base_url: &Url, site: &SiteConfig) -> Vec<Candidate> {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    collect_anchors(document, &selector, base_url, site)
}

/// Collects candidates for every anchor matched by `selector`
fn collect_anchors(
    document: &Html,
    selector: &Selector,
    base_url: &Url,
    site: &SiteConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for element in document.select(selector) {
        let text = element.text().collect::<String>();
        if ignorable_text(&text, site) {
            continue;
        }

        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_href(href, base_url) {
                candidates.push(Candidate {
                    text: text.trim().to_string(),
                    url,
                });
            }
        }
    }

    candidates
}

/// Resolves an href to an absolute URL
///
/// Root-relative hrefs (leading `/`) join against the site's scheme+host;
/// everything else resolves against the base URL per standard URL-joining
/// rules. `Url::join` implements both.
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url),
        _ => None,
    }
}

/// Returns the URL with a trailing slash enforced on its path
fn ensure_trailing_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        return url.clone();
    }

    let mut slashed = url.clone();
    slashed.set_path(&format!("{}/", url.path()));
    slashed
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
            skip_extensions: vec![".ico".to_string(), ".css".to_string()],
        }
    }

    fn base() -> Url {
        Url::parse("https://galleries.example.com/galleries/").unwrap()
    }

    #[test]
    fn test_table_rows_preferred() {
        let html = r#"
            <html><body>
            <a href="outside.html">Outside table</a>
            <table><tr><td><a href="artist/">artist</a></td></tr></table>
            </body></html>
        "#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url.as_str(),
            "https://galleries.example.com/galleries/artist/"
        );
    }

    #[test]
    fn test_fallback_when_no_table_rows() {
        let html = r#"
            <html><body>
            <a href="set1.html">Set one</a>
            <a href="set2.html">Set two</a>
            </body></html>
        "#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0].url.as_str(),
            "https://galleries.example.com/galleries/set1.html"
        );
    }

    #[test]
    fn test_parent_marker_skipped() {
        let html = r#"
            <table><tr><td><a href="../">..</a></td></tr>
            <tr><td><a href="artist/">artist</a></td></tr></table>
        "#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "artist");
    }

    #[test]
    fn test_empty_text_skipped() {
        let html = r#"<table><tr><td><a href="artist/"></a></td></tr></table>"#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_blacklisted_text_skipped() {
        let html = r#"
            <table>
            <tr><td><a href="a/">sponsored content</a></td></tr>
            <tr><td><a href="b/">real gallery</a></td></tr>
            </table>
        "#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "real gallery");
    }

    #[test]
    fn test_root_relative_href_joins_host() {
        let html = r#"<a href="/galleries/other/">other</a>"#;
        let base = Url::parse("https://galleries.example.com/galleries/artist/").unwrap();
        let candidates = extract_candidates(html, &base, &test_site());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url.as_str(),
            "https://galleries.example.com/galleries/other/"
        );
    }

    #[test]
    fn test_absolute_href_kept_verbatim() {
        let html = r#"<a href="https://elsewhere.example.com/x.html">elsewhere</a>"#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url.as_str(),
            "https://elsewhere.example.com/x.html"
        );
    }

    #[test]
    fn test_base_without_trailing_slash_joins_into_directory() {
        let html = r#"<table><tr><td><a href="set.html">set</a></td></tr></table>"#;
        let base = Url::parse("https://galleries.example.com/galleries/artist").unwrap();
        let candidates = extract_candidates(html, &base, &test_site());
        assert_eq!(
            candidates[0].url.as_str(),
            "https://galleries.example.com/galleries/artist/set.html"
        );
    }

    #[test]
    fn test_duplicates_preserved() {
        let html = r#"
            <table>
            <tr><td><a href="a/">a</a></td></tr>
            <tr><td><a href="a/">a</a></td></tr>
            </table>
        "#;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_fragment_only_href_skipped() {
        let html = r##"<a href="#top">top</a>"##;
        let candidates = extract_candidates(html, &base(), &test_site());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_page_with_no_anchors() {
        let html = "<html><body><p>empty listing</p></body></html>";
        let candidates = extract_candidates(html, &base(), &test_site());
        assert!(candidates.is_empty());
    }
}
