//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates the discovery
//! phase: draining the frontier, fetching listing pages, extracting and
//! classifying links, and accumulating the set of leaf gallery paths.

use crate::config::Config;
use crate::crawler::extractor::extract_candidates;
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::url::{classify_link, gallery_path, normalize_root, GalleryPath, LinkClass};
use crate::GalleristError;
use reqwest::Client;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use url::Url;

/// The crawl frontier: pending URLs plus the set of URLs already taken
///
/// A URL is marked visited when it is handed out, before any network call,
/// so a URL discovered by several pages is processed at most once. The
/// visited set only grows.
#[derive(Debug, Default)]
pub struct Frontier {
    worklist: Vec<Url>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL to the worklist; already-visited URLs are dropped here
    /// instead of wasting a worklist slot
    pub fn push(&mut self, url: Url) {
        if !self.visited.contains(url.as_str()) {
            self.worklist.push(url);
        }
    }

    /// Takes the next unvisited URL, marking it visited
    pub fn next(&mut self) -> Option<Url> {
        while let Some(url) = self.worklist.pop() {
            if self.visited.insert(url.as_str().to_string()) {
                return Some(url);
            }
        }
        None
    }

    /// Number of URLs waiting in the worklist
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    /// Number of URLs taken so far
    pub fn visited(&self) -> usize {
        self.visited.len()
    }
}

/// Aggregate result of the crawl phase
#[derive(Debug)]
pub struct CrawlReport {
    /// Listing pages taken from the frontier
    pub pages_processed: usize,
    /// Pages fetched and parsed
    pub pages_succeeded: usize,
    /// Pages abandoned after a transport error or non-success status
    pub pages_failed: usize,
    /// Discovered leaf paths, deduplicated and sorted
    pub leaves: BTreeSet<GalleryPath>,
}

/// Main crawler coordinator structure
pub struct Crawler {
    config: Arc<Config>,
    client: Client,
    root: Url,
}

impl Crawler {
    /// Creates a new crawler from the configuration
    ///
    /// Normalizes the root URL (trailing slash enforced) and builds the HTTP
    /// client used for every listing fetch.
    pub fn new(config: Config) -> Result<Self, GalleristError> {
        let root = normalize_root(&config.site.root_url)?;
        let client = build_http_client(config.http.listing_timeout_secs)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            root,
        })
    }

    /// The normalized root listing URL
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Runs the crawl phase to exhaustion
    ///
    /// Sequentially takes URLs from the frontier, fetches each listing page,
    /// and classifies every extracted link: leaves are resolved against the
    /// root and accumulated, directories are enqueued, everything else is
    /// dropped. A failed fetch abandons that URL only; the loop continues
    /// with the rest of the frontier.
    pub async fn run(&self) -> CrawlReport {
        let mut frontier = Frontier::new();
        frontier.push(self.root.clone());

        let mut report = CrawlReport {
            pages_processed: 0,
            pages_succeeded: 0,
            pages_failed: 0,
            leaves: BTreeSet::new(),
        };

        while let Some(url) = frontier.next() {
            report.pages_processed += 1;
            tracing::info!("Scanning: {}", url);

            let body = match fetch_page(&self.client, url.as_str()).await {
                FetchResult::Success { body, .. } => body,
                FetchResult::HttpError { status_code } => {
                    tracing::warn!("Abandoning {} (HTTP {})", url, status_code);
                    report.pages_failed += 1;
                    continue;
                }
                FetchResult::NetworkError { error } => {
                    tracing::warn!("Abandoning {} ({})", url, error);
                    report.pages_failed += 1;
                    continue;
                }
            };
            report.pages_succeeded += 1;

            let candidates = extract_candidates(&body, &url, &self.config.site);
            tracing::debug!("Found {} links on {}", candidates.len(), url);

            for candidate in candidates {
                match classify_link(&candidate.text, &candidate.url, &self.config.site) {
                    LinkClass::Leaf => {
                        if let Some(path) = gallery_path(&candidate.url, &self.root) {
                            tracing::debug!("Leaf: {}", path);
                            report.leaves.insert(path);
                        } else {
                            tracing::debug!("Leaf outside root, skipping: {}", candidate.url);
                        }
                    }
                    LinkClass::Directory => frontier.push(candidate.url),
                    LinkClass::Ignore => {}
                }
            }

            if report.pages_processed % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages scanned, {} pending, {} leaves",
                    report.pages_processed,
                    frontier.pending(),
                    report.leaves.len()
                );
            }
        }

        tracing::info!(
            "Crawl complete: {} pages scanned ({} failed), {} unique leaves",
            report.pages_processed,
            report.pages_failed,
            report.leaves.len()
        );

        report
    }
}
