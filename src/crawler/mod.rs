//! Crawler module for listing-page discovery
//!
//! This module contains the crawl-phase logic:
//! - HTTP fetching with the fixed header set
//! - Link extraction via an ordered strategy chain
//! - Frontier management and crawl coordination

mod coordinator;
mod extractor;
mod fetcher;

pub use coordinator::{CrawlReport, Crawler, Frontier};
pub use extractor::{extract_candidates, Candidate};
pub use fetcher::{build_http_client, fetch_page, FetchResult};

use crate::config::Config;
use crate::GalleristError;

/// Runs the crawl phase and returns the discovered leaves
///
/// Convenience wrapper for callers that do not need to hold on to the
/// [`Crawler`].
pub async fn crawl(config: Config) -> Result<CrawlReport, GalleristError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.run().await)
}
