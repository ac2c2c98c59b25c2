//! Run summary reporting
//!
//! This module collects the aggregate counts from both phases and prints
//! them at the end of the run.

use crate::catalog::ExtractReport;
use crate::crawler::CrawlReport;
use chrono::{DateTime, Utc};

/// Summary of a complete run (crawl phase plus optional extraction phase)
#[derive(Debug)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,

    /// Crawl-phase counts, if the crawl phase ran
    pub crawl: Option<CrawlCounts>,

    /// Extraction-phase counts, if the extraction phase ran
    pub extraction: Option<ExtractCounts>,
}

/// Aggregate crawl-phase counts
#[derive(Debug, Clone, Copy)]
pub struct CrawlCounts {
    pub pages_processed: usize,
    pub pages_succeeded: usize,
    pub pages_failed: usize,
    pub leaves_discovered: usize,
}

/// Aggregate extraction-phase counts
#[derive(Debug, Clone, Copy)]
pub struct ExtractCounts {
    pub leaves_processed: usize,
    pub leaves_succeeded: usize,
    pub leaves_failed: usize,
    pub links_written: usize,
}

impl From<&CrawlReport> for CrawlCounts {
    fn from(report: &CrawlReport) -> Self {
        Self {
            pages_processed: report.pages_processed,
            pages_succeeded: report.pages_succeeded,
            pages_failed: report.pages_failed,
            leaves_discovered: report.leaves.len(),
        }
    }
}

impl From<&ExtractReport> for ExtractCounts {
    fn from(report: &ExtractReport) -> Self {
        Self {
            leaves_processed: report.leaves_processed,
            leaves_succeeded: report.leaves_succeeded,
            leaves_failed: report.leaves_failed,
            links_written: report.links_written,
        }
    }
}

/// Prints the run summary to stdout in a formatted manner
pub fn print_run_summary(summary: &RunSummary) {
    println!("=== Run Summary ===\n");

    let duration = (summary.finished_at - summary.started_at).num_seconds();
    println!("Started:  {}", summary.started_at.to_rfc3339());
    println!("Finished: {}", summary.finished_at.to_rfc3339());
    println!("Duration: {}s", duration);
    println!();

    if let Some(crawl) = &summary.crawl {
        println!("Crawl Phase:");
        println!("  Pages processed: {}", crawl.pages_processed);
        println!("  Pages succeeded: {}", crawl.pages_succeeded);
        println!("  Pages failed: {}", crawl.pages_failed);
        println!("  Leaves discovered: {}", crawl.leaves_discovered);
        let rate = percentage(crawl.pages_succeeded, crawl.pages_processed);
        println!("  Success rate: {:.1}%", rate);
        println!();
    }

    if let Some(extraction) = &summary.extraction {
        println!("Extraction Phase:");
        println!("  Leaves processed: {}", extraction.leaves_processed);
        println!("  Leaves succeeded: {}", extraction.leaves_succeeded);
        println!("  Leaves failed: {}", extraction.leaves_failed);
        println!("  Direct links written: {}", extraction.links_written);
        let rate = percentage(extraction.leaves_succeeded, extraction.leaves_processed);
        println!("  Success rate: {:.1}%", rate);
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}
