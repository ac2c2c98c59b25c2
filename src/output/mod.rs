//! Output module for run reporting
//!
//! Aggregate counts per phase so operators can detect systemic failure
//! rates without per-item tracing.

mod stats;

pub use stats::{print_run_summary, CrawlCounts, ExtractCounts, RunSummary};
