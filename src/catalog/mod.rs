//! Catalog module: manifest persistence and per-leaf link extraction
//!
//! The crawl phase produces a manifest of leaf URLs; this module writes and
//! reads that manifest and, in the extraction phase, re-visits every leaf to
//! produce one catalog of direct image links per gallery.

mod manifest;
mod writer;

pub use manifest::{read_manifest, write_manifest};
pub use writer::CatalogWriter;

use url::Url;

/// Aggregate result of the extraction phase
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Leaves taken from the manifest
    pub leaves_processed: usize,
    /// Leaves whose catalog was written
    pub leaves_succeeded: usize,
    /// Leaves abandoned after a fetch or write failure
    pub leaves_failed: usize,
    /// Direct links written across all catalogs
    pub links_written: usize,
}

/// Runs the extraction phase over every manifest leaf
///
/// Each leaf is independent: a failure is logged, contributes zero links,
/// and never stops the run.
pub async fn run_extraction(writer: &CatalogWriter, leaves: &[Url]) -> ExtractReport {
    let mut report = ExtractReport::default();

    for leaf in leaves {
        report.leaves_processed += 1;
        match writer.write_catalog(leaf).await {
            Ok(count) => {
                report.leaves_succeeded += 1;
                report.links_written += count;
            }
            Err(e) => {
                tracing::warn!("Extraction failed for {}: {}", leaf, e);
                report.leaves_failed += 1;
            }
        }
    }

    tracing::info!(
        "Extraction complete: {} leaves ({} failed), {} direct links",
        report.leaves_processed,
        report.leaves_failed,
        report.links_written
    );

    report
}
