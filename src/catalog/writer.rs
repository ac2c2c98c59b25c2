//! Per-leaf catalog writer
//!
//! For each manifest leaf the writer re-fetches the page, scans it for
//! elements carrying the image-token attribute, transforms every token into
//! a direct-download URL, and persists the list as one catalog file per
//! gallery. Video and other non-image media on the page are left alone.

use crate::config::Config;
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::token::direct_link;
use crate::url::{gallery_path, normalize_root};
use crate::{GalleristError, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// Writes per-leaf catalogs of direct image links
pub struct CatalogWriter {
    config: Arc<Config>,
    client: Client,
    root: Url,
    catalog_root: PathBuf,
}

impl CatalogWriter {
    /// Creates a new catalog writer from the configuration
    pub fn new(config: Config) -> Result<Self> {
        let root = normalize_root(&config.site.root_url)?;
        let client = build_http_client(config.http.leaf_timeout_secs)?;
        let catalog_root = PathBuf::from(&config.output.catalog_dir);

        Ok(Self {
            config: Arc::new(config),
            client,
            root,
            catalog_root,
        })
    }

    /// Recreates the catalog root from scratch
    ///
    /// Prior catalogs are discarded, never merged: a run that previously
    /// produced output starts over.
    pub fn reset_catalog_root(&self) -> Result<()> {
        if self.catalog_root.exists() {
            tracing::info!(
                "Removing existing catalog directory {}",
                self.catalog_root.display()
            );
            std::fs::remove_dir_all(&self.catalog_root).map_err(|source| {
                GalleristError::Persistence {
                    path: self.catalog_root.clone(),
                    source,
                }
            })?;
        }

        std::fs::create_dir_all(&self.catalog_root).map_err(|source| {
            GalleristError::Persistence {
                path: self.catalog_root.clone(),
                source,
            }
        })
    }

    /// Fetches one leaf page and writes its catalog
    ///
    /// The catalog lands at `<catalog-root>/<gallery path minus .html>/<file>`,
    /// one direct link per line in token discovery order. A leaf with no
    /// matching image elements yields an empty catalog file, which is a
    /// valid result, not an error.
    ///
    /// # Arguments
    ///
    /// * `leaf` - Absolute URL of the leaf page
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of direct links written
    /// * `Err(GalleristError)` - Fetch or write failed; nothing was written
    pub async fn write_catalog(&self, leaf: &Url) -> Result<usize> {
        let path = gallery_path(leaf, &self.root).ok_or_else(|| GalleristError::OutsideRoot {
            url: leaf.to_string(),
        })?;

        let body = match fetch_page(&self.client, leaf.as_str()).await {
            FetchResult::Success { body, .. } => body,
            FetchResult::HttpError { status_code } => {
                return Err(GalleristError::Status {
                    url: leaf.to_string(),
                    status: status_code,
                });
            }
            FetchResult::NetworkError { error } => {
                return Err(GalleristError::Transport {
                    url: leaf.to_string(),
                    message: error,
                });
            }
        };

        let links = self.scan_tokens(&body);

        let dest_dir = self.catalog_root.join(path.strip_leaf_suffix());
        std::fs::create_dir_all(&dest_dir).map_err(|source| GalleristError::Persistence {
            path: dest_dir.clone(),
            source,
        })?;

        let dest_file = dest_dir.join(&self.config.output.catalog_file_name);
        write_links(&dest_file, &links)?;

        tracing::info!(
            "Extracted {} direct links to {}",
            links.len(),
            dest_file.display()
        );
        Ok(links.len())
    }

    /// Scans a leaf page for image tokens and transforms each into a direct
    /// link, preserving document order
    fn scan_tokens(&self, html: &str) -> Vec<String> {
        let attr = &self.config.images.token_attr;
        let selector = match Selector::parse(&format!("img[{}]", attr)) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Invalid token attribute selector '{}': {:?}", attr, e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(html);
        document
            .select(&selector)
            .filter_map(|img| img.value().attr(attr))
            .filter(|token| !token.is_empty())
            .map(|token| direct_link(&self.config.images.direct_base_url, token))
            .collect()
    }
}

/// Writes direct links to the catalog file, one per line
fn write_links(path: &Path, links: &[String]) -> Result<()> {
    let mut contents = String::new();
    for link in links {
        contents.push_str(link);
        contents.push('\n');
    }

    std::fs::write(path, contents).map_err(|source| GalleristError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}
