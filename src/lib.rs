//! Gallerist: a directory-listing gallery crawler
//!
//! This crate crawls a remote directory-listing site, collects every leaf
//! gallery page into a manifest, and extracts direct image links from each
//! leaf by reversing the site's opaque image tokens.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod output;
pub mod token;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Gallerist operations
#[derive(Debug, Error)]
pub enum GalleristError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("{url} is outside the configured root")]
    OutsideRoot { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to write {path}: {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Gallerist operations
pub type Result<T> = std::result::Result<T, GalleristError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use token::direct_link;
pub use url::{classify_link, gallery_path, GalleryPath, LinkClass};
