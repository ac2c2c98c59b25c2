use serde::Deserialize;

/// Main configuration structure for Gallerist
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

/// Site layout and link filtering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root directory-listing URL; every leaf must live under its path
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Substrings that disqualify a link (matched against anchor text and URL)
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Anchor labels that are never content (parent marker, system files)
    #[serde(rename = "skip-filenames", default = "default_skip_filenames")]
    pub skip_filenames: Vec<String>,

    /// URL suffixes that mark non-content assets rather than directories
    #[serde(rename = "skip-extensions", default = "default_skip_extensions")]
    pub skip_extensions: Vec<String>,
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Timeout for directory-listing fetches (seconds)
    #[serde(rename = "listing-timeout-secs", default = "default_listing_timeout")]
    pub listing_timeout_secs: u64,

    /// Timeout for leaf-page fetches during extraction (seconds)
    #[serde(rename = "leaf-timeout-secs", default = "default_leaf_timeout")]
    pub leaf_timeout_secs: u64,
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the manifest file (one leaf URL per line)
    #[serde(rename = "manifest-path")]
    pub manifest_path: String,

    /// Root directory that holds one catalog directory per leaf
    #[serde(rename = "catalog-dir")]
    pub catalog_dir: String,

    /// File name of the per-leaf catalog inside its directory
    #[serde(rename = "catalog-file-name", default = "default_catalog_file_name")]
    pub catalog_file_name: String,
}

/// Image token extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Base URL the reversed token is appended to
    #[serde(rename = "direct-base-url", default = "default_direct_base_url")]
    pub direct_base_url: String,

    /// Attribute that carries the opaque image token
    #[serde(rename = "token-attr", default = "default_token_attr")]
    pub token_attr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listing_timeout_secs: default_listing_timeout(),
            leaf_timeout_secs: default_leaf_timeout(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            direct_base_url: default_direct_base_url(),
            token_attr: default_token_attr(),
        }
    }
}

fn default_skip_filenames() -> Vec<String> {
    ["..", ".DS_Store", "favicon.ico", "v-proxy.js"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_skip_extensions() -> Vec<String> {
    [".ico", ".js", ".css", ".png", ".jpg", ".gif", ".txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_listing_timeout() -> u64 {
    10
}

fn default_leaf_timeout() -> u64 {
    30
}

fn default_catalog_file_name() -> String {
    "links.txt".to_string()
}

fn default_direct_base_url() -> String {
    "https://photos.baka.ms/photoservice/uwu/pull".to_string()
}

fn default_token_attr() -> String {
    "data-idimg".to_string()
}
