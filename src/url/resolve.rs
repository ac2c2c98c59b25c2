use crate::UrlError;
use std::fmt;
use url::Url;

/// A leaf page's path relative to the configured root listing
///
/// Uniquely identifies a leaf resource within the catalog; obtained by
/// stripping the root prefix from an absolute URL's path. The `.html` suffix
/// is preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GalleryPath(String);

impl GalleryPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path with the leaf suffix removed, for use as a
    /// destination directory name
    pub fn strip_leaf_suffix(&self) -> &str {
        self.0
            .strip_suffix(crate::url::LEAF_SUFFIX)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for GalleryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes the root listing URL, enforcing a single trailing slash
///
/// # Arguments
///
/// * `url_str` - The root URL string from configuration
///
/// # Returns
///
/// * `Ok(Url)` - Normalized root URL whose path ends with exactly one `/`
/// * `Err(UrlError)` - The string does not parse or has no host
///
/// # Examples
///
/// ```
/// use gallerist::url::normalize_root;
///
/// let root = normalize_root("https://example.com/galleries").unwrap();
/// assert_eq!(root.as_str(), "https://example.com/galleries/");
/// ```
pub fn normalize_root(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/", trimmed));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Resolves an absolute URL to a path relative to the root listing
///
/// Succeeds only if the URL's path lies under the root's path prefix; the
/// remainder is returned verbatim, preserving nested sub-paths and the
/// `.html` suffix. URLs outside the root are not an error, just out of scope.
///
/// # Arguments
///
/// * `url` - The absolute URL to resolve
/// * `root` - The normalized root listing URL (trailing slash enforced)
///
/// # Examples
///
/// ```
/// use gallerist::url::{gallery_path, normalize_root};
/// use url::Url;
///
/// let root = normalize_root("https://example.com/galleries/").unwrap();
/// let url = Url::parse("https://example.com/galleries/artist/set.html").unwrap();
/// assert_eq!(gallery_path(&url, &root).unwrap().as_str(), "artist/set.html");
/// ```
pub fn gallery_path(url: &Url, root: &Url) -> Option<GalleryPath> {
    url.path()
        .strip_prefix(root.path())
        .map(|rest| GalleryPath(rest.to_string()))
}

/// Reconstructs the absolute leaf URL for a gallery path
pub fn leaf_url(root: &Url, path: &GalleryPath) -> Result<Url, UrlError> {
    root.join(path.as_str())
        .map_err(|e| UrlError::Parse(e.to_string()))
}
