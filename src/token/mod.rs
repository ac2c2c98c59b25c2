//! Image token transformation
//!
//! Leaf pages embed opaque image tokens in a data attribute. The image
//! service serves the file at a URL whose last path segment is the
//! character-reversed token and whose query string is the original token
//! verbatim. The scheme is undocumented upstream; it is reproduced here
//! exactly and must not be re-encoded.

/// Transforms an opaque image token into a direct-download URL
///
/// Pure and deterministic: equal tokens always yield equal links. The token
/// contents are not validated.
///
/// # Arguments
///
/// * `base` - The image service base URL (no trailing slash)
/// * `token` - The opaque token as found in the page attribute
///
/// # Examples
///
/// ```
/// use gallerist::token::direct_link;
///
/// let link = direct_link("https://photos.example.com/pull", "abc");
/// assert_eq!(link, "https://photos.example.com/pull/cba?abc");
/// ```
pub fn direct_link(base: &str, token: &str) -> String {
    let reversed: String = token.chars().rev().collect();
    format!("{}/{}?{}", base.trim_end_matches('/'), reversed, token)
}
