use crate::url::{leaf_url, GalleryPath};
use crate::{GalleristError, Result};
use std::collections::BTreeSet;
use std::path::Path;
use url::Url;

/// Writes the manifest: one absolute leaf URL per line
///
/// Leaves arrive as a `BTreeSet`, so the manifest is already deduplicated
/// and sorted ascending by gallery path. Any existing manifest is
/// overwritten unconditionally.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `root` - The normalized root listing URL
/// * `leaves` - The discovered gallery paths
///
/// # Returns
///
/// * `Ok(usize)` - Number of URLs written
/// * `Err(GalleristError)` - A leaf failed to resolve or the file could not
///   be written
pub fn write_manifest(path: &Path, root: &Url, leaves: &BTreeSet<GalleryPath>) -> Result<usize> {
    let mut contents = String::new();
    for leaf in leaves {
        let url = leaf_url(root, leaf)?;
        contents.push_str(url.as_str());
        contents.push('\n');
    }

    std::fs::write(path, contents).map_err(|source| GalleristError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved {} URLs to {}", leaves.len(), path.display());
    Ok(leaves.len())
}

/// Reads the manifest back as a list of leaf URLs
///
/// Blank lines are skipped; a malformed line is logged and skipped rather
/// than failing the run, since the rest of the manifest is still usable.
pub fn read_manifest(path: &Path) -> Result<Vec<Url>> {
    let contents = std::fs::read_to_string(path)?;

    let mut urls = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Url::parse(line) {
            Ok(url) => urls.push(url),
            Err(e) => tracing::warn!("Skipping malformed manifest line '{}': {}", line, e),
        }
    }

    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{gallery_path, normalize_root};
    use tempfile::tempdir;

    fn root() -> Url {
        normalize_root("https://galleries.example.com/galleries/").unwrap()
    }

    fn leaves(paths: &[&str]) -> BTreeSet<GalleryPath> {
        paths
            .iter()
            .map(|p| {
                let url = root().join(p).unwrap();
                gallery_path(&url, &root()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_write_sorted_and_deduplicated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.txt");

        // Insertion order deliberately scrambled; set handles dedup + sort
        let set = leaves(&["b/c.html", "a/index.html", "b/c.html"]);
        let written = write_manifest(&path, &root(), &set).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "https://galleries.example.com/galleries/a/index.html\n\
             https://galleries.example.com/galleries/b/c.html\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        write_manifest(&path, &root(), &leaves(&["a/index.html"])).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "https://galleries.example.com/galleries/a/index.html\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.txt");

        let set = leaves(&["a/index.html", "b/c.html"]);
        write_manifest(&path, &root(), &set).unwrap();

        let urls = read_manifest(&path).unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls[0].as_str(),
            "https://galleries.example.com/galleries/a/index.html"
        );
    }

    #[test]
    fn test_read_skips_blank_and_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.txt");
        std::fs::write(
            &path,
            "https://galleries.example.com/galleries/a.html\n\nnot a url\n",
        )
        .unwrap();

        let urls = read_manifest(&path).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_empty_manifest_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.txt");

        let written = write_manifest(&path, &root(), &BTreeSet::new()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_manifest_is_error() {
        let dir = tempdir().unwrap();
        assert!(read_manifest(&dir.path().join("missing.txt")).is_err());
    }
}
