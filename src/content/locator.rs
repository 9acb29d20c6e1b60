//! Article discovery
//!
//! Articles live one-per-directory under the content root. Discovery matches
//! `<root>/<dir>/index.md` exactly one level deep; a subdirectory without the
//! entry file is not an article and is skipped.

use anyhow::{anyhow, bail, Result};
use std::path::{Path, PathBuf};

/// Fixed entry filename each article directory must contain
pub const ENTRY_FILE: &str = "index.md";

/// Find all article entry files directly under the content root.
///
/// Paths come back in glob's sorted order, which keeps discovery order
/// stable across calls. An existing root with no matches yields an empty
/// vector; a missing or unreadable root is an error.
pub fn locate_articles(content_dir: &Path) -> Result<Vec<PathBuf>> {
    if !content_dir.is_dir() {
        bail!("content directory not found: {:?}", content_dir);
    }

    let pattern = content_dir.join("*").join(ENTRY_FILE);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow!("non-UTF-8 content path: {:?}", pattern))?;

    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }

    Ok(paths)
}

/// Derive the slug for an entry file: strip the entry filename and keep the
/// containing directory's name.
pub fn slug_for(path: &Path) -> Result<String> {
    path.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .ok_or_else(|| anyhow!("cannot derive slug from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_locate_matches_entry_files_one_level_deep() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        fs::create_dir(root.join("beta")).unwrap();
        fs::write(root.join("beta").join(ENTRY_FILE), "x").unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("alpha").join(ENTRY_FILE), "x").unwrap();

        // Subdirectory without the entry file: skipped
        fs::create_dir(root.join("notes")).unwrap();
        fs::write(root.join("notes").join("draft.txt"), "x").unwrap();

        // Stray file at the root: not an article
        fs::write(root.join("index.md"), "x").unwrap();

        // Nested two levels down: out of range
        fs::create_dir_all(root.join("alpha").join("deep")).unwrap();
        fs::write(root.join("alpha").join("deep").join(ENTRY_FILE), "x").unwrap();

        let paths = locate_articles(root).unwrap();
        let slugs: Vec<String> = paths.iter().map(|p| slug_for(p).unwrap()).collect();
        assert_eq!(slugs, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_root_yields_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(locate_articles(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(locate_articles(&tmp.path().join("nope")).is_err());
    }

    #[test]
    fn test_slug_for() {
        let slug = slug_for(Path::new("/site/articles/hello-world/index.md")).unwrap();
        assert_eq!(slug, "hello-world");
    }
}
