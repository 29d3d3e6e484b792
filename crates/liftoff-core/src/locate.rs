//! Artifact locator
//!
//! Resolves an operator-supplied or manifest-supplied path to a local file,
//! falling back to a same-named file directly in the working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolve `candidate` against `dir`.
///
/// Tries the path as given first, then its basename directly under `dir`.
/// Returns `None` when neither exists.
pub fn find_file(dir: &Path, candidate: &str) -> Option<PathBuf> {
    let direct = dir.join(candidate);
    if direct.is_file() {
        return Some(direct);
    }

    let basename = Path::new(candidate).file_name()?;
    let fallback = dir.join(basename);
    if fallback.is_file() {
        debug!(candidate, fallback = %fallback.display(), "resolved via basename fallback");
        return Some(fallback);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_path_as_given() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("build")).unwrap();
        std::fs::write(temp.path().join("build/pkg.zip"), b"zip").unwrap();

        let found = find_file(temp.path(), "build/pkg.zip").unwrap();
        assert_eq!(found, temp.path().join("build/pkg.zip"));
    }

    #[test]
    fn test_falls_back_to_basename() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pkg.zip"), b"zip").unwrap();

        let found = find_file(temp.path(), "build/pkg.zip").unwrap();
        assert_eq!(found, temp.path().join("pkg.zip"));
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(find_file(temp.path(), "build/pkg.zip").is_none());
    }

    #[test]
    fn test_directory_is_not_a_match() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("pkg.zip")).unwrap();
        assert!(find_file(temp.path(), "pkg.zip").is_none());
    }
}
