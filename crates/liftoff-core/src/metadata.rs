//! Project metadata reader
//!
//! Pulls release defaults out of `package.json`. Absence or malformed
//! content is never fatal; the caller just gets empty defaults.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Release defaults taken from the project manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Declared version, or empty if absent
    pub version: String,

    /// Relative path of the primary artifact, or empty if absent
    pub main: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    version: String,
    #[serde(default)]
    main: String,
}

/// Read `version` and `main` from a `package.json` file.
///
/// A missing or unparseable file produces one warning and empty defaults.
pub fn read_metadata(path: &Path) -> ProjectMetadata {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            warn!(path = %path.display(), "project manifest not found");
            return ProjectMetadata::default();
        }
    };

    match serde_json::from_str::<Manifest>(&content) {
        Ok(manifest) => ProjectMetadata {
            version: manifest.version,
            main: manifest.main,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse project manifest");
            ProjectMetadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_metadata() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "windui", "version": "1.6.2", "main": "dist/main.lua"}"#,
        )
        .unwrap();

        let meta = read_metadata(&path);
        assert_eq!(meta.version, "1.6.2");
        assert_eq!(meta.main, "dist/main.lua");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(&path, r#"{"name": "windui"}"#).unwrap();

        let meta = read_metadata(&path);
        assert_eq!(meta, ProjectMetadata::default());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let meta = read_metadata(&temp.path().join("package.json"));
        assert_eq!(meta, ProjectMetadata::default());
    }

    #[test]
    fn test_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(&path, "{not json").unwrap();

        let meta = read_metadata(&path);
        assert_eq!(meta, ProjectMetadata::default());
    }
}
