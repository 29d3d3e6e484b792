//! Changelog reader
//!
//! Loads free-text release notes. The first line is treated as a title and
//! stripped only when it starts with a markdown heading marker.

use std::path::Path;

use tracing::warn;

/// Read release notes from a changelog file.
///
/// If the first line starts with `"# "` it is dropped; the remainder is
/// returned trimmed. A missing file produces one warning and an empty string.
pub fn read_changelog(path: &Path) -> String {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            warn!(path = %path.display(), "changelog not found");
            return String::new();
        }
    };

    strip_title(&content)
}

fn strip_title(content: &str) -> String {
    let content = content.trim();
    match content.split_once('\n') {
        Some((first, rest)) if first.starts_with("# ") => rest.trim().to_string(),
        None if content.starts_with("# ") => String::new(),
        _ => content.to_string(),
    }
}
