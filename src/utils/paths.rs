//! Path helpers

use std::path::Path;

/// Join a root-relative directory path and an entry name.
///
/// The root itself is the empty string, so its children carry no prefix.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        Path::new(parent).join(name).to_string_lossy().into_owned()
    }
}

/// Display name of a repository: the final segment of its root path.
///
/// Falls back to the canonicalized root for paths like `.`, then to `"repo"`.
pub fn repo_display_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "repo".to_string())
}
