//! Exact-match ignore list

use crate::error::{DumpError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Relative paths excluded from traversal.
///
/// Matching is full-string equality against the root-relative path, with
/// no glob or prefix semantics. Nested paths are excluded only because the
/// walker never descends into an ignored directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: HashSet<String>,
}

impl IgnoreList {
    /// Read an ignore file: one path per line, trimmed, blank lines dropped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| DumpError::IgnoreFile { path: path.to_path_buf(), source })?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        Self::from_entries(text.lines())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.entries.contains(relative_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
