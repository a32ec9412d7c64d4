//! Iterative directory walker
//!
//! Traversal uses an explicit LIFO work stack instead of recursion, so tree
//! depth is bounded by heap rather than call stack. Directories are expanded
//! one listing at a time and entries are yielded as they are read, so the
//! walk never buffers more than the pending-directory stack.
//!
//! Emission order is the filesystem's listing order within a directory, and
//! directories are expanded most-recently-discovered first. Nothing is sorted.

use crate::error::Result;
use crate::scan::IgnoreList;
use crate::utils::join_relative;
use std::collections::HashSet;
use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Lazy iterator over every non-ignored path under a root.
///
/// Yields root-relative path strings for files and directories alike.
pub struct TreeWalker {
    ignore: IgnoreList,
    stack: Vec<(PathBuf, String)>,
    visited: HashSet<String>,
    current: Option<Listing>,
    directories_expanded: usize,
    unreadable_dirs: usize,
}

/// A directory whose entries are being consumed.
struct Listing {
    path: PathBuf,
    relative_path: String,
    entries: ReadDir,
}

impl TreeWalker {
    /// Start a traversal, reading the ignore list from `ignore_file`.
    ///
    /// A missing or unreadable ignore file is fatal.
    pub fn new(root: &Path, ignore_file: &Path) -> Result<Self> {
        let ignore = IgnoreList::load(ignore_file)?;
        Ok(Self::with_ignore_list(root, ignore))
    }

    pub fn with_ignore_list(root: &Path, ignore: IgnoreList) -> Self {
        Self {
            ignore,
            stack: vec![(root.to_path_buf(), String::new())],
            visited: HashSet::new(),
            current: None,
            directories_expanded: 0,
            unreadable_dirs: 0,
        }
    }

    /// Directories successfully listed so far, the root included.
    pub fn directories_expanded(&self) -> usize {
        self.directories_expanded
    }

    /// Directories skipped so far because they could not be listed.
    pub fn unreadable_dirs(&self) -> usize {
        self.unreadable_dirs
    }

    /// Pop the next pending directory and open its listing.
    ///
    /// Returns `false` once the work stack is empty.
    fn open_next_directory(&mut self) -> bool {
        while let Some((path, relative_path)) = self.stack.pop() {
            self.visited.insert(relative_path.clone());
            match fs::read_dir(&path) {
                Ok(entries) => {
                    self.directories_expanded += 1;
                    self.current = Some(Listing { path, relative_path, entries });
                    return true;
                }
                Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                    self.unreadable_dirs += 1;
                    warn!(path = %path.display(), "Permission denied, skipping directory");
                }
                Err(err) => {
                    self.unreadable_dirs += 1;
                    warn!(path = %path.display(), error = %err, "Failed to list directory, skipping");
                }
            }
        }
        false
    }

    /// Advance the walk, yielding the on-disk path with its relative form.
    ///
    /// The relative string is lossy for names that are not valid UTF-8, so
    /// anything that touches the file must use the returned `PathBuf`.
    pub(crate) fn next_entry(&mut self) -> Option<(PathBuf, String)> {
        loop {
            let Some(listing) = self.current.as_mut() else {
                if !self.open_next_directory() {
                    return None;
                }
                continue;
            };

            let entry = match listing.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    warn!(path = %listing.path.display(), error = %err, "Failed to read directory entry");
                    continue;
                }
                None => {
                    self.current = None;
                    continue;
                }
            };

            let relative_path =
                join_relative(&listing.relative_path, &entry.file_name().to_string_lossy());
            if self.ignore.is_ignored(&relative_path) {
                trace!(path = %relative_path, "Ignored");
                continue;
            }

            // Follows symlinks, so a link to a directory is expanded too.
            let path = entry.path();
            let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
            if is_dir && !self.visited.contains(&relative_path) {
                self.stack.push((path.clone(), relative_path.clone()));
            }
            return Some((path, relative_path));
        }
    }
}

impl Iterator for TreeWalker {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_entry().map(|(_, relative_path)| relative_path)
    }
}
