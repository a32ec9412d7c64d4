//! Text content extraction over a fresh walk

use crate::domain::{FileContent, ScanStats};
use crate::error::Result;
use crate::scan::{IgnoreList, TreeWalker};
use crate::utils::{extension_of, is_binary_extension, read_text_file};
use std::path::Path;
use tracing::{debug, warn};

/// Lazy iterator over `(relative path, text)` for every readable text file.
///
/// Binary extensions are skipped with a debug trace, non-regular entries are
/// skipped silently, and read or decode failures are logged and skipped.
/// No per-file failure ends the iteration.
pub struct ContentExtractor {
    walker: TreeWalker,
    stats: ScanStats,
}

impl ContentExtractor {
    pub fn new(root: &Path, ignore_file: &Path) -> Result<Self> {
        let walker = TreeWalker::new(root, ignore_file)?;
        Ok(Self { walker, stats: ScanStats::default() })
    }

    pub fn with_ignore_list(root: &Path, ignore: IgnoreList) -> Self {
        Self {
            walker: TreeWalker::with_ignore_list(root, ignore),
            stats: ScanStats::default(),
        }
    }

    /// Extraction counters so far. Walk counters are folded in.
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            directories_unreadable: self.walker.unreadable_dirs(),
            ..self.stats
        }
    }
}

impl Iterator for ContentExtractor {
    type Item = FileContent;

    fn next(&mut self) -> Option<FileContent> {
        while let Some((path, relative_path)) = self.walker.next_entry() {
            if is_binary_extension(extension_of(&relative_path)) {
                self.stats.files_skipped_binary += 1;
                debug!(path = %relative_path, "Skipping binary file");
                continue;
            }

            if !path.is_file() {
                self.stats.entries_skipped_not_file += 1;
                continue;
            }

            match read_text_file(&path) {
                Ok(content) => {
                    self.stats.files_extracted += 1;
                    self.stats.bytes_extracted += content.len() as u64;
                    return Some(FileContent { relative_path, content });
                }
                Err(err) => {
                    self.stats.files_skipped_unreadable += 1;
                    warn!(path = %relative_path, error = %err, "Failed to read file, skipping");
                }
            }
        }
        None
    }
}
