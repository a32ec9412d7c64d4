//! Repository traversal and text extraction
//!
//! Both stages are lazy iterators. Each call to [`walk`] or
//! [`extract_contents`] re-reads the ignore file and starts a fresh,
//! independent traversal.

use crate::error::Result;
use std::path::Path;

pub mod extractor;
pub mod ignore_list;
pub mod walker;

pub use extractor::ContentExtractor;
pub use ignore_list::IgnoreList;
pub use walker::TreeWalker;

/// Walk `root`, yielding every non-ignored relative path.
pub fn walk<P: AsRef<Path>>(root: P, ignore_file: &Path) -> Result<TreeWalker> {
    TreeWalker::new(root.as_ref(), ignore_file)
}

/// Walk `root`, yielding the text of every non-binary, readable file.
pub fn extract_contents<P: AsRef<Path>>(root: P, ignore_file: &Path) -> Result<ContentExtractor> {
    ContentExtractor::new(root.as_ref(), ignore_file)
}
