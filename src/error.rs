//! Fatal errors that abort an analysis.
//!
//! Per-file and per-directory failures are not represented here: they are
//! logged and skipped at the item boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to read ignore file: {path}")]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid repository path: {0} is not a directory")]
    InvalidRoot(PathBuf),

    #[error("Failed to write output file: {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type Result<T> = std::result::Result<T, DumpError>;
