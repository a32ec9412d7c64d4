//! Core domain types and models
//!
//! Defines Config, LogConfig, FileContent, ScanStats and the composed
//! RepoAnalysis artifact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Default name of the ignore file, resolved relative to the working directory.
pub const DEFAULT_IGNORE_FILE: &str = "ignore.txt";

/// The only README the analyzer looks for, directly under the root.
pub const README_FILE_NAME: &str = "README.md";

/// Substituted for the README section when no README could be read.
pub const README_NOT_FOUND: &str = "README.md not found.";

/// Log verbosity for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Logger settings passed explicitly into an analysis.
///
/// Each analysis installs its own subscriber from this value for its
/// duration, so nothing here is process-global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Emit ANSI colors in log lines
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LogLevel::Info, color: true }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository root. Prompted for interactively when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Ignore list file, one relative path per line
    #[serde(default = "default_ignore_file")]
    pub ignore_file: PathBuf,

    /// Directory that receives `{repo}_contents.txt`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Wait for Enter before the process exits
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,

    /// Show a spinner on stderr while walking and reading
    #[serde(default = "default_true")]
    pub show_progress: bool,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            ignore_file: default_ignore_file(),
            output_dir: default_output_dir(),
            pause_on_exit: true,
            show_progress: true,
            log: LogConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_ignore_file() -> PathBuf {
    PathBuf::from(DEFAULT_IGNORE_FILE)
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// A text file read during content extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Path relative to repository root
    pub relative_path: String,

    /// Full decoded text
    pub content: String,
}

/// Counters gathered while walking and extracting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Paths emitted by the tree listing walk
    pub paths_listed: usize,

    /// Directories expanded by the tree listing walk
    pub directories_listed: usize,

    /// Directories whose listing failed and were skipped
    pub directories_unreadable: usize,

    /// Files whose text made it into the content dump
    pub files_extracted: usize,

    /// Files skipped by the binary extension denylist
    pub files_skipped_binary: usize,

    /// Files skipped because they failed to read or decode
    pub files_skipped_unreadable: usize,

    /// Walked entries that were not regular files (directories, sockets, ...)
    pub entries_skipped_not_file: usize,

    /// Bytes of text extracted
    pub bytes_extracted: u64,
}

/// The composed output artifact, one field per section.
#[derive(Debug, Clone)]
pub struct RepoAnalysis {
    pub repo_name: String,
    pub instructions: String,
    pub readme: String,
    pub structure: String,
    pub file_contents: String,
    pub stats: ScanStats,
}

impl RepoAnalysis {
    /// Name of the file the artifact is written to.
    pub fn output_file_name(&self) -> String {
        format!("{}_contents.txt", self.repo_name)
    }
}
