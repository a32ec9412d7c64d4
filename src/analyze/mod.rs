//! Repository analysis: README, tree listing, and content dump.
//!
//! [`analyze_repo`] is the single composition entry point. It runs the walker
//! once for the tree listing and then a second, fresh walk for the content
//! dump, with logging scoped to the supplied [`LogConfig`].

mod progress;

use crate::domain::{Config, LogConfig, RepoAnalysis, ScanStats, README_FILE_NAME, README_NOT_FOUND};
use crate::error::{DumpError, Result};
use crate::scan::{ContentExtractor, TreeWalker};
use crate::utils::{read_text_file, repo_display_name};
use progress::Progress;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::EnvFilter;

/// Analyze the repository at `root` and compose the output artifact.
///
/// Logging goes to a subscriber built from `config.log` that is installed
/// only for the duration of this call.
pub fn analyze_repo(root: &Path, config: &Config) -> Result<RepoAnalysis> {
    let subscriber = build_subscriber(&config.log);
    tracing::subscriber::with_default(subscriber, || analyze_in_scope(root, config))
}

/// Build a stderr subscriber from a log config. `RUST_LOG` takes precedence.
pub fn build_subscriber(log: &LogConfig) -> impl Subscriber + Send + Sync + 'static {
    let default_level: LevelFilter = log.level.as_level_filter();
    let filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(log.color)
        .with_env_filter(filter)
        .finish()
}

fn analyze_in_scope(root: &Path, config: &Config) -> Result<RepoAnalysis> {
    if !root.is_dir() {
        return Err(DumpError::InvalidRoot(root.to_path_buf()));
    }
    let repo_name = repo_display_name(root);
    let progress = Progress::new(config.show_progress);

    info!("Fetching README for: {}", repo_name);
    let readme = read_readme(root);

    info!("Building repository structure for: {}", repo_name);
    let mut walker = TreeWalker::new(root, &config.ignore_file)?;
    let mut structure = structure_header(&repo_name);
    let mut paths_listed = 0usize;
    for path in walker.by_ref() {
        paths_listed += 1;
        progress.set_message(format!("Listing {path}"));
        structure.push_str(&path);
        structure.push('\n');
    }

    info!("Collecting file contents for: {}", repo_name);
    let mut extractor = ContentExtractor::new(root, &config.ignore_file)?;
    let mut file_contents = String::new();
    for file in extractor.by_ref() {
        progress.set_message(format!("Reading {}", file.relative_path));
        push_file_block(&mut file_contents, &file.relative_path, &file.content);
    }
    progress.finish();

    let stats = ScanStats {
        paths_listed,
        directories_listed: walker.directories_expanded(),
        directories_unreadable: walker.unreadable_dirs(),
        ..extractor.stats()
    };
    info!(
        "Listed {} paths in {} directories; extracted {} files ({} bytes), skipped {} binary and {} unreadable",
        stats.paths_listed,
        stats.directories_listed,
        stats.files_extracted,
        stats.bytes_extracted,
        stats.files_skipped_binary,
        stats.files_skipped_unreadable,
    );

    Ok(RepoAnalysis {
        instructions: instructions(&repo_name),
        repo_name,
        readme,
        structure,
        file_contents,
        stats,
    })
}

/// Read `README.md` directly under `root`, or the not-found sentinel.
pub fn read_readme(root: &Path) -> String {
    let path = root.join(README_FILE_NAME);
    if path.exists() {
        match read_text_file(&path) {
            Ok(content) => return content,
            Err(err) => warn!(error = %err, "Failed to read README.md"),
        }
    }
    README_NOT_FOUND.to_string()
}

/// Fixed instructional preamble naming the repository.
pub fn instructions(repo_name: &str) -> String {
    format!(
        "Prompt: Analyze the {repo_name} repository to understand its structure, purpose, and functionality. Follow these steps to study the codebase:\n\n"
    )
}

pub fn structure_header(repo_name: &str) -> String {
    format!("Repository structure: {repo_name}\n")
}

fn push_file_block(out: &mut String, relative_path: &str, content: &str) {
    out.push_str("File: ");
    out.push_str(relative_path);
    out.push_str("\nContent:\n");
    out.push_str(content);
    out.push_str("\n\n");
}
