//! Repo-Dump: flatten a repository into a single prompt document
//!
//! This library walks a repository iteratively, filters ignored paths and
//! binary files, and composes the README, a tree listing, and the text of
//! every remaining file into one document for LLM prompting.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;

pub use analyze::analyze_repo;
pub use domain::{Config, LogConfig, LogLevel, RepoAnalysis};
pub use error::{DumpError, Result};
