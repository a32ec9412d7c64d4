//! repo-dump: flatten a repository into a single prompt document
//!
//! Writes `{repo}_contents.txt` containing the README, the directory tree,
//! and the contents of every non-binary file not listed in the ignore file.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    repo_dump::cli::run()
}
