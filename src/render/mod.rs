//! Rendering and writing the output document

use crate::domain::RepoAnalysis;
use crate::error::{DumpError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render the artifact: preamble, README, tree listing, then file dump.
pub fn render_document(analysis: &RepoAnalysis) -> String {
    let mut out = String::with_capacity(
        analysis.instructions.len()
            + analysis.readme.len()
            + analysis.structure.len()
            + analysis.file_contents.len()
            + 32,
    );
    out.push_str(&analysis.instructions);
    out.push_str("README:\n");
    out.push_str(&analysis.readme);
    out.push_str("\n\n");
    out.push_str(&analysis.structure);
    out.push_str("\n\n");
    out.push_str(&analysis.file_contents);
    out
}

/// Write the rendered artifact to `{output_dir}/{repo}_contents.txt`.
pub fn write_document(analysis: &RepoAnalysis, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(analysis.output_file_name());
    fs::create_dir_all(output_dir)
        .and_then(|_| fs::write(&path, render_document(analysis)))
        .map_err(|source| DumpError::WriteOutput { path: path.clone(), source })?;
    Ok(path)
}
