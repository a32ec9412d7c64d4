//! Strict UTF-8 text reads

use encoding_rs::UTF_8;
use std::fs;
use std::io;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// Malformed input is an `InvalidData` error rather than being replaced.
/// A leading BOM is kept as U+FEFF. Line endings are normalized to `\n`.
pub fn read_text_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let text = UTF_8.decode_without_bom_handling_and_without_replacement(&bytes).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
    })?;
    Ok(normalize_newlines(&text))
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
