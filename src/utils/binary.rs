//! Binary extension denylist
//!
//! Files whose extension appears here are listed in the tree but their
//! content is never read. Comparison is exact and case-sensitive: the
//! candidate extension is not lowercased, so `IMAGE.PNG` is not denied.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Executables and libraries
        ".exe", ".dll", ".so", ".dylib", ".o", ".a", ".class", ".jar",
        // Raw data and disk images
        ".bin", ".dat", ".img", ".iso",
        // Documents
        ".pdf",
        // Images
        ".jpg", ".jpeg", ".png", ".gif", ".tif", ".bmp", ".ico", ".webp",
        // Audio and video
        ".avi", ".mp4", ".mov", ".mkv", ".mp3", ".wav", ".flac", ".ogg",
        // Archives
        ".zip", ".rar", ".tar", ".gz", ".7z", ".bz2", ".xz",
        // Fonts
        ".ttf", ".otf", ".woff", ".woff2", ".eot",
    ]
    .into_iter()
    .collect()
});

/// Extension of the final path segment, including the leading dot.
///
/// Returns the empty string when the segment has no dot.
pub fn extension_of(relative_path: &str) -> &str {
    let segment = relative_path
        .rsplit(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(relative_path);
    match segment.rfind('.') {
        Some(idx) => &segment[idx..],
        None => "",
    }
}

pub fn is_binary_extension(extension: &str) -> bool {
    BINARY_EXTENSIONS.contains(extension)
}
