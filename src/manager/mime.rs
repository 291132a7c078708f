//! MIME type lookup by file extension.

use std::path::Path;

pub const UNKNOWN_MIME: &str = "unknown/type";
pub const FOLDER_MIME: &str = "folder";

/// MIME type registered for the extension of `path`, or `unknown/type`.
pub fn file_mime_type(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| mime_guess::from_ext(ext).first())
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| UNKNOWN_MIME.to_string())
}
