//! File system utility functions.
//!
//! Provides simple wrappers around std::path for common path operations.

use std::path::{Path, PathBuf};

/// Get the filename from a path.
pub fn get_file_name(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
}

/// Resolve a path against the current working directory.
/// Absolute paths are returned unchanged.
pub fn absolutize(path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(p))
            .unwrap_or_else(|_| p.to_path_buf())
    }
}
