//! Utility modules for encoding and file paths.

pub mod encoding;
pub mod file_helper;
