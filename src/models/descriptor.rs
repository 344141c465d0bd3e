//! File descriptors produced by the directory walk

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sentinel hash value for files that exceeded the size cap and were
/// recorded without reading their content.
pub const OVERSIZED_HASH: &str = "oversized";

/// Metadata for a single file visited during traversal
///
/// Descriptors are immutable once created; exactly one exists per visited
/// file, with `path` relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Path relative to the project root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Hex-encoded SHA-256 of the content, or [`OVERSIZED_HASH`]
    pub hash: String,

    /// Lowercased extension without the leading dot, if any
    pub extension: Option<String>,

    /// Directory depth below the project root (files in the root have depth 1)
    pub depth: usize,
}

impl FileDescriptor {
    /// Create a new descriptor, deriving the extension from the path
    pub fn new(path: PathBuf, size: u64, hash: String, depth: usize) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        Self {
            path,
            size,
            hash,
            extension,
            depth,
        }
    }

    /// File name component of the path
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    /// Directory containing the file, relative to the project root
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Whether the content was hashed (oversized files are not)
    pub fn is_hashed(&self) -> bool {
        self.hash != OVERSIZED_HASH
    }
}
