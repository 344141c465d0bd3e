//! Directory walking functionality
//!
//! Single-threaded, deterministic traversal of the project tree: depth-first
//! with children visited in name-sorted order, symbolic links never followed.
//! Exclude patterns, the depth cap, and the file count cap bound the walk;
//! the size cap bounds hashing cost. An unreadable root is fatal; individual
//! unreadable files are skipped and recorded as warnings.

use crate::core::pipeline::CancelToken;
use crate::error::{Result, ScribeError, Warning, WarningKind};
use crate::models::config::Settings;
use crate::models::descriptor::{FileDescriptor, OVERSIZED_HASH};
use crate::utils::fs::{read_with_timeout, sha256_hex};
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Output of a single walk
#[derive(Debug)]
pub struct WalkOutcome {
    /// Descriptors in traversal order, one per visited file
    pub files: Vec<FileDescriptor>,
    /// Per-file skip warnings accumulated during the walk
    pub warnings: Vec<Warning>,
    /// True when the walk was stopped by a cancellation request
    pub cancelled: bool,
}

/// Walker producing the file descriptor stream
pub struct FileWalker {
    settings: Settings,
}

impl FileWalker {
    /// Create a new walker with the given settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Walk the project tree and produce the descriptor stream
    ///
    /// Fails with an access error when the root is missing or unreadable;
    /// everything below that is non-fatal.
    pub fn walk(&self, cancel: &CancelToken) -> Result<WalkOutcome> {
        let root = &self.settings.root_path;

        // An unreadable root aborts the run before any output is produced
        std::fs::read_dir(root).map_err(|err| ScribeError::access_error(root.clone(), err))?;

        let patterns = self.compile_exclude_patterns()?;
        let timeout = self.settings.read_timeout_ms.map(Duration::from_millis);

        let mut files = Vec::new();
        let mut warnings = Vec::new();
        let mut cancelled = false;

        let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
        if let Some(max_depth) = self.settings.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let iter = walker
            .into_iter()
            .filter_entry(|entry| !is_excluded(root, entry.path(), &patterns));

        for entry in iter {
            // Cancellation is cooperative, checked between files
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| relative_to(root, p))
                        .unwrap_or_else(|| root.clone());
                    warnings.push(Warning::new(
                        path,
                        WarningKind::Unreadable,
                        format!("could not read directory entry: {}", err),
                    ));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(cap) = self.settings.max_files {
                if files.len() >= cap {
                    warnings.push(Warning::new(
                        relative_to(root, entry.path()),
                        WarningKind::Truncated,
                        format!("file count cap of {} reached, traversal stopped", cap),
                    ));
                    break;
                }
            }

            let relative = relative_to(root, entry.path());
            let depth = entry.depth();

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    warnings.push(Warning::new(
                        relative,
                        WarningKind::Unreadable,
                        format!("could not read file metadata: {}", err),
                    ));
                    continue;
                }
            };

            if size > self.settings.max_file_size {
                warnings.push(Warning::new(
                    relative.clone(),
                    WarningKind::Oversized,
                    format!(
                        "file exceeds size cap ({} > {} bytes), content not hashed",
                        size, self.settings.max_file_size
                    ),
                ));
                files.push(FileDescriptor::new(
                    relative,
                    size,
                    OVERSIZED_HASH.to_string(),
                    depth,
                ));
                continue;
            }

            match read_with_timeout(entry.path(), timeout) {
                Ok(Some(bytes)) => {
                    files.push(FileDescriptor::new(relative, size, sha256_hex(&bytes), depth));
                }
                Ok(None) => {
                    warnings.push(Warning::new(
                        relative,
                        WarningKind::TimedOut,
                        format!(
                            "read did not finish within {} ms, file skipped",
                            self.settings.read_timeout_ms.unwrap_or(0)
                        ),
                    ));
                }
                Err(err) => {
                    warnings.push(Warning::new(
                        relative,
                        WarningKind::Unreadable,
                        format!("could not read file: {}", err),
                    ));
                }
            }
        }

        Ok(WalkOutcome {
            files,
            warnings,
            cancelled,
        })
    }

    /// Compile exclude patterns into glob patterns
    fn compile_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(ScribeError::from))
            .collect()
    }
}

/// Check whether a path matches any exclude pattern
///
/// Patterns are matched against the root-relative path and against each
/// individual component, so a bare name like "node_modules" excludes that
/// directory anywhere in the tree.
fn is_excluded(root: &Path, path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() || path == root {
        return false;
    }

    let relative = relative_to(root, path);
    let relative_str = relative.to_string_lossy();

    for pattern in patterns {
        if pattern.matches(&relative_str) {
            return true;
        }
        for component in relative.components() {
            if pattern.matches(&component.as_os_str().to_string_lossy()) {
                return true;
            }
        }
    }
    false
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn settings_for(root: &Path) -> Settings {
        Settings {
            root_path: root.to_path_buf(),
            exclude_patterns: vec!["node_modules".to_string()],
            read_timeout_ms: None,
            ..Settings::default()
        }
    }

    #[test]
    fn test_walk_is_sorted_and_relative() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();

        let walker = FileWalker::new(&settings_for(dir.path()));
        let outcome = walker.walk(&CancelToken::new()).unwrap();

        let paths: Vec<String> = outcome
            .files
            .iter()
            .map(|fd| fd.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, vec!["a.txt", "b.txt", "src/main.rs"]);
        assert!(outcome.warnings.is_empty());
        assert!(!outcome.cancelled);
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/dep.js"), "x").unwrap();
        fs::write(dir.path().join("index.js"), "x").unwrap();

        let walker = FileWalker::new(&settings_for(dir.path()));
        let outcome = walker.walk(&CancelToken::new()).unwrap();

        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.files[0].path, PathBuf::from("index.js"));
    }

    #[test]
    fn test_oversized_file_gets_sentinel_hash_and_warning() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("big.bin"), vec![0u8; 64]).unwrap();

        let mut settings = settings_for(dir.path());
        settings.max_file_size = 16;
        let walker = FileWalker::new(&settings);
        let outcome = walker.walk(&CancelToken::new()).unwrap();

        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.files[0].hash, OVERSIZED_HASH);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::Oversized);
    }

    #[test]
    fn test_missing_root_is_access_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let walker = FileWalker::new(&settings_for(&missing));
        let err = walker.walk(&CancelToken::new()).unwrap_err();
        assert!(matches!(err, ScribeError::Access { .. }));
    }

    #[test]
    fn test_file_cap_truncates_with_warning() {
        let dir = tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let mut settings = settings_for(dir.path());
        settings.max_files = Some(2);
        let walker = FileWalker::new(&settings);
        let outcome = walker.walk(&CancelToken::new()).unwrap();

        assert_eq!(outcome.files.len(), 2);
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::Truncated));
    }

    #[test]
    fn test_cancelled_walk_reports_partial() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();

        let walker = FileWalker::new(&settings_for(dir.path()));
        let outcome = walker.walk(&cancel).unwrap();
        assert!(outcome.cancelled);
        assert!(outcome.files.is_empty());
    }

    #[test]
    fn test_invalid_exclude_pattern_is_fatal() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.exclude_patterns = vec!["[".to_string()];

        let walker = FileWalker::new(&settings);
        let err = walker.walk(&CancelToken::new()).unwrap_err();
        assert!(matches!(err, ScribeError::GlobPattern { .. }));
    }

    #[test]
    fn test_symlinks_are_not_followed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/file.txt"), "x").unwrap();

        #[cfg(unix)]
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let walker = FileWalker::new(&settings_for(dir.path()));
        let outcome = walker.walk(&CancelToken::new()).unwrap();

        // The linked directory is not traversed, so the file appears once
        assert_eq!(
            outcome
                .files
                .iter()
                .filter(|fd| fd.file_name() == "file.txt")
                .count(),
            1
        );
    }
}
