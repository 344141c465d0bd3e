//! Caching functionality for per-file analysis results
//!
//! The cache maps content hashes to per-file classification outputs so that
//! repeated runs skip re-analysis of unchanged files. It is backed by a JSON
//! file scoped to the project root, loaded at run start and flushed at run
//! end. Lookups and stores are concurrent-safe; entries for a given hash are
//! pure functions of file content, so same-hash races are idempotent.

use crate::analyzers::Contribution;
use crate::error::{Result, ScribeError};
use crate::utils::fs::sha256_hex;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-file classification outputs keyed by content hash
pub type CacheEntry = Contribution;

/// Thread-safe, persistable analysis cache
pub struct AnalysisCache {
    entries: DashMap<String, CacheEntry>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    /// Persistence location; None keeps the cache in memory only
    path: Option<PathBuf>,
}

impl AnalysisCache {
    /// Create an empty in-memory cache (used when caching is disabled)
    pub fn in_memory() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            path: None,
        }
    }

    /// Load a cache from the given file, starting empty when it is missing
    /// or unreadable
    pub fn load(path: PathBuf) -> Self {
        let entries = DashMap::new();

        if let Ok(content) = std::fs::read_to_string(&path) {
            if let Ok(stored) = serde_json::from_str::<BTreeMap<String, CacheEntry>>(&content) {
                for (hash, entry) in stored {
                    entries.insert(hash, entry);
                }
            }
        }

        Self {
            entries,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            path: Some(path),
        }
    }

    /// Look up an entry by content hash, recording a hit or miss
    pub fn lookup(&self, hash: &str) -> Option<CacheEntry> {
        match self.entries.get(hash) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store an entry under a content hash
    pub fn store(&self, hash: &str, entry: CacheEntry) {
        self.entries.insert(hash.to_string(), entry);
    }

    /// Flush the cache to its backing file
    ///
    /// Entries are written as a sorted map, so the on-disk form is stable
    /// across runs; concurrent writers converge last-writer-wins per key.
    pub fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ScribeError::cache_error(format!("create {}: {}", parent.display(), err)))?;
        }

        let sorted: BTreeMap<String, CacheEntry> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let json = serde_json::to_string(&sorted)
            .map_err(|err| ScribeError::cache_error(format!("serialize cache: {}", err)))?;
        std::fs::write(path, json)
            .map_err(|err| ScribeError::cache_error(format!("write {}: {}", path.display(), err)))?;
        Ok(())
    }

    /// Remove all entries and reset statistics
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit and miss counts for this run
    pub fn stats(&self) -> (usize, usize) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    /// Fraction of lookups served from the cache (0.0 when none happened)
    pub fn hit_ratio(&self) -> f64 {
        let (hits, misses) = self.stats();
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

/// Default cache file location for a project root
///
/// The file name is derived from the canonicalized root path, so distinct
/// projects never share a cache file.
pub fn default_cache_path(cache_dir: Option<&Path>, root: &Path) -> Option<PathBuf> {
    let base = match cache_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::cache_dir()?.join("scribe"),
    };

    let canonical = root
        .canonicalize()
        .unwrap_or_else(|_| root.to_path_buf());
    let digest = sha256_hex(canonical.to_string_lossy().as_bytes());
    Some(base.join(format!("{}.json", &digest[..16])))
}
