//! Filesystem helpers: bounded reads and content hashing

use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Read a file with an optional timeout
///
/// Returns `Ok(None)` when the read did not finish within the timeout. The
/// reading thread is detached; its result is discarded after the deadline.
pub fn read_with_timeout(path: &Path, timeout: Option<Duration>) -> io::Result<Option<Vec<u8>>> {
    let Some(timeout) = timeout else {
        return std::fs::read(path).map(Some);
    };

    let (sender, receiver) = mpsc::channel();
    let owned = path.to_path_buf();
    thread::spawn(move || {
        let _ = sender.send(std::fs::read(&owned));
    });

    match receiver.recv_timeout(timeout) {
        Ok(Ok(bytes)) => Ok(Some(bytes)),
        Ok(Err(err)) => Err(err),
        Err(_) => Ok(None),
    }
}

/// Hex-encoded SHA-256 of the given bytes
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
