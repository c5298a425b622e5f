// src/watch/hash.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

/// Compute the BLAKE3 hash of a single file.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file =
        File::open(path).with_context(|| format!("opening file for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Remembers the last seen content hash of one file.
#[derive(Debug, Default)]
pub struct ContentTracker {
    last: Option<String>,
}

impl ContentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `path` and report whether its content differs from the last
    /// observation. The first observation always counts as a change.
    pub fn observe(&mut self, path: &Path) -> Result<bool> {
        let hash = compute_file_hash(path)?;
        if self.last.as_deref() == Some(hash.as_str()) {
            debug!(?path, "content unchanged");
            return Ok(false);
        }
        debug!(?path, hash = %hash, "content changed");
        self.last = Some(hash);
        Ok(true)
    }

    pub fn last_hash(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
