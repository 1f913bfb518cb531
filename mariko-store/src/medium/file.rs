//! File-backed medium

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{MediumError, MediumResult, StorageMedium};

/// Single-file medium: the whole key-value map lives in one JSON file,
/// loaded at open and rewritten on every mutation.
///
/// Reads are served from memory. A rejected or failed write leaves both
/// the file and the in-memory map at their previous state.
pub struct FileMedium {
    file_path: PathBuf,
    entries: HashMap<String, String>,
    capacity: usize,
}

impl FileMedium {
    /// Open (or create) the medium at `path` with a byte capacity.
    ///
    /// A missing file starts empty; an unreadable or corrupt file is an
    /// error, so the caller can decide between recovery and starting over.
    pub fn open(path: &Path, capacity: usize) -> MediumResult<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            entries,
            capacity,
        })
    }

    /// Bytes currently stored (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn flush(&self) -> MediumResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
        let requested = self.used_bytes() - replaced + key.len() + value.len();
        if requested > self.capacity {
            return Err(MediumError::QuotaExceeded {
                requested,
                capacity: self.capacity,
            });
        }

        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            // Roll the map back so memory matches the file.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some()
            && let Err(err) = self.flush()
        {
            tracing::warn!(key, error = %err, "Failed to flush medium after remove");
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.flush() {
            tracing::warn!(error = %err, "Failed to flush medium after clear");
        }
    }
}
