//! In-memory medium

use std::collections::HashMap;

use super::{MediumError, MediumResult, StorageMedium};

/// In-memory medium with a byte capacity.
///
/// Capacity counts UTF-8 bytes of keys plus values, like a browser's
/// per-origin quota. Mutation calls are counted so tests can assert what
/// the degradation engine did. Also usable as a real non-persistent
/// session medium.
#[derive(Debug)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
    capacity: usize,
    set_calls: usize,
    remove_calls: usize,
    clear_calls: usize,
}

impl MemoryMedium {
    /// Medium holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            set_calls: 0,
            remove_calls: 0,
            clear_calls: 0,
        }
    }

    /// Medium without a practical size limit.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Bytes currently stored (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Number of `set` attempts seen, including rejected ones.
    pub fn set_calls(&self) -> usize {
        self.set_calls
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_calls
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        self.set_calls += 1;
        let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
        let requested = self.used_bytes() - replaced + key.len() + value.len();
        if requested > self.capacity {
            return Err(MediumError::QuotaExceeded {
                requested,
                capacity: self.capacity,
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.remove_calls += 1;
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.clear_calls += 1;
        self.entries.clear();
    }
}
