//! Storage medium contract
//!
//! The store persists whole collections as JSON strings through this
//! browser-local-storage shaped interface. `set` is the only fallible
//! operation; [`MediumError::QuotaExceeded`] is the signal the
//! degradation engine acts on. Media load their content up front and
//! serve reads from memory, so `get` cannot fail.

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

use thiserror::Error;

/// Medium failure raised by `set` (and by [`FileMedium::open`]).
#[derive(Debug, Error)]
pub enum MediumError {
    #[error("storage quota exceeded ({requested} bytes requested, capacity {capacity})")]
    QuotaExceeded { requested: usize, capacity: usize },
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt medium file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type MediumResult<T> = Result<T, MediumError>;

/// Synchronous string key-value storage with a finite capacity.
pub trait StorageMedium {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value. The
    /// previous value stays in place when the write is rejected.
    fn set(&mut self, key: &str, value: &str) -> MediumResult<()>;

    /// Remove `key` if present.
    fn remove(&mut self, key: &str);

    /// Drop every key. Last-resort cleanup only.
    fn clear(&mut self);
}
