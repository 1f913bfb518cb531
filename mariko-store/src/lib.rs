//! Local persistent store for the Mariko guest app
//!
//! Keeps guest profiles, activity records and reviews in a quota-bounded
//! synchronous string key-value medium (browser local storage behind a
//! bridge, a cloud KV tier, or a local JSON file). The store owns
//! serialization, ids, timestamps, per-collection byte budgets, staged
//! degradation under quota pressure, emergency cleanup, age-based
//! retention, derived statistics, search and snapshot export/import.
//!
//! | Module    | Role                                               |
//! |-----------|----------------------------------------------------|
//! | `medium`  | Key-value contract and the built-in media          |
//! | `store`   | [`GuestStore`]: CRUD, search, stats, maintenance   |
//! | `persist` | Byte budgets and ordered degradation stages        |
//! | `config`  | Budgets, caps and retention knobs                  |
//! | `clock`   | Time source (system, or manual for tests)          |
//!
//! The store is constructed explicitly (`GuestStore::new` + `init()`) and
//! injected into its consumers; there is no ambient singleton, and
//! dropping it releases everything it holds. The public surface never
//! panics and never returns `Result`: lookups yield `Option`, deletions
//! and imports yield `bool`, list reads yield an empty `Vec` when the
//! stored collection is corrupt. Writes are best-effort: quota exhaustion
//! degrades the stored data instead of failing the caller. This layer is
//! a client-side cache, not a system of record.
//!
//! Every mutation rewrites the whole collection. That caps the workable
//! scale at a few hundred records per collection and in exchange keeps
//! count-based eviction semantics exact. Within one
//! store the model is single-threaded and synchronous with
//! read-your-writes consistency. Two processes sharing one medium (e.g.
//! two browser tabs) are not coordinated: whole-collection writes
//! interleave and the last write wins. Known limitation.

pub mod clock;
pub mod config;
pub mod medium;
pub mod persist;
pub mod store;

mod seed;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::StoreConfig;
pub use medium::{FileMedium, MediumError, MediumResult, MemoryMedium, StorageMedium};
pub use store::{
    DataSnapshot, GenderDistribution, GuestStore, ProfileStats, ReviewStats, StorageInfo,
    format_bytes,
};
