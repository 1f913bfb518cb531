//! Data models
//!
//! The three record families held by the local guest store. Fields
//! serialize in `camelCase` and enums in lowercase so collections written
//! by earlier client builds parse unchanged. Record IDs are strings of
//! the form `{prefix}_{millis}_{9 base36 chars}` (see `util::record_id`).

pub mod activity;
pub mod profile;
pub mod review;

// Re-exports
pub use activity::*;
pub use profile::*;
pub use review::*;
