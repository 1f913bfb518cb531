//! Shared types for the Mariko guest data layer
//!
//! Record models, id/time utilities and input validation rules used by
//! the local store and by any future backend or admin surface.

pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};
