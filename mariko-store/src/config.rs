//! Store configuration
//!
//! Budgets and caps default to the limits of the browser local storage
//! deployment (roughly 5 MB per origin).

/// Fixed medium keys. Shared with collections written by earlier client
/// builds; do not change.
pub const PROFILES_KEY: &str = "mariko_user_profiles";
pub const ACTIVITIES_KEY: &str = "mariko_user_activities";
pub const REVIEWS_KEY: &str = "mariko_reviews";
pub const LAST_CLEANUP_KEY: &str = "mariko_last_cleanup";

/// Byte budgets, collection caps and retention policy.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Serialized profiles budget before degradation kicks in.
    pub profiles_budget: usize,
    /// Serialized reviews budget.
    pub reviews_budget: usize,
    /// Serialized activity log budget.
    pub activity_budget: usize,
    /// Hard FIFO cap on activity records, applied before any byte check.
    pub activity_cap: usize,
    /// Profile degradation, first stage: newest N by last login.
    pub profile_stage_keep: usize,
    /// Profile degradation, second stage: reduced projection of the
    /// newest N with placeholder-looking photos dropped.
    pub profile_essential_keep: usize,
    /// Review degradation: newest N by creation date (pending reviews
    /// are kept on top of the window).
    pub review_stage_keep: usize,
    /// Activity degradation: most recent N records.
    pub activity_stage_keep: usize,
    /// Emergency cleanup: reviews kept.
    pub emergency_review_keep: usize,
    /// Emergency cleanup: profiles kept, photos stripped.
    pub emergency_profile_keep: usize,
    /// Age-based cleanup drops profiles and activity older than this.
    pub retention_days: i64,
    /// Minimum hours between opportunistic cleanups at init.
    pub cleanup_interval_hours: i64,
    /// Seed the demo review dataset on a true first run.
    pub seed_demo_reviews: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            profiles_budget: 4_718_592, // 4.5 MiB
            reviews_budget: 2 * 1024 * 1024,
            activity_budget: 1024 * 1024,
            activity_cap: 200,
            profile_stage_keep: 100,
            profile_essential_keep: 50,
            review_stage_keep: 100,
            activity_stage_keep: 100,
            emergency_review_keep: 30,
            emergency_profile_keep: 20,
            retention_days: 30,
            cleanup_interval_hours: 24,
            seed_demo_reviews: true,
        }
    }
}
