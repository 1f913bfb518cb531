//! The guest data store
//!
//! [`GuestStore`] wraps a [`StorageMedium`] and exposes the synchronous
//! collection API: profile and review CRUD, the activity log, search,
//! derived statistics, maintenance and snapshot export/import. Reads
//! deserialize the whole collection; writes serialize it back through the
//! staged persistence engine in [`crate::persist`].

mod activity;
mod maintenance;
mod profiles;
mod reviews;
mod snapshot;
mod stats;

pub use maintenance::{StorageInfo, format_bytes};
pub use snapshot::DataSnapshot;
pub use stats::{GenderDistribution, ProfileStats, ReviewStats};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use shared::models::{ActivityRecord, Profile, Review};

use crate::clock::{Clock, SystemClock};
use crate::config::{ACTIVITIES_KEY, PROFILES_KEY, REVIEWS_KEY, StoreConfig};
use crate::medium::StorageMedium;
use crate::persist::{self, PersistOutcome};

/// Quota-bounded store for guest profiles, activity and reviews.
///
/// All operations are synchronous and infallible from the caller's point
/// of view: lookups return `Option`, deletions return `bool`, reads of a
/// missing or unreadable collection return an empty `Vec`. Construct it
/// over a medium, call [`init`](Self::init) once, then use it directly.
pub struct GuestStore<M: StorageMedium> {
    medium: M,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl<M: StorageMedium> GuestStore<M> {
    pub fn new(medium: M, config: StoreConfig) -> Self {
        Self::with_clock(medium, config, SystemClock)
    }

    /// Store with an injected time source. Tests pair this with
    /// [`ManualClock`](crate::clock::ManualClock) to drive retention
    /// windows.
    pub fn with_clock(medium: M, config: StoreConfig, clock: impl Clock + 'static) -> Self {
        Self {
            medium,
            clock: Box::new(clock),
            config,
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// First-run setup plus opportunistic maintenance.
    ///
    /// Creates any missing collection key, seeds the demo reviews when
    /// the review collection has never existed, and runs the age-based
    /// cleanup if none ran within the configured interval. Idempotent;
    /// call it once after construction.
    pub fn init(&mut self) {
        if self.medium.get(PROFILES_KEY).is_none() {
            self.write_profiles(Vec::new());
        }
        if self.medium.get(ACTIVITIES_KEY).is_none() {
            self.write_activities(Vec::new());
        }
        if self.medium.get(REVIEWS_KEY).is_none() {
            let reviews = if self.config.seed_demo_reviews {
                crate::seed::demo_reviews(self.now())
            } else {
                Vec::new()
            };
            if !reviews.is_empty() {
                tracing::info!(count = reviews.len(), "Seeding demo reviews");
            }
            self.write_reviews(reviews);
        }
        self.run_scheduled_cleanup();
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Missing key and unreadable payload both read as empty.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.medium.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(key, error = %err, "Stored collection is unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    pub(crate) fn write_profiles(&mut self, profiles: Vec<Profile>) {
        let plans = persist::profile_stages(profiles, &self.config);
        let outcome = persist::persist_stages(
            &mut self.medium,
            PROFILES_KEY,
            self.config.profiles_budget,
            &plans,
        );
        if outcome == PersistOutcome::Exhausted {
            self.emergency_cleanup();
        }
    }

    pub(crate) fn write_reviews(&mut self, reviews: Vec<Review>) {
        let plans = persist::review_stages(reviews, &self.config);
        let outcome = persist::persist_stages(
            &mut self.medium,
            REVIEWS_KEY,
            self.config.reviews_budget,
            &plans,
        );
        if outcome == PersistOutcome::Exhausted {
            self.emergency_cleanup();
        }
    }

    pub(crate) fn write_activities(&mut self, activities: Vec<ActivityRecord>) {
        let plans = persist::activity_stages(activities, &self.config);
        let outcome = persist::persist_stages(
            &mut self.medium,
            ACTIVITIES_KEY,
            self.config.activity_budget,
            &plans,
        );
        if outcome == PersistOutcome::Exhausted {
            self.emergency_cleanup();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_store;
    use crate::config::{PROFILES_KEY, REVIEWS_KEY};
    use crate::medium::StorageMedium;

    #[test]
    fn init_creates_empty_collections() {
        let (store, _clock) = create_test_store();
        assert_eq!(store.medium().get(PROFILES_KEY).as_deref(), Some("[]"));
        assert_eq!(store.medium().get(REVIEWS_KEY).as_deref(), Some("[]"));
        assert!(store.get_all_profiles().is_empty());
    }

    #[test]
    fn unreadable_collection_reads_as_empty() {
        let (mut store, _clock) = create_test_store();
        store.medium.set(PROFILES_KEY, "{not json").unwrap();
        assert!(store.get_all_profiles().is_empty());
    }
}
