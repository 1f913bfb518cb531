//! Maintenance: age-based cleanup, emergency cleanup, storage info

use chrono::Duration;
use serde::Serialize;

use crate::config::{ACTIVITIES_KEY, LAST_CLEANUP_KEY, PROFILES_KEY, REVIEWS_KEY};
use crate::medium::StorageMedium;
use crate::store::GuestStore;

/// Raw byte sizes and record counts of the stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub profiles_bytes: usize,
    pub activities_bytes: usize,
    pub reviews_bytes: usize,
    pub total_bytes: usize,
    pub profiles_count: usize,
    pub activities_count: usize,
    pub reviews_count: usize,
}

impl<M: StorageMedium> GuestStore<M> {
    /// Runs [`cleanup_old_data`](Self::cleanup_old_data) if none ran
    /// within the configured interval, tracked under its own medium key.
    /// A missing or unparsable timestamp counts as "never ran".
    pub(crate) fn run_scheduled_cleanup(&mut self) {
        let now_ms = self.now().timestamp_millis();
        let interval_ms = self.config.cleanup_interval_hours * 60 * 60 * 1000;

        let due = match self.medium.get(LAST_CLEANUP_KEY) {
            Some(raw) => raw.parse::<i64>().map_or(true, |last| last < now_ms - interval_ms),
            None => true,
        };
        if !due {
            return;
        }

        tracing::info!("Running scheduled data cleanup");
        self.cleanup_old_data();
        if let Err(err) = self.medium.set(LAST_CLEANUP_KEY, &now_ms.to_string()) {
            tracing::warn!(error = %err, "Failed to record the cleanup timestamp");
        }
    }

    /// Drops profiles and activity records older than the retention
    /// window. Reviews are never age-evicted.
    pub fn cleanup_old_data(&mut self) {
        let cutoff = self.now() - Duration::days(self.config.retention_days);

        let mut profiles = self.get_all_profiles();
        let before = profiles.len();
        profiles.retain(|p| p.last_login > cutoff);
        if profiles.len() < before {
            tracing::info!(removed = before - profiles.len(), "Removed inactive profiles");
            self.write_profiles(profiles);
        }

        let mut activities = self.all_activities();
        let before = activities.len();
        activities.retain(|a| a.timestamp > cutoff);
        if activities.len() < before {
            tracing::info!(removed = before - activities.len(), "Removed old activity records");
            self.write_activities(activities);
        }
    }

    /// Frees space when every degradation stage was rejected: the
    /// activity log is dropped, reviews are cut to the newest few,
    /// profiles are cut to the most recently seen with photos stripped.
    /// If the medium rejects even that, everything is wiped.
    pub(crate) fn emergency_cleanup(&mut self) {
        tracing::warn!("Storage exhausted, running emergency cleanup");

        self.medium.remove(ACTIVITIES_KEY);

        let mut reviews = self.get_all_reviews();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews.truncate(self.config.emergency_review_keep);
        let reviews_kept = reviews.len();
        if !self.emergency_write(REVIEWS_KEY, &reviews) {
            return;
        }

        let mut profiles = self.get_all_profiles();
        profiles.sort_by(|a, b| b.last_login.cmp(&a.last_login));
        profiles.truncate(self.config.emergency_profile_keep);
        for profile in &mut profiles {
            profile.photo.clear();
        }
        let profiles_kept = profiles.len();
        if !self.emergency_write(PROFILES_KEY, &profiles) {
            return;
        }

        tracing::warn!(profiles_kept, reviews_kept, "Emergency cleanup finished");
    }

    /// Any failure here wipes the medium outright.
    fn emergency_write<T: Serialize>(&mut self, key: &str, records: &[T]) -> bool {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(key, error = %err, "Emergency serialization failed, wiping storage");
                self.medium.clear();
                return false;
            }
        };
        if let Err(err) = self.medium.set(key, &payload) {
            tracing::error!(key, error = %err, "Emergency write failed, wiping storage");
            self.medium.clear();
            return false;
        }
        true
    }

    /// Drops all stored reviews and reseeds the demo dataset when
    /// seeding is enabled.
    pub fn reset_reviews(&mut self) {
        self.medium.remove(REVIEWS_KEY);
        let reviews = if self.config.seed_demo_reviews {
            crate::seed::demo_reviews(self.now())
        } else {
            Vec::new()
        };
        tracing::info!(count = reviews.len(), "Reset the review collection");
        self.write_reviews(reviews);
    }

    /// Sizes and counts of the stored collections, as persisted right
    /// now. A missing key reads as an empty collection.
    pub fn storage_info(&self) -> StorageInfo {
        let profiles = self.medium.get(PROFILES_KEY).unwrap_or_else(|| "[]".to_string());
        let activities = self.medium.get(ACTIVITIES_KEY).unwrap_or_else(|| "[]".to_string());
        let reviews = self.medium.get(REVIEWS_KEY).unwrap_or_else(|| "[]".to_string());

        StorageInfo {
            profiles_bytes: profiles.len(),
            activities_bytes: activities.len(),
            reviews_bytes: reviews.len(),
            total_bytes: profiles.len() + activities.len() + reviews.len(),
            profiles_count: count_records(&profiles),
            activities_count: count_records(&activities),
            reviews_count: count_records(&reviews),
        }
    }
}

fn count_records(raw: &str) -> usize {
    serde_json::from_str::<Vec<serde_json::Value>>(raw).map_or(0, |records| records.len())
}

/// `1536` -> `"1.5 KB"`. Units go up to MB; trailing zeros are trimmed.
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exponent])
}
