//! Backup snapshot export and import

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{ActivityRecord, Profile, Review};

use crate::medium::StorageMedium;
use crate::store::GuestStore;

/// Point-in-time copy of all three collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub profiles: Vec<Profile>,
    pub activities: Vec<ActivityRecord>,
    pub reviews: Vec<Review>,
    pub exported_at: DateTime<Utc>,
}

impl<M: StorageMedium> GuestStore<M> {
    pub fn export_data(&self) -> DataSnapshot {
        DataSnapshot {
            profiles: self.get_all_profiles(),
            activities: self.all_activities(),
            reviews: self.get_all_reviews(),
            exported_at: self.now(),
        }
    }

    /// Overwrites profiles and the activity log from `snapshot`. The
    /// stored reviews are left as they are; the restore path does not
    /// cover them.
    pub fn import_data(&mut self, snapshot: &DataSnapshot) {
        tracing::info!(
            profiles = snapshot.profiles.len(),
            activities = snapshot.activities.len(),
            "Importing backup snapshot"
        );
        self.write_profiles(snapshot.profiles.clone());
        self.write_activities(snapshot.activities.clone());
    }

    /// Parses a serialized snapshot and imports it. Returns `false`
    /// without touching the medium when `raw` does not parse as a full
    /// snapshot.
    pub fn import_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<DataSnapshot>(raw) {
            Ok(snapshot) => {
                self.import_data(&snapshot);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rejected malformed backup snapshot");
                false
            }
        }
    }
}
