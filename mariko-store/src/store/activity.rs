//! Activity log
//!
//! Append-only record of profile and review mutations. The log is capped
//! by record count before the byte-budget checks run, so it stays bounded
//! even on a roomy medium.

use serde_json::Value;
use shared::models::ActivityRecord;
use shared::util::record_id;

use crate::config::ACTIVITIES_KEY;
use crate::medium::StorageMedium;
use crate::store::GuestStore;

/// Structured payloads are serialized and cut to this many characters.
/// String payloads are stored verbatim.
const DATA_MAX_CHARS: usize = 200;

impl<M: StorageMedium> GuestStore<M> {
    /// Appends one record, evicting the oldest past the configured cap.
    pub fn log_activity(&mut self, user_id: &str, action: &str, data: Option<Value>) {
        let data = data.map(|value| match value {
            Value::String(text) => text,
            other => truncate_chars(&other.to_string(), DATA_MAX_CHARS),
        });

        let mut activities = self.all_activities();
        activities.push(ActivityRecord {
            id: record_id("activity"),
            user_id: user_id.to_string(),
            action: action.to_string(),
            timestamp: self.now(),
            data,
        });

        if activities.len() > self.config.activity_cap {
            let excess = activities.len() - self.config.activity_cap;
            activities.drain(..excess);
        }

        self.write_activities(activities);
    }

    /// One user's records, newest first.
    pub fn get_user_activity(&self, user_id: &str) -> Vec<ActivityRecord> {
        let mut records: Vec<ActivityRecord> = self
            .all_activities()
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }

    /// The whole log in insertion order.
    pub(crate) fn all_activities(&self) -> Vec<ActivityRecord> {
        self.read_collection(ACTIVITIES_KEY)
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
