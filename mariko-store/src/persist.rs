//! Collection persistence: byte budgets and degradation stages
//!
//! Every whole-collection write runs through [`persist_stages`]: the full
//! payload is checked against the collection budget first, then each
//! degradation stage is attempted in order until the medium accepts one.
//! Stage lists are plain data built by the `*_stages` functions, so each
//! prune rule is testable on its own.

use serde::Serialize;
use shared::models::{ActivityRecord, Profile, Review, ReviewStatus};

use crate::config::StoreConfig;
use crate::medium::{MediumError, StorageMedium};

/// Inline data-URI photos beyond this size count as placeholder-sized
/// payloads for the reduced profile projection.
const INLINE_PHOTO_LIMIT: usize = 64 * 1024;

/// Marker carried by the hosted placeholder avatar URL.
const PLACEHOLDER_MARKER: &str = "TEMP";

/// One prune rule: a name for the logs plus the records it keeps.
pub struct StagePlan<T> {
    pub name: &'static str,
    pub records: Vec<T>,
}

/// What a staged write ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Full payload stored within budget.
    Stored,
    /// A degradation stage was stored instead of the full payload.
    Degraded,
    /// Every stage hit the quota; the caller must run emergency cleanup.
    Exhausted,
    /// A non-quota medium error stopped the write.
    Aborted,
}

/// Write `plans[0]` if it fits `budget`, otherwise walk the remaining
/// stages until the medium accepts one.
pub fn persist_stages<T: Serialize>(
    medium: &mut dyn StorageMedium,
    key: &str,
    budget: usize,
    plans: &[StagePlan<T>],
) -> PersistOutcome {
    for (i, plan) in plans.iter().enumerate() {
        let payload = match serde_json::to_string(&plan.records) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(key, stage = plan.name, error = %err, "Failed to serialize collection");
                return PersistOutcome::Aborted;
            }
        };

        if i == 0 && payload.len() > budget {
            tracing::warn!(
                key,
                size = payload.len(),
                budget,
                "Collection over budget, degrading"
            );
            continue;
        }

        match medium.set(key, &payload) {
            Ok(()) => {
                if i == 0 {
                    return PersistOutcome::Stored;
                }
                tracing::warn!(
                    key,
                    stage = plan.name,
                    kept = plan.records.len(),
                    "Stored degraded collection"
                );
                return PersistOutcome::Degraded;
            }
            Err(MediumError::QuotaExceeded { .. }) => {
                tracing::warn!(key, stage = plan.name, "Quota exceeded, trying next stage");
            }
            Err(err) => {
                tracing::error!(key, stage = plan.name, error = %err, "Medium error while persisting");
                return PersistOutcome::Aborted;
            }
        }
    }

    tracing::error!(key, "All persistence stages exhausted");
    PersistOutcome::Exhausted
}

/// Stage list for the profiles collection: full payload, then the newest
/// `profile_stage_keep` by last login, then a reduced projection of the
/// newest `profile_essential_keep` with placeholder-looking photos
/// dropped.
pub fn profile_stages(profiles: Vec<Profile>, config: &StoreConfig) -> Vec<StagePlan<Profile>> {
    let mut by_last_login = profiles.clone();
    by_last_login.sort_by(|a, b| b.last_login.cmp(&a.last_login));

    let recent: Vec<Profile> = by_last_login
        .iter()
        .take(config.profile_stage_keep)
        .cloned()
        .collect();

    let essential: Vec<Profile> = by_last_login
        .into_iter()
        .take(config.profile_essential_keep)
        .map(|mut profile| {
            if photo_is_placeholder(&profile.photo) {
                profile.photo = String::new();
            }
            profile
        })
        .collect();

    vec![
        StagePlan { name: "full", records: profiles },
        StagePlan { name: "recent", records: recent },
        StagePlan { name: "essential", records: essential },
    ]
}

/// Stage list for the reviews collection: full payload, then the newest
/// `review_stage_keep` by creation date plus every pending review,
/// deduplicated by id. Pending work never falls out through degradation.
pub fn review_stages(reviews: Vec<Review>, config: &StoreConfig) -> Vec<StagePlan<Review>> {
    let mut by_created = reviews.clone();
    by_created.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut pruned: Vec<Review> = by_created
        .iter()
        .take(config.review_stage_keep)
        .cloned()
        .collect();
    for review in &by_created {
        if review.status == ReviewStatus::Pending && !pruned.iter().any(|r| r.id == review.id) {
            pruned.push(review.clone());
        }
    }

    vec![
        StagePlan { name: "full", records: reviews },
        StagePlan { name: "recent-and-pending", records: pruned },
    ]
}

/// Stage list for the activity log: full payload, then the most recent
/// `activity_stage_keep` records. The log is insertion-ordered, so recency
/// is the tail.
pub fn activity_stages(
    activities: Vec<ActivityRecord>,
    config: &StoreConfig,
) -> Vec<StagePlan<ActivityRecord>> {
    let keep = config.activity_stage_keep;
    let recent: Vec<ActivityRecord> = if activities.len() > keep {
        activities[activities.len() - keep..].to_vec()
    } else {
        activities.clone()
    };

    vec![
        StagePlan { name: "full", records: activities },
        StagePlan { name: "recent", records: recent },
    ]
}

/// Placeholder-looking photo payloads: the hosted placeholder avatar, or
/// an oversized inline data URI.
pub fn photo_is_placeholder(photo: &str) -> bool {
    photo.contains(PLACEHOLDER_MARKER)
        || (photo.starts_with("data:") && photo.len() > INLINE_PHOTO_LIMIT)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use shared::models::{DEFAULT_PHOTO, Sentiment};

    use super::*;
    use crate::medium::MemoryMedium;

    fn base_time() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    fn create_test_profile(n: i64) -> Profile {
        let t = base_time() + Duration::minutes(n);
        Profile {
            id: format!("user_{n}"),
            telegram_id: None,
            name: format!("Гость {n}"),
            phone: String::new(),
            birth_date: String::new(),
            gender: String::new(),
            photo: DEFAULT_PHOTO.to_string(),
            bonus_points: 0,
            notifications_enabled: true,
            selected_restaurant: String::new(),
            created_at: t,
            updated_at: t,
            last_login: t,
        }
    }

    fn create_test_review(n: i64, status: ReviewStatus) -> Review {
        Review {
            id: format!("review_{n}"),
            user_id: format!("user_{n}"),
            user_name: format!("Гость {n}"),
            user_phone: String::new(),
            restaurant_id: "nn-rozh".to_string(),
            restaurant_name: "Хачапури Марико".to_string(),
            restaurant_address: String::new(),
            rating: 4,
            text: "Очень вкусные хачапури!".to_string(),
            sentiment: Sentiment::Positive,
            status,
            is_public: true,
            manager_response: None,
            created_at: base_time() + Duration::minutes(n),
            processed_at: None,
        }
    }

    fn create_test_activity(n: i64) -> ActivityRecord {
        ActivityRecord {
            id: format!("activity_{n}"),
            user_id: "user_1".to_string(),
            action: "profile_updated".to_string(),
            timestamp: base_time() + Duration::seconds(n),
            data: None,
        }
    }

    #[test]
    fn profile_stages_keep_newest_by_last_login() {
        let profiles: Vec<Profile> = (0..150).map(create_test_profile).collect();
        let stages = profile_stages(profiles, &StoreConfig::default());

        assert_eq!(stages[0].records.len(), 150);
        assert_eq!(stages[1].records.len(), 100);
        // Newest last_login first; profile 149 is the most recent.
        assert_eq!(stages[1].records[0].id, "user_149");
        assert_eq!(stages[1].records.last().unwrap().id, "user_50");
        assert_eq!(stages[2].records.len(), 50);
    }

    #[test]
    fn essential_stage_drops_placeholder_photos_only() {
        let mut profiles: Vec<Profile> = (0..3).map(create_test_profile).collect();
        profiles[0].photo = "https://example.com/real.jpg".to_string();
        profiles[1].photo = format!("data:image/jpeg;base64,{}", "A".repeat(INLINE_PHOTO_LIMIT));

        let stages = profile_stages(profiles, &StoreConfig::default());
        let essential = &stages[2].records;

        let real = essential.iter().find(|p| p.id == "user_0").unwrap();
        assert_eq!(real.photo, "https://example.com/real.jpg");
        let inline = essential.iter().find(|p| p.id == "user_1").unwrap();
        assert_eq!(inline.photo, "");
        let placeholder = essential.iter().find(|p| p.id == "user_2").unwrap();
        assert_eq!(placeholder.photo, "");
    }

    #[test]
    fn review_stage_keeps_every_pending_review() {
        // 20 old pending reviews buried under 110 newer processed ones.
        let mut reviews: Vec<Review> = (0..20)
            .map(|n| create_test_review(n, ReviewStatus::Pending))
            .collect();
        reviews.extend((20..130).map(|n| create_test_review(n, ReviewStatus::Processed)));

        let stages = review_stages(reviews, &StoreConfig::default());
        let pruned = &stages[1].records;

        // Newest 100 plus the 20 pending stragglers, no duplicates.
        assert_eq!(pruned.len(), 120);
        for n in 0..20 {
            assert!(pruned.iter().any(|r| r.id == format!("review_{n}")));
        }
        let mut ids: Vec<&str> = pruned.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 120);
    }

    #[test]
    fn activity_stage_keeps_the_tail() {
        let activities: Vec<ActivityRecord> = (0..150).map(create_test_activity).collect();
        let stages = activity_stages(activities, &StoreConfig::default());

        assert_eq!(stages[1].records.len(), 100);
        assert_eq!(stages[1].records[0].id, "activity_50");
        assert_eq!(stages[1].records.last().unwrap().id, "activity_149");
    }

    #[test]
    fn over_budget_payload_degrades_without_error() {
        let mut medium = MemoryMedium::unbounded();
        let profiles: Vec<Profile> = (0..10).map(create_test_profile).collect();
        let config = StoreConfig {
            profiles_budget: 512, // small enough that the full payload is over budget
            profile_stage_keep: 3,
            ..StoreConfig::default()
        };

        let plans = profile_stages(profiles, &config);
        let outcome = persist_stages(&mut medium, "mariko_user_profiles", config.profiles_budget, &plans);

        assert_eq!(outcome, PersistOutcome::Degraded);
        let stored: Vec<Profile> =
            serde_json::from_str(&medium.get("mariko_user_profiles").unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn quota_rejections_walk_the_stage_list() {
        // Capacity fits the essential stage but not the first two.
        let profiles: Vec<Profile> = (0..40).map(create_test_profile).collect();
        let config = StoreConfig {
            profile_stage_keep: 30,
            profile_essential_keep: 2,
            ..StoreConfig::default()
        };

        let plans = profile_stages(profiles.clone(), &config);
        let essential_size = serde_json::to_string(&plans[2].records).unwrap().len();
        let recent_size = serde_json::to_string(&plans[1].records).unwrap().len();
        assert!(essential_size < recent_size);

        let mut medium = MemoryMedium::new(essential_size + "mariko_user_profiles".len());
        let outcome = persist_stages(
            &mut medium,
            "mariko_user_profiles",
            StoreConfig::default().profiles_budget,
            &plans,
        );

        assert_eq!(outcome, PersistOutcome::Degraded);
        let stored: Vec<Profile> =
            serde_json::from_str(&medium.get("mariko_user_profiles").unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn exhausted_when_nothing_fits() {
        let mut medium = MemoryMedium::new(0);
        let plans = activity_stages(vec![create_test_activity(1)], &StoreConfig::default());
        let outcome = persist_stages(&mut medium, "mariko_user_activities", 1024, &plans);
        assert_eq!(outcome, PersistOutcome::Exhausted);
        assert_eq!(medium.get("mariko_user_activities"), None);
    }

    #[test]
    fn placeholder_detection() {
        assert!(photo_is_placeholder(DEFAULT_PHOTO));
        assert!(!photo_is_placeholder("https://example.com/me.jpg"));
        assert!(!photo_is_placeholder("data:image/png;base64,AAAA"));
        let big = format!("data:image/png;base64,{}", "A".repeat(INLINE_PHOTO_LIMIT));
        assert!(photo_is_placeholder(&big));
    }
}
