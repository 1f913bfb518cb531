//! Derived statistics for the admin screens

use chrono::Duration;
use serde::Serialize;
use shared::models::{GENDER_FEMALE, GENDER_MALE, ReviewStatus, Sentiment};

use crate::medium::StorageMedium;
use crate::store::GuestStore;

/// Tally over the recognized gender values; everything else lands in
/// `unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderDistribution {
    pub male: usize,
    pub female: usize,
    pub unspecified: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_users: usize,
    /// Profiles whose last login falls within the past 7 days.
    pub active_this_week: usize,
    pub total_bonus_points: i64,
    pub gender_distribution: GenderDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Arithmetic mean rounded to one decimal place; `0.0` when there
    /// are no reviews.
    pub average_rating: f64,
    /// Reviews created within the past 7 days.
    pub recent_reviews: usize,
    pub pending_reviews: usize,
}

impl<M: StorageMedium> GuestStore<M> {
    pub fn profile_stats(&self) -> ProfileStats {
        let profiles = self.get_all_profiles();
        let week_ago = self.now() - Duration::days(7);

        let mut distribution = GenderDistribution { male: 0, female: 0, unspecified: 0 };
        for profile in &profiles {
            match profile.gender.as_str() {
                GENDER_MALE => distribution.male += 1,
                GENDER_FEMALE => distribution.female += 1,
                _ => distribution.unspecified += 1,
            }
        }

        ProfileStats {
            total_users: profiles.len(),
            active_this_week: profiles.iter().filter(|p| p.last_login > week_ago).count(),
            total_bonus_points: profiles.iter().map(|p| p.bonus_points).sum(),
            gender_distribution: distribution,
        }
    }

    pub fn review_stats(&self, restaurant_id: Option<&str>) -> ReviewStats {
        let reviews = match restaurant_id {
            Some(id) => self.get_restaurant_reviews(id),
            None => self.get_all_reviews(),
        };

        let total = reviews.len();
        let average_rating = if total > 0 {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            (f64::from(sum) / total as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };
        let week_ago = self.now() - Duration::days(7);

        ReviewStats {
            total,
            positive: reviews.iter().filter(|r| r.sentiment == Sentiment::Positive).count(),
            negative: reviews.iter().filter(|r| r.sentiment == Sentiment::Negative).count(),
            neutral: reviews.iter().filter(|r| r.sentiment == Sentiment::Neutral).count(),
            average_rating,
            recent_reviews: reviews.iter().filter(|r| r.created_at > week_ago).count(),
            pending_reviews: reviews.iter().filter(|r| r.status == ReviewStatus::Pending).count(),
        }
    }
}
