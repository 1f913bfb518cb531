//! Review CRUD and search
//!
//! The store persists whatever review payload it is handed; rating and
//! text validation happen in the submission layer
//! (`shared::validation`), not here.

use serde_json::json;
use shared::models::{Review, ReviewCreate, ReviewUpdate, actions};
use shared::util::record_id;

use crate::config::REVIEWS_KEY;
use crate::medium::StorageMedium;
use crate::store::GuestStore;

impl<M: StorageMedium> GuestStore<M> {
    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.read_collection(REVIEWS_KEY)
    }

    /// Reviews for one restaurant, newest first.
    pub fn get_restaurant_reviews(&self, restaurant_id: &str) -> Vec<Review> {
        let mut reviews: Vec<Review> = self
            .get_all_reviews()
            .into_iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Reviews left by one guest, newest first.
    pub fn get_user_reviews(&self, user_id: &str) -> Vec<Review> {
        let mut reviews: Vec<Review> = self
            .get_all_reviews()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Stores a review and logs a `review_created` activity record.
    pub fn create_review(&mut self, payload: ReviewCreate) -> Review {
        let mut reviews = self.get_all_reviews();

        let review = Review {
            id: record_id("review"),
            user_id: payload.user_id,
            user_name: payload.user_name,
            user_phone: payload.user_phone,
            restaurant_id: payload.restaurant_id,
            restaurant_name: payload.restaurant_name,
            restaurant_address: payload.restaurant_address,
            rating: payload.rating,
            text: payload.text,
            sentiment: payload.sentiment,
            status: payload.status,
            is_public: payload.is_public,
            manager_response: payload.manager_response,
            created_at: self.now(),
            processed_at: payload.processed_at,
        };
        tracing::debug!(id = %review.id, restaurant = %review.restaurant_id, rating = review.rating, "Creating review");

        reviews.push(review.clone());
        self.write_reviews(reviews);
        self.log_activity(
            &review.user_id,
            actions::REVIEW_CREATED,
            Some(json!({
                "reviewId": &review.id,
                "restaurantId": &review.restaurant_id,
                "rating": review.rating,
                "sentiment": review.sentiment,
            })),
        );

        review
    }

    /// Field-wise merge. A patch carrying any status value re-stamps
    /// `processedAt` with the current time, including a repeat of the
    /// stored status. Returns `None` when the id is unknown.
    pub fn update_review(&mut self, review_id: &str, updates: ReviewUpdate) -> Option<Review> {
        let mut reviews = self.get_all_reviews();
        let index = reviews.iter().position(|r| r.id == review_id)?;

        let stamp_processed = updates.status.is_some();
        let logged = json!({ "reviewId": review_id, "updates": &updates });

        let review = &mut reviews[index];
        if let Some(rating) = updates.rating {
            review.rating = rating;
        }
        if let Some(text) = updates.text {
            review.text = text;
        }
        if let Some(sentiment) = updates.sentiment {
            review.sentiment = sentiment;
        }
        if let Some(status) = updates.status {
            review.status = status;
        }
        if let Some(is_public) = updates.is_public {
            review.is_public = is_public;
        }
        if let Some(manager_response) = updates.manager_response {
            review.manager_response = Some(manager_response);
        }
        if stamp_processed {
            review.processed_at = Some(self.now());
        }
        let updated = review.clone();

        self.write_reviews(reviews);
        self.log_activity(&updated.user_id, actions::REVIEW_UPDATED, Some(logged));

        Some(updated)
    }

    /// Case-insensitive match on the text, guest name and restaurant
    /// name, optionally narrowed to one restaurant.
    pub fn search_reviews(&self, query: &str, restaurant_id: Option<&str>) -> Vec<Review> {
        let reviews = match restaurant_id {
            Some(id) => self.get_restaurant_reviews(id),
            None => self.get_all_reviews(),
        };

        let needle = query.to_lowercase();
        reviews
            .into_iter()
            .filter(|r| {
                r.text.to_lowercase().contains(&needle)
                    || r.user_name.to_lowercase().contains(&needle)
                    || r.restaurant_name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use shared::models::{ReviewStatus, ReviewUpdate, actions};

    use crate::store::test_support::{create_review_for, create_test_store, test_time};

    #[test]
    fn create_review_assigns_id_and_timestamp() {
        let (mut store, _clock) = create_test_store();
        let review = store.create_review(create_review_for("user_1", "nn-rozh", 5));

        assert!(review.id.starts_with("review_"));
        assert_eq!(review.created_at, test_time());
        assert_eq!(review.processed_at, None);

        let stored = store.get_all_reviews();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], review);
    }

    #[test]
    fn create_review_logs_summary_payload() {
        let (mut store, _clock) = create_test_store();
        let review = store.create_review(create_review_for("user_1", "nn-rozh", 5));

        let activity = store.get_user_activity("user_1");
        assert_eq!(activity[0].action, actions::REVIEW_CREATED);
        let data = activity[0].data.as_deref().unwrap();
        assert!(data.contains(&review.id));
        assert!(data.contains("\"rating\":5"));
        assert!(data.contains("\"sentiment\":\"positive\""));
        // The review text itself is not copied into the log.
        assert!(!data.contains("хачапури"));
    }

    #[test]
    fn out_of_range_payloads_are_stored_as_given() {
        // Validation lives in the submission layer; the store must not
        // reject or crash on values outside the UI's conventions.
        let (mut store, _clock) = create_test_store();
        let mut payload = create_review_for("user_1", "nn-rozh", 99);
        payload.text = String::new();
        let review = store.create_review(payload);

        assert_eq!(review.rating, 99);
        assert_eq!(store.get_all_reviews()[0].rating, 99);
    }

    #[test]
    fn restaurant_reviews_are_filtered_and_newest_first() {
        let (mut store, clock) = create_test_store();
        store.create_review(create_review_for("user_1", "nn-rozh", 5));
        clock.advance(Duration::hours(1));
        store.create_review(create_review_for("user_2", "spb-sadovaya", 4));
        clock.advance(Duration::hours(1));
        store.create_review(create_review_for("user_3", "nn-rozh", 3));

        let reviews = store.get_restaurant_reviews("nn-rozh");
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].user_id, "user_3");
        assert_eq!(reviews[1].user_id, "user_1");
    }

    #[test]
    fn status_patch_stamps_processed_at() {
        let (mut store, clock) = create_test_store();
        let review = store.create_review(create_review_for("user_1", "nn-rozh", 2));
        clock.advance(Duration::hours(2));

        let updated = store
            .update_review(
                &review.id,
                ReviewUpdate {
                    status: Some(ReviewStatus::Processed),
                    manager_response: Some("Спасибо за отзыв!".to_string()),
                    ..ReviewUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, ReviewStatus::Processed);
        assert_eq!(updated.processed_at, Some(test_time() + Duration::hours(2)));
        assert_eq!(updated.manager_response.as_deref(), Some("Спасибо за отзыв!"));
    }

    #[test]
    fn repeated_status_patch_refreshes_processed_at() {
        let (mut store, clock) = create_test_store();
        let review = store.create_review(create_review_for("user_1", "nn-rozh", 2));

        store.update_review(
            &review.id,
            ReviewUpdate { status: Some(ReviewStatus::Processed), ..ReviewUpdate::default() },
        );
        clock.advance(Duration::days(1));
        let again = store
            .update_review(
                &review.id,
                ReviewUpdate { status: Some(ReviewStatus::Processed), ..ReviewUpdate::default() },
            )
            .unwrap();

        assert_eq!(again.processed_at, Some(test_time() + Duration::days(1)));
    }

    #[test]
    fn non_status_patch_keeps_processed_at() {
        let (mut store, clock) = create_test_store();
        let review = store.create_review(create_review_for("user_1", "nn-rozh", 2));
        clock.advance(Duration::hours(1));

        let updated = store
            .update_review(
                &review.id,
                ReviewUpdate { is_public: Some(false), ..ReviewUpdate::default() },
            )
            .unwrap();

        assert_eq!(updated.processed_at, None);
        assert!(!updated.is_public);
    }

    #[test]
    fn search_reviews_matches_text_and_names() {
        let (mut store, _clock) = create_test_store();
        let mut cold = create_review_for("user_1", "nn-rozh", 2);
        cold.text = "Хачапури были холодными".to_string();
        store.create_review(cold);
        let mut warm = create_review_for("user_2", "spb-sadovaya", 5);
        warm.text = "Все отлично".to_string();
        warm.user_name = "Борис Холодов".to_string();
        store.create_review(warm);

        let by_text = store.search_reviews("холод", None);
        assert_eq!(by_text.len(), 2);

        let narrowed = store.search_reviews("холод", Some("nn-rozh"));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].text, "Хачапури были холодными");
    }
}
