//! Profile CRUD and search

use serde_json::json;
use shared::models::{
    DEFAULT_GENDER, DEFAULT_NAME, DEFAULT_PHOTO, DEFAULT_RESTAURANT, Profile, ProfileCreate,
    ProfileUpdate, actions,
};
use shared::util::record_id;

use crate::config::PROFILES_KEY;
use crate::medium::StorageMedium;
use crate::store::GuestStore;

impl<M: StorageMedium> GuestStore<M> {
    pub fn get_all_profiles(&self) -> Vec<Profile> {
        self.read_collection(PROFILES_KEY)
    }

    pub fn get_profile(&self, user_id: &str) -> Option<Profile> {
        self.get_all_profiles().into_iter().find(|p| p.id == user_id)
    }

    pub fn get_profile_by_telegram_id(&self, telegram_id: i64) -> Option<Profile> {
        self.get_all_profiles()
            .into_iter()
            .find(|p| p.telegram_id == Some(telegram_id))
    }

    /// Creates a profile, filling every omitted field with its default,
    /// and logs a `profile_created` activity record.
    pub fn create_profile(&mut self, payload: ProfileCreate) -> Profile {
        let mut profiles = self.get_all_profiles();
        let now = self.now();

        let profile = Profile {
            id: record_id("user"),
            telegram_id: payload.telegram_id,
            name: payload.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            phone: payload.phone.unwrap_or_default(),
            birth_date: payload.birth_date.unwrap_or_default(),
            gender: payload.gender.unwrap_or_else(|| DEFAULT_GENDER.to_string()),
            photo: payload.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
            bonus_points: payload.bonus_points.unwrap_or(0),
            notifications_enabled: payload.notifications_enabled.unwrap_or(true),
            selected_restaurant: payload
                .selected_restaurant
                .unwrap_or_else(|| DEFAULT_RESTAURANT.to_string()),
            created_at: now,
            updated_at: now,
            last_login: now,
        };
        tracing::debug!(id = %profile.id, name = %profile.name, "Creating profile");

        profiles.push(profile.clone());
        self.write_profiles(profiles);
        self.log_activity(
            &profile.id,
            actions::PROFILE_CREATED,
            Some(json!({ "profile": &profile })),
        );

        profile
    }

    /// Field-wise merge; `updatedAt` is stamped on every successful call,
    /// even when the patch is empty. Returns the stored profile, or
    /// `None` when the id is unknown.
    pub fn update_profile(&mut self, user_id: &str, updates: ProfileUpdate) -> Option<Profile> {
        let mut profiles = self.get_all_profiles();
        let index = profiles.iter().position(|p| p.id == user_id)?;

        let logged = json!({ "updates": &updates });

        let profile = &mut profiles[index];
        if let Some(telegram_id) = updates.telegram_id {
            profile.telegram_id = Some(telegram_id);
        }
        if let Some(name) = updates.name {
            profile.name = name;
        }
        if let Some(phone) = updates.phone {
            profile.phone = phone;
        }
        if let Some(birth_date) = updates.birth_date {
            profile.birth_date = birth_date;
        }
        if let Some(gender) = updates.gender {
            profile.gender = gender;
        }
        if let Some(photo) = updates.photo {
            profile.photo = photo;
        }
        if let Some(bonus_points) = updates.bonus_points {
            profile.bonus_points = bonus_points;
        }
        if let Some(notifications_enabled) = updates.notifications_enabled {
            profile.notifications_enabled = notifications_enabled;
        }
        if let Some(selected_restaurant) = updates.selected_restaurant {
            profile.selected_restaurant = selected_restaurant;
        }
        if let Some(last_login) = updates.last_login {
            profile.last_login = last_login;
        }
        profile.updated_at = self.now();
        let updated = profile.clone();

        self.write_profiles(profiles);
        self.log_activity(user_id, actions::PROFILE_UPDATED, Some(logged));

        Some(updated)
    }

    /// Stamps `lastLogin` with the current time.
    pub fn update_last_login(&mut self, user_id: &str) -> Option<Profile> {
        let patch = ProfileUpdate {
            last_login: Some(self.now()),
            ..ProfileUpdate::default()
        };
        self.update_profile(user_id, patch)
    }

    /// Returns `false` when the id is unknown.
    pub fn delete_profile(&mut self, user_id: &str) -> bool {
        let mut profiles = self.get_all_profiles();
        let before = profiles.len();
        profiles.retain(|p| p.id != user_id);
        if profiles.len() == before {
            return false;
        }

        self.write_profiles(profiles);
        self.log_activity(user_id, actions::PROFILE_DELETED, None);
        true
    }

    /// Case-insensitive match on the name; raw substring match on the
    /// phone and id.
    pub fn search_profiles(&self, query: &str) -> Vec<Profile> {
        let needle = query.to_lowercase();
        self.get_all_profiles()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.phone.contains(query)
                    || p.id.contains(query)
            })
            .collect()
    }
}
