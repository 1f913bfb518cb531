//! Guest profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default display name for a freshly created profile.
pub const DEFAULT_NAME: &str = "Новый пользователь";
/// Default gender value; counted as "unspecified" by the stats tally.
pub const DEFAULT_GENDER: &str = "Не указан";
/// Default selected restaurant.
pub const DEFAULT_RESTAURANT: &str = "Нижний Новгород, Рождественская, 39";
/// Hosted placeholder avatar. Degradation treats photos carrying its
/// `TEMP` marker as droppable payloads.
pub const DEFAULT_PHOTO: &str = "https://cdn.builder.io/api/v1/image/assets/TEMP/f2cb5ca47004ec14f2e0c3003157a1a2b57e7d97?placeholderIfAbsent=true";

/// Gender values recognized by the stats tally; anything else lands in
/// the "unspecified" bucket.
pub const GENDER_MALE: &str = "Мужской";
pub const GENDER_FEMALE: &str = "Женский";

/// Guest profile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    pub name: String,
    pub phone: String,
    /// Free-form, UI-entered (e.g. "01.01.2000").
    pub birth_date: String,
    pub gender: String,
    /// URL or inline data URI; may be large.
    pub photo: String,
    pub bonus_points: i64,
    pub notifications_enabled: bool,
    pub selected_restaurant: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Create profile payload; missing fields fall back to the defaults above.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileCreate {
    pub telegram_id: Option<i64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub photo: Option<String>,
    pub bonus_points: Option<i64>,
    pub notifications_enabled: Option<bool>,
    pub selected_restaurant: Option<String>,
}

/// Update profile payload (field-wise merge; absent fields keep their
/// stored values).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_restaurant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}
