//! Local demo - a full pass over the guest store API
//!
//! Walks through the store the way the Mini App uses it:
//! 1. Open a file-backed medium and initialize the collections
//! 2. Sign up a guest and update the profile
//! 3. Validate and submit a review
//! 4. Search and derived statistics
//! 5. Storage usage and a backup snapshot
//!
//! The medium lives under the system temp directory, so a second run
//! reopens the same data instead of reseeding it.
//!
//! Run: cargo run -p mariko-store --example local_demo

use mariko_store::{FileMedium, GuestStore, StoreConfig, format_bytes};
use shared::models::{GENDER_FEMALE, ProfileCreate, ProfileUpdate, ReviewCreate, ReviewStatus};
use shared::validation::{suggest_sentiment, validate_review_draft};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Mariko Guest Store Demo ===\n");

    // === 1. Open the medium and initialize ===
    let data_dir = std::env::temp_dir().join("mariko-demo");
    let medium = FileMedium::open(&data_dir.join("store.json"), 5 * 1024 * 1024)?;
    let mut store = GuestStore::new(medium, StoreConfig::default());
    store.init();
    println!(
        "1. Store ready: {} profiles, {} reviews\n",
        store.get_all_profiles().len(),
        store.get_all_reviews().len()
    );

    // === 2. Guest signup and profile update ===
    let guest = store.create_profile(ProfileCreate {
        name: Some("Анна Петрова".to_string()),
        phone: Some("+79001234567".to_string()),
        ..ProfileCreate::default()
    });
    println!("2. Created profile {} ({})", guest.id, guest.name);

    store
        .update_profile(
            &guest.id,
            ProfileUpdate {
                gender: Some(GENDER_FEMALE.to_string()),
                bonus_points: Some(150),
                ..ProfileUpdate::default()
            },
        )
        .expect("profile just created");
    println!("   Updated gender and bonus points\n");

    // === 3. Review submission, validated the way the bot does it ===
    let rating = 5;
    let text = "Прекрасное место! Очень вкусно, обязательно вернемся.";
    validate_review_draft(rating, text)?;
    let sentiment = suggest_sentiment(rating, text);

    let review = store.create_review(ReviewCreate {
        user_id: guest.id.clone(),
        user_name: guest.name.clone(),
        user_phone: guest.phone.clone(),
        restaurant_id: "nn-rozh".to_string(),
        restaurant_name: "Хачапури Марико".to_string(),
        restaurant_address: "Нижний Новгород, Рождественская, 39".to_string(),
        rating,
        text: text.to_string(),
        sentiment,
        status: ReviewStatus::Pending,
        is_public: true,
        manager_response: None,
        processed_at: None,
    });
    println!("3. Review {} submitted as {:?}\n", review.id, review.sentiment);

    // === 4. Search and statistics ===
    let hits = store.search_reviews("вкус", Some("nn-rozh"));
    println!("4. Search 'вкус' in nn-rozh: {} hit(s)", hits.len());

    let review_stats = store.review_stats(None);
    println!(
        "   Reviews: {} total, avg {}, {} pending",
        review_stats.total, review_stats.average_rating, review_stats.pending_reviews
    );
    let profile_stats = store.profile_stats();
    println!(
        "   Guests: {} total, {} active this week, {} bonus points\n",
        profile_stats.total_users, profile_stats.active_this_week, profile_stats.total_bonus_points
    );

    // === 5. Storage usage and backup ===
    let info = store.storage_info();
    println!(
        "5. Storage: profiles {}, reviews {}, total {}",
        format_bytes(info.profiles_bytes),
        format_bytes(info.reviews_bytes),
        format_bytes(info.total_bytes)
    );

    let snapshot = store.export_data();
    let backup = serde_json::to_string_pretty(&snapshot)?;
    println!(
        "   Exported {} profiles / {} activity records ({})",
        snapshot.profiles.len(),
        snapshot.activities.len(),
        format_bytes(backup.len())
    );

    println!("\nData file: {}", data_dir.join("store.json").display());
    Ok(())
}
