//! Demo reviews written on first run so the review feed is never empty.

use chrono::{DateTime, Duration, Utc};
use shared::models::{Review, ReviewStatus, Sentiment};

const NN: (&str, &str) = ("nn-rozh", "Нижний Новгород, Рождественская, 39");
const SPB: (&str, &str) = ("spb-sadovaya", "Санкт-Петербург, Малая Садовая, 3/54");

#[allow(clippy::too_many_arguments)]
fn demo(
    n: u8,
    name: &str,
    phone: &str,
    site: (&str, &str),
    rating: u8,
    text: &str,
    sentiment: Sentiment,
    status: ReviewStatus,
    created_at: DateTime<Utc>,
) -> Review {
    Review {
        id: format!("review_test_{n}"),
        user_id: format!("test_user_{n}"),
        user_name: name.to_string(),
        user_phone: phone.to_string(),
        restaurant_id: site.0.to_string(),
        restaurant_name: "Хачапури Марико".to_string(),
        restaurant_address: site.1.to_string(),
        rating,
        text: text.to_string(),
        sentiment,
        status,
        is_public: true,
        manager_response: None,
        created_at,
        processed_at: None,
    }
}

/// The six demo reviews, stamped relative to `now`.
pub(crate) fn demo_reviews(now: DateTime<Utc>) -> Vec<Review> {
    let mut answered = demo(
        6,
        "Игорь Л.",
        "+7900678901",
        SPB,
        1,
        "Ужасное обслуживание! Заказ несли час, хачапури оказались невкусными и холодными. Никому не советую.",
        Sentiment::Negative,
        ReviewStatus::Pending,
        now - Duration::hours(6),
    );
    answered.manager_response = Some(
        "Извиняемся за неудобства! Мы разобрались с ситуацией и приняли меры. Приходите еще раз - гарантируем качественное обслуживание!"
            .to_string(),
    );
    answered.processed_at = Some(now - Duration::hours(4));

    vec![
        demo(
            1,
            "Анна К.",
            "+7900123456",
            NN,
            5,
            "Прекрасное место! Хачапури просто тает во рту, а персонал очень вежливый. Обязательно вернемся!",
            Sentiment::Positive,
            ReviewStatus::Processed,
            now - Duration::days(2),
        ),
        demo(
            2,
            "Максим П.",
            "+7900234567",
            NN,
            4,
            "Вкусная еда, уютная атмосфера. Немного долго ждали заказ, но в целом все понравилось.",
            Sentiment::Positive,
            ReviewStatus::Processed,
            now - Duration::days(1),
        ),
        demo(
            3,
            "Елена М.",
            "+7900345678",
            SPB,
            5,
            "Отличное место в самом центре Питера! Хачапури с сыром - просто божественное. Рекомендую всем!",
            Sentiment::Positive,
            ReviewStatus::Processed,
            now - Duration::days(3),
        ),
        demo(
            4,
            "Дмитрий В.",
            "+7900456789",
            NN,
            3,
            "Нормальное место, но ожидал большего. Хачапури неплохие, но не вау. Цены средние.",
            Sentiment::Neutral,
            ReviewStatus::Processed,
            now - Duration::hours(5),
        ),
        demo(
            5,
            "Ольга С.",
            "+7900567890",
            NN,
            2,
            "К сожалению, остались недовольны. Хачапури были холодными, долго ждали заказ. Персонал невежливый.",
            Sentiment::Negative,
            ReviewStatus::Pending,
            now - Duration::hours(2),
        ),
        answered,
    ]
}
