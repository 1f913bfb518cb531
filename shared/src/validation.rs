//! Input validation for the review submission layer
//!
//! The store itself never validates record contents; these rules belong
//! to the surface collecting input (review form, bot, admin panel). The
//! store must accept whatever shape the typed payloads carry.

use thiserror::Error;

use crate::models::Sentiment;

// ── Limits ───────────────────────────────────────────────────────────

/// Review body bounds, counted in chars over the trimmed text.
pub const MIN_REVIEW_TEXT_CHARS: usize = 10;
pub const MAX_REVIEW_TEXT_CHARS: usize = 500;

/// Guest display names.
pub const MAX_NAME_CHARS: usize = 100;

/// Phone numbers as entered (free-form; digits are not enforced here).
pub const MAX_PHONE_CHARS: usize = 30;

/// Review rating bounds.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Validation failure with a message suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("review text is too short ({len} chars, min {min})")]
    TooShort { len: usize, min: usize },
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

// ── Validation helpers ───────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let len = value.chars().count();
    if len > max_chars {
        return Err(ValidationError::TooLong {
            field,
            len,
            max: max_chars,
        });
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &'static str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if let Some(v) = value
        && v.chars().count() > max_chars
    {
        return Err(ValidationError::TooLong {
            field,
            len: v.chars().count(),
            max: max_chars,
        });
    }
    Ok(())
}

/// Validate a review draft before handing it to the store.
pub fn validate_review_draft(rating: u8, text: &str) -> Result<(), ValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    validate_required_text(text, "review text", MAX_REVIEW_TEXT_CHARS)?;
    let trimmed = text.trim().chars().count();
    if trimmed < MIN_REVIEW_TEXT_CHARS {
        return Err(ValidationError::TooShort {
            len: trimmed,
            min: MIN_REVIEW_TEXT_CHARS,
        });
    }
    Ok(())
}

// ── Sentiment suggestion ─────────────────────────────────────────────

const NEGATIVE_WORDS: [&str; 15] = [
    "плохо",
    "ужас",
    "отвратительно",
    "кошмар",
    "никому не советую",
    "грязно",
    "невкусно",
    "холодно",
    "долго",
    "дорого",
    "ужасно",
    "отвратительный",
    "противно",
    "гадость",
    "мерзко",
];

const POSITIVE_WORDS: [&str; 10] = [
    "отлично",
    "прекрасно",
    "замечательно",
    "великолепно",
    "восхитительно",
    "вкусно",
    "рекомендую",
    "понравилось",
    "хорошо",
    "классно",
];

/// Suggest a sentiment for a draft: ratings of 4 and up read positive,
/// and a keyword hit of a single polarity overrides the rating.
pub fn suggest_sentiment(rating: u8, text: &str) -> Sentiment {
    let text = text.to_lowercase();
    let has_negative = NEGATIVE_WORDS.iter().any(|w| text.contains(w));
    let has_positive = POSITIVE_WORDS.iter().any(|w| text.contains(w));
    let positive = match (has_positive, has_negative) {
        (true, false) => true,
        (false, true) => false,
        _ => rating >= 4,
    };
    if positive {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_reasonable_draft() {
        assert_eq!(validate_review_draft(5, "Очень вкусные хачапури!"), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        assert_eq!(
            validate_review_draft(0, "Очень вкусные хачапури!"),
            Err(ValidationError::RatingOutOfRange(0))
        );
        assert_eq!(
            validate_review_draft(6, "Очень вкусные хачапури!"),
            Err(ValidationError::RatingOutOfRange(6))
        );
    }

    #[test]
    fn rejects_short_text_by_trimmed_chars() {
        // "мало букв" is 9 chars after trimming the padding.
        let err = validate_review_draft(4, "  мало букв ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                len: 9,
                min: MIN_REVIEW_TEXT_CHARS
            }
        );
    }

    #[test]
    fn rejects_over_long_text() {
        let text = "х".repeat(MAX_REVIEW_TEXT_CHARS + 1);
        assert!(matches!(
            validate_review_draft(4, &text),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn optional_text_is_skippable() {
        assert_eq!(validate_optional_text(None, "manager response", 10), Ok(()));
        assert!(validate_optional_text(Some("слишком длинный ответ"), "manager response", 10).is_err());
    }

    #[test]
    fn sentiment_follows_rating_without_keywords() {
        assert_eq!(suggest_sentiment(4, "нормальная еда"), Sentiment::Positive);
        assert_eq!(suggest_sentiment(3, "нормальная еда"), Sentiment::Negative);
    }

    #[test]
    fn single_polarity_keywords_override_rating() {
        assert_eq!(suggest_sentiment(5, "было грязно и невкусно"), Sentiment::Negative);
        assert_eq!(suggest_sentiment(2, "очень вкусно, рекомендую"), Sentiment::Positive);
        // Mixed polarity falls back to the rating.
        assert_eq!(suggest_sentiment(2, "вкусно, но грязно"), Sentiment::Negative);
    }
}
