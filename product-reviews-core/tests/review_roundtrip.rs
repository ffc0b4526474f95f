//! Integration tests for the review round-trip law.

use chrono::{TimeZone, Utc};
use product_reviews_core::{Review, ReviewList};
use serde_json::json;

#[test]
fn test_review_roundtrip_law() {
    // For any valid representation, from_representation(to_value(r)) == r.
    let reviews = vec![
        Review::new(5.0, "great", Utc.with_ymd_and_hms(2023, 11, 2, 8, 0, 0).unwrap()),
        Review {
            rating: 1.5,
            text: None,
            pros: Some("cheap".to_string()),
            cons: Some("broke in a week".to_string()),
            summary: None,
            created_at: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
        },
    ];

    for review in reviews {
        let value = review.to_value().unwrap();
        let parsed = Review::from_representation(&value).unwrap();
        assert_eq!(review, parsed);
    }
}

#[test]
fn test_string_timestamp_form_is_accepted() {
    let value = json!({
        "rating": 4,
        "text": "fine",
        "created_at": "2024-05-01T10:00:00Z"
    });
    let review = Review::from_representation(&value).unwrap();
    assert_eq!(
        review.created_at,
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
    // Integer ratings widen to the numeric type.
    assert!((review.rating - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_document_roundtrip_preserves_order() {
    let document = json!({
        "items": [
            { "rating": 1.0, "text": "first", "created_at": "2024-01-01T00:00:00Z" },
            { "rating": 2.0, "text": "second", "created_at": "2024-01-02T00:00:00Z" },
            { "rating": 3.0, "text": "third", "created_at": "2024-01-03T00:00:00Z" }
        ]
    });
    let list = ReviewList::from_document(&document).unwrap();
    let texts: Vec<_> = list
        .reviews
        .iter()
        .map(|r| r.text.clone().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}
