use crate::{Review, Role};

use uuid::Uuid;

#[test]
fn test_review_new_accepts_rating_in_range() {
    let service_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let review = Review::new(
        service_id,
        user_id,
        Role::Resident,
        "Unknown".to_string(),
        5,
        "Great plumber".to_string(),
    )
    .unwrap();

    assert_eq!(review.service_id, service_id);
    assert_eq!(review.user_id, user_id);
    assert_eq!(review.rating, 5);
}

#[test]
fn test_review_new_rejects_zero_and_six() {
    for rating in [0, 6] {
        let result = Review::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Manager,
            "Unknown".to_string(),
            rating,
            String::new(),
        );
        assert!(result.is_err(), "rating {rating} should be rejected");
    }
}
