use crate::{GeoPoint, Review, Role, Service};

use uuid::Uuid;

fn service(provider_id: Uuid) -> Service {
    Service::new(
        "Plumbing".to_string(),
        "Leaks fixed fast".to_string(),
        vec![],
        GeoPoint::new(-73.98, 40.75, None).unwrap(),
        "9-5".to_string(),
        provider_id,
        "Bob".to_string(),
    )
}

#[test]
fn test_service_new() {
    let provider_id = Uuid::new_v4();
    let service = service(provider_id);

    assert_eq!(service.title, "Plumbing");
    assert_eq!(service.service_provider_id, provider_id);
    assert!(service.reviews.is_empty());
    assert_eq!(service.created_at, service.updated_at);
}

#[test]
fn test_service_is_owned_by() {
    let provider_id = Uuid::new_v4();
    let service = service(provider_id);

    assert!(service.is_owned_by(provider_id));
    assert!(!service.is_owned_by(Uuid::new_v4()));
}

#[test]
fn test_average_rating() {
    let mut service = service(Uuid::new_v4());
    assert_eq!(service.average_rating(), None);

    for rating in [4, 5] {
        service.reviews.push(
            Review::new(
                service.id,
                Uuid::new_v4(),
                Role::Resident,
                "Unknown".to_string(),
                rating,
                String::new(),
            )
            .unwrap(),
        );
    }

    assert_eq!(service.average_rating(), Some(4.5));
}
