use am_core::{GeoPoint, Identity, RegistrationStatus, Role, Service};

use uuid::Uuid;

pub fn identity(email: &str, role: Role, status: Option<RegistrationStatus>) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: format!("Test {}", role),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        phone: Some("555-0100".to_string()),
        role,
        status,
        apartment_complex_name: None,
    }
}

pub fn service_at(provider: &Identity, longitude: f64, latitude: f64) -> Service {
    Service::new(
        "Plumbing".to_string(),
        "Leaks fixed fast".to_string(),
        vec!["https://cdn.example.com/services/1.png".to_string()],
        GeoPoint::new(longitude, latitude, Some("1 Main St".to_string())).unwrap(),
        "9am-5pm".to_string(),
        provider.id,
        provider.name.clone(),
    )
}
