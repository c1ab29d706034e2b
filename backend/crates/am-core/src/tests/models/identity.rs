use crate::{Identity, RegistrationStatus, Role};

use uuid::Uuid;

fn identity(role: Role, status: Option<RegistrationStatus>) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        password_hash: "hash".to_string(),
        phone: Some("555-0100".to_string()),
        role,
        status,
        apartment_complex_name: None,
    }
}

#[test]
fn test_in_apartment_stamps_name() {
    let resident = identity(Role::Resident, Some(RegistrationStatus::Approved)).in_apartment("Oakwood");

    assert_eq!(resident.apartment_complex_name.as_deref(), Some("Oakwood"));
}

#[test]
fn test_pending_resident_is_blocked() {
    let resident = identity(Role::Resident, Some(RegistrationStatus::Pending));

    assert!(!resident.is_approved());
    assert!(resident.is_blocked_by_status());
}

#[test]
fn test_rejected_manager_is_blocked() {
    let manager = identity(Role::Manager, Some(RegistrationStatus::Rejected));

    assert!(manager.is_blocked_by_status());
}

#[test]
fn test_manager_without_status_is_blocked() {
    let manager = identity(Role::Manager, None);

    assert!(manager.is_blocked_by_status());
}

#[test]
fn test_approved_manager_is_not_blocked() {
    let manager = identity(Role::Manager, Some(RegistrationStatus::Approved));

    assert!(!manager.is_blocked_by_status());
}

#[test]
fn test_service_provider_is_never_blocked() {
    let provider = identity(Role::ServiceProvider, None);

    assert!(!provider.is_blocked_by_status());
}
