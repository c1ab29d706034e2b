use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::ServiceProvider.as_str(), "ServiceProvider");
    assert_eq!(Role::Resident.as_str(), "Resident");
    assert_eq!(Role::Manager.as_str(), "Manager");
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    assert_eq!(Role::from_str("resident").unwrap(), Role::Resident);
    assert_eq!(Role::from_str("MANAGER").unwrap(), Role::Manager);
    assert_eq!(
        Role::from_str("ServiceProvider").unwrap(),
        Role::ServiceProvider
    );
    assert_eq!(
        Role::from_str("service_provider").unwrap(),
        Role::ServiceProvider
    );
    assert!(Role::from_str("janitor").is_err());
}

#[test]
fn test_only_residents_and_managers_require_approval() {
    assert!(Role::Resident.requires_approval());
    assert!(Role::Manager.requires_approval());
    assert!(!Role::ServiceProvider.requires_approval());
}

#[test]
fn test_role_display_matches_as_str() {
    assert_eq!(Role::ServiceProvider.to_string(), "ServiceProvider");
    assert_eq!(format!("{}", Role::Manager), "Manager");
}
