use crate::RegistrationStatus;

use std::str::FromStr;

#[test]
fn test_registration_status_as_str() {
    assert_eq!(RegistrationStatus::Pending.as_str(), "pending");
    assert_eq!(RegistrationStatus::Approved.as_str(), "approved");
    assert_eq!(RegistrationStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_registration_status_from_str() {
    assert_eq!(
        RegistrationStatus::from_str("approved").unwrap(),
        RegistrationStatus::Approved
    );
    assert_eq!(
        RegistrationStatus::from_str("rejected").unwrap(),
        RegistrationStatus::Rejected
    );
    assert!(RegistrationStatus::from_str("Approved").is_err());
    assert!(RegistrationStatus::from_str("").is_err());
}

#[test]
fn test_registration_status_default() {
    assert_eq!(RegistrationStatus::default(), RegistrationStatus::Pending);
}
