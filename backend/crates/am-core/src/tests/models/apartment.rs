use crate::{Apartment, CoreError};

#[test]
fn test_new_apartment_keeps_name() {
    let apartment = Apartment::new("Maple Court").unwrap();

    assert_eq!(apartment.apartment_name, "Maple Court");
}

#[test]
fn test_names_that_escape_the_tenants_dir_are_rejected() {
    for name in ["a/b", "..", "../escape", "a\\b", "", "   ", "."] {
        let result = Apartment::new(name);
        assert!(
            matches!(result, Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("apartment_name")),
            "expected {name:?} to be rejected"
        );
    }
}

#[test]
fn test_invalid_name_reason_explains_the_rejection() {
    assert_eq!(
        Apartment::invalid_name_reason("a/b"),
        Some("name cannot contain path separators")
    );
    assert_eq!(Apartment::invalid_name_reason("Oakwood"), None);
}
