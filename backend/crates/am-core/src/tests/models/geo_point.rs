use crate::GeoPoint;
use crate::models::geo_point::DEFAULT_ADDRESS;

#[test]
fn test_from_coordinates_uses_longitude_latitude_order() {
    let point = GeoPoint::from_coordinates(&[-73.98, 40.75], Some("5th Ave".into())).unwrap();

    assert_eq!(point.longitude, -73.98);
    assert_eq!(point.latitude, 40.75);
    assert_eq!(point.address, "5th Ave");
}

#[test]
fn test_missing_address_defaults_to_unknown_location() {
    let point = GeoPoint::from_coordinates(&[0.0, 0.0], None).unwrap();
    assert_eq!(point.address, DEFAULT_ADDRESS);

    let blank = GeoPoint::from_coordinates(&[0.0, 0.0], Some("   ".into())).unwrap();
    assert_eq!(blank.address, DEFAULT_ADDRESS);
}

#[test]
fn test_wrong_coordinate_count_is_rejected() {
    assert!(GeoPoint::from_coordinates(&[1.0], None).is_err());
    assert!(GeoPoint::from_coordinates(&[1.0, 2.0, 3.0], None).is_err());
}

#[test]
fn test_out_of_range_coordinates_are_rejected() {
    assert!(GeoPoint::new(181.0, 0.0, None).is_err());
    assert!(GeoPoint::new(0.0, -90.5, None).is_err());
    assert!(GeoPoint::new(f64::NAN, 0.0, None).is_err());
}

#[test]
fn test_distance_to_self_is_zero() {
    let point = GeoPoint::new(10.0, 20.0, None).unwrap();

    assert!(point.distance_meters(10.0, 20.0) < 1e-6);
}

#[test]
fn test_one_degree_of_latitude_is_about_111_km() {
    let point = GeoPoint::new(0.0, 0.0, None).unwrap();
    let distance = point.distance_meters(0.0, 1.0);

    assert!((distance - 111_195.0).abs() < 100.0, "got {distance}");
}
