use super::*;

#[test]
fn can_validate_coordinate_ranges() {
    assert!(Coordinates::new(34.05, -118.24).is_valid());
    assert!(Coordinates::new(-90., 180.).is_valid());

    assert!(!Coordinates::new(90.5, 0.).is_valid());
    assert!(!Coordinates::new(-91., 0.).is_valid());
    assert!(!Coordinates::new(0., -180.).is_valid());
    assert!(!Coordinates::new(0., 180.5).is_valid());
    assert!(!Coordinates::new(f64::NAN, 0.).is_valid());
}

#[test]
fn can_compare_coordinates() {
    assert_eq!(Coordinates::new(1., 2.), Coordinates::new(1., 2.));
    assert_ne!(Coordinates::new(1., 2.), Coordinates::new(1., 2.000001));
}
