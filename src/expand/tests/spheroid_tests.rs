//! Tests for the spheroidal expansion algorithm
//!
//! All boxes and points are in degrees unless a test says otherwise.

extern crate std;

use std::f64::consts::PI;

use crate::expand::expand_spheroidal;
use crate::geometry::{AngularUnit, BoundingBox, Point};

fn expand_degrees(bbox: &mut BoundingBox, point: &Point) {
    expand_spheroidal(bbox, point, AngularUnit::Degrees, AngularUnit::Degrees);
}

fn assert_bounds(bbox: &BoundingBox, lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) {
    std::assert_eq!(bbox.min(0), lon_min, "lon_min");
    std::assert_eq!(bbox.min(1), lat_min, "lat_min");
    std::assert_eq!(bbox.max(0), lon_max, "lon_max");
    std::assert_eq!(bbox.max(1), lat_max, "lat_max");
}

#[test]
fn test_point_at_pole_only_raises_latitude() {
    let mut bbox = BoundingBox::new(0.0, 80.0, 10.0, 85.0);
    let point = Point::new(123.0, 90.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, 0.0, 80.0, 10.0, 90.0);
}

#[test]
fn test_box_degenerated_to_pole_adopts_point_longitude() {
    let mut bbox = BoundingBox::new(5.0, 90.0, 5.0, 90.0);
    let point = Point::new(-40.0, 60.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, -40.0, 60.0, -40.0, 90.0);
}

#[test]
fn test_wraparound_extends_the_cheaper_side() {
    // Extending up to -175+360=185 costs 10 degrees; moving the minimum
    // down to -175 would cost 345.
    let mut bbox = BoundingBox::new(170.0, 0.0, 175.0, 0.0);
    let point = Point::new(-175.0, 0.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, 170.0, 0.0, 185.0, 0.0);
}

#[test]
fn test_far_side_point_extends_maximum_when_cheaper() {
    // Moving the maximum up to 170 costs 160 degrees; wrapping would cost
    // 360 - 170 + (-10) = 180.
    let mut bbox = BoundingBox::new(-10.0, 0.0, 10.0, 0.0);
    let point = Point::new(170.0, 0.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, -10.0, 0.0, 170.0, 0.0);
}

#[test]
fn test_far_side_point_wraps_when_cheaper() {
    // Moving the maximum up to 175 would cost 335 degrees; wrapping costs
    // 360 - 175 + (-170) = 15, so the result straddles the anti-meridian.
    let mut bbox = BoundingBox::new(-170.0, 0.0, -160.0, 0.0);
    let point = Point::new(175.0, 0.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, 175.0, 0.0, 200.0, 0.0);
}

#[test]
fn test_contained_point_leaves_box_unchanged() {
    let mut bbox = BoundingBox::new(0.0, -10.0, 10.0, 10.0);
    let before = bbox.clone();
    let point = Point::new(5.0, 5.0);

    expand_degrees(&mut bbox, &point);

    std::assert_eq!(bbox, before);
}

#[test]
fn test_point_covered_through_wraparound() {
    // A straddling box stored as min=170, max=-170 covers -175; only the
    // representation changes (the maximum is rewritten as 190).
    let mut bbox = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
    let point = Point::new(-175.0, 0.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, 170.0, -10.0, 190.0, 10.0);
}

#[test]
fn test_tie_cost_extends_maximum() {
    // From box [10, 20], point -165 costs 175 degrees in both directions;
    // the documented tie-break extends the maximum to -165+360=195.
    let mut bbox = BoundingBox::new(10.0, 0.0, 20.0, 0.0);
    let point = Point::new(-165.0, 0.0);

    expand_degrees(&mut bbox, &point);

    assert_bounds(&bbox, 10.0, 0.0, 195.0, 0.0);
}

#[test]
fn test_point_units_converted_into_box_units() {
    let mut bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let point = Point::new(PI / 2.0, 0.0);

    expand_spheroidal(&mut bbox, &point, AngularUnit::Degrees, AngularUnit::Radians);

    std::assert_eq!(bbox.min(0), 0.0);
    std::assert_eq!(bbox.min(1), 0.0);
    std::assert!((bbox.max(0) - 90.0).abs() < 1e-9);
    std::assert_eq!(bbox.max(1), 10.0);
}

#[test]
fn test_radian_box_wraps_over_the_cut() {
    let mut bbox = BoundingBox::new(3.0, 0.0, 3.1, 0.0);
    let point = Point::new(-3.1, 0.0);

    expand_spheroidal(&mut bbox, &point, AngularUnit::Radians, AngularUnit::Radians);

    // -3.1 + 2π is just past 3.1, far cheaper than dropping the minimum
    std::assert_eq!(bbox.min(0), 3.0);
    std::assert!((bbox.max(0) - (-3.1 + 2.0 * PI)).abs() < 1e-12);
}

#[test]
fn test_unnormalized_point_longitude_is_wrapped_first() {
    // 370 degrees normalizes to 10, which the box already covers
    let mut bbox = BoundingBox::new(0.0, 0.0, 20.0, 20.0);
    let before = bbox.clone();
    let point = Point::new(370.0, 10.0);

    expand_degrees(&mut bbox, &point);

    std::assert_eq!(bbox, before);
}
