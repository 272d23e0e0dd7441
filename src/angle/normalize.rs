//! Canonical-range normalization for angular coordinates
//!
//! Longitude is periodic; every algorithm in this crate works on the
//! canonical representative in `(-half_period, half_period]`. Latitude is
//! bounded by the poles and is a caller contract: values outside
//! `[-max_latitude, max_latitude]` are a precondition violation, asserted
//! in debug builds and never clamped.

use std::f64::consts::PI;

use log::debug;

use crate::angle::math;
use crate::geometry::AngularUnit;

/// Convert an angle value between units
pub fn convert_angle(value: f64, from: AngularUnit, to: AngularUnit) -> f64 {
    match (from, to) {
        (AngularUnit::Degrees, AngularUnit::Radians) => value * PI / 180.0,
        (AngularUnit::Radians, AngularUnit::Degrees) => value * 180.0 / PI,
        _ => value,
    }
}

/// Wrap a longitude into the canonical range `(-half_period, half_period]`
pub fn normalize_longitude(lon: f64, unit: AngularUnit) -> f64 {
    let period = unit.period();
    let half = unit.half_period();

    let mut lon = lon % period;
    if lon > half {
        lon -= period;
    } else if lon <= -half {
        lon += period;
    }
    lon
}

/// Normalize a point's longitude/latitude pair
///
/// Wraps the longitude into its canonical range. At a pole the longitude is
/// meaningless and collapses to 0, so that two points at the same pole
/// normalize to the same coordinates.
pub fn normalize_point(lon: f64, lat: f64, unit: AngularUnit) -> (f64, f64) {
    let max_lat = unit.max_latitude();
    debug_assert!(lat >= -max_lat && lat <= max_lat,
                  "latitude out of range: {}", lat);

    if math::equals(lat.abs(), max_lat) {
        return (0.0, lat);
    }

    (normalize_longitude(lon, unit), lat)
}

/// Normalize a box's four angular bounds into working form
///
/// The returned bounds satisfy `lon_min` in `(-half_period, half_period]`
/// and `lon_min <= lon_max < lon_min + period`. A stored straddling
/// interval (`min > max` numerically) is a meaningful state, not an error:
/// it maps to `lon_max` above `half_period`. A box covering a full period
/// or more canonicalizes to `[-half_period, half_period]`.
pub fn normalize_box(
    lon_min: f64,
    lat_min: f64,
    lon_max: f64,
    lat_max: f64,
    unit: AngularUnit,
) -> (f64, f64, f64, f64) {
    let max_lat = unit.max_latitude();
    debug_assert!(lat_min <= lat_max, "latitude bounds out of order");
    debug_assert!(lat_min >= -max_lat && lat_max <= max_lat,
                  "latitude bound out of range");

    let period = unit.period();
    let half = unit.half_period();

    if lon_max - lon_min >= period {
        debug!("Box spans the full longitude period, canonicalizing to ({}, {}]", -half, half);
        return (-half, lat_min, half, lat_max);
    }

    let lon_min = normalize_longitude(lon_min, unit);
    let mut lon_max = normalize_longitude(lon_max, unit);
    if lon_max < lon_min {
        // Straddling interval: keep the maximum on the far side of the cut
        lon_max += period;
    }

    (lon_min, lat_min, lon_max, lat_max)
}
