//! Spheroidal box-point expansion
//!
//! Expands a longitude/latitude box so it covers a point, honoring the
//! periodic longitude axis. The resulting interval is always the one with
//! the smallest angular span, which may leave the box in the straddling
//! representation (numeric `min > max` over the anti-meridian).

use log::debug;

use crate::angle::math;
use crate::angle::normalize::{convert_angle, normalize_box, normalize_point};
use crate::geometry::{AngularUnit, BoundingBox, Point};

/// Expand an angular bounding box in place so it covers the given point
///
/// The point's coordinates are normalized in its own unit system, then
/// converted into the box's unit before comparison. Pole degeneracies take
/// early returns: a point at a pole only raises the latitude bound
/// (longitude is undefined there), and a box collapsed onto a pole adopts
/// the point's longitude outright. The general case grows the latitude
/// bounds directly and the longitude interval by the cheaper of the two
/// possible extensions across the periodic cut; on an exact cost tie the
/// maximum is extended.
///
/// Latitudes outside `[-max_latitude, max_latitude]` and NaN input are
/// precondition violations, not handled conditions.
///
/// # Arguments
/// * `bbox` - The 2D angular box to expand, mutated in place
/// * `point` - The point to absorb (longitude, latitude)
/// * `box_unit` - Angular unit of the box's coordinates
/// * `point_unit` - Angular unit of the point's coordinates
pub fn expand_spheroidal(
    bbox: &mut BoundingBox,
    point: &Point,
    box_unit: AngularUnit,
    point_unit: AngularUnit,
) {
    debug_assert_eq!(bbox.dimensions(), 2, "angular boxes are 2D");
    debug_assert_eq!(point.dimensions(), 2, "angular points are 2D");

    let (p_lon, p_lat) = normalize_point(point.lon(), point.lat(), point_unit);
    let p_lon = convert_angle(p_lon, point_unit, box_unit);
    let p_lat = convert_angle(p_lat, point_unit, box_unit);

    let (mut lon_min, mut lat_min, mut lon_max, mut lat_max) =
        normalize_box(bbox.min(0), bbox.min(1), bbox.max(0), bbox.max(1), box_unit);

    let max_latitude = box_unit.max_latitude();
    let period = box_unit.period();

    if math::equals(p_lat.abs(), max_latitude) {
        // The point is at a pole, where longitude carries no information;
        // only the latitude bound can move.
        debug!("Point at pole (lat {}), longitude bounds kept", p_lat);
        write_bounds(bbox, lon_min, p_lat.min(lat_min), lon_max, p_lat.max(lat_max));
        return;
    }

    if math::equals(lat_min, lat_max) && math::equals(lat_min.abs(), max_latitude) {
        // The box is a single pole point; its stored longitude is
        // meaningless, so the point's longitude takes over both bounds.
        debug!("Box degenerated to pole, adopting point longitude {}", p_lon);
        write_bounds(bbox, p_lon, p_lat.min(lat_min), p_lon, p_lat.max(lat_max));
        return;
    }

    lat_min = lat_min.min(p_lat);
    lat_max = lat_max.max(p_lat);

    if math::smaller(p_lon, lon_min) {
        let p_lon_shifted = p_lon + period;
        if math::larger(p_lon_shifted, lon_max) {
            // Outside the interval on both readings; grow on the side that
            // costs the smaller arc. A tie extends the maximum.
            if math::smaller(lon_min - p_lon, p_lon_shifted - lon_max) {
                lon_min = p_lon;
            } else {
                lon_max = p_lon_shifted;
            }
        }
        // else: already covered through wraparound, nothing to do
    } else if math::larger(p_lon, lon_max) {
        // p_lon is normalized into (-half_period, half_period], so
        // lon_max <= half_period holds on this branch.
        if lon_min < 0.0
            && math::larger(p_lon - lon_max, period - p_lon + lon_min)
        {
            lon_min = p_lon;
            lon_max += period;
        } else {
            lon_max = p_lon;
        }
    }

    write_bounds(bbox, lon_min, lat_min, lon_max, lat_max);
}

fn write_bounds(bbox: &mut BoundingBox, lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) {
    bbox.set_min(0, lon_min);
    bbox.set_min(1, lat_min);
    bbox.set_max(0, lon_max);
    bbox.set_max(1, lat_max);
}
