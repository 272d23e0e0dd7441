//! Cartesian box-point expansion
//!
//! Visits each coordinate dimension in increasing order and moves the
//! matching corner whenever the point's coordinate extends the box on that
//! axis. Dimensions are independent, so the visiting order does not affect
//! the result; it is fixed for reproducibility.

use crate::expand::strategy::OrderingStrategy;
use crate::geometry::{BoundingBox, Point};

/// Expand a Cartesian bounding box in place so it covers the given point
///
/// Coordinates are compared as-is, with no normalization or unit handling.
/// The two bound checks are applied independently on every dimension; with
/// the natural ordering at most one fires per axis, but a user-supplied
/// strategy may trigger both. A zero-dimensional box is a no-op. The box
/// and the point must share a dimension count; a mismatch is a caller
/// contract violation, asserted in debug builds.
///
/// # Arguments
/// * `bbox` - The box to expand, mutated in place
/// * `point` - The point to absorb
/// * `strategy` - Comparison semantics per dimension
pub fn expand_cartesian(bbox: &mut BoundingBox, point: &Point, strategy: &dyn OrderingStrategy) {
    debug_assert_eq!(bbox.dimensions(), point.dimensions(),
                     "box and point must have the same dimension count");

    for dimension in 0..bbox.dimensions() {
        let coord = point.coordinate(dimension);

        if strategy.less(dimension, coord, bbox.min(dimension)) {
            bbox.set_min(dimension, coord);
        }

        if strategy.greater(dimension, coord, bbox.max(dimension)) {
            bbox.set_max(dimension, coord);
        }
    }
}
