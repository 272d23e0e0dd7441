//! Expansion dispatch
//!
//! Routes a box/point pair to the matching expansion algorithm based on
//! their coordinate system classification. Spherical-equatorial and
//! geographic systems share the spheroidal expander; their angular units
//! may differ between box and point and are reconciled inside it. A
//! family mismatch is a configuration error raised here, before any
//! algorithm runs.

use log::{debug, error};

use crate::expand::cartesian::expand_cartesian;
use crate::expand::spheroid::expand_spheroidal;
use crate::expand::strategy::{NaturalOrdering, OrderingStrategy};
use crate::geometry::{BoundingBox, CoordinateSystem, GeometryError, GeometryResult, Point};

/// Dispatcher selecting the expansion algorithm for a box/point pair
pub struct ExpansionDispatcher;

impl ExpansionDispatcher {
    /// Expand a box by a point using the default natural ordering
    ///
    /// # Arguments
    /// * `bbox` - The box to expand, mutated in place
    /// * `point` - The point to absorb
    /// * `box_system` - Coordinate system classification of the box
    /// * `point_system` - Coordinate system classification of the point
    ///
    /// # Returns
    /// Ok on success, an error if the classifications are incompatible
    pub fn expand(
        bbox: &mut BoundingBox,
        point: &Point,
        box_system: CoordinateSystem,
        point_system: CoordinateSystem,
    ) -> GeometryResult<()> {
        Self::expand_with(bbox, point, box_system, point_system, &NaturalOrdering)
    }

    /// Expand a box by a point with an injected ordering strategy
    ///
    /// The strategy applies to the Cartesian path only; the spheroidal
    /// expander owns its comparison semantics.
    pub fn expand_with(
        bbox: &mut BoundingBox,
        point: &Point,
        box_system: CoordinateSystem,
        point_system: CoordinateSystem,
        strategy: &dyn OrderingStrategy,
    ) -> GeometryResult<()> {
        match (box_system, point_system) {
            (CoordinateSystem::Cartesian, CoordinateSystem::Cartesian) => {
                debug!("Expanding cartesian box over {} dimensions", bbox.dimensions());
                expand_cartesian(bbox, point, strategy);
                Ok(())
            },
            (CoordinateSystem::SphericalEquatorial(box_unit),
             CoordinateSystem::SphericalEquatorial(point_unit))
            | (CoordinateSystem::Geographic(box_unit),
               CoordinateSystem::Geographic(point_unit)) => {
                debug!("Expanding angular box ({})", box_system.description());
                expand_spheroidal(bbox, point, box_unit, point_unit);
                Ok(())
            },
            (box_system, point_system) => {
                error!("Cannot expand {} box by {} point",
                       box_system.description(), point_system.description());
                Err(GeometryError::SystemMismatch(
                    box_system.description(), point_system.description()))
            }
        }
    }
}
