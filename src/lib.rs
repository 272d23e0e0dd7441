pub mod angle;
pub mod expand;
pub mod geometry;

pub use expand::{expand_cartesian, expand_spheroidal, ExpansionDispatcher};
pub use expand::{NaturalOrdering, OrderingStrategy, ReversedAxes};
pub use geometry::{AngularUnit, BoundingBox, CoordinateSystem, CoordinateSystemFactory, Point};
pub use geometry::{GeometryError, GeometryResult};
