//! Core geometry types
//!
//! This module provides the point and bounding box value types plus the
//! coordinate system classification used to pick an expansion algorithm.

mod bbox;
mod point;
mod crs;
pub mod errors;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::crs::{AngularUnit, CoordinateSystem, CoordinateSystemFactory};
pub use self::errors::{GeometryError, GeometryResult};
