//! Bounding box structure for defining regions

use super::point::Point;
use crate::geometry::errors::{GeometryError, GeometryResult};

/// A bounding box in a coordinate system
///
/// Defined by a minimum and a maximum corner with the same dimension count.
/// For Cartesian boxes every dimension satisfies `min <= max`. Angular boxes
/// are the one deliberate exception: the longitude pair may be stored with
/// `min > max` numerically to represent an interval that crosses the
/// periodic cut (e.g. min=170°, max=-170° is the 20° arc over the
/// anti-meridian). Latitude bounds never straddle.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner coordinates
    min_corner: Point,
    /// Maximum corner coordinates
    max_corner: Point,
}

impl BoundingBox {
    /// Create a new 2D bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_corner: Point::new(min_x, min_y),
            max_corner: Point::new(max_x, max_y),
        }
    }

    /// Create a bounding box from two corner points
    ///
    /// Both corners must have the same dimension count; this is a caller
    /// contract, not a recoverable condition.
    pub fn from_corners(min_corner: Point, max_corner: Point) -> Self {
        debug_assert_eq!(min_corner.dimensions(), max_corner.dimensions(),
                         "box corners must have the same dimension count");
        BoundingBox { min_corner, max_corner }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> GeometryResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeometryError::GenericError(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let min_x = parts[0].trim().parse::<f64>()
            .map_err(|_| GeometryError::InvalidCoordinate(parts[0].trim().to_string()))?;
        let min_y = parts[1].trim().parse::<f64>()
            .map_err(|_| GeometryError::InvalidCoordinate(parts[1].trim().to_string()))?;
        let max_x = parts[2].trim().parse::<f64>()
            .map_err(|_| GeometryError::InvalidCoordinate(parts[2].trim().to_string()))?;
        let max_y = parts[3].trim().parse::<f64>()
            .map_err(|_| GeometryError::InvalidCoordinate(parts[3].trim().to_string()))?;

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Get the number of dimensions of this box
    pub fn dimensions(&self) -> usize {
        self.min_corner.dimensions()
    }

    /// Get the minimum corner value on the given dimension
    pub fn min(&self, dimension: usize) -> f64 {
        self.min_corner.coordinate(dimension)
    }

    /// Get the maximum corner value on the given dimension
    pub fn max(&self, dimension: usize) -> f64 {
        self.max_corner.coordinate(dimension)
    }

    /// Set the minimum corner value on the given dimension
    pub fn set_min(&mut self, dimension: usize, value: f64) {
        self.min_corner.set_coordinate(dimension, value);
    }

    /// Set the maximum corner value on the given dimension
    pub fn set_max(&mut self, dimension: usize, value: f64) {
        self.max_corner.set_coordinate(dimension, value);
    }

    /// Get the width of the bounding box (dimension 0)
    pub fn width(&self) -> f64 {
        self.max(0) - self.min(0)
    }

    /// Get the height of the bounding box (dimension 1)
    pub fn height(&self) -> f64 {
        self.max(1) - self.min(1)
    }

    /// Get the center point of a 2D bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min(0) + self.width() / 2.0,
            self.min(1) + self.height() / 2.0,
        )
    }

    /// Check if this box contains a point, comparing coordinates as-is
    ///
    /// This is the plain Cartesian reading; it does not interpret a
    /// straddling longitude interval.
    pub fn contains(&self, point: &Point) -> bool {
        debug_assert_eq!(self.dimensions(), point.dimensions(),
                         "box and point must have the same dimension count");
        (0..self.dimensions()).all(|d| {
            point.coordinate(d) >= self.min(d) && point.coordinate(d) <= self.max(d)
        })
    }
}
