//! Point structure for representing coordinates

use crate::geometry::errors::{GeometryError, GeometryResult};

/// A point in a coordinate system
///
/// Holds one coordinate value per dimension. For angular systems the
/// convention is longitude on dimension 0 and latitude on dimension 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Coordinate values, one per dimension
    coords: Vec<f64>,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { coords: vec![x, y] }
    }

    /// Create a new 3D point
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { coords: vec![x, y, z] }
    }

    /// Create a point from an arbitrary list of coordinate values
    pub fn from_coords(coords: Vec<f64>) -> Self {
        Point { coords }
    }

    /// Parse a point from a string (format: "x,y" or "x,y,z,...")
    pub fn from_string(point_str: &str) -> GeometryResult<Self> {
        let mut coords = Vec::new();
        for part in point_str.split(',') {
            let value = part.trim().parse::<f64>()
                .map_err(|_| GeometryError::InvalidCoordinate(part.trim().to_string()))?;
            coords.push(value);
        }

        if coords.is_empty() {
            return Err(GeometryError::GenericError(
                "Point must have at least one coordinate".to_string()));
        }

        Ok(Point { coords })
    }

    /// Get the number of dimensions of this point
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Get the coordinate value on the given dimension
    pub fn coordinate(&self, dimension: usize) -> f64 {
        self.coords[dimension]
    }

    /// Set the coordinate value on the given dimension
    pub fn set_coordinate(&mut self, dimension: usize, value: f64) {
        self.coords[dimension] = value;
    }

    /// Get the longitude (dimension 0) of an angular point
    pub fn lon(&self) -> f64 {
        self.coords[0]
    }

    /// Get the latitude (dimension 1) of an angular point
    pub fn lat(&self) -> f64 {
        self.coords[1]
    }
}
