//! Coordinate system classification
//!
//! Expansion picks its algorithm from this classification: Cartesian boxes
//! go through the per-dimension loop, spherical-equatorial and geographic
//! boxes through the spheroidal expander.

use std::f64::consts::PI;

use crate::geometry::errors::{GeometryError, GeometryResult};

/// Unit of measure for angular coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngularUnit {
    /// Degrees (period 360, poles at ±90)
    Degrees,
    /// Radians (period 2π, poles at ±π/2)
    Radians,
}

impl AngularUnit {
    /// Get the longitude period for this unit
    pub fn period(&self) -> f64 {
        match self {
            AngularUnit::Degrees => 360.0,
            AngularUnit::Radians => 2.0 * PI,
        }
    }

    /// Get half the longitude period for this unit
    ///
    /// Normalized longitudes lie in `(-half_period, half_period]`.
    pub fn half_period(&self) -> f64 {
        match self {
            AngularUnit::Degrees => 180.0,
            AngularUnit::Radians => PI,
        }
    }

    /// Get the maximum latitude (pole boundary) for this unit
    pub fn max_latitude(&self) -> f64 {
        match self {
            AngularUnit::Degrees => 90.0,
            AngularUnit::Radians => PI / 2.0,
        }
    }
}

/// Classification of a coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Plain Cartesian axes, any dimension count
    Cartesian,
    /// Spherical-equatorial longitude/latitude in the given unit
    SphericalEquatorial(AngularUnit),
    /// Geographic longitude/latitude on a spheroid in the given unit
    Geographic(AngularUnit),
}

impl CoordinateSystem {
    /// Get the angular unit, if this is an angular system
    pub fn unit(&self) -> Option<AngularUnit> {
        match self {
            CoordinateSystem::Cartesian => None,
            CoordinateSystem::SphericalEquatorial(unit) => Some(*unit),
            CoordinateSystem::Geographic(unit) => Some(*unit),
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::Cartesian => "cartesian".to_string(),
            CoordinateSystem::SphericalEquatorial(AngularUnit::Degrees) => {
                "spherical-equatorial (degrees)".to_string()
            },
            CoordinateSystem::SphericalEquatorial(AngularUnit::Radians) => {
                "spherical-equatorial (radians)".to_string()
            },
            CoordinateSystem::Geographic(AngularUnit::Degrees) => {
                "geographic (degrees)".to_string()
            },
            CoordinateSystem::Geographic(AngularUnit::Radians) => {
                "geographic (radians)".to_string()
            },
        }
    }
}

/// Factory for creating coordinate system classifications
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Parse a coordinate system from a string
    ///
    /// Accepted forms: "cartesian", "spherical", "geographic", optionally
    /// suffixed with the angular unit as ":degrees" or ":radians"
    /// (e.g. "geographic:radians"). Angular systems default to degrees.
    pub fn from_string(crs_str: &str) -> GeometryResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_lowercase();
        let (family, unit_str) = match crs_str.split_once(':') {
            Some((family, unit)) => (family, Some(unit)),
            None => (crs_str.as_str(), None),
        };

        let unit = match unit_str {
            None | Some("degrees") | Some("deg") => AngularUnit::Degrees,
            Some("radians") | Some("rad") => AngularUnit::Radians,
            Some(other) => {
                return Err(GeometryError::GenericError(
                    format!("Unsupported angular unit: {}", other)));
            }
        };

        match family {
            "cartesian" => {
                if unit_str.is_some() {
                    return Err(GeometryError::GenericError(
                        "Cartesian systems carry no angular unit".to_string()));
                }
                Ok(CoordinateSystem::Cartesian)
            },
            "spherical" | "spherical-equatorial" => {
                Ok(CoordinateSystem::SphericalEquatorial(unit))
            },
            "geographic" => Ok(CoordinateSystem::Geographic(unit)),
            _ => Err(GeometryError::GenericError(
                format!("Unsupported coordinate system: {}", crs_str))),
        }
    }
}
