//! Angular coordinate helpers
//!
//! Normalization into canonical ranges, unit conversion and the
//! tolerance-aware comparisons the spheroidal expander is built on.

pub mod math;
pub mod normalize;

pub use self::normalize::{convert_angle, normalize_box, normalize_longitude, normalize_point};
