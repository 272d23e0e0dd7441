//! Tolerance-aware floating-point comparisons
//!
//! Angular bookkeeping accumulates rounding error through wrapping and unit
//! conversion, so bound updates compare with a relative epsilon instead of
//! exact equality.

/// Check two values for equality within a relative epsilon
pub fn equals(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f64::EPSILON * scale
}

/// Check whether `a` is smaller than `b` beyond the equality tolerance
pub fn smaller(a: f64, b: f64) -> bool {
    !equals(a, b) && a < b
}

/// Check whether `a` is larger than `b` beyond the equality tolerance
pub fn larger(a: f64, b: f64) -> bool {
    !equals(a, b) && a > b
}
