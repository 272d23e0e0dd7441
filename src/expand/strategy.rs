//! Ordering strategy definitions
//!
//! The Cartesian expansion loop does not compare coordinates itself; it asks
//! an injected strategy whether a candidate coordinate extends a bound. This
//! keeps the loop independent of the comparison semantics, so reversed or
//! tolerance-aware orderings can be plugged in per dimension without
//! touching the algorithm.

/// Comparison semantics for deciding whether a coordinate extends a bound
///
/// Both predicates must be strict, deterministic and side-effect-free.
/// `less` decides whether the candidate replaces the minimum corner on the
/// given dimension, `greater` whether it replaces the maximum. The dimension
/// parameter allows a strategy to apply different orderings on different
/// axes.
pub trait OrderingStrategy {
    /// Check whether `candidate` extends the minimum bound on a dimension
    fn less(&self, dimension: usize, candidate: f64, bound: f64) -> bool;

    /// Check whether `candidate` extends the maximum bound on a dimension
    fn greater(&self, dimension: usize, candidate: f64, bound: f64) -> bool;
}

/// The default ordering: plain numeric `<` and `>` on every dimension
pub struct NaturalOrdering;

impl OrderingStrategy for NaturalOrdering {
    fn less(&self, _dimension: usize, candidate: f64, bound: f64) -> bool {
        candidate < bound
    }

    fn greater(&self, _dimension: usize, candidate: f64, bound: f64) -> bool {
        candidate > bound
    }
}

/// Natural ordering with the comparison flipped on selected axes
///
/// On a reversed axis the minimum corner grows upward and the maximum corner
/// grows downward; all other axes keep the natural ordering.
pub struct ReversedAxes {
    /// Dimensions on which the ordering is flipped
    axes: Vec<usize>,
}

impl ReversedAxes {
    /// Create a strategy reversing the ordering on the given dimensions
    pub fn new(axes: Vec<usize>) -> Self {
        ReversedAxes { axes }
    }

    fn is_reversed(&self, dimension: usize) -> bool {
        self.axes.contains(&dimension)
    }
}

impl OrderingStrategy for ReversedAxes {
    fn less(&self, dimension: usize, candidate: f64, bound: f64) -> bool {
        if self.is_reversed(dimension) {
            candidate > bound
        } else {
            candidate < bound
        }
    }

    fn greater(&self, dimension: usize, candidate: f64, bound: f64) -> bool {
        if self.is_reversed(dimension) {
            candidate < bound
        } else {
            candidate > bound
        }
    }
}
