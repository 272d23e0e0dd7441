//! Box-point expansion algorithms
//!
//! This module provides the two expansion primitives (the Cartesian
//! dimension loop and the spheroidal expander) plus the dispatcher that
//! selects between them from a coordinate system classification.

mod cartesian;
mod dispatch;
mod spheroid;
mod strategy;
#[cfg(test)]
mod tests;

pub use self::cartesian::expand_cartesian;
pub use self::dispatch::ExpansionDispatcher;
pub use self::spheroid::expand_spheroidal;
pub use self::strategy::{NaturalOrdering, OrderingStrategy, ReversedAxes};
