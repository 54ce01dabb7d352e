//! # Traits
//!
//! The simplex algorithm is defined over the ordered fields. Floating point numbers are only an
//! approximation of one: the contracts that these traits imply are not kept precisely, which is why
//! the algorithms in this crate compare against a tolerance where exactness matters.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// The number type that all algorithmic logic in this crate is written against.
///
/// Automatically implemented for all floating point types that can be printed.
pub trait OrderedField: Float + Debug + Display {
    /// Convert a literal constant into this number type.
    ///
    /// Falls back to the machine epsilon if the value is not representable, which only matters for
    /// tolerances.
    fn from_literal(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::epsilon)
    }
}

impl<T: Float + Debug + Display> OrderedField for T {
}
