//! # A linear program solver
//!
//! Solves linear programs of the form
//!
//! ```text
//! maximize    c^T x + constant
//! subject to  Ax <= b
//!             x >= 0
//! ```
//!
//! using the two-phase Simplex method on a dense tableau in dictionary form, as described in
//! chapter 29 of Introduction to Algorithms by Cormen, Leiserson, Rivest and Stein. A single
//! artificial variable is used to find a first basic feasible solution.
//!
//! # Example
//!
//! ```
//! use dictionary_lp::{simplex, Status};
//!
//! let (status, value, x) = simplex(
//!     &[3f64, 1f64, 2f64, 0f64],
//!     &[vec![1f64, 1f64, 3f64], vec![2f64, 2f64, 5f64], vec![4f64, 1f64, 2f64]],
//!     &[30f64, 24f64, 36f64],
//! ).unwrap();
//!
//! assert_eq!(status, Status::Optimal);
//! assert!((value.unwrap() - 28f64).abs() < 1e-9);
//! assert_eq!(x.unwrap().len(), 3);
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod algorithm;
pub mod data;
pub mod io;

pub use algorithm::{OptimizationResult, Status};
pub use algorithm::two_phase::{Options, Phase, simplex, Statistics};
pub use algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
pub use data::linear_program::canonical_form::{CanonicalForm, DimensionError};
pub use data::linear_program::solution::Solution;

#[cfg(test)]
mod tests;
