//! # Number types
//!
//! The algorithms are written against a trait rather than a concrete number type, so that the same
//! code runs with `f32` as well as `f64`.
pub mod traits;
