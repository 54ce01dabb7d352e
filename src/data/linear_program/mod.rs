//! # Representing linear programs
//!
//! Linear programs in canonical form contain only `<=` constraints and nonnegative variables.
pub mod canonical_form;
pub mod solution;
