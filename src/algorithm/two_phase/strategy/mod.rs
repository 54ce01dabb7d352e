//! # Strategies
//!
//! Decisions that the Simplex method leaves open, such as which variable enters the basis.
pub mod pivot_rule;
