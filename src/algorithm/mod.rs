//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Solution<F>),
    Unbounded,
}

impl<F> OptimizationResult<F> {
    /// Which of the three outcomes this is.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::Infeasible => Status::Infeasible,
            OptimizationResult::FiniteOptimum(_) => Status::Optimal,
            OptimizationResult::Unbounded => Status::Unbounded,
        }
    }

    /// Split into a status, and the optimal value and point if there is an optimum.
    pub fn into_parts(self) -> (Status, Option<F>, Option<Vec<F>>) {
        match self {
            OptimizationResult::FiniteOptimum(solution) => {
                let (value, x) = solution.into_parts();
                (Status::Optimal, Some(value), Some(x))
            },
            other => (other.status(), None, None),
        }
    }
}

/// Outcome of solving a linear program, without the solution itself.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
}

impl Status {
    /// Name of the status, as reported to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(self.as_str())
    }
}
