//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, the values of the decision variables are collected in a
//! solution. Slack variables are not part of it.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Index;

use crate::data::number_types::traits::OrderedField;

/// An optimal point together with its objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, including any constant that was included
    /// in the original problem.
    objective_value: F,
    /// Value of each decision variable, in the order of the problem's columns.
    values: Vec<F>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    #[allow(missing_docs)]
    pub fn objective_value(&self) -> F
    where
        F: Copy,
    {
        self.objective_value
    }

    /// Value of each decision variable.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Split into the objective value and the point.
    pub fn into_parts(self) -> (F, Vec<F>) {
        (self.objective_value, self.values)
    }
}

impl<F> Index<usize> for Solution<F> {
    type Output = F;

    fn index(&self, variable: usize) -> &Self::Output {
        &self.values[variable]
    }
}

impl<F: OrderedField> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        for (j, value) in self.values.iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn display() {
        let solution = Solution::new(28f64, vec![8f64, 4f64, 0f64]);
        assert_eq!(solution[1], 4f64);
        assert_eq!(solution.to_string(), "Objective value: 28\nx1 = 8\nx2 = 4\nx3 = 0\n");
        assert_eq!(solution.into_parts(), (28f64, vec![8f64, 4f64, 0f64]));
    }
}
