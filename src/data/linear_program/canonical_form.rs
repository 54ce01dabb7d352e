//! # Linear programs in canonical form
//!
//! Maximize `c^T x + constant` subject to `Ax <= b` and `x >= 0`.
use thiserror::Error;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{self, Options, Statistics};
use crate::data::number_types::traits::OrderedField;

/// A linear program in canonical form, with consistent dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm<F> {
    /// Objective coefficient of each decision variable, length `n`.
    cost: Vec<F>,
    /// Constant term of the objective function.
    constant: F,
    /// Dense `m x n` matrix.
    constraints: Vec<Vec<F>>,
    /// Right-hand side, length `m`.
    b: Vec<F>,
}

/// The dimensions of the input vectors and matrix don't fit together.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DimensionError {
    /// The objective vector should have one element per variable, and one for the constant term.
    #[error("objective has {found} elements, expected {expected} (one per variable and a trailing constant)")]
    ObjectiveLength {
        /// Number of variables plus one.
        expected: usize,
        /// Length of the objective vector that was provided.
        found: usize,
    },
    /// Not all constraint rows have the same length.
    #[error("constraint row {row} has {found} coefficients, expected {expected}")]
    RaggedConstraints {
        /// Index of the first row with a deviating length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the deviating row.
        found: usize,
    },
    /// The right-hand side should have one element per constraint.
    #[error("right-hand side has {found} elements, expected {expected} (one per constraint)")]
    RightHandSideLength {
        /// Number of constraint rows.
        expected: usize,
        /// Length of the right-hand side that was provided.
        found: usize,
    },
}

impl<F: OrderedField> CanonicalForm<F> {
    /// Create a new instance from a cost vector with a trailing constant term.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective coefficients, followed by the constant term of the objective function. Has
    /// length `n + 1`; pass a zero as last element if there is no constant.
    /// * `constraints`: Coefficient matrix `A` with `m` rows of length `n`.
    /// * `b`: Right-hand side of length `m`.
    ///
    /// # Return value
    ///
    /// The problem, or an error if the dimensions are inconsistent.
    pub fn new(mut c: Vec<F>, constraints: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, DimensionError> {
        let nr_variables = Self::nr_columns(&constraints)?.unwrap_or(c.len().saturating_sub(1));
        if c.len() != nr_variables + 1 {
            return Err(DimensionError::ObjectiveLength { expected: nr_variables + 1, found: c.len() });
        }

        let constant = c.pop().unwrap_or_else(F::zero);
        Self::with_offset(c, constant, constraints, b)
    }

    /// Create a new instance with the constant term of the objective function given separately.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients, one per variable.
    /// * `constant`: Constant term of the objective function.
    /// * `constraints`: Coefficient matrix `A` with `m` rows of length `cost.len()`.
    /// * `b`: Right-hand side of length `m`.
    pub fn with_offset(
        cost: Vec<F>,
        constant: F,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, DimensionError> {
        if let Some(nr_columns) = Self::nr_columns(&constraints)? {
            if nr_columns != cost.len() {
                return Err(DimensionError::ObjectiveLength { expected: nr_columns + 1, found: cost.len() + 1 });
            }
        }
        if b.len() != constraints.len() {
            return Err(DimensionError::RightHandSideLength { expected: constraints.len(), found: b.len() });
        }

        Ok(Self { cost, constant, constraints, b })
    }

    /// Common row length of the constraint matrix, `None` if there are no rows.
    fn nr_columns(constraints: &[Vec<F>]) -> Result<Option<usize>, DimensionError> {
        match constraints.first() {
            None => Ok(None),
            Some(first) => {
                let expected = first.len();
                match constraints.iter().position(|row| row.len() != expected) {
                    Some(row) => Err(DimensionError::RaggedConstraints {
                        row,
                        expected,
                        found: constraints[row].len(),
                    }),
                    None => Ok(Some(expected)),
                }
            },
        }
    }

    /// Solve with the default options.
    pub fn solve(&self) -> OptimizationResult<F> {
        self.solve_with(&Options::default())
    }

    /// Solve with the given options.
    pub fn solve_with(&self, options: &Options<F>) -> OptimizationResult<F> {
        self.solve_with_statistics(options).0
    }

    /// Solve, also reporting how much work was done.
    pub fn solve_with_statistics(&self, options: &Options<F>) -> (OptimizationResult<F>, Statistics) {
        two_phase::solve(self, options)
    }

    /// Value of the objective function at a point, including the constant.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        inner_product(&self.cost, x) + self.constant
    }

    /// Whether a point satisfies all constraints and is nonnegative.
    ///
    /// # Arguments
    ///
    /// * `x`: Value for each decision variable.
    /// * `tolerance`: Absolute violation that is still accepted for every constraint.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        x.len() == self.nr_variables() &&
            x.iter().all(|&value| value >= -tolerance) &&
            self.constraints.iter().zip(&self.b)
                .all(|(row, &b)| inner_product(row, x) <= b + tolerance)
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Objective coefficients, without the constant term.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constant term of the objective function.
    pub fn constant(&self) -> F {
        self.constant
    }

    /// Rows of the constraint matrix.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }
}

fn inner_product<F: OrderedField>(left: &[F], right: &[F]) -> F {
    left.iter().zip(right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::canonical_form::{CanonicalForm, DimensionError};

    #[test]
    fn trailing_constant() {
        let problem = CanonicalForm::new(
            vec![3f64, 1f64, 2f64, 5f64],
            vec![vec![1f64, 1f64, 3f64], vec![2f64, 2f64, 5f64]],
            vec![30f64, 24f64],
        ).unwrap();
        assert_eq!(problem.cost(), &[3f64, 1f64, 2f64]);
        assert_eq!(problem.constant(), 5f64);
        assert_eq!(problem.nr_variables(), 3);
        assert_eq!(problem.nr_constraints(), 2);
        assert_eq!(problem.objective_value(&[1f64, 1f64, 1f64]), 11f64);
    }

    #[test]
    fn objective_length() {
        let result = CanonicalForm::new(
            vec![3f64, 1f64, 2f64],
            vec![vec![1f64, 1f64, 3f64]],
            vec![30f64],
        );
        assert_eq!(result, Err(DimensionError::ObjectiveLength { expected: 4, found: 3 }));

        let result = CanonicalForm::with_offset(vec![1f64], 0f64, vec![vec![1f64, 1f64]], vec![1f64]);
        assert_eq!(result, Err(DimensionError::ObjectiveLength { expected: 3, found: 2 }));

        let result = CanonicalForm::<f64>::new(vec![], vec![], vec![]);
        assert_eq!(result, Err(DimensionError::ObjectiveLength { expected: 1, found: 0 }));
    }

    #[test]
    fn ragged_and_right_hand_side() {
        let result = CanonicalForm::new(
            vec![1f64, 1f64, 0f64],
            vec![vec![1f64, 1f64], vec![1f64]],
            vec![1f64, 1f64],
        );
        assert_eq!(result, Err(DimensionError::RaggedConstraints { row: 1, expected: 2, found: 1 }));

        let result = CanonicalForm::new(
            vec![1f64, 1f64, 0f64],
            vec![vec![1f64, 1f64]],
            vec![1f64, 1f64],
        );
        assert_eq!(result, Err(DimensionError::RightHandSideLength { expected: 1, found: 2 }));
    }

    #[test]
    fn without_constraints() {
        let problem = CanonicalForm::new(vec![1f64, -2f64, 0f64], vec![], vec![]).unwrap();
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.nr_constraints(), 0);
        assert!(problem.is_feasible(&[4f64, 0f64], 0f64));
        assert!(!problem.is_feasible(&[-1f64, 0f64], 0f64));
    }

    #[test]
    fn is_feasible() {
        let problem = CanonicalForm::new(
            vec![1f64, 1f64, 0f64],
            vec![vec![1f64, 1f64], vec![-1f64, 0f64]],
            vec![2f64, -1f64],
        ).unwrap();
        assert!(problem.is_feasible(&[1f64, 1f64], 0f64));
        assert!(!problem.is_feasible(&[0.5f64, 0f64], 0f64));
        assert!(!problem.is_feasible(&[1f64, 1.5f64], 0f64));
        assert!(problem.is_feasible(&[1f64, 1f64 + 1e-13], 1e-12));
        assert!(!problem.is_feasible(&[1f64], 0f64));
    }
}
