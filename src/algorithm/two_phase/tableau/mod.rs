//! # Data structures for Simplex
//!
//! Contains the simplex tableau in dictionary form and logic for the elementary operations which
//! can be performed upon it.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::once;
use std::mem;

use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::number_types::traits::OrderedField;

/// Variable tag of the single artificial variable.
///
/// Decision variables have tags `1` through `n`, slack variables `n + 1` through `n + m`.
pub const ARTIFICIAL: usize = 0;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Each row expresses a basic variable in terms of the nonbasic variables:
///
/// `basis[i] = sum_j rows[i][j] * non_basis[j] + rows[i][last]`
///
/// and the cost row expresses the objective function in the same way. The last column of the cost
/// row is the objective value of the current basic solution.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Dense matrix of size `nr_rows()` x `(nr_columns() + 1)`.
    ///
    /// The last column is the right-hand side: the value of the basic variable of that row.
    rows: Vec<Vec<F>>,
    /// Relative cost of each nonbasic column, followed by the objective function value.
    cost: Vec<F>,

    /// Variable tag of the basic variable of each row.
    basis: Vec<usize>,
    /// Variable tag of each column, the right-hand side column excluded.
    non_basis: Vec<usize>,
}

impl<F: OrderedField> Tableau<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `rows`: Dictionary rows, each of length `non_basis.len() + 1`.
    /// * `cost`: Objective row of length `non_basis.len() + 1`.
    /// * `basis`: Tag of the basic variable for each row.
    /// * `non_basis`: Tag of the nonbasic variable for each column.
    pub fn new(rows: Vec<Vec<F>>, cost: Vec<F>, basis: Vec<usize>, non_basis: Vec<usize>) -> Self {
        debug_assert_eq!(rows.len(), basis.len());
        debug_assert!(rows.iter().all(|row| row.len() == non_basis.len() + 1));
        debug_assert_eq!(cost.len(), non_basis.len() + 1);
        debug_assert!(basis.iter().all(|variable| !non_basis.contains(variable)));

        Self { rows, cost, basis, non_basis }
    }

    /// Exchange a nonbasic and a basic variable.
    ///
    /// The pivot row is solved for the entering variable, which is then substituted into all other
    /// rows and the cost row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column of the entering variable, in range `0` until `self.nr_columns()`.
    /// * `pivot_row`: Row of the leaving variable, in range `0` until `self.nr_rows()`. The element
    /// at the pivot column should be nonzero.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(!self.rows[pivot_row][pivot_column].is_zero());

        mem::swap(&mut self.basis[pivot_row], &mut self.non_basis[pivot_column]);

        let mut pivot = mem::take(&mut self.rows[pivot_row]);
        let factor = -pivot[pivot_column];
        // The leaving variable now has coefficient -1 before normalization
        pivot[pivot_column] = -F::one();
        for value in &mut pivot {
            *value = *value / factor;
        }

        for row in &mut self.rows {
            // The pivot row itself was taken out and is empty
            if !row.is_empty() {
                substitute(row, pivot_column, &pivot);
            }
        }
        substitute(&mut self.cost, pivot_column, &pivot);

        self.rows[pivot_row] = pivot;
    }

    /// Ratios of all rows that limit the increase of a nonbasic variable.
    ///
    /// Only rows in which the variable has a negative coefficient limit it. The ratio is the value
    /// of the nonbasic variable at which the basic variable of that row reaches zero.
    ///
    /// # Return value
    ///
    /// Tuples `(row index, ratio)` in row order.
    pub fn ratios(&self, column: usize) -> impl Iterator<Item = (usize, F)> + '_ {
        debug_assert!(column < self.nr_columns());

        let last = self.nr_columns();
        self.rows.iter()
            .enumerate()
            .filter(move |(_, row)| row[column] < F::zero())
            .map(move |(i, row)| (i, -row[last] / row[column]))
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right-hand side and the (negated)
    /// coefficient in the column. When there are multiple rows with the same ratio, the first one
    /// is chosen.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the variable can increase without bound.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        self.ratios(column)
            // `min_by` returns the first of several equal elements
            .min_by(|(_, left), (_, right)| left.partial_cmp(right).unwrap_or(Ordering::Equal))
            .map(|(row, _)| row)
    }

    /// Remove a nonbasic variable from the tableau altogether.
    ///
    /// Its column is dropped from all rows and from the cost row, which shrinks the tableau by one
    /// column. This amounts to fixing the variable at zero.
    pub fn remove_non_basic_column(mut self, column: usize) -> Self {
        debug_assert!(column < self.nr_columns());

        remove_indices(&mut self.non_basis, &[column]);
        remove_indices(&mut self.cost, &[column]);
        for row in &mut self.rows {
            remove_indices(row, &[column]);
        }

        self
    }

    /// Replace the cost row, keeping the basis.
    pub fn with_cost(self, cost: Vec<F>) -> Self {
        debug_assert_eq!(cost.len(), self.nr_columns() + 1);

        Self { cost, ..self }
    }

    /// Whether the current basic solution is feasible.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: How far below zero a right-hand side value may be, to allow for rounding
    /// errors.
    pub fn is_in_basic_feasible_solution_state(&self, tolerance: F) -> bool {
        (0..self.nr_rows()).all(|i| self.constraint_value(i) >= -tolerance)
    }

    /// Relative cost of a nonbasic column.
    ///
    /// A positive value means that increasing the variable improves the objective.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        self.cost[column]
    }

    /// The value of the objective function at the current basic solution.
    pub fn objective_function_value(&self) -> F {
        self.cost[self.nr_columns()]
    }

    /// The value of the basic variable of a row.
    pub fn constraint_value(&self, row: usize) -> F {
        debug_assert!(row < self.nr_rows());

        self.rows[row][self.nr_columns()]
    }

    /// A full row, including the right-hand side.
    pub fn row(&self, row: usize) -> &[F] {
        debug_assert!(row < self.nr_rows());

        &self.rows[row]
    }

    /// The full cost row, including the objective function value.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Tags of the basic variables, in row order.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Tags of the nonbasic variables, in column order.
    pub fn non_basis(&self) -> &[usize] {
        &self.non_basis
    }

    /// Row of a variable, if it is basic.
    pub fn basis_position(&self, variable: usize) -> Option<usize> {
        self.basis.iter().position(|&v| v == variable)
    }

    /// Column of a variable, if it is nonbasic.
    pub fn non_basis_position(&self, variable: usize) -> Option<usize> {
        self.non_basis.iter().position(|&v| v == variable)
    }

    /// Number of rows in the tableau, equal to the number of basic variables.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of nonbasic variables.
    ///
    /// # Note
    ///
    /// The right-hand side column is not counted.
    pub fn nr_columns(&self) -> usize {
        self.non_basis.len()
    }
}

/// Substitute the expression for the entering variable into a row.
///
/// # Arguments
///
/// * `row`: Row to update, expressed in the old nonbasic variables.
/// * `column`: Column of the entering variable, which after the exchange holds the leaving one.
/// * `pivot`: Normalized pivot row: the entering variable expressed in the new nonbasic variables.
fn substitute<F: OrderedField>(row: &mut [F], column: usize, pivot: &[F]) {
    debug_assert_eq!(row.len(), pivot.len());

    let factor = row[column];
    if factor.is_zero() {
        return;
    }

    row[column] = F::zero();
    for (value, &pivot_value) in row.iter_mut().zip(pivot) {
        *value = *value + factor * pivot_value;
    }
}

impl<F: OrderedField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let label = |variable: &usize| format!("x{}", variable);

        writeln!(f, "=== Tableau ===")?;
        let objective = self.objective_function_value().to_string();
        let cost = (0..self.nr_columns())
            .map(|j| self.relative_cost(j).to_string())
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| self.constraint_value(i).to_string())
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| self.rows.iter().map(|row| row[j].to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = self.basis.iter()
            .map(|variable| label(variable).len())
            .chain(once("cost".len()))
            .max().unwrap_or_default();
        let column_width = columns.iter().enumerate()
            .map(|(j, column)| {
                column.iter().map(String::len)
                    .chain([label(&self.non_basis[j]).len(), cost[j].len()])
                    .max().unwrap_or_default()
            })
            .collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len)
            .chain([objective.len(), "b".len()])
            .max().unwrap_or_default();

        // Column labels
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (variable, width) in self.non_basis.iter().zip(&column_width) {
            write!(f, " {0:^width$}", label(variable), width = *width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (value, width) in cost.iter().zip(&column_width) {
            write!(f, " {0:^width$}", value, width = *width)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "-".repeat(total_width))?;

        for (i, variable) in self.basis.iter().enumerate() {
            write!(f, "{0:>width$} |", label(variable), width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (column, width) in columns.iter().zip(&column_width) {
                write!(f, " {0:^width$}", column[i], width = *width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis ===")?;
        writeln!(f, "{}", self.basis.iter().map(label).join(", "))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::tests::problem_1;

    #[test]
    fn select_primal_pivot_row() {
        let tableau = problem_1::tableau_form();
        // Ratios 30, 12 and 9
        assert_eq!(tableau.select_primal_pivot_row(0), Some(2));
        // Ratios 30, 12 and 36
        assert_eq!(tableau.select_primal_pivot_row(1), Some(1));
    }

    #[test]
    fn select_primal_pivot_row_ties() {
        let tableau = Tableau::new(
            vec![vec![-1f64, 2f64], vec![-2f64, 4f64], vec![-1f64, 1f64]],
            vec![1f64, 0f64],
            vec![2, 3, 4],
            vec![1],
        );
        // Ratios 2, 2 and 1
        assert_eq!(tableau.select_primal_pivot_row(0), Some(2));

        let tableau = Tableau::new(
            vec![vec![3f64, 2f64], vec![-2f64, 4f64], vec![-1f64, 2f64]],
            vec![1f64, 0f64],
            vec![2, 3, 4],
            vec![1],
        );
        // The first row doesn't limit the column, the other two tie
        assert_eq!(tableau.select_primal_pivot_row(0), Some(1));
    }

    #[test]
    fn unbounded_column() {
        let tableau = Tableau::new(
            vec![vec![1f64, 0f64, 5f64]],
            vec![1f64, -1f64, 0f64],
            vec![3],
            vec![1, 2],
        );
        assert_eq!(tableau.select_primal_pivot_row(0), None);
        assert_eq!(tableau.ratios(0).count(), 0);
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 2);

        assert_eq!(tableau.basis(), &[4, 5, 1]);
        assert_eq!(tableau.non_basis(), &[6, 2, 3]);

        let expected_rows = [
            [0.25f64, -0.75f64, -2.5f64, 21f64],
            [0.5f64, -1.5f64, -4f64, 6f64],
            [-0.25f64, -0.25f64, -0.5f64, 9f64],
        ];
        for (i, expected) in expected_rows.iter().enumerate() {
            for (value, expected) in tableau.row(i).iter().zip(expected) {
                assert_abs_diff_eq!(value, expected);
            }
        }
        for (value, expected) in tableau.cost().iter().zip(&[-0.75f64, 0.25f64, 0.5f64, 27f64]) {
            assert_abs_diff_eq!(value, expected);
        }
        assert_abs_diff_eq!(tableau.objective_function_value(), 27f64);
        assert!(tableau.is_in_basic_feasible_solution_state(0f64));
    }

    #[test]
    fn remove_non_basic_column() {
        let tableau = problem_1::artificial_tableau_form();
        assert_eq!(tableau.non_basis_position(0), Some(0));

        let tableau = tableau.remove_non_basic_column(0);
        assert_eq!(tableau.non_basis(), &[1, 2, 3]);
        assert_eq!(tableau.nr_columns(), 3);
        assert_eq!(tableau.row(0), &[-1f64, -1f64, -3f64, 30f64]);
        assert_eq!(tableau.cost(), &[0f64, 0f64, 0f64, 0f64]);
        assert_eq!(tableau.non_basis_position(0), None);
    }

    #[test]
    fn feasibility_state() {
        let tableau = Tableau::new(
            vec![vec![1f64, 0f64], vec![1f64, -1e-13f64]],
            vec![0f64, 0f64],
            vec![2, 3],
            vec![1],
        );
        assert!(!tableau.is_in_basic_feasible_solution_state(0f64));
        assert!(tableau.is_in_basic_feasible_solution_state(1e-12f64));
    }

    #[test]
    fn display() {
        let tableau = problem_1::tableau_form();
        let rendered = tableau.to_string();

        assert!(rendered.starts_with("=== Tableau ===\n"));
        assert!(rendered.contains("cost |"));
        assert!(rendered.contains("x4 |"));
        assert!(rendered.ends_with("=== Basis ===\nx4, x5, x6\n"));
    }
}
