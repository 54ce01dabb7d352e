//! # Phase one: finding a basic feasible solution
//!
//! A single artificial variable `x0` is added to every constraint, with coefficient one. If the
//! all-slack basis is infeasible, `x0` enters the basis in the row with the most negative
//! right-hand side, which makes every row feasible at once. Minimizing `x0` then either brings it
//! to zero, which gives a basic feasible solution of the original constraints, or proves that there
//! is none.
use std::iter::once;

use crate::algorithm::two_phase::{Options, primal_with, PrimalResult};
use crate::algorithm::two_phase::tableau::{ARTIFICIAL, Tableau};
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::OrderedField;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Clone, Debug, PartialEq)]
pub enum FeasibilityResult<F> {
    /// The problem is feasible; the tableau has a feasible basis and no artificial column.
    ///
    /// Its cost row is meaningless and should be replaced before optimizing.
    Feasible(Tableau<F>),
    /// The problem is not feasible.
    Infeasible,
    /// The artificial objective could be increased without bound.
    ///
    /// This doesn't happen for a correct tableau, as the artificial variable can't become negative.
    Unbounded,
}

/// Build the tableau of the auxiliary problem.
///
/// The nonbasic variables are the artificial variable followed by the decision variables, the
/// basic variables are the slacks. Each row reads `x_(n + 1 + i) = x0 - A_i x + b_i`, and the
/// objective is to maximize `-x0`.
pub fn artificial_tableau<F: OrderedField>(problem: &CanonicalForm<F>) -> Tableau<F> {
    let nr_variables = problem.nr_variables();
    let nr_constraints = problem.nr_constraints();

    let rows = problem.constraints().iter()
        .zip(problem.b())
        .map(|(row, &b)| {
            once(F::one())
                .chain(row.iter().map(|&coefficient| -coefficient))
                .chain(once(b))
                .collect()
        })
        .collect();

    let mut cost = vec![F::zero(); nr_variables + 2];
    cost[0] = -F::one();

    let basis = (nr_variables + 1..=nr_variables + nr_constraints).collect();
    let non_basis = (ARTIFICIAL..=nr_variables).collect();

    Tableau::new(rows, cost, basis, non_basis)
}

/// Reduces the artificial variable to zero, if possible. In doing so, a basic feasible solution to
/// the original constraints is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau, as created by `artificial_tableau`.
/// * `options`: Tolerance for the artificial objective value and pivot rule.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a tableau without the artificial variable. Also the
/// number of basis changes that were made.
pub fn find_basic<F: OrderedField>(
    mut tableau: Tableau<F>,
    options: &Options<F>,
) -> (FeasibilityResult<F>, usize) {
    debug_assert_eq!(tableau.non_basis_position(ARTIFICIAL), Some(0));

    let mut nr_basis_changes = 0;
    if let Some((row, b_min)) = most_infeasible_row(&tableau) {
        debug!("Slack basis is infeasible with right-hand side {} in row {}, artificial variable enters", b_min, row);
        // The artificial objective row is -x0, so this exchange leaves -(pivot row) as the cost
        tableau.bring_into_basis(0, row);
        nr_basis_changes += 1;
    }

    let (result, nr_primal_changes) = primal_with(&mut tableau, options.pivot_rule);
    nr_basis_changes += nr_primal_changes;

    let artificial_value = -tableau.objective_function_value();
    if artificial_value.abs() > options.feasibility_tolerance {
        debug!("Artificial variable has minimum {}, problem is infeasible", artificial_value);
        return (FeasibilityResult::Infeasible, nr_basis_changes);
    }
    if result == PrimalResult::Unbounded {
        warn!("Artificial objective is unbounded");
        return (FeasibilityResult::Unbounded, nr_basis_changes);
    }

    if let Some(row) = tableau.basis_position(ARTIFICIAL) {
        remove_artificial_basis_variable(&mut tableau, row);
        nr_basis_changes += 1;
    }
    let column = tableau.non_basis_position(ARTIFICIAL)
        .unwrap_or_else(|| panic!("Artificial variable is still basic after phase one"));

    debug!("Found a basic feasible solution after {} basis changes", nr_basis_changes);
    (FeasibilityResult::Feasible(tableau.remove_non_basic_column(column)), nr_basis_changes)
}

/// The row with the most negative right-hand side, the first one if there are several.
///
/// # Return value
///
/// `None` if all right-hand side values are nonnegative, that is, the slack basis is feasible.
fn most_infeasible_row<F: OrderedField>(tableau: &Tableau<F>) -> Option<(usize, F)> {
    let mut minimum: Option<(usize, F)> = None;
    for row in 0..tableau.nr_rows() {
        let value = tableau.constraint_value(row);
        match minimum {
            Some((_, existing)) if value >= existing => {},
            _ => minimum = Some((row, value)),
        }
    }

    minimum.filter(|&(_, value)| value < F::zero())
}

/// Removes the artificial variable from the basis by making a basis change "at zero level", or
/// without change of the current solution.
///
/// Any column with a nonzero coefficient in the row of the artificial variable can take its place.
/// Such a column always exists: every constraint has its own slack, so the constraints never fix
/// the artificial variable.
fn remove_artificial_basis_variable<F: OrderedField>(tableau: &mut Tableau<F>, row: usize) {
    debug_assert_eq!(tableau.basis()[row], ARTIFICIAL);

    match (0..tableau.nr_columns()).find(|&column| !tableau.row(row)[column].is_zero()) {
        Some(column) => {
            trace!("Artificial variable is basic at zero level, x{} takes its place", tableau.non_basis()[column]);
            tableau.bring_into_basis(column, row);
        },
        None => panic!("Artificial variable is fixed at zero by the constraints"),
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::Options;
    use crate::algorithm::two_phase::phase_one::{artificial_tableau, FeasibilityResult, find_basic, most_infeasible_row, remove_artificial_basis_variable};
    use crate::algorithm::two_phase::tableau::{ARTIFICIAL, Tableau};
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn build_artificial_tableau() {
        let tableau = artificial_tableau(&problem_1::canonical_form());
        assert_eq!(tableau, problem_1::artificial_tableau_form());
    }

    #[test]
    fn feasible_slack_basis() {
        let tableau = problem_1::artificial_tableau_form();
        assert_eq!(most_infeasible_row(&tableau), None);

        let (result, nr_basis_changes) = find_basic(tableau, &Options::default());
        assert_eq!(nr_basis_changes, 0);
        match result {
            FeasibilityResult::Feasible(tableau) => {
                let expected = problem_1::tableau_form();
                assert_eq!(tableau.basis(), expected.basis());
                assert_eq!(tableau.non_basis(), expected.non_basis());
                for i in 0..tableau.nr_rows() {
                    assert_eq!(tableau.row(i), expected.row(i));
                }
            },
            _ => panic!("Problem should be feasible"),
        }
    }

    #[test]
    fn artificial_variable_enters() {
        let mut tableau = artificial_tableau(&problem_2::canonical_form());
        assert_eq!(most_infeasible_row(&tableau), Some((1, -4f64)));

        tableau.bring_into_basis(0, 1);
        assert_eq!(tableau.basis(), &[3, ARTIFICIAL]);
        assert_eq!(tableau.non_basis(), &[4, 1, 2]);
        assert_eq!(tableau.row(0), &[1f64, -1f64, -4f64, 6f64]);
        assert_eq!(tableau.row(1), &[1f64, 1f64, -5f64, 4f64]);
        assert_eq!(tableau.cost(), &[-1f64, -1f64, 5f64, -4f64]);
        assert!(tableau.is_in_basic_feasible_solution_state(0f64));
    }

    #[test]
    fn infeasible_slack_basis() {
        let (result, nr_basis_changes) = find_basic(
            artificial_tableau(&problem_2::canonical_form()),
            &Options::default(),
        );
        assert_eq!(nr_basis_changes, 2);
        match result {
            FeasibilityResult::Feasible(tableau) => {
                assert_eq!(tableau.non_basis_position(ARTIFICIAL), None);
                assert_eq!(tableau.basis_position(ARTIFICIAL), None);
                assert_eq!(tableau.nr_columns(), 2);
                assert!(tableau.is_in_basic_feasible_solution_state(0f64));
            },
            _ => panic!("Problem should be feasible"),
        }
    }

    #[test]
    fn infeasible() {
        // x1 <= -1 and x1 >= 1
        let problem = CanonicalForm::new(
            vec![0f64, 0f64, 0f64],
            vec![vec![1f64, 0f64], vec![-1f64, 0f64]],
            vec![-1f64, -1f64],
        ).unwrap();
        let (result, _) = find_basic(artificial_tableau(&problem), &Options::default());
        assert_eq!(result, FeasibilityResult::Infeasible);
    }

    #[test]
    fn zero_right_hand_side_is_feasible() {
        let problem = CanonicalForm::new(
            vec![1f64, 1f64, 0f64],
            vec![vec![1f64, 1f64], vec![1f64, -1f64]],
            vec![0f64, 2f64],
        ).unwrap();
        let tableau = artificial_tableau(&problem);
        assert_eq!(most_infeasible_row(&tableau), None);

        let (result, nr_basis_changes) = find_basic(tableau, &Options::default());
        assert!(matches!(result, FeasibilityResult::Feasible(_)));
        assert_eq!(nr_basis_changes, 0);
    }

    #[test]
    fn remove_artificial_at_zero_level() {
        let mut tableau = Tableau::new(
            vec![vec![0f64, -1f64, 2f64, 0f64], vec![-1f64, -1f64, -1f64, 5f64]],
            vec![0f64, 1f64, -2f64, 0f64],
            vec![ARTIFICIAL, 4],
            vec![1, 2, 3],
        );
        remove_artificial_basis_variable(&mut tableau, 0);

        assert_eq!(tableau.basis(), &[2, 4]);
        assert_eq!(tableau.non_basis(), &[1, ARTIFICIAL, 3]);
        assert_abs_diff_eq!(tableau.constraint_value(0), 0f64);
        assert_abs_diff_eq!(tableau.constraint_value(1), 5f64);
        assert_eq!(tableau.row(1), &[-1f64, 1f64, -3f64, 5f64]);
    }
}
