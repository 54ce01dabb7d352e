//! # Phase two: optimizing the objective function
//!
//! Starting from the feasible basis that phase one ended with, the actual objective function is
//! expressed in the nonbasic variables and maximized.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{Options, primal_with, PrimalResult};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `tableau`: Tableau with a feasible basis and without artificial variable.
/// * `problem`: Problem that the tableau was derived from, to read the objective function from.
/// * `options`: Pivot rule to use.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method. Also the number of
/// basis changes that were made.
pub fn optimize<F: OrderedField>(
    tableau: Tableau<F>,
    problem: &CanonicalForm<F>,
    options: &Options<F>,
) -> (OptimizationResult<F>, usize) {
    let cost = objective_row(&tableau, problem);
    let mut tableau = tableau.with_cost(cost);

    let (result, nr_basis_changes) = primal_with(&mut tableau, options.pivot_rule);
    let result = match result {
        PrimalResult::Optimal => {
            OptimizationResult::FiniteOptimum(extract_solution(&tableau, problem.nr_variables()))
        },
        PrimalResult::Unbounded => OptimizationResult::Unbounded,
    };

    (result, nr_basis_changes)
}

/// Express the objective function of the problem in the current nonbasic variables.
///
/// Each basic decision variable is replaced by the row that defines it, each nonbasic decision
/// variable keeps its original cost. Slack variables have no cost.
///
/// # Return value
///
/// A cost row of length `tableau.nr_columns() + 1`, the last element being the objective value of
/// the current basic solution.
pub fn objective_row<F: OrderedField>(tableau: &Tableau<F>, problem: &CanonicalForm<F>) -> Vec<F> {
    let cost = problem.cost();
    let is_decision_variable = |variable: usize| (1..=problem.nr_variables()).contains(&variable);

    let mut objective = vec![F::zero(); tableau.nr_columns() + 1];
    for (i, &variable) in tableau.basis().iter().enumerate() {
        if is_decision_variable(variable) {
            let factor = cost[variable - 1];
            for (total, &value) in objective.iter_mut().zip(tableau.row(i)) {
                *total = *total + factor * value;
            }
        }
    }
    for (j, &variable) in tableau.non_basis().iter().enumerate() {
        if is_decision_variable(variable) {
            objective[j] = objective[j] + cost[variable - 1];
        }
    }

    let last = tableau.nr_columns();
    objective[last] = objective[last] + problem.constant();

    objective
}

/// Read the decision variable values off the tableau.
///
/// Nonbasic variables are zero, basic variables equal the right-hand side of their row.
pub fn extract_solution<F: OrderedField>(tableau: &Tableau<F>, nr_variables: usize) -> Solution<F> {
    let mut values = vec![F::zero(); nr_variables];
    for (i, &variable) in tableau.basis().iter().enumerate() {
        if (1..=nr_variables).contains(&variable) {
            values[variable - 1] = tableau.constraint_value(i);
        }
    }

    Solution::new(tableau.objective_function_value(), values)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::Options;
    use crate::algorithm::two_phase::phase_two::{extract_solution, objective_row, optimize};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::tests::problem_1;

    #[test]
    fn objective_row_of_slack_basis() {
        let problem = problem_1::canonical_form();
        let tableau = problem_1::tableau_form();
        assert_eq!(objective_row(&tableau, &problem), tableau.cost());
    }

    #[test]
    fn objective_row_after_pivot() {
        let problem = problem_1::canonical_form();
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 2);

        // Substituting by pivoting and by reconstruction should agree
        let reconstructed = objective_row(&tableau, &problem);
        for (value, expected) in reconstructed.iter().zip(tableau.cost()) {
            assert_abs_diff_eq!(value, expected);
        }
    }

    #[test]
    fn objective_row_with_reordered_variables() {
        let problem = CanonicalForm::with_offset(
            vec![1f64, 10f64],
            3f64,
            vec![vec![1f64, 1f64]],
            vec![4f64],
        ).unwrap();
        // x1 basic, x3 (slack) and x2 nonbasic in swapped order
        let tableau = Tableau::new(
            vec![vec![-1f64, -1f64, 4f64]],
            vec![0f64, 0f64, 0f64],
            vec![1],
            vec![3, 2],
        );
        // 1 * (-x3 - x2 + 4) + 10 * x2 + 3
        assert_eq!(objective_row(&tableau, &problem), vec![-1f64, 9f64, 7f64]);
    }

    #[test]
    fn optimality_certificate() {
        let problem = problem_1::canonical_form();
        let tableau = problem_1::tableau_form();
        let (result, nr_basis_changes) = optimize(tableau, &problem, &Options::default());

        assert_eq!(nr_basis_changes, 2);
        match result {
            OptimizationResult::FiniteOptimum(solution) => {
                assert_abs_diff_eq!(solution.objective_value(), problem_1::OPTIMAL_VALUE, epsilon = 1e-9);
                for (value, expected) in solution.values().iter().zip(&problem_1::OPTIMAL_POINT) {
                    assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
                }
            },
            _ => panic!("Problem has a finite optimum"),
        }
    }

    #[test]
    fn no_profitable_column_left() {
        let problem = problem_1::canonical_form();
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 2);
        tableau.bring_into_basis(1, 1);

        assert!(tableau.cost()[..tableau.nr_columns()].iter().all(|&cost| cost <= 0f64));
        let solution = extract_solution(&tableau, problem.nr_variables());
        assert_abs_diff_eq!(solution.objective_value(), 28f64, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.objective_value(), problem.objective_value(solution.values()), epsilon = 1e-9);
    }

    #[test]
    fn extract_from_slack_basis() {
        let tableau = problem_1::tableau_form();
        let solution = extract_solution(&tableau, 3);
        assert_eq!(solution.values(), &[0f64, 0f64, 0f64]);
        assert_eq!(solution.objective_value(), 0f64);
    }
}
