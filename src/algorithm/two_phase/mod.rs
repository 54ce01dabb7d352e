//! # The two-phase Simplex method
//!
//! The first phase finds a basic feasible solution by minimizing a single artificial variable that
//! is added to every constraint. If that variable can be brought to zero, it is removed and the
//! second phase optimizes the actual objective function, starting from the basis the first phase
//! ended with.
//!
//! Both phases use the same primal Simplex loop on a dense `Tableau` in dictionary form.
use enum_map::{Enum, EnumMap};

use crate::algorithm::{OptimizationResult, Status};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, PivotRuleKind, SmallestIndex, SteepestAscentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::canonical_form::{CanonicalForm, DimensionError};
use crate::data::number_types::traits::OrderedField;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Default absolute tolerance on the artificial objective value, below which a problem is
/// considered feasible.
pub const DEFAULT_FEASIBILITY_TOLERANCE: f64 = 1e-12;

/// Solve `maximize c^T x` subject to `Ax <= b`, `x >= 0`.
///
/// # Arguments
///
/// * `c`: Objective coefficients followed by a constant term, length `n + 1`. The last element is
/// added to the objective value; pass zero if there is none.
/// * `a`: Constraint matrix, `m` rows of length `n`.
/// * `b`: Right-hand side, length `m`.
///
/// # Return value
///
/// The status, and when it is optimal, the optimal value and an optimal point of length `n`. An
/// error if the dimensions don't fit together; no pivoting is done in that case.
pub fn simplex<F: OrderedField>(
    c: &[F],
    a: &[Vec<F>],
    b: &[F],
) -> Result<(Status, Option<F>, Option<Vec<F>>), DimensionError> {
    let problem = CanonicalForm::new(c.to_vec(), a.to_vec(), b.to_vec())?;

    Ok(problem.solve().into_parts())
}

/// Run both phases on a problem.
///
/// # Return value
///
/// The result together with the number of basis changes per phase.
pub fn solve<F: OrderedField>(
    problem: &CanonicalForm<F>,
    options: &Options<F>,
) -> (OptimizationResult<F>, Statistics) {
    debug!(
        "Solving problem with {} variables and {} constraints, pivot rule {:?}",
        problem.nr_variables(), problem.nr_constraints(), options.pivot_rule,
    );
    let mut statistics = Statistics::default();

    let artificial = phase_one::artificial_tableau(problem);
    let (feasibility, nr_basis_changes) = phase_one::find_basic(artificial, options);
    statistics.basis_changes[Phase::One] = nr_basis_changes;

    let tableau = match feasibility {
        FeasibilityResult::Feasible(tableau) => tableau,
        FeasibilityResult::Infeasible => return (OptimizationResult::Infeasible, statistics),
        FeasibilityResult::Unbounded => return (OptimizationResult::Unbounded, statistics),
    };

    let (result, nr_basis_changes) = phase_two::optimize(tableau, problem, options);
    statistics.basis_changes[Phase::Two] = nr_basis_changes;

    debug!("Problem is {} after {} basis changes", result.status(), statistics.total_basis_changes());
    (result, statistics)
}

/// Settings for a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Options<F> {
    /// Largest absolute value of the minimized artificial variable for which the problem is still
    /// considered feasible.
    pub feasibility_tolerance: F,
    /// Which variables to exchange in each iteration, in both phases.
    pub pivot_rule: PivotRuleKind,
}

impl<F: OrderedField> Default for Options<F> {
    fn default() -> Self {
        Self {
            feasibility_tolerance: F::from_literal(DEFAULT_FEASIBILITY_TOLERANCE),
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

/// The two phases of the method.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Enum)]
pub enum Phase {
    One,
    Two,
}

/// Work done during a solve.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    /// Number of pivots in each phase.
    ///
    /// In phase one, this includes bringing the artificial variable into the basis and taking it
    /// out again at zero level, when those were needed.
    pub basis_changes: EnumMap<Phase, usize>,
}

impl Statistics {
    /// Number of pivots over both phases.
    pub fn total_basis_changes(&self) -> usize {
        self.basis_changes.values().sum()
    }
}

/// Terminal state of the primal Simplex loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrimalResult {
    /// No nonbasic variable has a positive relative cost.
    Optimal,
    /// A profitable column has no limiting row.
    Unbounded,
}

/// Maximizes the objective row of the tableau.
///
/// While calling this method, the current basic solution should be feasible: all right-hand side
/// values should be nonnegative.
///
/// # Return value
///
/// Whether an optimum was reached, and the number of basis changes it took.
pub(crate) fn primal<F, PR>(tableau: &mut Tableau<F>) -> (PrimalResult, usize)
where
    F: OrderedField,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_basis_changes = 0;
    loop {
        // Earlier pivots may leave small negative values due to rounding
        debug_assert!({
            let scale = (0..tableau.nr_rows())
                .map(|row| tableau.constraint_value(row).abs())
                .fold(F::one(), F::max);
            tableau.is_in_basic_feasible_solution_state(F::epsilon().sqrt() * scale)
        });

        match rule.select_primal_pivot_column(tableau) {
            Some(column) => match rule.select_primal_pivot_row(tableau, column) {
                Some(row) => {
                    trace!(
                        "x{} enters, x{} leaves at value {}",
                        tableau.non_basis()[column], tableau.basis()[row], tableau.constraint_value(row),
                    );
                    tableau.bring_into_basis(column, row);
                    nr_basis_changes += 1;
                    trace!("{}", tableau);
                },
                None => {
                    trace!("x{} can increase without bound", tableau.non_basis()[column]);
                    break (PrimalResult::Unbounded, nr_basis_changes);
                },
            },
            None => break (PrimalResult::Optimal, nr_basis_changes),
        }
    }
}

/// Run the primal Simplex loop with the rule selected at runtime.
pub(crate) fn primal_with<F: OrderedField>(
    tableau: &mut Tableau<F>,
    rule: PivotRuleKind,
) -> (PrimalResult, usize) {
    match rule {
        PivotRuleKind::FirstProfitable => primal::<_, FirstProfitable>(tableau),
        PivotRuleKind::SmallestIndex => primal::<_, SmallestIndex>(tableau),
        PivotRuleKind::SteepestAscentAlongVariable => primal::<_, SteepestAscentAlongVariable>(tableau),
    }
}
