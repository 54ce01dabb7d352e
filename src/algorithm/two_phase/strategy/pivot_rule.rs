//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::cmp::Ordering;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. By default, that is the row with the
/// smallest ratio, the first one in case of ties.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column of a nonbasic variable with a positive relative cost, if there is one.
    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize>;

    /// Row selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The row of the leaving variable, or `None` if the column is unbounded.
    fn select_primal_pivot_row<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
        column: usize,
    ) -> Option<usize> {
        tableau.select_primal_pivot_row(column)
    }
}

/// Which `PivotRule` to use, as a runtime value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotRuleKind {
    /// See `FirstProfitable`.
    #[default]
    FirstProfitable,
    /// See `SmallestIndex`.
    SmallestIndex,
    /// See `SteepestAscentAlongVariable`.
    SteepestAscentAlongVariable,
}

/// Simply pivot on the first column, in the current column order, which has a positive relative
/// cost.
///
/// Columns change order as variables move in and out of the basis, so this is not Bland's rule and
/// it doesn't prevent cycling.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_columns())
            .find(|&column| tableau.relative_cost(column) > F::zero())
    }
}

/// Bland's rule: among the profitable columns, pick the variable with the lowest tag, and break
/// ties in the ratio test by the lowest tag of the leaving variable.
///
/// Tags never change, so this rule doesn't cycle in exact arithmetic.
pub struct SmallestIndex;
impl PivotRule for SmallestIndex {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_columns())
            .filter(|&column| tableau.relative_cost(column) > F::zero())
            .min_by_key(|&column| tableau.non_basis()[column])
    }

    fn select_primal_pivot_row<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
        column: usize,
    ) -> Option<usize> {
        tableau.ratios(column)
            .min_by(|&(left_row, left_ratio), &(right_row, right_ratio)| {
                left_ratio.partial_cmp(&right_ratio)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| tableau.basis()[left_row].cmp(&tableau.basis()[right_row]))
            })
            .map(|(row, _)| row)
    }
}

/// Simply pivot on the column which has the largest relative cost (Dantzig's rule).
///
/// Ties are broken by the column order.
pub struct SteepestAscentAlongVariable;
impl PivotRule for SteepestAscentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        let mut largest: Option<(usize, F)> = None;
        for (column, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost > F::zero()) {
            match largest {
                Some((_, existing_cost)) if cost <= existing_cost => {},
                _ => largest = Some((column, cost)),
            }
        }

        largest.map(|(column, _)| column)
    }
}
