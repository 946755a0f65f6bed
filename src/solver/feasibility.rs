//! Greedy packing feasibility check.
//!
//! Decides whether a candidate per-operation output level fits into the
//! machines' time budgets at all. The check is a capacity-filling
//! heuristic, not an exact oracle: it certifies levels its own greedy
//! packing can place, which is exactly what the throughput search needs.
//!
//! # Algorithm
//!
//! 1. Every machine starts with the full period of remaining time.
//! 2. Operations are processed most-constrained first (ascending tightness).
//! 3. Each operation fills its fastest capable machines first, taking as
//!    many units as each machine's remaining time allows.
//! 4. Any operation left short fails the whole check immediately.
//!
//! # Reference
//! Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//! Packing: A Survey"

use crate::models::CapabilityMatrix;

/// Units one machine could produce for one operation in `period_s` seconds
/// of exclusive use. Callers guarantee `cycle_time_s > 0`.
pub(crate) fn unit_capacity(period_s: f64, cycle_time_s: f64) -> u64 {
    (period_s / cycle_time_s).floor() as u64
}

/// An operation's tightness: the units it could receive with its capable
/// machines all to itself for the whole period.
pub(crate) fn tightness(matrix: &CapabilityMatrix, period_s: f64, operation: usize) -> u64 {
    matrix
        .capable_machines(operation)
        .into_iter()
        .map(|(_, ct)| unit_capacity(period_s, ct))
        .fold(0, u64::saturating_add)
}

/// Operation indices ordered most-constrained first.
///
/// Both the feasibility check and the allocator process operations in this
/// order; sharing one ordering keeps the two greedy passes from diverging
/// on which operation claims scarce machine time first. Ties keep
/// ascending operation index (stable sort).
pub(crate) fn tightness_order(matrix: &CapabilityMatrix, period_s: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..matrix.operation_count()).collect();
    order.sort_by_key(|&operation| tightness(matrix, period_s, operation));
    order
}

/// Greedy feasibility check for a candidate output level.
///
/// # Example
/// ```
/// use line_plan::models::CapabilityMatrix;
/// use line_plan::solver::FeasibilityChecker;
///
/// let matrix = CapabilityMatrix::from_rows(vec![
///     vec![30.0, 15.0, 0.0],
///     vec![0.0, 15.0, 35.0],
/// ]);
/// let checker = FeasibilityChecker::new(&matrix, 900.0);
/// assert!(checker.is_feasible(22));
/// assert!(!checker.is_feasible(23));
/// ```
#[derive(Debug, Clone)]
pub struct FeasibilityChecker<'a> {
    matrix: &'a CapabilityMatrix,
    period_s: f64,
}

impl<'a> FeasibilityChecker<'a> {
    /// Creates a checker over a matrix and period.
    pub fn new(matrix: &'a CapabilityMatrix, period_s: f64) -> Self {
        Self { matrix, period_s }
    }

    /// Whether `units` of every operation can be packed into the machines'
    /// time budgets.
    ///
    /// All bookkeeping is local; the checker observes nothing and mutates
    /// nothing between calls.
    pub fn is_feasible(&self, units: u64) -> bool {
        let mut remaining = vec![self.period_s; self.matrix.machine_count()];

        for &operation in &tightness_order(self.matrix, self.period_s) {
            // Fastest machines first; ties keep ascending machine index.
            let mut candidates = self.matrix.capable_machines(operation);
            candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

            let mut needed = units;
            for (machine, ct) in candidates {
                if needed == 0 {
                    break;
                }
                let take = unit_capacity(remaining[machine], ct).min(needed);
                remaining[machine] -= take as f64 * ct;
                needed -= take;
            }

            if needed > 0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_machine_line() -> CapabilityMatrix {
        CapabilityMatrix::from_rows(vec![vec![30.0, 15.0, 0.0], vec![0.0, 15.0, 35.0]])
    }

    #[test]
    fn test_unit_capacity_floors() {
        assert_eq!(unit_capacity(900.0, 100.0), 9);
        assert_eq!(unit_capacity(900.0, 35.0), 25);
        assert_eq!(unit_capacity(900.0, 1000.0), 0);
    }

    #[test]
    fn test_tightness_sums_capable_machines() {
        let matrix = two_machine_line();
        assert_eq!(tightness(&matrix, 900.0, 0), 30); // machine 0 only
        assert_eq!(tightness(&matrix, 900.0, 1), 120); // 60 + 60
        assert_eq!(tightness(&matrix, 900.0, 2), 25); // machine 1 only
    }

    #[test]
    fn test_tightness_order_most_constrained_first() {
        let matrix = two_machine_line();
        assert_eq!(tightness_order(&matrix, 900.0), vec![2, 0, 1]);
    }

    #[test]
    fn test_tightness_order_ties_keep_index_order() {
        let matrix = CapabilityMatrix::from_rows(vec![vec![30.0, 30.0]]);
        assert_eq!(tightness_order(&matrix, 900.0), vec![0, 1]);
    }

    #[test]
    fn test_zero_units_always_feasible() {
        let checker_matrix = two_machine_line();
        let checker = FeasibilityChecker::new(&checker_matrix, 900.0);
        assert!(checker.is_feasible(0));
    }

    #[test]
    fn test_single_machine_capacity() {
        let matrix = CapabilityMatrix::from_rows(vec![vec![100.0]]);
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        assert!(checker.is_feasible(9));
        assert!(!checker.is_feasible(10));
    }

    #[test]
    fn test_shared_machine_contention() {
        let matrix = two_machine_line();
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        // 22 fits (op 1 splits 16/6 across the leftover time), 23 does not
        assert!(checker.is_feasible(22));
        assert!(!checker.is_feasible(23));
    }

    #[test]
    fn test_monotone_on_fixed_line() {
        let matrix = two_machine_line();
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        for units in 0..=22 {
            assert!(checker.is_feasible(units), "units {units} should fit");
        }
        for units in 23..=30 {
            assert!(!checker.is_feasible(units), "units {units} should not fit");
        }
    }

    #[test]
    fn test_monotone_under_three_way_contention() {
        // Every machine is shared by two operations; the packing order and
        // leftovers interact, which is where greedy monotonicity would break
        // if it were going to.
        let matrix = CapabilityMatrix::from_rows(vec![
            vec![10.0, 20.0, 0.0],
            vec![15.0, 0.0, 30.0],
            vec![0.0, 25.0, 40.0],
        ]);
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        for units in 0..=30 {
            assert!(checker.is_feasible(units), "units {units} should fit");
        }
        for units in 31..=35 {
            assert!(!checker.is_feasible(units), "units {units} should not fit");
        }
    }

    #[test]
    fn test_unreachable_operation_is_infeasible_for_any_units() {
        // Column 1 all zero — checker reports infeasible rather than panicking;
        // validation normally rejects this before the checker runs.
        let matrix = CapabilityMatrix::from_rows(vec![vec![30.0, 0.0]]);
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        assert!(checker.is_feasible(0));
        assert!(!checker.is_feasible(1));
    }

    #[test]
    fn test_fractional_cycle_times() {
        let matrix = CapabilityMatrix::from_rows(vec![vec![0.7]]);
        let checker = FeasibilityChecker::new(&matrix, 900.0);
        // floor(900 / 0.7) = 1285
        assert!(checker.is_feasible(1285));
        assert!(!checker.is_feasible(1286));
    }
}
