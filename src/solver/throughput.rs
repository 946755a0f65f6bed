//! Maximum throughput search.
//!
//! Finds the largest per-operation output level the feasibility check
//! accepts, by binary search over the integer output range.
//!
//! # Algorithm
//!
//! 1. Upper bound: no operation can exceed what its single fastest capable
//!    machine could do alone, so `hi` is the minimum of
//!    `floor(period / fastest_cycle_time)` across operations.
//! 2. Binary search `[0, hi]` with an upward-rounding midpoint: a feasible
//!    probe raises `lo` to it, an infeasible one drops `hi` below it.
//!
//! The search assumes feasibility is monotone (anything below a feasible
//! level is feasible). That holds for the greedy checker on ordinary
//! matrices and is probed by randomized tests at the solver level.

use super::feasibility::{unit_capacity, FeasibilityChecker};
use crate::models::CapabilityMatrix;

/// Hard ceiling on the searched output range.
const SEARCH_CEILING: u64 = 1_000_000_000;

/// Binary search for the maximum feasible output level.
#[derive(Debug, Clone)]
pub struct ThroughputSolver<'a> {
    matrix: &'a CapabilityMatrix,
    period_s: f64,
}

impl<'a> ThroughputSolver<'a> {
    /// Creates a solver over a matrix and period.
    pub fn new(matrix: &'a CapabilityMatrix, period_s: f64) -> Self {
        Self { matrix, period_s }
    }

    /// Upper bound on any operation's output: the minimum over operations
    /// of its fastest machine's solo capacity.
    ///
    /// An operation with no capable machine bounds the search at 0 (there
    /// is no valid output level for it); validation rejects such input
    /// before planning.
    pub fn upper_bound(&self) -> u64 {
        let mut hi = SEARCH_CEILING;
        for operation in 0..self.matrix.operation_count() {
            let solo = match self.matrix.fastest_cycle_time(operation) {
                Some(ct) => unit_capacity(self.period_s, ct),
                None => 0,
            };
            hi = hi.min(solo);
        }
        hi
    }

    /// Largest output level `U` with `is_feasible(U)`.
    ///
    /// Returns 0 when nothing is producible within the period.
    pub fn max_units(&self) -> u64 {
        let checker = FeasibilityChecker::new(self.matrix, self.period_s);
        let mut lo = 0u64;
        let mut hi = self.upper_bound();

        while lo < hi {
            let mid = lo + (hi - lo).div_ceil(2);
            if checker.is_feasible(mid) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        lo
    }
}
