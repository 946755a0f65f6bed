//! Balance-first unit allocation.
//!
//! Materializes a concrete assignment for a chosen output level. Where the
//! feasibility check packs fastest machines first (raw capacity), the
//! allocator's goal is balance: it hands out one unit at a time, always to
//! the least-loaded machine that still has room, so busy time spreads as
//! evenly as the matrix allows.
//!
//! # Algorithm
//!
//! Operations are processed in the same tightness order as the feasibility
//! check. For each operation, up to `units` single units are assigned,
//! each to the capable machine with the lowest cumulative used time that
//! can still fit one more (`used + cycle_time ≤ period`); ties prefer the
//! smaller cycle time, then the smaller machine index. When no machine
//! fits the next unit the operation stops short — the planner treats a
//! short column as a hard error, never silent under-production.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" — greedy
//! least-loaded assignment as a load-balancing heuristic.

use super::feasibility::tightness_order;
use crate::models::{Assignment, CapabilityMatrix};

/// One-unit-at-a-time greedy load balancer.
#[derive(Debug, Clone)]
pub struct AllocationPlanner<'a> {
    matrix: &'a CapabilityMatrix,
    period_s: f64,
}

impl<'a> AllocationPlanner<'a> {
    /// Creates a planner over a matrix and period.
    pub fn new(matrix: &'a CapabilityMatrix, period_s: f64) -> Self {
        Self { matrix, period_s }
    }

    /// Builds the per-(machine, operation) assignment for `units` of every
    /// operation.
    ///
    /// Deterministic: the same matrix, period, and target always produce
    /// the identical assignment. For a target beyond what the greedy rule
    /// can place, the affected columns come back short; callers check
    /// column sums (see `LinePlanner::plan`).
    pub fn allocate(&self, units: u64) -> Assignment {
        let mut assignment =
            Assignment::zeroed(self.matrix.machine_count(), self.matrix.operation_count());
        let mut used = vec![0.0f64; self.matrix.machine_count()];

        for &operation in &tightness_order(self.matrix, self.period_s) {
            let capable = self.matrix.capable_machines(operation);

            let mut produced = 0u64;
            while produced < units {
                // Least-loaded machine with room for one more unit; ties by
                // smaller cycle time, then ascending machine index.
                let mut best: Option<(usize, f64)> = None;
                for &(machine, ct) in &capable {
                    if used[machine] + ct > self.period_s {
                        continue;
                    }
                    let better = match best {
                        None => true,
                        Some((leader, leader_ct)) => {
                            used[machine] < used[leader]
                                || (used[machine] == used[leader] && ct < leader_ct)
                        }
                    };
                    if better {
                        best = Some((machine, ct));
                    }
                }

                let Some((machine, ct)) = best else {
                    break; // nothing fits the next unit; leave the column short
                };

                assignment.add_units(machine, operation, 1);
                used[machine] += ct;
                produced += 1;
            }
        }

        assignment
    }
}
