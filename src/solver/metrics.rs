//! Workload metrics.
//!
//! Derives reporting figures from a completed assignment and its
//! capability matrix. Pure arithmetic over the solution — nothing here
//! feeds back into the solver.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Used time | Σ units × cycle time per machine (seconds) |
//! | Workload % | Machine busy time relative to the busiest machine |
//! | Operation share % | Machine's fraction of one operation's total units |
//!
//! Values are kept at full precision; [`round1`] applies the one-decimal
//! display convention.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, CapabilityMatrix};

/// Per-machine and per-operation workload figures for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadReport {
    /// Busy seconds per machine.
    pub used_time_s: Vec<f64>,
    /// Busy time as a percentage of the busiest machine, 0–100.
    /// All zero when the whole line is idle.
    pub workload_percent: Vec<f64>,
    /// `operation_share[machine][operation]`: the machine's percentage of
    /// that operation's total units, 0–100. Zero for untouched operations.
    pub operation_share: Vec<Vec<f64>>,
}

impl WorkloadReport {
    /// Computes the report for an assignment against its matrix.
    pub fn calculate(assignment: &Assignment, matrix: &CapabilityMatrix) -> Self {
        let machines = assignment.machine_count();
        let operations = assignment.operation_count();

        let used_time_s: Vec<f64> = (0..machines)
            .map(|machine| {
                (0..operations)
                    .map(|op| assignment.quantity(machine, op) as f64 * matrix.cycle_time(machine, op))
                    .sum()
            })
            .collect();

        let max_used = used_time_s.iter().copied().fold(0.0, f64::max);
        let workload_percent = used_time_s
            .iter()
            .map(|&used| if max_used > 0.0 { used / max_used * 100.0 } else { 0.0 })
            .collect();

        let operation_totals: Vec<u64> = (0..operations)
            .map(|op| assignment.operation_total(op))
            .collect();
        let operation_share = (0..machines)
            .map(|machine| {
                (0..operations)
                    .map(|op| {
                        let total = operation_totals[op];
                        if total > 0 {
                            assignment.quantity(machine, op) as f64 / total as f64 * 100.0
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            used_time_s,
            workload_percent,
            operation_share,
        }
    }

    /// Index of the busiest machine (first one on ties), or `None` for an
    /// idle line.
    pub fn bottleneck(&self) -> Option<usize> {
        let max_used = self.used_time_s.iter().copied().fold(0.0, f64::max);
        if max_used > 0.0 {
            self.used_time_s.iter().position(|&used| used == max_used)
        } else {
            None
        }
    }
}

/// Rounds to one decimal place, half away from zero — the display
/// convention for workload and share percentages.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
