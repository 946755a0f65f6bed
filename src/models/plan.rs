//! Assignment (solution) model.
//!
//! An assignment is the solver's answer: how many units of each operation
//! every machine produces within one period. It is plain integer data —
//! time and workload consequences are derived by the solver's metrics
//! layer from the assignment and the capability matrix together.

use serde::{Deserialize, Serialize};

/// Per-(machine, operation) unit counts for one period.
///
/// For a target `U` the feasibility check certified, every operation
/// column sums to exactly `U`. Partial columns can only appear when the
/// allocator was asked for an infeasible target; the planner surfaces that
/// as an error rather than returning the assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// `qty[machine][operation]` unit counts.
    qty: Vec<Vec<u64>>,
}

impl Assignment {
    /// Creates an all-zero assignment of the given dimensions.
    pub fn zeroed(machine_count: usize, operation_count: usize) -> Self {
        Self {
            qty: vec![vec![0; operation_count]; machine_count],
        }
    }

    /// Number of machine rows.
    pub fn machine_count(&self) -> usize {
        self.qty.len()
    }

    /// Number of operation columns.
    pub fn operation_count(&self) -> usize {
        self.qty.first().map(Vec::len).unwrap_or(0)
    }

    /// Units of one operation assigned to one machine.
    #[inline]
    pub fn quantity(&self, machine: usize, operation: usize) -> u64 {
        self.qty[machine][operation]
    }

    /// Adds units to one (machine, operation) cell.
    pub fn add_units(&mut self, machine: usize, operation: usize, units: u64) {
        self.qty[machine][operation] += units;
    }

    /// Total units of one operation across all machines (the column sum).
    pub fn operation_total(&self, operation: usize) -> u64 {
        self.qty.iter().map(|row| row[operation]).sum()
    }

    /// Total units across the whole assignment.
    pub fn total_units(&self) -> u64 {
        self.qty.iter().flatten().sum()
    }

    /// The operations one machine actually works on, as
    /// `(operation, units)` pairs with units > 0.
    pub fn assigned_operations(&self, machine: usize) -> Vec<(usize, u64)> {
        self.qty[machine]
            .iter()
            .enumerate()
            .filter(|(_, &units)| units > 0)
            .map(|(operation, &units)| (operation, units))
            .collect()
    }

    /// Whether the machine has nothing assigned.
    pub fn is_machine_idle(&self, machine: usize) -> bool {
        self.qty[machine].iter().all(|&units| units == 0)
    }
}
