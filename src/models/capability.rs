//! Capability matrix model.
//!
//! The capability matrix records, for every (machine, operation) pair, the
//! cycle time in seconds that machine needs to produce one unit of that
//! operation. A cycle time of zero means "this machine cannot perform this
//! operation". Cycle times may be fractional.
//!
//! Raw cells arrive from an editable table, so normalization happens at this
//! boundary: non-finite or negative values become zero (incapable). The
//! solver layers can therefore assume a clean, non-negative matrix.

use serde::{Deserialize, Serialize};

/// Per-(machine, operation) cycle-time table.
///
/// Rows are machines, columns are operations; both are identified by index.
/// The matrix is plain data — whether it is *solvable* (every operation
/// reachable by at least one machine) is checked by [`crate::validation`],
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityMatrix {
    /// `cycle_times[machine][operation]`, seconds. 0 = cannot perform.
    cycle_times: Vec<Vec<f64>>,
    operation_count: usize,
}

impl CapabilityMatrix {
    /// Creates an all-zero (no machine capable of anything) matrix.
    pub fn new(machine_count: usize, operation_count: usize) -> Self {
        Self {
            cycle_times: vec![vec![0.0; operation_count]; machine_count],
            operation_count,
        }
    }

    /// Builds a matrix from raw rows, normalizing every cell.
    ///
    /// The operation count is the longest row's length; shorter rows are
    /// zero-filled. Non-finite or negative cells become 0 ("cannot perform").
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let operation_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cycle_times = rows
            .into_iter()
            .map(|row| {
                let mut row: Vec<f64> = row.into_iter().map(sanitize_cycle_time).collect();
                row.resize(operation_count, 0.0);
                row
            })
            .collect();
        Self {
            cycle_times,
            operation_count,
        }
    }

    /// Sets one cell, normalizing the value.
    pub fn with_cycle_time(mut self, machine: usize, operation: usize, cycle_time_s: f64) -> Self {
        self.set_cycle_time(machine, operation, cycle_time_s);
        self
    }

    /// Sets one cell, normalizing the value.
    pub fn set_cycle_time(&mut self, machine: usize, operation: usize, cycle_time_s: f64) {
        self.cycle_times[machine][operation] = sanitize_cycle_time(cycle_time_s);
    }

    /// Number of machine rows.
    pub fn machine_count(&self) -> usize {
        self.cycle_times.len()
    }

    /// Number of operation columns.
    pub fn operation_count(&self) -> usize {
        self.operation_count
    }

    /// Cycle time for one (machine, operation) pair, seconds.
    #[inline]
    pub fn cycle_time(&self, machine: usize, operation: usize) -> f64 {
        self.cycle_times[machine][operation]
    }

    /// Whether the machine can perform the operation at all.
    #[inline]
    pub fn is_capable(&self, machine: usize, operation: usize) -> bool {
        self.cycle_times[machine][operation] > 0.0
    }

    /// Capable machines for one operation as `(machine, cycle_time)` pairs,
    /// in ascending machine-index order.
    pub fn capable_machines(&self, operation: usize) -> Vec<(usize, f64)> {
        self.cycle_times
            .iter()
            .enumerate()
            .filter(|(_, row)| row[operation] > 0.0)
            .map(|(machine, row)| (machine, row[operation]))
            .collect()
    }

    /// Fastest cycle time among machines capable of the operation.
    ///
    /// `None` when no machine can perform it.
    pub fn fastest_cycle_time(&self, operation: usize) -> Option<f64> {
        self.cycle_times
            .iter()
            .map(|row| row[operation])
            .filter(|&ct| ct > 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Returns a matrix of the given dimensions, preserving overlapping
    /// cells and zero-filling new ones.
    ///
    /// This is the table-rebuild behavior of the editing layer: growing or
    /// shrinking the line keeps whatever cycle times still apply.
    pub fn resized(&self, machine_count: usize, operation_count: usize) -> Self {
        let cycle_times = (0..machine_count)
            .map(|machine| {
                (0..operation_count)
                    .map(|operation| {
                        self.cycle_times
                            .get(machine)
                            .and_then(|row| row.get(operation))
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();
        Self {
            cycle_times,
            operation_count,
        }
    }
}

/// Normalizes one raw cell: non-finite or negative values mean the machine
/// cannot perform the operation.
fn sanitize_cycle_time(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_normalizes_cells() {
        let m = CapabilityMatrix::from_rows(vec![
            vec![30.0, -5.0, f64::NAN],
            vec![0.0, f64::INFINITY, 35.5],
        ]);

        assert_eq!(m.machine_count(), 2);
        assert_eq!(m.operation_count(), 3);
        assert_eq!(m.cycle_time(0, 0), 30.0);
        assert_eq!(m.cycle_time(0, 1), 0.0); // negative → incapable
        assert_eq!(m.cycle_time(0, 2), 0.0); // NaN → incapable
        assert_eq!(m.cycle_time(1, 1), 0.0); // infinite → incapable
        assert_eq!(m.cycle_time(1, 2), 35.5);
    }

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let m = CapabilityMatrix::from_rows(vec![vec![10.0], vec![20.0, 30.0, 40.0]]);
        assert_eq!(m.operation_count(), 3);
        assert_eq!(m.cycle_time(0, 1), 0.0);
        assert_eq!(m.cycle_time(0, 2), 0.0);
        assert_eq!(m.cycle_time(1, 2), 40.0);
    }

    #[test]
    fn test_capable_machines_ascending_index() {
        let m = CapabilityMatrix::from_rows(vec![vec![15.0], vec![0.0], vec![12.0]]);
        assert_eq!(m.capable_machines(0), vec![(0, 15.0), (2, 12.0)]);
    }

    #[test]
    fn test_fastest_cycle_time() {
        let m = CapabilityMatrix::from_rows(vec![vec![30.0, 0.0], vec![20.0, 0.0]]);
        assert_eq!(m.fastest_cycle_time(0), Some(20.0));
        assert_eq!(m.fastest_cycle_time(1), None);
    }

    #[test]
    fn test_set_cycle_time_normalizes() {
        let mut m = CapabilityMatrix::new(1, 2);
        m.set_cycle_time(0, 0, 25.0);
        m.set_cycle_time(0, 1, -3.0);
        assert!(m.is_capable(0, 0));
        assert!(!m.is_capable(0, 1));
    }

    #[test]
    fn test_resized_preserves_overlap() {
        let m = CapabilityMatrix::from_rows(vec![vec![30.0, 15.0], vec![0.0, 25.0]]);

        let grown = m.resized(3, 3);
        assert_eq!(grown.machine_count(), 3);
        assert_eq!(grown.operation_count(), 3);
        assert_eq!(grown.cycle_time(0, 0), 30.0);
        assert_eq!(grown.cycle_time(1, 1), 25.0);
        assert_eq!(grown.cycle_time(2, 2), 0.0);

        let shrunk = m.resized(1, 1);
        assert_eq!(shrunk.machine_count(), 1);
        assert_eq!(shrunk.cycle_time(0, 0), 30.0);
    }

    #[test]
    fn test_deserializes_from_ui_payload() {
        let m: CapabilityMatrix = serde_json::from_str(
            r#"{"cycle_times":[[30.0,15.0,0.0],[0.0,15.0,35.0]],"operation_count":3}"#,
        )
        .unwrap();
        assert_eq!(m.machine_count(), 2);
        assert!(m.is_capable(1, 2));
    }
}
