//! Line planning solver.
//!
//! Computes a full production plan from a capability matrix: the maximum
//! per-operation output a period supports, a workload-balanced unit
//! assignment achieving it, and the derived workload metrics.
//!
//! # Algorithm
//!
//! `FeasibilityChecker` packs candidate output levels fastest-machine-first;
//! `ThroughputSolver` binary-searches that predicate for the maximum level;
//! `AllocationPlanner` materializes the assignment with a balance-first
//! greedy rule; `WorkloadReport` derives the reporting figures. Both greedy
//! passes share one tightness ordering, but they optimize different things
//! (packing vs. balance) and can disagree on rare matrices — `LinePlanner`
//! verifies the allocation and surfaces any disagreement as
//! [`PlanError::AllocationShortfall`] instead of under-producing silently.
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

mod allocation;
mod feasibility;
mod metrics;
mod throughput;

pub use allocation::AllocationPlanner;
pub use feasibility::FeasibilityChecker;
pub use metrics::{round1, WorkloadReport};
pub use throughput::ThroughputSolver;

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, CapabilityMatrix, Operation};
use crate::validation::{validate_input, ValidationError};

/// Default planning period: one 15-minute takt window, in seconds.
pub const DEFAULT_PERIOD_SECONDS: f64 = 900.0;

/// A fatal planning error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The input failed pre-solve validation (unreachable operations,
    /// degenerate dimensions, or an invalid period).
    #[error("plan input failed validation ({} issues)", .0.len())]
    InvalidInput(Vec<ValidationError>),

    /// The allocator could not fully place an output level the feasibility
    /// search certified. This is a divergence between the two greedy
    /// heuristics, not an input problem.
    #[error("operation {operation} allocated {assigned} of {target} units")]
    AllocationShortfall {
        /// Operation column that came up short.
        operation: usize,
        /// Units actually placed.
        assigned: u64,
        /// Units requested per operation.
        target: u64,
    },
}

/// A computed production plan for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlan {
    /// Units every operation produces in the period.
    pub max_units: u64,
    /// Per-(machine, operation) unit counts.
    pub assignment: Assignment,
    /// Derived workload figures for reporting.
    pub workload: WorkloadReport,
}

/// Input container for planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Cycle-time table.
    pub matrix: CapabilityMatrix,
    /// Display names, by operation index (may be shorter than the matrix).
    pub operations: Vec<Operation>,
    /// Planning period, seconds.
    pub period_s: f64,
}

impl PlanRequest {
    /// Creates a request with default operation names and period.
    pub fn new(matrix: CapabilityMatrix) -> Self {
        let operations = (0..matrix.operation_count()).map(Operation::numbered).collect();
        Self {
            matrix,
            operations,
            period_s: DEFAULT_PERIOD_SECONDS,
        }
    }

    /// Sets the operation display names.
    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }

    /// Sets the planning period.
    pub fn with_period(mut self, period_s: f64) -> Self {
        self.period_s = period_s;
        self
    }

    /// Display name for one operation, with the `Operation N` fallback for
    /// missing or blank entries.
    pub fn operation_name(&self, index: usize) -> String {
        self.operations
            .get(index)
            .map(|op| op.display_name(index))
            .unwrap_or_else(|| Operation::numbered(index).name)
    }
}

/// Full-pipeline line planner.
///
/// A pure function of its inputs: planning holds no state across calls,
/// and concurrent plans over different matrices are fully independent.
///
/// # Example
///
/// ```
/// use line_plan::models::CapabilityMatrix;
/// use line_plan::solver::LinePlanner;
///
/// let matrix = CapabilityMatrix::from_rows(vec![
///     vec![30.0, 15.0, 0.0],
///     vec![0.0, 15.0, 35.0],
/// ]);
/// let plan = LinePlanner::new().plan(&matrix).unwrap();
/// assert_eq!(plan.max_units, 22);
/// ```
#[derive(Debug, Clone)]
pub struct LinePlanner {
    period_s: f64,
}

impl LinePlanner {
    /// Creates a planner with the default period.
    pub fn new() -> Self {
        Self {
            period_s: DEFAULT_PERIOD_SECONDS,
        }
    }

    /// Sets the planning period.
    pub fn with_period(mut self, period_s: f64) -> Self {
        self.period_s = period_s;
        self
    }

    /// The configured period, seconds.
    pub fn period_s(&self) -> f64 {
        self.period_s
    }

    /// Computes the plan for a capability matrix.
    ///
    /// # Pipeline
    /// 1. Validate the input (all issues reported together).
    /// 2. Binary-search the maximum feasible output level.
    /// 3. Allocate units balance-first.
    /// 4. Verify every operation column reached the target.
    /// 5. Derive workload metrics.
    pub fn plan(&self, matrix: &CapabilityMatrix) -> Result<LinePlan, PlanError> {
        validate_input(matrix, self.period_s).map_err(PlanError::InvalidInput)?;

        tracing::info!(
            "planning line: {} machines, {} operations, period {}s",
            matrix.machine_count(),
            matrix.operation_count(),
            self.period_s
        );

        let target = ThroughputSolver::new(matrix, self.period_s).max_units();
        tracing::debug!("maximum feasible output: {target} units per operation");

        let assignment = AllocationPlanner::new(matrix, self.period_s).allocate(target);

        for operation in 0..matrix.operation_count() {
            let assigned = assignment.operation_total(operation);
            if assigned != target {
                tracing::error!(
                    "allocation shortfall on operation {operation}: {assigned}/{target} units"
                );
                return Err(PlanError::AllocationShortfall {
                    operation,
                    assigned,
                    target,
                });
            }
        }

        let workload = WorkloadReport::calculate(&assignment, matrix);
        Ok(LinePlan {
            max_units: target,
            assignment,
            workload,
        })
    }

    /// Computes the plan for a request (the request's period wins).
    pub fn plan_request(&self, request: &PlanRequest) -> Result<LinePlan, PlanError> {
        Self {
            period_s: request.period_s,
        }
        .plan(&request.matrix)
    }
}

impl Default for LinePlanner {
    fn default() -> Self {
        Self::new()
    }
}
