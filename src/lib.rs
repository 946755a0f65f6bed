//! Production line balancing planner.
//!
//! Computes, for a line described by a per-(machine, operation) cycle-time
//! matrix and a fixed work period, the maximum number of units every
//! operation can produce, together with a concrete unit assignment that
//! keeps machine busy time as even as the matrix allows.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CapabilityMatrix`, `Operation`,
//!   `Assignment`
//! - **`validation`**: Input integrity checks (unreachable operations,
//!   degenerate dimensions, invalid periods)
//! - **`solver`**: `FeasibilityChecker`, `ThroughputSolver`,
//!   `AllocationPlanner`, `WorkloadReport`, and the orchestrating
//!   `LinePlanner`
//!
//! # Architecture
//!
//! The planner is a pure function of its inputs: a matrix and a period go
//! in, a plan or an explicit error comes out, and nothing persists between
//! calls. Table editing, raw-input coercion, and result presentation
//! belong to the consuming layer; only the numeric contract lives here.
//!
//! # Example
//!
//! ```
//! use line_plan::models::CapabilityMatrix;
//! use line_plan::solver::LinePlanner;
//!
//! // Two machines, three operations; 0 = cannot perform
//! let matrix = CapabilityMatrix::from_rows(vec![
//!     vec![30.0, 15.0, 0.0],
//!     vec![0.0, 15.0, 35.0],
//! ]);
//!
//! let plan = LinePlanner::new().plan(&matrix)?;
//! assert_eq!(plan.max_units, 22);
//! # Ok::<(), line_plan::solver::PlanError>(())
//! ```

pub mod models;
pub mod solver;
pub mod validation;
