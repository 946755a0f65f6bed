//! Input validation for line planning.
//!
//! Checks a capability matrix and period before solving. Detects:
//! - Unreachable operations (an all-zero cycle-time column)
//! - Degenerate dimensions (no machines, no operations)
//! - Invalid periods (zero, negative, or non-finite)
//!
//! The solver refuses to run on invalid input: an unreachable operation has
//! no valid output level at all, and the throughput upper bound is
//! undefined for it. All detected issues are reported together, not just
//! the first.

use crate::models::CapabilityMatrix;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No machine has a positive cycle time for this operation.
    UnreachableOperation {
        /// Offending operation column index.
        operation: usize,
    },
    /// The matrix has no machine rows.
    NoMachines,
    /// The matrix has no operation columns.
    NoOperations,
    /// The period is zero, negative, or not a finite number.
    InvalidPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning request's inputs.
///
/// Checks:
/// 1. At least one machine and one operation
/// 2. A positive, finite period
/// 3. Every operation has at least one capable machine
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(matrix: &CapabilityMatrix, period_s: f64) -> ValidationResult {
    let mut errors = Vec::new();

    if matrix.machine_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "capability matrix has no machine rows",
        ));
    }

    if matrix.operation_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoOperations,
            "capability matrix has no operation columns",
        ));
    }

    if !period_s.is_finite() || period_s <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPeriod,
            format!("period must be a positive number of seconds, got {period_s}"),
        ));
    }

    for operation in unreachable_operations(matrix) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnreachableOperation { operation },
            format!(
                "operation {} has no capable machine; set a cycle time > 0 for at least one machine",
                operation + 1
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Operation indices whose cycle-time column is entirely zero.
pub fn unreachable_operations(matrix: &CapabilityMatrix) -> Vec<usize> {
    (0..matrix.operation_count())
        .filter(|&operation| {
            (0..matrix.machine_count()).all(|machine| !matrix.is_capable(machine, operation))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let matrix = CapabilityMatrix::from_rows(vec![vec![30.0, 15.0, 0.0], vec![0.0, 15.0, 35.0]]);
        assert!(validate_input(&matrix, 900.0).is_ok());
    }

    #[test]
    fn test_unreachable_operation_reported_per_index() {
        // Operations 1 and 3 have all-zero columns
        let matrix = CapabilityMatrix::from_rows(vec![vec![30.0, 0.0, 20.0, 0.0]]);

        assert_eq!(unreachable_operations(&matrix), vec![1, 3]);

        let errors = validate_input(&matrix, 900.0).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].kind,
            ValidationErrorKind::UnreachableOperation { operation: 1 }
        );
        assert_eq!(
            errors[1].kind,
            ValidationErrorKind::UnreachableOperation { operation: 3 }
        );
    }

    #[test]
    fn test_no_machines() {
        let matrix = CapabilityMatrix::from_rows(vec![]);
        let errors = validate_input(&matrix, 900.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoMachines));
    }

    #[test]
    fn test_no_operations() {
        let matrix = CapabilityMatrix::new(2, 0);
        let errors = validate_input(&matrix, 900.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoOperations));
    }

    #[test]
    fn test_invalid_period() {
        let matrix = CapabilityMatrix::from_rows(vec![vec![30.0]]);
        for period in [0.0, -900.0, f64::NAN, f64::INFINITY] {
            let errors = validate_input(&matrix, period).unwrap_err();
            assert!(
                errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::InvalidPeriod),
                "period {period} should be rejected"
            );
        }
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Empty matrix + bad period → every problem reported at once
        let matrix = CapabilityMatrix::from_rows(vec![]);
        let errors = validate_input(&matrix, 0.0).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
