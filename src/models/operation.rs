//! Operation model.
//!
//! Operations are identified by their column index in the capability
//! matrix. The name carried here is purely cosmetic — the reporting layer
//! shows it, the solver never looks at it.

use serde::{Deserialize, Serialize};

/// A sequential operation on the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Display name (may be blank).
    pub name: String,
}

impl Operation {
    /// Creates an operation with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Creates an operation with the default `Operation N` name (1-based).
    pub fn numbered(index: usize) -> Self {
        Self {
            name: default_name(index),
        }
    }

    /// Display name for this operation, falling back to `Operation N`
    /// when the stored name is blank.
    pub fn display_name(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            default_name(index)
        } else {
            trimmed.to_string()
        }
    }
}

/// Default display name for an operation index (1-based).
pub fn default_name(index: usize) -> String {
    format!("Operation {}", index + 1)
}
