//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors are only raised by the strict operations.
/// The permissive operations tolerate the same inputs silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("quantity of '{name}' must be positive and finite, got {value}")]
    InvalidQuantity { name: String, value: f64 },

    #[error("scale factor must be positive and finite, got {0}")]
    InvalidFactor(f64),
}

/// Result type for strict domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
