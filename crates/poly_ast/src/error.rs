//! Error types for the poly_ast crate.

use thiserror::Error;

/// Errors from exact fraction construction and division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Zero denominator on construction, or division by a zero fraction.
    #[error("division by zero")]
    DivisionByZero,
}
