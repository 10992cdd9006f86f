//! Factorization errors.

use poly_ast::ArithmeticError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// Deliberate scope boundary: more than one variable is rejected, never
    /// approximated.
    #[error("multivariate factorization is not supported (variables: {})", variables.join(", "))]
    MultivariateUnsupported { variables: Vec<String> },

    /// Invariant violation in the reconstruction step. A defect signal, not
    /// a user-correctable condition.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
