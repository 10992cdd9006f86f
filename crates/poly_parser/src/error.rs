//! Parse errors.
//!
//! Positions refer to the normalized input (whitespace stripped, Unicode
//! minus variants folded to `-`).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    /// A sign with no monomial body after it (e.g. `x + + 2`, trailing `-`).
    #[error("empty term at position {position}")]
    EmptyTerm { position: usize },

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    /// `^` with no digit sequence after it.
    #[error("'^' at position {position} is not followed by an exponent")]
    MissingExponent { position: usize },

    /// `^` directly after a bare numeric literal; this grammar does not
    /// exponentiate literals.
    #[error("numeric literal '{literal}' at position {position} cannot be exponentiated")]
    LiteralExponent { literal: String, position: usize },

    #[error("exponent at position {position} is too large")]
    ExponentOverflow { position: usize },
}
