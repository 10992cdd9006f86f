//! Value-level data model for the polynomial algebra engine.
//!
//! Everything here is an immutable value object: [`ExactFraction`] for exact
//! rational arithmetic, [`Term`]/[`Monomial`] for the coefficient-times-
//! variables representation, [`Polynomial`] for the canonical sum of terms,
//! and [`Factor`] for the leaf/product factor tree with its expansion back
//! into a single polynomial.

pub mod display;
pub mod error;
pub mod factor;
pub mod fraction;
pub mod polynomial;
pub mod term;

pub use error::ArithmeticError;
pub use factor::Factor;
pub use fraction::ExactFraction;
pub use polynomial::Polynomial;
pub use term::{Exponent, Monomial, Term};
