//! Univariate factorization over the rationals.
//!
//! Rational-root candidates come from the Rational Root Theorem, roots are
//! verified by exact Horner evaluation, verified roots are peeled off by
//! synthetic division, and the leftover is reassembled so that expanding the
//! resulting factor tree reproduces the input polynomial exactly.

pub mod error;
pub mod factorize;
pub mod rational_roots;

pub use error::FactorError;
pub use factorize::factorize;
