//! Exact rational arithmetic with a checked boundary.
//!
//! `Ratio` already maintains the load-bearing invariant (always reduced,
//! denominator strictly positive); [`ExactFraction`] wraps it so that zero
//! denominators and zero divisors surface as
//! [`ArithmeticError::DivisionByZero`] instead of panicking, and so later
//! stages can detect exact integrality by asking for `denominator == 1`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::ArithmeticError;

/// Arbitrary-precision rational number in lowest terms, denominator > 0.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExactFraction(BigRational);

impl ExactFraction {
    /// Build `numer / denom`, reduced. Fails if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, ArithmeticError> {
        if denom.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(ExactFraction(BigRational::new(numer, denom)))
    }

    pub fn from_integer(n: BigInt) -> Self {
        ExactFraction(BigRational::from_integer(n))
    }

    pub fn zero() -> Self {
        ExactFraction(BigRational::zero())
    }

    pub fn one() -> Self {
        ExactFraction(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// True when the reduced denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The exact integer value, if the fraction is one.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.0.is_integer() {
            Some(self.0.to_integer())
        } else {
            None
        }
    }

    /// Division, failing on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(ExactFraction(&self.0 / &rhs.0))
    }

    pub fn pow(&self, exp: u32) -> Self {
        ExactFraction(Pow::pow(self.0.clone(), exp))
    }
}

impl Add for ExactFraction {
    type Output = ExactFraction;

    fn add(self, rhs: ExactFraction) -> ExactFraction {
        ExactFraction(self.0 + rhs.0)
    }
}

impl Sub for ExactFraction {
    type Output = ExactFraction;

    fn sub(self, rhs: ExactFraction) -> ExactFraction {
        ExactFraction(self.0 - rhs.0)
    }
}

impl Mul for ExactFraction {
    type Output = ExactFraction;

    fn mul(self, rhs: ExactFraction) -> ExactFraction {
        ExactFraction(self.0 * rhs.0)
    }
}

impl Neg for ExactFraction {
    type Output = ExactFraction;

    fn neg(self) -> ExactFraction {
        ExactFraction(-self.0)
    }
}

impl fmt::Display for ExactFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> ExactFraction {
        ExactFraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn construction_reduces_and_normalizes_sign() {
        let f = frac(3, 6);
        assert_eq!(f.numer(), &BigInt::from(1));
        assert_eq!(f.denom(), &BigInt::from(2));

        let g = frac(1, -2);
        assert_eq!(g.numer(), &BigInt::from(-1));
        assert_eq!(g.denom(), &BigInt::from(2));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let err = ExactFraction::new(BigInt::from(1), BigInt::zero());
        assert_eq!(err, Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn division_by_zero_fraction_is_rejected() {
        let err = frac(1, 2).checked_div(&ExactFraction::zero());
        assert_eq!(err, Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn operations_stay_reduced() {
        // 1/6 + 1/3 = 1/2
        let sum = frac(1, 6) + frac(1, 3);
        assert_eq!(sum, frac(1, 2));

        // 2/3 * 3/4 = 1/2
        let prod = frac(2, 3) * frac(3, 4);
        assert_eq!(prod, frac(1, 2));

        // 5/7 - 5/7 = 0, stored as (0, 1)
        let diff = frac(5, 7) - frac(5, 7);
        assert!(diff.is_zero());
        assert_eq!(diff.denom(), &BigInt::from(1));
    }

    #[test]
    fn integrality_check() {
        assert!(frac(4, 2).is_integer());
        assert_eq!(frac(4, 2).to_integer(), Some(BigInt::from(2)));
        assert!(!frac(1, 2).is_integer());
        assert_eq!(frac(1, 2).to_integer(), None);
    }

    #[test]
    fn pow_is_exact() {
        assert_eq!(frac(2, 3).pow(3), frac(8, 27));
        assert_eq!(frac(-1, 2).pow(2), frac(1, 4));
        assert!(frac(7, 5).pow(0).is_one());
    }

    #[test]
    fn display() {
        assert_eq!(frac(3, 6).to_string(), "1/2");
        assert_eq!(frac(-4, 2).to_string(), "-2");
    }
}
