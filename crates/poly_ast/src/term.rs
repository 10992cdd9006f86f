//! Terms and monomials.
//!
//! A [`Monomial`] maps variable names to positive exponents; a [`Term`] pairs
//! a monomial with an integer coefficient. Both are constructed by folds that
//! sum duplicate variables and drop zero exponents, so an invalid state never
//! exists after construction.

use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;

pub type Exponent = u32;

/// Variable -> exponent map. Zero exponents are never stored, and the sorted
/// map itself is the canonical grouping key for like terms (its total order
/// doubles as the "monomial signature" order).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Monomial(BTreeMap<String, Exponent>);

impl Monomial {
    /// The empty monomial (a constant term).
    pub fn constant() -> Self {
        Monomial(BTreeMap::new())
    }

    /// Fold `(variable, exponent)` pairs, summing duplicates and dropping
    /// zero exponents.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Exponent)>) -> Self {
        let mut map: BTreeMap<String, Exponent> = BTreeMap::new();
        for (var, exp) in pairs {
            if exp == 0 {
                continue;
            }
            *map.entry(var).or_insert(0) += exp;
        }
        Monomial(map)
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct variables.
    pub fn var_count(&self) -> usize {
        self.0.len()
    }

    /// Exponent of `var`, 0 when absent.
    pub fn exponent(&self, var: &str) -> Exponent {
        self.0.get(var).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Exponent)> {
        self.0.iter().map(|(var, exp)| (var.as_str(), *exp))
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Product of two monomials: matching variables sum their exponents.
    pub fn mul(&self, other: &Self) -> Self {
        Monomial::from_pairs(
            self.iter()
                .chain(other.iter())
                .map(|(var, exp)| (var.to_string(), exp)),
        )
    }

    /// Deterministic `var^exp` join, for diagnostics and ordering ties.
    pub fn signature(&self) -> String {
        let mut out = String::new();
        for (var, exp) in self.iter() {
            out.push_str(var);
            out.push('^');
            out.push_str(&exp.to_string());
        }
        out
    }
}

/// Integer coefficient times a monomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    coeff: BigInt,
    monomial: Monomial,
}

impl Term {
    pub fn new(
        coeff: impl Into<BigInt>,
        pairs: impl IntoIterator<Item = (String, Exponent)>,
    ) -> Self {
        Term {
            coeff: coeff.into(),
            monomial: Monomial::from_pairs(pairs),
        }
    }

    pub fn from_parts(coeff: BigInt, monomial: Monomial) -> Self {
        Term { coeff, monomial }
    }

    pub fn constant(coeff: impl Into<BigInt>) -> Self {
        Term {
            coeff: coeff.into(),
            monomial: Monomial::constant(),
        }
    }

    pub fn coeff(&self) -> &BigInt {
        &self.coeff
    }

    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    pub fn into_parts(self) -> (BigInt, Monomial) {
        (self.coeff, self.monomial)
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Term product: coefficients multiply, exponent maps merge by summing.
    pub fn mul(&self, other: &Self) -> Self {
        Term {
            coeff: &self.coeff * &other.coeff,
            monomial: self.monomial.mul(&other.monomial),
        }
    }
}
