//! Canonical polynomials.
//!
//! A [`Polynomial`] holds at most one term per distinct monomial. The
//! constructor does all the work: group by monomial, sum coefficients, drop
//! zeros, sort. Because the stored form is sorted and deduplicated, derived
//! equality is canonical-form equality and re-canonicalizing is a no-op.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::{BTreeMap, BTreeSet};

use crate::fraction::ExactFraction;
use crate::term::{Monomial, Term};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Canonicalizing constructor: group like terms by monomial, sum their
    /// coefficients, drop zero coefficients, sort by (variable-count
    /// descending, monomial ascending).
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut grouped: BTreeMap<Monomial, BigInt> = BTreeMap::new();
        for term in terms {
            let (coeff, monomial) = term.into_parts();
            *grouped.entry(monomial).or_insert_with(BigInt::zero) += coeff;
        }

        let mut terms: Vec<Term> = grouped
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(monomial, coeff)| Term::from_parts(coeff, monomial))
            .collect();

        terms.sort_by(|a, b| {
            b.monomial()
                .var_count()
                .cmp(&a.monomial().var_count())
                .then_with(|| a.monomial().cmp(b.monomial()))
        });

        Polynomial { terms }
    }

    pub fn zero() -> Self {
        Polynomial { terms: vec![] }
    }

    pub fn one() -> Self {
        Polynomial::constant(1)
    }

    pub fn constant(coeff: impl Into<BigInt>) -> Self {
        Polynomial::new([Term::constant(coeff)])
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.as_constant().map(|c| c.is_one()).unwrap_or(false)
    }

    /// Terms in canonical order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The constant value, if this polynomial has no variables.
    pub fn as_constant(&self) -> Option<BigInt> {
        match self.terms.as_slice() {
            [] => Some(BigInt::zero()),
            [term] if term.monomial().is_constant() => Some(term.coeff().clone()),
            _ => None,
        }
    }

    /// Distinct variable names across all terms.
    pub fn variables(&self) -> BTreeSet<String> {
        self.terms
            .iter()
            .flat_map(|t| t.monomial().variables().map(str::to_string))
            .collect()
    }

    pub fn add(&self, other: &Self) -> Self {
        Polynomial::new(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    pub fn neg(&self) -> Self {
        Polynomial::new(
            self.terms
                .iter()
                .map(|t| Term::from_parts(-t.coeff(), t.monomial().clone())),
        )
    }

    /// Full term cross product, then like-term canonicalization.
    pub fn mul(&self, other: &Self) -> Self {
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                products.push(a.mul(b));
            }
        }
        Polynomial::new(products)
    }

    /// Exact evaluation under a full variable assignment. `None` when some
    /// variable has no binding.
    pub fn eval(&self, assignment: &BTreeMap<String, ExactFraction>) -> Option<ExactFraction> {
        let mut total = ExactFraction::zero();
        for term in &self.terms {
            let mut value = ExactFraction::from_integer(term.coeff().clone());
            for (var, exp) in term.monomial().iter() {
                value = value * assignment.get(var)?.pow(exp);
            }
            total = total + value;
        }
        Some(total)
    }
}
