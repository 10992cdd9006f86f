//! Factor trees.
//!
//! A [`Factor`] is either a leaf polynomial or a product over child factors.
//! The sum type makes a "leaf with children" unrepresentable; an empty
//! product is the multiplicative identity.

use crate::polynomial::Polynomial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    Leaf(Polynomial),
    Product(Vec<Factor>),
}

impl Factor {
    /// Multiply the tree back into a single canonical polynomial.
    pub fn expand(&self) -> Polynomial {
        match self {
            Factor::Leaf(poly) => poly.clone(),
            Factor::Product(children) => children
                .iter()
                .fold(Polynomial::one(), |acc, child| acc.mul(&child.expand())),
        }
    }

    /// All leaf polynomials, in tree order.
    pub fn leaves(&self) -> Vec<&Polynomial> {
        match self {
            Factor::Leaf(poly) => vec![poly],
            Factor::Product(children) => children.iter().flat_map(Factor::leaves).collect(),
        }
    }
}
