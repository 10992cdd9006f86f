//! The peeling driver: linear factors off the front, exact reconstruction of
//! the leftover.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use poly_ast::{ExactFraction, Factor, Monomial, Polynomial, Term};
use std::collections::HashSet;
use tracing::debug;

use crate::error::FactorError;
use crate::rational_roots::{
    clear_denominators, content, horner_eval, rational_root_candidates, synthetic_division,
};

/// Factor a univariate integer-coefficient polynomial into a tree of
/// integer-coefficient leaves.
///
/// The end-to-end invariant is `factorize(p)?.expand() == *p` as an exact
/// canonical-form identity: every peeled linear factor `q·x - p` contributes
/// a `1/q` to a running scale, and the scale recombines with the remainder's
/// integer content into a single integer constant leaf.
pub fn factorize(poly: &Polynomial) -> Result<Factor, FactorError> {
    let vars = poly.variables();
    if vars.len() > 1 {
        return Err(FactorError::MultivariateUnsupported {
            variables: vars.into_iter().collect(),
        });
    }
    let Some(var) = vars.into_iter().next() else {
        // Pure constant, including the zero polynomial: nothing to peel.
        return Ok(Factor::Leaf(poly.clone()));
    };

    let mut dense = dense_coefficients(poly, &var);
    let mut children: Vec<Factor> = Vec::new();

    // Work with a positive leading coefficient; the sign becomes a -1 leaf.
    if dense.last().map(|c| c.is_negative()).unwrap_or(false) {
        children.push(Factor::Leaf(Polynomial::constant(-1)));
        for c in dense.iter_mut() {
            *c = -c.clone();
        }
    }

    let mut coeffs: Vec<ExactFraction> = dense
        .into_iter()
        .map(ExactFraction::from_integer)
        .collect();
    let mut scale = ExactFraction::one();
    let mut rejected: HashSet<(BigInt, BigInt)> = HashSet::new();

    while coeffs.len() > 2 {
        // Vanished constant coefficient: x = 0 is a root, peel the leaf `x`.
        if coeffs[0].is_zero() {
            coeffs.remove(0);
            children.push(Factor::Leaf(linear_leaf(&var, BigInt::one(), BigInt::zero())));
            debug!(var = %var, "peeled root 0");
            continue;
        }

        let (ints, _) = clear_denominators(&coeffs);
        let candidates = rational_root_candidates(&ints[0], &ints[ints.len() - 1]);
        if candidates.is_empty() {
            break;
        }

        let mut found = false;
        for candidate in candidates {
            let key = (candidate.numer().clone(), candidate.denom().clone());
            if rejected.contains(&key) {
                // A non-root of the input cannot be a root of any quotient.
                continue;
            }
            if horner_eval(&coeffs, &candidate).is_zero() {
                // Emit q·x - p; the monic mismatch accumulates as 1/q.
                children.push(Factor::Leaf(linear_leaf(
                    &var,
                    candidate.denom().clone(),
                    candidate.numer().clone(),
                )));
                scale = scale.checked_div(&ExactFraction::from_integer(candidate.denom().clone()))?;
                coeffs = synthetic_division(&coeffs, &candidate);
                debug!(root = %candidate, remaining_degree = coeffs.len() - 1, "peeled rational root");
                found = true;
                break;
            }
            rejected.insert(key);
        }
        if !found {
            // Whatever remains has no rational roots (or the candidate
            // space is out of budget); it stays in the remainder leaf.
            break;
        }
    }

    // Reconstruction: clear denominators, pull out the integer content, and
    // fold everything into one integer constant.
    let (cleared, lcm) = clear_denominators(&coeffs);
    let remainder_content = content(&cleared);
    let primitive: Vec<BigInt> = cleared.iter().map(|c| c / &remainder_content).collect();

    let combined =
        scale * ExactFraction::new(remainder_content.clone(), lcm.clone())?;
    let Some(constant) = combined.to_integer() else {
        return Err(FactorError::InternalConsistency(format!(
            "scale and content do not combine to an integer: content {} / lcm {}",
            remainder_content, lcm,
        )));
    };
    debug!(constant = %constant, remainder_degree = primitive.len() - 1, "reconstructed remainder");

    if !constant.is_one() {
        children.push(Factor::Leaf(Polynomial::constant(constant)));
    }
    let remainder = polynomial_from_dense(&var, &primitive);
    if !remainder.is_one() {
        children.push(Factor::Leaf(remainder));
    }

    // Avoid a trivial one-child product around a bare constant.
    if children.len() == 1 && matches!(&children[0], Factor::Leaf(p) if p.variables().is_empty()) {
        return Ok(children.remove(0));
    }
    Ok(Factor::Product(children))
}

/// Ascending exponent -> coefficient vector of a univariate polynomial.
fn dense_coefficients(poly: &Polynomial, var: &str) -> Vec<BigInt> {
    let degree = poly
        .terms()
        .iter()
        .map(|t| t.monomial().exponent(var))
        .max()
        .unwrap_or(0) as usize;
    let mut coeffs = vec![BigInt::zero(); degree + 1];
    for term in poly.terms() {
        let e = term.monomial().exponent(var) as usize;
        coeffs[e] += term.coeff();
    }
    coeffs
}

/// The leaf polynomial `q·x - p`.
fn linear_leaf(var: &str, q: BigInt, p: BigInt) -> Polynomial {
    Polynomial::new([
        Term::from_parts(q, Monomial::from_pairs([(var.to_string(), 1)])),
        Term::constant(-p),
    ])
}

fn polynomial_from_dense(var: &str, coeffs: &[BigInt]) -> Polynomial {
    Polynomial::new(coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero()).map(
        |(e, c)| {
            Term::from_parts(
                c.clone(),
                Monomial::from_pairs([(var.to_string(), e as u32)]),
            )
        },
    ))
}
