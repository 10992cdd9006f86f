//! Rational Root Theorem plumbing.
//!
//! Coefficient vectors are ordered low-to-high degree: `coeffs[i]` is the
//! coefficient of `x^i`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use poly_ast::ExactFraction;
use std::collections::HashSet;

/// Upper bound on candidates produced per peeling pass.
pub const MAX_CANDIDATES: usize = 4096;

/// Positive divisors of |n| by trial division.
///
/// Returns `None` when |n| is zero or does not fit the trial-division range;
/// the caller then stops peeling rather than guessing.
pub fn divisors(n: &BigInt) -> Option<Vec<BigInt>> {
    let n_u64: u64 = n.abs().try_into().ok()?;
    if n_u64 == 0 {
        return None;
    }

    let mut divs = Vec::new();
    let mut i = 1u64;
    while i.saturating_mul(i) <= n_u64 {
        if n_u64 % i == 0 {
            divs.push(BigInt::from(i));
            if i != n_u64 / i {
                divs.push(BigInt::from(n_u64 / i));
            }
        }
        i += 1;
    }
    Some(divs)
}

/// Reduced candidate roots `±p/q` with `p` dividing |constant| and `q`
/// dividing |leading|, deduplicated after reduction. Empty means the
/// candidate space is unavailable or over budget and peeling should stop.
pub fn rational_root_candidates(constant: &BigInt, leading: &BigInt) -> Vec<ExactFraction> {
    let (Some(ps), Some(qs)) = (divisors(constant), divisors(leading)) else {
        return vec![];
    };
    if ps.len() * qs.len() * 2 > MAX_CANDIDATES {
        return vec![];
    }

    let mut seen: HashSet<(BigInt, BigInt)> = HashSet::new();
    let mut candidates = Vec::new();
    for p in &ps {
        for q in &qs {
            // q > 0 here, so construction cannot fail
            let Ok(candidate) = ExactFraction::new(p.clone(), q.clone()) else {
                continue;
            };
            let key = (candidate.numer().clone(), candidate.denom().clone());
            if seen.insert(key.clone()) {
                candidates.push(candidate.clone());
                if seen.insert((-key.0, key.1)) {
                    candidates.push(-candidate);
                }
            }
        }
    }
    candidates
}

/// Evaluate the polynomial at `x` exactly, via Horner's method.
pub fn horner_eval(coeffs: &[ExactFraction], x: &ExactFraction) -> ExactFraction {
    let mut result = ExactFraction::zero();
    for c in coeffs.iter().rev() {
        result = result * x.clone() + c.clone();
    }
    result
}

/// Divide the polynomial by `(x - root)`, returning the quotient one degree
/// lower. The caller is responsible for `root` actually being a root.
pub fn synthetic_division(coeffs: &[ExactFraction], root: &ExactFraction) -> Vec<ExactFraction> {
    let n = coeffs.len();
    if n <= 1 {
        return vec![];
    }

    let mut quotient = vec![ExactFraction::zero(); n - 1];
    quotient[n - 2] = coeffs[n - 1].clone();
    for i in (0..n - 2).rev() {
        quotient[i] = coeffs[i + 1].clone() + root.clone() * quotient[i + 1].clone();
    }
    quotient
}

/// Clear denominators by their least common multiple.
/// Returns the integer vector and the LCM that was multiplied in.
pub fn clear_denominators(coeffs: &[ExactFraction]) -> (Vec<BigInt>, BigInt) {
    let mut lcm = BigInt::one();
    for c in coeffs {
        if !c.is_zero() {
            lcm = lcm.lcm(c.denom());
        }
    }
    let ints = coeffs
        .iter()
        .map(|c| c.numer() * (&lcm / c.denom()))
        .collect();
    (ints, lcm)
}

/// Integer content: gcd of all coefficients, always non-negative.
pub fn content(coeffs: &[BigInt]) -> BigInt {
    coeffs.iter().fold(BigInt::zero(), |acc, c| acc.gcd(c))
}
