//! Canonical string rendering.
//!
//! Terms are already stored in canonical order (variable-count descending,
//! then monomial ascending), so display just walks them: explicit `+`/`-`
//! between terms, coefficient magnitude omitted when it is 1 and variables
//! follow, `^1` omitted. A factor tree renders as the concatenation of each
//! child's parenthesized rendering.

use num_traits::{One, Signed};
use std::fmt;

use crate::factor::Factor;
use crate::polynomial::Polynomial;
use crate::term::Monomial;

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, exp) in self.iter() {
            write!(f, "{}", var)?;
            if exp > 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms().iter().enumerate() {
            let negative = term.coeff().is_negative();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else {
                write!(f, "{}", if negative { '-' } else { '+' })?;
            }

            let magnitude = term.coeff().abs();
            if term.monomial().is_constant() {
                write!(f, "{}", magnitude)?;
            } else {
                if !magnitude.is_one() {
                    write!(f, "{}", magnitude)?;
                }
                write!(f, "{}", term.monomial())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Leaf(poly) => write!(f, "({})", poly),
            Factor::Product(children) if children.is_empty() => write!(f, "1"),
            Factor::Product(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}
