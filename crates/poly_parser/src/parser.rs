//! Linear-scan polynomial parser.
//!
//! The grammar is a sum of signed monomials, so no recursive parsing is
//! needed: normalize dashes and whitespace, split on sign characters, then
//! parse each chunk as `INT? (VAR ('^' INT)?)*` with optional `*` between
//! factors. Like terms combine in the [`Polynomial`] constructor.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use poly_ast::{Exponent, Polynomial, Term};

use crate::error::ParseError;

/// Parse a sum of signed monomials into a canonical polynomial.
///
/// Implicit multiplication between coefficient and variables and between
/// variables is allowed (`2xy^2`); explicit `*` is accepted and ignored.
/// En dash, em dash and the Unicode minus sign all read as `-`.
pub fn parse(input: &str) -> Result<Polynomial, ParseError> {
    let chars: Vec<char> = normalize(input).chars().collect();
    if chars.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut terms = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let negative = match chars[i] {
            '+' => {
                i += 1;
                false
            }
            '-' => {
                i += 1;
                true
            }
            // only reachable for the first chunk: later iterations start on
            // the sign character the body scan stopped at
            _ => false,
        };

        let start = i;
        while i < chars.len() && chars[i] != '+' && chars[i] != '-' {
            i += 1;
        }
        if start == i {
            return Err(ParseError::EmptyTerm { position: start });
        }
        terms.push(parse_chunk(negative, &chars[start..i], start)?);
    }

    Ok(Polynomial::new(terms))
}

/// Fold Unicode minus variants to ASCII `-` and drop all whitespace.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Parse one sign-stripped chunk: optional integer coefficient, then zero or
/// more variable factors. `offset` is the chunk's position in the normalized
/// input, for error reporting.
fn parse_chunk(negative: bool, body: &[char], offset: usize) -> Result<Term, ParseError> {
    let mut i = 0;

    let mut coeff: Option<BigInt> = None;
    if body[0].is_ascii_digit() {
        while i < body.len() && body[i].is_ascii_digit() {
            i += 1;
        }
        let literal: String = body[..i].iter().collect();
        coeff = Some(literal.parse().unwrap_or_else(|_| BigInt::zero()));
        if i < body.len() && body[i] == '^' {
            return Err(ParseError::LiteralExponent {
                literal,
                position: offset + i,
            });
        }
    }

    let mut factors: Vec<(String, Exponent)> = Vec::new();
    while i < body.len() {
        let c = body[i];
        if c == '*' {
            i += 1;
            if i >= body.len() || body[i] == '*' {
                return Err(ParseError::UnexpectedChar {
                    found: '*',
                    position: offset + i.min(body.len() - 1),
                });
            }
            continue;
        }
        if c.is_alphabetic() {
            let name_start = i;
            i += 1;
            while i < body.len() && (body[i].is_ascii_digit() || body[i] == '_') {
                i += 1;
            }
            let name: String = body[name_start..i].iter().collect();

            let mut exponent: Exponent = 1;
            if i < body.len() && body[i] == '^' {
                let caret = i;
                i += 1;
                let digits_start = i;
                while i < body.len() && body[i].is_ascii_digit() {
                    i += 1;
                }
                if digits_start == i {
                    return Err(ParseError::MissingExponent {
                        position: offset + caret,
                    });
                }
                let digits: String = body[digits_start..i].iter().collect();
                exponent = digits.parse().map_err(|_| ParseError::ExponentOverflow {
                    position: offset + digits_start,
                })?;
            }
            factors.push((name, exponent));
            continue;
        }
        return Err(ParseError::UnexpectedChar {
            found: c,
            position: offset + i,
        });
    }

    let magnitude = coeff.unwrap_or_else(BigInt::one);
    let signed = if negative { -magnitude } else { magnitude };
    Ok(Term::new(signed, factors))
}
