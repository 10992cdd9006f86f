use num_bigint::BigInt;
use poly_ast::ExactFraction;
use poly_factor::{factorize, FactorError};
use poly_parser::{parse, ParseError};
use std::collections::BTreeMap;

fn at(leaf: &poly_ast::Polynomial, x: i64) -> ExactFraction {
    let mut env = BTreeMap::new();
    env.insert("x".to_string(), ExactFraction::from_integer(BigInt::from(x)));
    leaf.eval(&env).unwrap()
}

#[test]
fn known_quadratic_round_trips_and_has_the_right_roots() {
    let p = parse("x^2 - 5x + 6").unwrap();
    let tree = factorize(&p).unwrap();

    assert_eq!(tree.expand(), p);

    let leaves = tree.leaves();
    assert!(leaves.iter().any(|leaf| at(leaf, 2).is_zero()));
    assert!(leaves.iter().any(|leaf| at(leaf, 3).is_zero()));
}

#[test]
fn multivariate_polynomials_are_rejected() {
    let p = parse("x + y").unwrap();
    assert!(matches!(
        factorize(&p),
        Err(FactorError::MultivariateUnsupported { .. })
    ));
}

#[test]
fn malformed_inputs_are_format_errors() {
    assert!(matches!(parse("x^"), Err(ParseError::MissingExponent { .. })));
    assert!(matches!(parse("2x^"), Err(ParseError::MissingExponent { .. })));
    assert!(matches!(parse("3**x"), Err(ParseError::UnexpectedChar { .. })));
    assert!(matches!(parse("2^3"), Err(ParseError::LiteralExponent { .. })));
}

#[test]
fn parse_factorize_expand_pipeline() {
    for text in [
        "x^2 - 5x + 6",
        "2x^2 - 3x + 1",
        "x^3 - x",
        "-x^2 + 1",
        "6x + 9",
        "x^4 - 1",
        "x^2 + 1",
        "12x^3 - 4x^2 - 3x + 1",
        "42",
        "0",
    ] {
        let p = parse(text).unwrap();
        let tree = factorize(&p).unwrap();
        assert_eq!(tree.expand(), p, "round-trip failed for {}", text);
    }
}

#[test]
fn every_leaf_has_integer_coefficients_by_type() {
    // Leaves hold Polynomials over BigInt, so integrality is structural;
    // what needs checking is that no factor was lost or invented.
    let p = parse("4x^4 - 4x^3 - x^2 + x").unwrap();
    let tree = factorize(&p).unwrap();
    assert_eq!(tree.expand(), p);
    // x(x-1)(2x-1)(2x+1): four variable leaves
    assert_eq!(
        tree.leaves()
            .iter()
            .filter(|leaf| !leaf.variables().is_empty())
            .count(),
        4
    );
}

#[test]
fn unicode_dashes_parse_to_the_same_canonical_string() {
    let ascii = parse("x^2-3x+4").unwrap().to_string();
    assert_eq!(parse("x^2\u{2013}3x+4").unwrap().to_string(), ascii);
    assert_eq!(parse("x^2\u{2014}3x+4").unwrap().to_string(), ascii);
}
