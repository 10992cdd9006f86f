use poly_ast::{Polynomial, Term};
use poly_factor::factorize;
use poly_parser::parse;
use proptest::prelude::*;

/// Bounded random univariate integer polynomials in x.
fn arb_univariate() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-9i64..=9, 0u32..=5), 1..=6).prop_map(|pairs| {
        Polynomial::new(
            pairs
                .into_iter()
                .map(|(coeff, exp)| Term::new(coeff, [("x".to_string(), exp)])),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn expand_of_factorize_is_the_identity(p in arb_univariate()) {
        let tree = factorize(&p).unwrap();
        prop_assert_eq!(tree.expand(), p);
    }

    #[test]
    fn canonicalization_is_idempotent(p in arb_univariate()) {
        let again = Polynomial::new(p.terms().iter().cloned());
        prop_assert_eq!(again, p);
    }

    #[test]
    fn display_then_parse_round_trips(p in arb_univariate()) {
        let reparsed = parse(&p.to_string()).unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn factor_leaves_only_hold_the_input_variable(p in arb_univariate()) {
        let tree = factorize(&p).unwrap();
        for leaf in tree.leaves() {
            prop_assert!(leaf.variables().into_iter().all(|v| v == "x"));
        }
    }
}
