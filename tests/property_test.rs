// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/property_test.rs
// Property-based tests over generated terms and clause bodies

use logic_expr::*;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn variable() -> impl Strategy<Value = Term> {
    "[A-Z][a-z0-9_]{0,4}".prop_map(Term::var)
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,5}".prop_filter("reserved word", |s| {
        !matches!(s.as_str(), "true" | "false" | "not")
    })
}

fn constant() -> impl Strategy<Value = Term> {
    prop_oneof![
        any::<bool>().prop_map(Term::boolean),
        (-10_000i64..10_000).prop_map(Term::int),
        // Multiples of 1/8 print exactly.
        (-800i32..800).prop_map(|n| Term::float(n as f64 / 8.0)),
        identifier().prop_map(Term::string),
        "'[A-Z][a-z ]{0,5}'".prop_map(Term::string),
        // Not a plain identifier, so the quotes survive classification.
        "'[a-z]{1,3} [a-z ]{0,3}'".prop_map(Term::string),
    ]
}

fn term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![variable(), constant()];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (identifier(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(name, args)| Term::function(name, args)),
            (identifier(), prop::collection::vec(inner.clone(), 0..3), inner.clone())
                .prop_map(|(name, args, value)| Term::valued(name, args, vec![value])),
            (
                identifier(),
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner.clone(), 2..4),
            )
                .prop_map(|(name, args, values)| Term::valued(name, args, values)),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Term::tuple),
            prop::collection::vec(inner, 0..4).prop_map(Term::list),
        ]
    })
}

fn atom() -> impl Strategy<Value = Atom> {
    (identifier(), prop::collection::vec(term(), 0..3)).prop_map(|(name, args)| Atom::new(name, args))
}

/// Conjunctions are nested to the left, the way the grammar folds them.
fn clause_body() -> impl Strategy<Value = ClauseBody> {
    let leaf = atom().prop_map(ClauseBody::from);
    leaf.prop_recursive(3, 12, 3, |inner| {
        let literal = prop_oneof![
            atom().prop_map(ClauseBody::from),
            inner.clone().prop_map(ClauseBody::negate),
        ];
        prop_oneof![
            inner.prop_map(ClauseBody::negate),
            prop::collection::vec(literal, 2..4).prop_map(|literals| {
                let mut literals = literals.into_iter();
                let first = literals.next().unwrap();
                literals.fold(first, |acc, next| acc.and(next))
            }),
        ]
    })
}

fn contains_variable(term: &Term) -> bool {
    match term {
        Term::Variable(_) => true,
        Term::Constant(_) => false,
        Term::Function(f) => f.args().iter().chain(f.values()).any(contains_variable),
        Term::List(l) => l.terms().iter().any(contains_variable),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_term_roundtrip(t in term()) {
        let text = t.to_string();
        let parsed = parse_term(&text).unwrap();
        prop_assert_eq!(&parsed, &t);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn prop_ground_iff_no_variables(t in term()) {
        prop_assert_eq!(t.is_ground(), !contains_variable(&t));
        prop_assert_eq!(t.is_ground(), t.variables().is_empty());
    }

    #[test]
    fn prop_rule_roundtrip(head in atom(), body in clause_body()) {
        let rule = Rule::new(head, body);
        let text = rule.to_string();
        let parsed = parse_rule(&text).unwrap();
        prop_assert_eq!(&parsed, &rule);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn prop_clause_body_roundtrip(body in clause_body()) {
        let parsed = parse_clause_body(&body.to_string()).unwrap();
        prop_assert_eq!(parsed, body);
    }

    #[test]
    fn prop_atom_count_matches_literals(body in clause_body()) {
        let count = body.atom_count();
        prop_assert_eq!(count, body.literals().len());
        prop_assert_eq!(Formula::from(body).atom_count(), count);
    }
}
