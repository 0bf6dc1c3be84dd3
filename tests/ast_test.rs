// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/ast_test.rs
// Tests for derived sets, signatures and construction invariants

use logic_expr::*;
use std::collections::HashSet;

fn vars(names: &[&str]) -> HashSet<Variable> {
    names.iter().map(|n| Variable::new(*n)).collect()
}

// ============================================================================
// Derived sets
// ============================================================================

#[test]
fn test_groundness() {
    let cases = vec![
        ("f(a, [1, X])", false),
        ("f(a, [1, 2])", true),
        ("g()=(Y)", false),
        ("[]", true),
        ("X", false),
        ("'Quoted'", true),
    ];

    for (input, ground) in cases {
        println!("Testing: {}", input);
        let term = parse_term(input).unwrap();
        assert_eq!(term.is_ground(), ground);
        assert_eq!(term.is_ground(), term.variables().is_empty());
    }
}

#[test]
fn test_collected_sets() {
    let term = parse_term("f(g(X, 1), h, [Y, 2.5, true])").unwrap();
    assert_eq!(term.variables(), vars(&["X", "Y"]));

    let constants = term.constants();
    assert_eq!(constants.len(), 4);
    assert!(constants.contains(&Constant::Integer(1)));
    assert!(constants.contains(&Constant::Float(2.5)));
    assert!(constants.contains(&Constant::Boolean(true)));
    assert!(constants.contains(&Constant::string("h")));

    let symbols: HashSet<String> = term.functions().iter().map(|f| f.symbol().to_string()).collect();
    let expected: HashSet<String> = ["f", "g"].iter().map(|s| s.to_string()).collect();
    assert_eq!(symbols, expected);
}

#[test]
fn test_nested_function_set_excludes_self() {
    let f = parse_function("f(g(X))").unwrap();
    assert_eq!(f.functions().len(), 1);
    assert!(f.functions().iter().all(|g| g.symbol() == "g"));
}

#[test]
fn test_rule_variables_cover_head_and_body() {
    let rule = parse_rule("p(X) :- q(Y), not r(Z).").unwrap();
    assert_eq!(rule.variables(), &vars(&["X", "Y", "Z"]));
    assert!(!rule.is_ground());
    assert!(parse_rule("p :- q(a).").unwrap().is_ground());
}

#[test]
fn test_collectors_over_sequences() {
    let terms = vec![Term::var("A"), Term::list(vec![Term::var("B")]), Term::int(3)];
    assert_eq!(collect_variables(&terms), vars(&["A", "B"]));
    assert_eq!(collect_constants(&terms).len(), 1);

    let first = vec![Term::var("A")];
    let second = vec![Term::var("C"), Term::string("c")];
    let nested = collect_variables_nested([&first, &second]);
    assert_eq!(nested, vars(&["A", "C"]));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_structural_equality() {
    assert_eq!(parse_term("f(X, 1)").unwrap(), parse_term("f( X , 1 )").unwrap());
    assert_ne!(parse_term("f(X)").unwrap(), parse_term("f(Y)").unwrap());
    assert_ne!(Term::int(1), Term::float(1.0));
    assert_eq!(Term::float(0.5), Term::float(0.5));

    let set: HashSet<Term> = [Term::float(0.5), Term::float(0.5), Term::int(1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_equality_ignores_cached_sets() {
    let a = parse_atom("p(X)").unwrap();
    let b = parse_atom("p(X)").unwrap();
    let _ = a.variables();
    assert_eq!(a, b);
}

// ============================================================================
// Signatures
// ============================================================================

#[test]
fn test_signatures() {
    let atom = parse_atom("p(X, Y)").unwrap();
    let sig = atom.signature().unwrap();
    assert_eq!(sig.to_string(), "p/2");
    assert_eq!("p/2".parse::<AtomSignature>().unwrap(), sig);
    assert_ne!(sig, AtomSignature::new("p", 3).unwrap());

    let f = parse_function("f(a)=b").unwrap();
    assert_eq!(f.signature().unwrap().to_string(), "f/2");
}

#[test]
fn test_signature_errors() {
    let cases = vec![
        ("p/-1", AstError::NegativeArity(-1)),
        ("p", AstError::MalformedSignature("p".to_string())),
        ("p/x", AstError::MalformedSignature("p/x".to_string())),
        ("/2", AstError::EmptyName),
        ("a b/1", AstError::InvalidName("a b".to_string())),
    ];
    for (input, expected) in cases {
        println!("Testing: {}", input);
        assert_eq!(input.parse::<AtomSignature>().unwrap_err(), expected);
    }
    assert_eq!(AtomSignature::new("", 0).unwrap_err(), AstError::EmptyName);
}

// ============================================================================
// Formula structure
// ============================================================================

#[test]
fn test_atom_count() {
    let cases = vec![
        ("p", 1),
        ("a, b, c", 3),
        ("a, not(b, c), d", 3),
        ("p :- a, b.", 3),
        ("p :- not q.", 2),
    ];
    for (input, count) in cases {
        println!("Testing: {}", input);
        assert_eq!(parse_formula(input).unwrap().atom_count(), count);
    }
}

#[test]
fn test_sub_formulas_and_literals() {
    let rule = parse_formula("p :- a, not b.").unwrap();
    let subs = rule.sub_formulas();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].to_string(), "a, not(b)");

    let body = parse_clause_body("a, not b, c").unwrap();
    let literals: Vec<String> = body.literals().iter().map(|l| l.to_string()).collect();
    assert_eq!(literals, vec!["a", "not(b)", "c"]);
    assert!(!body.is_unit());
    let double = parse_clause_body("not(not(a))").unwrap();
    assert!(double.is_unit());
    assert!(matches!(double.sub_formulas()[0], ClauseBody::Negation(_)));
}

#[test]
fn test_rule_construction_invariants() {
    let head = parse_formula("p(X)").unwrap();
    let body = parse_formula("q(X), r").unwrap();
    let rule = Rule::try_from_formulas(head.clone(), body.clone()).unwrap();
    assert_eq!(rule.to_string(), "p(X) :- q(X), r.");

    assert!(matches!(
        Rule::try_from_formulas(body.clone(), head.clone()),
        Err(AstError::HeadlessRule(_))
    ));

    let nested = Formula::from(rule);
    assert!(matches!(
        Rule::try_from_formulas(head, nested.clone()),
        Err(AstError::NotDefinite(_))
    ));
    assert!(ClauseBody::try_from(nested).is_err());
}

#[test]
fn test_builders() {
    let body = ClauseBody::from(Atom::new("a", vec![Term::var("X")]))
        .and(Atom::proposition("b"))
        .negate();
    assert_eq!(body.to_string(), "not(a(X), b)");

    let rule = Rule::new(Atom::proposition("h"), body);
    assert_eq!(rule.to_string(), "h :- not(a(X), b).");
}
