// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/end_to_end_test.rs
// End-to-end tests over event-calculus style rules

use logic_expr::*;

#[test]
fn test_initiated_at_rule() {
    let rule = parse_rule(
        "initiatedAt(foo(X,Y)=value,T) :- happensAt(a(X),T), not happensAt(b(Y),T).",
    )
    .unwrap();

    assert_eq!(rule.head().to_string(), "initiatedAt(foo(X, Y)=value, T)");
    assert_eq!(rule.body().to_string(), "happensAt(a(X), T), not(happensAt(b(Y), T))");
    assert_eq!(rule.head().signature().unwrap().to_string(), "initiatedAt/2");

    let fluent = rule.head().args()[0].as_function().unwrap();
    assert_eq!(fluent.values(), &[Term::string("value")]);
    assert_eq!(rule.variables().len(), 3);
}

#[test]
fn test_program_from_multiline_text() {
    let program = vec![
        ":- include('events.pl').",
        "initiatedAt(moving(P)=true, T) :-\n    happensAt(start(P), T),\n    \\+ holdsAt(broken(P)=true, T).",
        "terminatedAt(moving(P)=true, T) :-\n    happensAt(stop(P), T).",
        "holdsFor(slow(P)=true, I) :- holdsFor(speed(P)=S, I), S < 10.",
    ];

    let mut rules = Vec::new();
    for statement in program {
        println!("\n=== Statement ===\n{}", statement);
        if let Ok(include) = parse_include(statement) {
            assert_eq!(include.path(), "events.pl");
            continue;
        }
        let normalized = reformat(statement, false).unwrap();
        println!("  Normalized: '{}'", normalized);
        let rule = parse_rule(&normalized).unwrap();
        println!("  Parsed: '{}'", rule);
        rules.push(rule);
    }

    assert_eq!(rules.len(), 3);
    assert_eq!(
        rules[0].to_string(),
        "initiatedAt(moving(P)=true, T) :- happensAt(start(P), T), not(holdsAt(broken(P)=true, T))."
    );
    assert_eq!(
        rules[2].body().to_string(),
        "holdsFor(speed(P)=S, I), lessThan(S, 10)"
    );

    let signatures: Vec<String> = rules
        .iter()
        .map(|r| r.head().signature().unwrap().to_string())
        .collect();
    assert_eq!(signatures, vec!["initiatedAt/2", "terminatedAt/2", "holdsFor/2"]);
}

#[test]
fn test_reprint_is_stable() {
    let input = "initiatedAt(foo(X,Y)=value,T) :- happensAt(a(X),T), not happensAt(b(Y),T).";
    let first = parse_formula(input).unwrap();
    let printed = first.to_string();
    let second = parse_formula(&printed).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.to_string(), printed);
    assert_eq!(second.atom_count(), 3);
}
