// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Parser and AST for Prolog-style logic expressions

pub mod ast;
pub mod core;
pub mod error;
pub mod syntax;

// Re-export commonly used items
pub use ast::{
    Atom, AtomSignature, ClauseBody, Conjunction, Constant, Formula, Function,
    IncludeFileExpression, Negation, RelOp, Rule, Term, TermList, Variable, LIST_SYMBOL,
};
pub use core::collect::{
    collect_constants, collect_functions, collect_variables, collect_variables_nested,
};
pub use error::{AstError, Construct, ParseError, ParseResult};
pub use syntax::{
    classify, classify_fragment, parse_atom, parse_clause_body, parse_formula, parse_function,
    parse_include, parse_rule, parse_signature, parse_term, parse_term_list, reformat,
    Fragment,
};
