// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast/mod.rs
// Core AST: terms, formulas and signatures

pub mod formula;
pub mod signature;
pub mod term;

pub use formula::{Atom, ClauseBody, Conjunction, Formula, IncludeFileExpression, Negation, RelOp, Rule};
pub use signature::AtomSignature;
pub use term::{Constant, Function, Term, TermList, Variable, LIST_SYMBOL};
