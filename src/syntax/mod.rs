// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/mod.rs
// Surface syntax: classification, grammar, normalization and printing

pub mod lexical;
pub mod normalize;
pub mod parser;
pub mod pretty;

pub use lexical::{classify, classify_fragment, Fragment};
pub use normalize::reformat;
pub use parser::{
    parse_atom, parse_clause_body, parse_formula, parse_function, parse_include, parse_rule,
    parse_signature, parse_term, parse_term_list,
};
