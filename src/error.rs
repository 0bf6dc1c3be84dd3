// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/error.rs
// Error types for classification, parsing, normalization and construction

use std::fmt;
use thiserror::Error;

/// Result alias used by the public parse API.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// The construct a public entry point was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Term,
    TermList,
    Function,
    Atom,
    ClauseBody,
    Rule,
    Formula,
    Include,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Construct::Term => "term",
            Construct::TermList => "term-list",
            Construct::Function => "function",
            Construct::Atom => "atomic-formula",
            Construct::ClauseBody => "clause body",
            Construct::Rule => "rule",
            Construct::Formula => "formula",
            Construct::Include => "include directive",
        };
        write!(f, "{}", name)
    }
}

/// Construction-time invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("signature name must not be empty")]
    EmptyName,

    #[error("invalid signature name {0:?}")]
    InvalidName(String),

    #[error("arity must not be negative, got {0}")]
    NegativeArity(i64),

    #[error("malformed signature {0:?}, expected name/arity")]
    MalformedSignature(String),

    /// A rule was given something other than an atom as its head.
    #[error("rule head must be an atom, got `{0}`")]
    HeadlessRule(String),

    /// A rule appeared where only atoms, conjunctions and negations are allowed.
    #[error("expected a definite-clause construct, got rule `{0}`")]
    NotDefinite(String),
}

/// Everything the parsing API can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A text fragment matched none of the lexical patterns.
    #[error("cannot classify {fragment:?} as a term")]
    Classification { fragment: String },

    /// A top-level production exhausted its alternatives.
    #[error("failed to parse {target}: unexpected input at {remainder:?}")]
    Grammar { target: Construct, remainder: String },

    /// The normalizer saw more than one `:-`.
    #[error("malformed sentence, more than one ':-' in {text:?}")]
    MalformedSentence { text: String },

    #[error(transparent)]
    Ast(#[from] AstError),
}

impl ParseError {
    pub fn grammar(target: Construct, remainder: impl Into<String>) -> Self {
        ParseError::Grammar {
            target,
            remainder: remainder.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_error_names_target_and_remainder() {
        let err = ParseError::grammar(Construct::Rule, "foo(");
        let msg = err.to_string();
        assert!(msg.contains("rule"));
        assert!(msg.contains("foo("));
    }

    #[test]
    fn ast_error_converts_into_parse_error() {
        let err: ParseError = AstError::EmptyName.into();
        assert!(matches!(err, ParseError::Ast(AstError::EmptyName)));
        assert_eq!(err.to_string(), "signature name must not be empty");
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<ParseError>();
        _assert_send_sync_static::<AstError>();
    }
}
