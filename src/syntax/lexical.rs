// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/lexical.rs
// Classification of isolated text fragments into terms

use crate::ast::{Constant, Term};
use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

// Patterns overlap (a quoted literal may hold digits, an integer is a prefix
// of a float), so classify() tries them in a fixed order.
static QUOTED_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:'[A-Z0-9][^'\n]*'|"[A-Z0-9][^"\n]*")$"#).expect("valid pattern"));
static QUOTED_LOWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:'([a-z][^'\n]*)'|"([a-z][^"\n]*)")$"#).expect("valid pattern"));
static LOWER_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][A-Za-z0-9_]*$").expect("valid pattern"));
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("valid pattern"));
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid pattern"));
static UPPER_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9_]*$").expect("valid pattern"));

/// Input to the classifier: raw text, or a term the grammar already built.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<'a> {
    Text(&'a str),
    Term(Term),
}

/// Classify a fragment; built functions and lists pass through unchanged.
pub fn classify_fragment(fragment: Fragment<'_>) -> Result<Term, ParseError> {
    match fragment {
        Fragment::Text(text) => classify(text),
        Fragment::Term(term @ (Term::Function(_) | Term::List(_))) => Ok(term),
        Fragment::Term(other) => Err(unclassifiable(&other.to_string())),
    }
}

/// Classify a raw text fragment into a variable or constant.
pub fn classify(text: &str) -> Result<Term, ParseError> {
    if QUOTED_UPPER.is_match(text) {
        return Ok(Term::string(text));
    }

    if let Some(caps) = QUOTED_LOWER.captures(text) {
        let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        // Quotes around a plain identifier carry no information, unless
        // dropping them would turn the text into a boolean.
        let plain = LOWER_IDENT.is_match(inner) && !matches!(inner, "true" | "false");
        let symbol = if plain { inner } else { text };
        return Ok(Term::string(symbol));
    }

    if LOWER_IDENT.is_match(text) {
        return Ok(match text {
            "true" => Term::boolean(true),
            "false" => Term::boolean(false),
            _ => Term::string(text),
        });
    }

    if FLOAT.is_match(text) {
        return text
            .parse::<f64>()
            .map(|x| Term::Constant(Constant::Float(x)))
            .map_err(|_| unclassifiable(text));
    }

    if INTEGER.is_match(text) {
        return text
            .parse::<i64>()
            .map(|n| Term::Constant(Constant::Integer(n)))
            .map_err(|_| unclassifiable(text));
    }

    if UPPER_IDENT.is_match(text) {
        return Ok(Term::var(text));
    }

    Err(unclassifiable(text))
}

fn unclassifiable(text: &str) -> ParseError {
    ParseError::Classification {
        fragment: text.to_string(),
    }
}
