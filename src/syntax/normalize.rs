// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/normalize.rs
// Text-level normalization of free-form rule text

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r",[ \t]*\r?\n").expect("valid pattern"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\r?\n\s*").expect("valid pattern"));
static LIST_BAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").expect("valid pattern"));
static PAREN_NEGATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\bnot|\\\+)\s*\(").expect("valid pattern"));
static BARE_NEGATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\bnot\b|\\\+)\s*").expect("valid pattern"));

/// Rewrite free-form rule text into the single-line form the parser expects.
///
/// The body is split into segments at commas that end a line. Each segment
/// is trimmed and loses trailing periods. List bars become `", "`, and both
/// negation spellings become `not(...)`. Segments are joined with `", "`, or
/// with `",\n\t"` when `multiline` is set, and the result ends in a single
/// `.`. Text before a `:-` is kept as the head.
///
/// ```
/// use logic_expr::reformat;
///
/// let text = "p(X) :-\n    q(X),\n    \\+ r(X).";
/// assert_eq!(reformat(text, false).unwrap(), "p(X) :- q(X), not(r(X)).");
/// ```
pub fn reformat(text: &str, multiline: bool) -> ParseResult<String> {
    let parts: Vec<&str> = text.split(":-").collect();
    let (head, body) = match parts.as_slice() {
        [body] => (None, *body),
        [head, body] => (Some(head.trim()), *body),
        _ => {
            return Err(ParseError::MalformedSentence {
                text: text.to_string(),
            })
        }
    };

    let segments: Vec<String> = SEGMENT_BREAK
        .split(body)
        .map(normalize_segment)
        .filter(|s| !s.is_empty())
        .collect();
    log::trace!("reformat {:?} into segments {:?}", text, segments);

    let body = segments.join(if multiline { ",\n\t" } else { ", " });
    Ok(match head {
        // Headless directive, e.g. `:- include('x').`
        Some("") => format!(":- {}.", body),
        Some(head) if multiline => format!("{} :-\n\t{}.", head, body),
        Some(head) => format!("{} :- {}.", head, body),
        None => format!("{}.", body),
    })
}

fn normalize_segment(segment: &str) -> String {
    let segment = segment.trim().trim_end_matches('.').trim_end();
    let segment = LINE_BREAK.replace_all(segment, " ");
    let segment = LIST_BAR.replace_all(&segment, ", ");
    rewrite_negations(&segment)
}

/// `not (x` and `\+(x` become `not(x`; bare `not x` and `\+ x` wrap the
/// literal that follows, up to the next top-level comma.
fn rewrite_negations(segment: &str) -> String {
    let segment = PAREN_NEGATION.replace_all(segment, "not(");
    let mut out = String::with_capacity(segment.len() + 8);
    let mut rest: &str = &segment;

    while let Some(m) = BARE_NEGATION.find(rest) {
        let after = &rest[m.end()..];
        let len = literal_extent(after);
        if after.starts_with('(') || after[..len].trim().is_empty() {
            out.push_str(&rest[..m.end()]);
            rest = after;
            continue;
        }
        out.push_str(&rest[..m.start()]);
        out.push_str("not(");
        out.push_str(after[..len].trim_end());
        out.push(')');
        rest = &after[len..];
    }
    out.push_str(rest);
    out
}

/// Byte length of the text up to the first comma outside brackets.
fn literal_extent(text: &str) -> usize {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' if depth == 0 => return i,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => return i,
            _ => {}
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_directive_has_no_leading_space() {
        assert_eq!(reformat(":- include('x').", false).unwrap(), ":- include('x').");
        assert_eq!(reformat("  :-\n  include('x').", true).unwrap(), ":- include('x').");
    }

    #[test]
    fn extent_stops_at_top_level_comma() {
        assert_eq!(literal_extent("b(Y, Z), c"), 7);
        assert_eq!(literal_extent("b(Y)"), 4);
    }

    #[test]
    fn extent_stops_at_enclosing_paren() {
        assert_eq!(literal_extent("b(Y)), c"), 4);
    }

    #[test]
    fn bare_negation_wrapped() {
        assert_eq!(rewrite_negations("a(X), not b(X, Y)"), "a(X), not(b(X, Y))");
        assert_eq!(rewrite_negations("\\+b"), "not(b)");
    }

    #[test]
    fn negation_word_inside_identifiers_untouched() {
        assert_eq!(rewrite_negations("nothing(X), cannot(Y)"), "nothing(X), cannot(Y)");
    }

    #[test]
    fn negation_word_as_argument_untouched() {
        assert_eq!(rewrite_negations("p(not)"), "p(not)");
    }

    #[test]
    fn parenthesised_negation_spacing() {
        assert_eq!(rewrite_negations("not  (a)"), "not(a)");
        assert_eq!(rewrite_negations("\\+ (a, b)"), "not(a, b)");
    }
}
