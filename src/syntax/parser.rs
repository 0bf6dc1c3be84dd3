// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for terms, atoms and rules using nom

use crate::ast::*;
use crate::error::{Construct, ParseError, ParseResult};
use crate::syntax::lexical::classify;
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while},
    character::complete::{char, digit1, multispace1, not_line_ending, satisfy},
    combinator::{map, not, opt, recognize, verify},
    error::{context, ContextError, ErrorKind, FromExternalError},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

type GrammarResult<'a, T> = IResult<&'a str, T, GrammarError<'a>>;

// ============================================================================
// Errors
// ============================================================================

/// Failure of a single production.
///
/// `input` is where the production gave up; `cause` is set when the
/// classifier rejected a fragment, which stops backtracking.
#[derive(Debug)]
pub(crate) struct GrammarError<'a> {
    input: &'a str,
    context: Option<&'static str>,
    cause: Option<ParseError>,
}

impl<'a> GrammarError<'a> {
    fn into_parse_error(self, target: Construct) -> ParseError {
        match self.cause {
            Some(cause) => cause,
            None => ParseError::grammar(target, self.input),
        }
    }
}

impl<'a> nom::error::ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        GrammarError {
            input,
            context: None,
            cause: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // Report the alternative that got furthest.
    fn or(self, other: Self) -> Self {
        if other.input.len() < self.input.len() {
            other
        } else {
            self
        }
    }
}

impl<'a> ContextError<&'a str> for GrammarError<'a> {
    fn add_context(_input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        if other.context.is_none() {
            other.context = Some(ctx);
        }
        other
    }
}

impl<'a> FromExternalError<&'a str, ParseError> for GrammarError<'a> {
    fn from_external_error(input: &'a str, _kind: ErrorKind, e: ParseError) -> Self {
        GrammarError {
            input,
            context: None,
            cause: Some(e),
        }
    }
}

// ============================================================================
// Lexer
// ============================================================================

/// Whitespace, `//` and `%` line comments, `/* */` block comments.
fn junk(input: &str) -> GrammarResult<&str> {
    recognize(many0(alt((
        multispace1,
        recognize(pair(alt((tag("//"), tag("%"))), not_line_ending)),
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
    ))))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> GrammarResult<'a, O>
where
    F: FnMut(&'a str) -> GrammarResult<'a, O>,
{
    preceded(junk, inner)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> GrammarResult<'a, &'a str> {
    ws(terminated(tag(kw), not(satisfy(is_ident_char))))
}

fn lower_ident(input: &str) -> GrammarResult<&str> {
    ws(recognize(pair(
        satisfy(|c: char| c.is_ascii_lowercase()),
        take_while(is_ident_char),
    )))(input)
}

fn upper_ident(input: &str) -> GrammarResult<&str> {
    ws(recognize(pair(
        satisfy(|c: char| c.is_ascii_uppercase()),
        take_while(is_ident_char),
    )))(input)
}

fn float_literal(input: &str) -> GrammarResult<&str> {
    ws(recognize(tuple((opt(char('-')), digit1, char('.'), digit1))))(input)
}

fn integer_literal(input: &str) -> GrammarResult<&str> {
    ws(recognize(pair(opt(char('-')), digit1)))(input)
}

fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> GrammarResult<'a, &'a str> {
    ws(recognize(delimited(
        char(quote),
        take_while(move |c: char| c != quote && c != '\n'),
        char(quote),
    )))
}

/// Runs a token parser and classifies the text it isolated. A rejected
/// fragment is fatal: no other alternative could accept it either.
fn classified<'a, F>(mut token: F) -> impl FnMut(&'a str) -> GrammarResult<'a, Term>
where
    F: FnMut(&'a str) -> GrammarResult<'a, &'a str>,
{
    move |input: &'a str| {
        let (rest, text) = token(input)?;
        match classify(text) {
            Ok(term) => Ok((rest, term)),
            Err(e) => Err(nom::Err::Failure(GrammarError::from_external_error(
                input,
                ErrorKind::MapRes,
                e,
            ))),
        }
    }
}

// ============================================================================
// Terms
// ============================================================================

fn term(input: &str) -> GrammarResult<Term> {
    context(
        "term",
        alt((
            // Functions and lists first: both start like a plain identifier or bracket
            map(function, Term::Function),
            map(list, Term::List),
            classified(lower_ident),
            classified(upper_ident),
            classified(float_literal),
            classified(integer_literal),
            classified(quoted('\'')),
            classified(quoted('"')),
        )),
    )(input)
}

fn term_args(input: &str) -> GrammarResult<Vec<Term>> {
    delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), term),
        ws(char(')')),
    )(input)
}

fn term_tuple(input: &str) -> GrammarResult<Vec<Term>> {
    delimited(
        ws(char('(')),
        separated_list1(ws(char(',')), term),
        ws(char(')')),
    )(input)
}

fn function(input: &str) -> GrammarResult<Function> {
    context(
        "function",
        alt((named_function, map(term_tuple, Function::tuple))),
    )(input)
}

/// `f(args)=(v1, ..., vn)`, then `f(args)=v`, then `f(args)`.
///
/// The call prefix is shared, so it is parsed once and the value suffix
/// tried longest-first.
fn named_function(input: &str) -> GrammarResult<Function> {
    let (input, name) = lower_ident(input)?;
    let (input, args) = term_args(input)?;
    let (input, values) = opt(preceded(
        ws(char('=')),
        alt((term_tuple, map(term, |t| vec![t]))),
    ))(input)?;
    Ok((input, Function::with_values(name, args, values.unwrap_or_default())))
}

fn list(input: &str) -> GrammarResult<TermList> {
    context("list", alt((head_tail_list, simple_list)))(input)
}

fn simple_list(input: &str) -> GrammarResult<TermList> {
    map(
        delimited(
            ws(char('[')),
            separated_list0(ws(char(',')), term),
            ws(char(']')),
        ),
        TermList::new,
    )(input)
}

/// `[h1, ..., hn | T]` keeps `T` as one trailing variable;
/// `[h1, ..., hn | [t1, ...]]` splices the tail's elements in.
fn head_tail_list(input: &str) -> GrammarResult<TermList> {
    let (input, _) = ws(char('['))(input)?;
    let (input, mut terms) = separated_list1(ws(char(',')), term)(input)?;
    let (input, _) = ws(char('|'))(input)?;
    let (input, tail) = alt((
        map(classified(upper_ident), |v| vec![v]),
        map(list, TermList::into_terms),
    ))(input)?;
    let (input, _) = ws(char(']'))(input)?;
    terms.extend(tail);
    Ok((input, TermList::new(terms)))
}

// ============================================================================
// Atoms
// ============================================================================

fn atom(input: &str) -> GrammarResult<Atom> {
    context("atomic formula", alt((relational_atom, typical_atom)))(input)
}

/// `not` is reserved for negation and never names a predicate.
fn typical_atom(input: &str) -> GrammarResult<Atom> {
    let (input, name) = verify(lower_ident, |name: &str| name != "not")(input)?;
    let (input, args) = opt(term_args)(input)?;
    Ok((input, Atom::new(name, args.unwrap_or_default())))
}

fn rel_op(input: &str) -> GrammarResult<RelOp> {
    // Longer spellings before their prefixes
    ws(alt((
        nom::combinator::value(RelOp::Equals, tag("=:=")),
        nom::combinator::value(RelOp::NotEquals, tag("=\\=")),
        nom::combinator::value(RelOp::LessThanEq, tag("=<")),
        nom::combinator::value(RelOp::GreaterThanEq, tag(">=")),
        nom::combinator::value(RelOp::LessThan, tag("<")),
        nom::combinator::value(RelOp::GreaterThan, tag(">")),
    )))(input)
}

fn operand(input: &str) -> GrammarResult<Term> {
    alt((
        map(function, Term::Function),
        classified(upper_ident),
        classified(lower_ident),
        classified(float_literal),
        classified(integer_literal),
    ))(input)
}

/// `l op r` becomes the typical atom `predicate(l, r)`.
fn relational_atom(input: &str) -> GrammarResult<Atom> {
    map(tuple((operand, rel_op, operand)), |(left, op, right)| {
        Atom::relational(op, left, right)
    })(input)
}

// ============================================================================
// Formulas
// ============================================================================

fn neg_symbol(input: &str) -> GrammarResult<&str> {
    alt((keyword("not"), ws(tag("\\+"))))(input)
}

fn negation(input: &str) -> GrammarResult<Negation> {
    let (input, _) = neg_symbol(input)?;
    context(
        "negation",
        alt((
            map(atom, |a| Negation::new(a)),
            map(delimited(ws(char('(')), atom, ws(char(')'))), |a| {
                Negation::new(a)
            }),
            map(delimited(ws(char('(')), clause_body, ws(char(')'))), |b| {
                Negation::new(b)
            }),
        )),
    )(input)
}

fn literal(input: &str) -> GrammarResult<ClauseBody> {
    alt((
        map(negation, ClauseBody::Negation),
        map(atom, ClauseBody::Atom),
    ))(input)
}

/// Literals separated by `,`, folded left: `a, b, c` is `(a, b), c`.
fn clause_body(input: &str) -> GrammarResult<ClauseBody> {
    let (input, first) = context("clause body", literal)(input)?;
    let (input, rest) = many0(preceded(ws(char(',')), literal))(input)?;

    Ok((
        input,
        rest.into_iter()
            .fold(first, |acc, next| ClauseBody::Conjunction(Conjunction::new(acc, next))),
    ))
}

fn rule(input: &str) -> GrammarResult<Rule> {
    context(
        "rule",
        map(
            tuple((atom, ws(tag(":-")), clause_body, ws(char('.')))),
            |(head, _, body, _)| Rule::new(head, body),
        ),
    )(input)
}

fn formula(input: &str) -> GrammarResult<Formula> {
    alt((
        map(rule, Formula::Rule),
        map(terminated(clause_body, opt(ws(char('.')))), Formula::from),
    ))(input)
}

fn unquote(s: &str) -> &str {
    &s[1..s.len() - 1]
}

fn include_path(input: &str) -> GrammarResult<&str> {
    alt((
        map(quoted('\''), unquote),
        map(quoted('"'), unquote),
        ws(is_not("()'\" \t\r\n")),
    ))(input)
}

/// `include(path)`, optionally written as a directive `:- include(path).`
fn include(input: &str) -> GrammarResult<IncludeFileExpression> {
    let (input, _) = opt(ws(tag(":-")))(input)?;
    let (input, _) = keyword("include")(input)?;
    let (input, path) = delimited(ws(char('(')), include_path, ws(char(')')))(input)?;
    let (input, _) = opt(ws(char('.')))(input)?;
    Ok((input, IncludeFileExpression::new(path)))
}

// ============================================================================
// Public API
// ============================================================================

fn parse_complete<'a, O, F>(target: Construct, parser: F, input: &'a str) -> ParseResult<O>
where
    F: FnMut(&'a str) -> GrammarResult<'a, O>,
{
    log::trace!("parsing {} from {:?}", target, input);
    match terminated(parser, junk)(input) {
        Ok(("", result)) => Ok(result),
        Ok((remaining, _)) => {
            log::debug!("{} parsed but input remained: {:?}", target, remaining);
            Err(ParseError::grammar(target, remaining))
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            log::debug!(
                "{} failed in {} at {:?}",
                target,
                e.context.unwrap_or("input"),
                e.input
            );
            Err(e.into_parse_error(target))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::grammar(target, "")),
    }
}

/// Any single term.
pub fn parse_term(input: &str) -> ParseResult<Term> {
    parse_complete(Construct::Term, term, input)
}

/// `[t1, ...]` or `[h1, ... | tail]`.
pub fn parse_term_list(input: &str) -> ParseResult<TermList> {
    parse_complete(Construct::TermList, list, input)
}

pub fn parse_function(input: &str) -> ParseResult<Function> {
    parse_complete(Construct::Function, function, input)
}

/// A typical atom, or an infix comparison rewritten to its predicate.
pub fn parse_atom(input: &str) -> ParseResult<Atom> {
    parse_complete(Construct::Atom, atom, input)
}

/// A conjunction, atom or negation; a trailing `.` is accepted.
pub fn parse_clause_body(input: &str) -> ParseResult<ClauseBody> {
    parse_complete(
        Construct::ClauseBody,
        terminated(clause_body, opt(ws(char('.')))),
        input,
    )
}

/// `head :- body.`
pub fn parse_rule(input: &str) -> ParseResult<Rule> {
    parse_complete(Construct::Rule, rule, input)
}

/// A rule, or failing that a clause body.
pub fn parse_formula(input: &str) -> ParseResult<Formula> {
    parse_complete(Construct::Formula, formula, input)
}

pub fn parse_include(input: &str) -> ParseResult<IncludeFileExpression> {
    parse_complete(Construct::Include, include, input)
}

/// `name/arity`, as printed by [`AtomSignature`].
pub fn parse_signature(input: &str) -> ParseResult<AtomSignature> {
    log::trace!("parsing signature from {:?}", input);
    let signature = input.parse::<AtomSignature>().map_err(|e| {
        log::debug!("signature {:?} rejected: {}", input, e);
        e
    })?;
    Ok(signature)
}
