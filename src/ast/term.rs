// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast/term.rs
// Terms: variables, constants, functions and lists

use crate::ast::AtomSignature;
use crate::core::collect::{collect_constants, collect_functions, collect_variables, DerivedSets};
use crate::error::AstError;
use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Symbol carried by every list. Used for equality and hashing only, never printed.
pub const LIST_SYMBOL: &str = "{L}";

// ============================================================================
// Core Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Function(Function),
    List(TermList),
}

/// Variable names (uppercase-leading identifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    pub fn new(s: impl Into<String>) -> Self {
        Variable(s.into())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

/// Ground values. String constants keep their text verbatim, quotes included.
#[derive(Debug, Clone)]
pub enum Constant {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

// Floats compare and hash by bit pattern so constants can live in sets.
impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constant::Boolean(a), Constant::Boolean(b)) => a == b,
            (Constant::Integer(a), Constant::Integer(b)) => a == b,
            (Constant::Float(a), Constant::Float(b)) => a.to_bits() == b.to_bits(),
            (Constant::String(a), Constant::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Constant::Boolean(b) => b.hash(state),
            Constant::Integer(n) => n.hash(state),
            Constant::Float(x) => x.to_bits().hash(state),
            Constant::String(s) => s.hash(state),
        }
    }
}

impl Constant {
    pub fn string(s: impl Into<String>) -> Self {
        Constant::String(s.into())
    }

    /// The constant's symbol as text, e.g. `42`, `1.5`, `true`, `'Foo'`.
    pub fn symbol(&self) -> Cow<'_, str> {
        match self {
            Constant::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// `name(args)`, `name(args)=value` or `name(args)=(v1, ..., vn)`.
///
/// An empty name denotes an unnamed tuple `(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    symbol: String,
    args: Vec<Term>,
    values: Vec<Term>,
    derived: DerivedSets,
}

/// An ordered sequence of terms, `[t1, ..., tn]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TermList {
    terms: Vec<Term>,
    derived: DerivedSets,
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Term {
    /// Variant-specific symbol: variable/functor name, constant text, or
    /// [`LIST_SYMBOL`] for lists.
    pub fn symbol(&self) -> Cow<'_, str> {
        match self {
            Term::Variable(v) => Cow::Borrowed(v.symbol()),
            Term::Constant(c) => c.symbol(),
            Term::Function(f) => Cow::Borrowed(f.symbol()),
            Term::List(_) => Cow::Borrowed(LIST_SYMBOL),
        }
    }

    pub fn variables(&self) -> HashSet<Variable> {
        collect_variables([self])
    }

    pub fn constants(&self) -> HashSet<Constant> {
        collect_constants([self])
    }

    pub fn functions(&self) -> HashSet<Function> {
        collect_functions([self])
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Function(f) => f.is_ground(),
            Term::List(l) => l.is_ground(),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Term::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TermList> {
        match self {
            Term::List(l) => Some(l),
            _ => None,
        }
    }
}

impl Function {
    pub fn new(symbol: impl Into<String>, args: Vec<Term>) -> Self {
        Self::with_values(symbol, args, vec![])
    }

    pub fn with_values(symbol: impl Into<String>, args: Vec<Term>, values: Vec<Term>) -> Self {
        Function {
            symbol: symbol.into(),
            args,
            values,
            derived: DerivedSets::default(),
        }
    }

    /// An unnamed tuple `(t1, ..., tn)`.
    pub fn tuple(args: Vec<Term>) -> Self {
        Self::new("", args)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn values(&self) -> &[Term] {
        &self.values
    }

    pub fn arity(&self) -> usize {
        self.args.len() + self.values.len()
    }

    pub fn is_tuple(&self) -> bool {
        self.symbol.is_empty()
    }

    /// `(name, arity)`; fails for unnamed tuples.
    pub fn signature(&self) -> Result<AtomSignature, AstError> {
        AtomSignature::new(self.symbol.clone(), self.arity())
    }

    fn terms(&self) -> impl Iterator<Item = &Term> {
        self.args.iter().chain(self.values.iter())
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived.variables(|| collect_variables(self.terms()))
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived.constants(|| collect_constants(self.terms()))
    }

    /// Functions nested inside this one (not including itself).
    pub fn functions(&self) -> &HashSet<Function> {
        self.derived.functions(|| collect_functions(self.terms()))
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }
}

impl TermList {
    pub fn new(terms: Vec<Term>) -> Self {
        TermList {
            terms,
            derived: DerivedSets::default(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn symbol(&self) -> &'static str {
        LIST_SYMBOL
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived.variables(|| collect_variables(&self.terms))
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived.constants(|| collect_constants(&self.terms))
    }

    pub fn functions(&self) -> &HashSet<Function> {
        self.derived.functions(|| collect_functions(&self.terms))
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }
}

impl From<Vec<Term>> for TermList {
    fn from(terms: Vec<Term>) -> Self {
        TermList::new(terms)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn int(n: i64) -> Self {
        Term::Constant(Constant::Integer(n))
    }

    pub fn float(x: f64) -> Self {
        Term::Constant(Constant::Float(x))
    }

    pub fn boolean(b: bool) -> Self {
        Term::Constant(Constant::Boolean(b))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Term::Constant(Constant::string(s))
    }

    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Function(Function::new(name, args))
    }

    pub fn valued(name: impl Into<String>, args: Vec<Term>, values: Vec<Term>) -> Self {
        Term::Function(Function::with_values(name, args, values))
    }

    pub fn tuple(args: Vec<Term>) -> Self {
        Term::Function(Function::tuple(args))
    }

    pub fn list(terms: Vec<Term>) -> Self {
        Term::List(TermList::new(terms))
    }

    pub fn empty_list() -> Self {
        Self::list(vec![])
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable(v)
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Term::Constant(c)
    }
}

impl From<Function> for Term {
    fn from(f: Function) -> Self {
        Term::Function(f)
    }
}

impl From<TermList> for Term {
    fn from(l: TermList) -> Self {
        Term::List(l)
    }
}
