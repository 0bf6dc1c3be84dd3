// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast/formula.rs
// Formulas: atoms, conjunctions, negations and rules

use crate::ast::{AtomSignature, Constant, Function, Term, Variable};
use crate::core::collect::{collect_constants, collect_functions, collect_variables, union, DerivedSets};
use crate::error::AstError;
use std::collections::HashSet;

// ============================================================================
// Core Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(Atom),
    Conjunction(Conjunction),
    Negation(Negation),
    Rule(Rule),
}

/// The definite-clause subset of [`Formula`]: what a rule body, a
/// conjunction operand or a negated formula may be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClauseBody {
    Atom(Atom),
    Conjunction(Conjunction),
    Negation(Negation),
}

/// `name` or `name(t1, ..., tn)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    symbol: String,
    args: Vec<Term>,
    derived: DerivedSets,
}

/// `left, right`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conjunction {
    left: Box<ClauseBody>,
    right: Box<ClauseBody>,
    derived: DerivedSets,
}

/// `not(formula)`; counts as a single literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Negation {
    inner: Box<ClauseBody>,
    derived: DerivedSets,
}

/// `head :- body.`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    head: Atom,
    body: ClauseBody,
    derived: DerivedSets,
}

/// Infix comparison operators and the predicates they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanEq,
    GreaterThanEq,
}

impl RelOp {
    pub const ALL: [RelOp; 6] = [
        RelOp::Equals,
        RelOp::NotEquals,
        RelOp::LessThan,
        RelOp::GreaterThan,
        RelOp::LessThanEq,
        RelOp::GreaterThanEq,
    ];

    /// Infix spelling, e.g. `=<`.
    pub fn symbol(&self) -> &'static str {
        match self {
            RelOp::Equals => "=:=",
            RelOp::NotEquals => "=\\=",
            RelOp::LessThan => "<",
            RelOp::GreaterThan => ">",
            RelOp::LessThanEq => "=<",
            RelOp::GreaterThanEq => ">=",
        }
    }

    /// Prefix predicate name the infix form is rewritten to.
    pub fn predicate(&self) -> &'static str {
        match self {
            RelOp::Equals => "equals",
            RelOp::NotEquals => "not_equals",
            RelOp::LessThan => "lessThan",
            RelOp::GreaterThan => "greaterThan",
            RelOp::LessThanEq => "lessThanEq",
            RelOp::GreaterThanEq => "greaterThanEq",
        }
    }
}

/// A file-inclusion directive. Carried as data; never resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncludeFileExpression {
    path: String,
}

impl IncludeFileExpression {
    pub fn new(path: impl Into<String>) -> Self {
        IncludeFileExpression { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

// ============================================================================
// Atoms
// ============================================================================

impl Atom {
    pub fn new(symbol: impl Into<String>, args: Vec<Term>) -> Self {
        Atom {
            symbol: symbol.into(),
            args,
            derived: DerivedSets::default(),
        }
    }

    /// A zero-arity atom.
    pub fn proposition(symbol: impl Into<String>) -> Self {
        Self::new(symbol, vec![])
    }

    /// `left op right` in its prefix form, e.g. `lessThan(left, right)`.
    pub fn relational(op: RelOp, left: Term, right: Term) -> Self {
        Self::new(op.predicate(), vec![left, right])
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    pub fn signature(&self) -> Result<AtomSignature, AstError> {
        AtomSignature::new(self.symbol.clone(), self.arity())
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived.variables(|| collect_variables(&self.args))
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived.constants(|| collect_constants(&self.args))
    }

    pub fn functions(&self) -> &HashSet<Function> {
        self.derived.functions(|| collect_functions(&self.args))
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }
}

// ============================================================================
// Conjunctions and Negations
// ============================================================================

impl Conjunction {
    pub fn new(left: impl Into<ClauseBody>, right: impl Into<ClauseBody>) -> Self {
        Conjunction {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            derived: DerivedSets::default(),
        }
    }

    pub fn left(&self) -> &ClauseBody {
        &self.left
    }

    pub fn right(&self) -> &ClauseBody {
        &self.right
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived
            .variables(|| union(self.left.variables(), self.right.variables()))
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived
            .constants(|| union(self.left.constants(), self.right.constants()))
    }

    pub fn functions(&self) -> &HashSet<Function> {
        self.derived
            .functions(|| union(self.left.functions(), self.right.functions()))
    }
}

impl Negation {
    pub fn new(inner: impl Into<ClauseBody>) -> Self {
        Negation {
            inner: Box::new(inner.into()),
            derived: DerivedSets::default(),
        }
    }

    pub fn inner(&self) -> &ClauseBody {
        &self.inner
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived.variables(|| self.inner.variables().clone())
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived.constants(|| self.inner.constants().clone())
    }

    pub fn functions(&self) -> &HashSet<Function> {
        self.derived.functions(|| self.inner.functions().clone())
    }
}

// ============================================================================
// Clause bodies
// ============================================================================

impl ClauseBody {
    pub fn variables(&self) -> &HashSet<Variable> {
        match self {
            ClauseBody::Atom(a) => a.variables(),
            ClauseBody::Conjunction(c) => c.variables(),
            ClauseBody::Negation(n) => n.variables(),
        }
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        match self {
            ClauseBody::Atom(a) => a.constants(),
            ClauseBody::Conjunction(c) => c.constants(),
            ClauseBody::Negation(n) => n.constants(),
        }
    }

    pub fn functions(&self) -> &HashSet<Function> {
        match self {
            ClauseBody::Atom(a) => a.functions(),
            ClauseBody::Conjunction(c) => c.functions(),
            ClauseBody::Negation(n) => n.functions(),
        }
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }

    /// A bare atom, or a negation of a unit.
    pub fn is_unit(&self) -> bool {
        match self {
            ClauseBody::Atom(_) => true,
            ClauseBody::Conjunction(_) => false,
            ClauseBody::Negation(n) => n.inner.is_unit(),
        }
    }

    /// Immediate sub-formulas.
    pub fn sub_formulas(&self) -> Vec<&ClauseBody> {
        match self {
            ClauseBody::Atom(_) => vec![],
            ClauseBody::Conjunction(c) => vec![c.left(), c.right()],
            ClauseBody::Negation(n) => vec![n.inner()],
        }
    }

    /// Conjuncts in left-to-right order; negations are not descended into.
    pub fn literals(&self) -> Vec<&ClauseBody> {
        match self {
            ClauseBody::Conjunction(c) => {
                let mut out = c.left.literals();
                out.extend(c.right.literals());
                out
            }
            literal => vec![literal],
        }
    }

    pub fn atom_count(&self) -> usize {
        self.literals().len()
    }

    pub fn and(self, other: impl Into<ClauseBody>) -> ClauseBody {
        ClauseBody::Conjunction(Conjunction::new(self, other))
    }

    pub fn negate(self) -> ClauseBody {
        ClauseBody::Negation(Negation::new(self))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            ClauseBody::Atom(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Atom> for ClauseBody {
    fn from(a: Atom) -> Self {
        ClauseBody::Atom(a)
    }
}

impl From<Conjunction> for ClauseBody {
    fn from(c: Conjunction) -> Self {
        ClauseBody::Conjunction(c)
    }
}

impl From<Negation> for ClauseBody {
    fn from(n: Negation) -> Self {
        ClauseBody::Negation(n)
    }
}

/// Rejects rules: only atoms, conjunctions and negations are definite.
impl TryFrom<Formula> for ClauseBody {
    type Error = AstError;

    fn try_from(formula: Formula) -> Result<Self, Self::Error> {
        match formula {
            Formula::Atom(a) => Ok(ClauseBody::Atom(a)),
            Formula::Conjunction(c) => Ok(ClauseBody::Conjunction(c)),
            Formula::Negation(n) => Ok(ClauseBody::Negation(n)),
            Formula::Rule(r) => Err(AstError::NotDefinite(r.to_string())),
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

impl Rule {
    pub fn new(head: Atom, body: impl Into<ClauseBody>) -> Self {
        Rule {
            head,
            body: body.into(),
            derived: DerivedSets::default(),
        }
    }

    /// Builds a rule from arbitrary formulas, checking the head is an atom
    /// and the body is a definite-clause construct.
    pub fn try_from_formulas(head: Formula, body: Formula) -> Result<Self, AstError> {
        let head = match head {
            Formula::Atom(a) => a,
            other => return Err(AstError::HeadlessRule(other.to_string())),
        };
        Ok(Rule::new(head, ClauseBody::try_from(body)?))
    }

    pub fn head(&self) -> &Atom {
        &self.head
    }

    pub fn body(&self) -> &ClauseBody {
        &self.body
    }

    pub fn variables(&self) -> &HashSet<Variable> {
        self.derived
            .variables(|| union(self.head.variables(), self.body.variables()))
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        self.derived
            .constants(|| union(self.head.constants(), self.body.constants()))
    }

    pub fn functions(&self) -> &HashSet<Function> {
        self.derived
            .functions(|| union(self.head.functions(), self.body.functions()))
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }
}

// ============================================================================
// Formulas
// ============================================================================

impl Formula {
    pub fn variables(&self) -> &HashSet<Variable> {
        match self {
            Formula::Atom(a) => a.variables(),
            Formula::Conjunction(c) => c.variables(),
            Formula::Negation(n) => n.variables(),
            Formula::Rule(r) => r.variables(),
        }
    }

    pub fn constants(&self) -> &HashSet<Constant> {
        match self {
            Formula::Atom(a) => a.constants(),
            Formula::Conjunction(c) => c.constants(),
            Formula::Negation(n) => n.constants(),
            Formula::Rule(r) => r.constants(),
        }
    }

    pub fn functions(&self) -> &HashSet<Function> {
        match self {
            Formula::Atom(a) => a.functions(),
            Formula::Conjunction(c) => c.functions(),
            Formula::Negation(n) => n.functions(),
            Formula::Rule(r) => r.functions(),
        }
    }

    pub fn is_ground(&self) -> bool {
        self.variables().is_empty()
    }

    pub fn is_unit(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Conjunction(_) | Formula::Rule(_) => false,
            Formula::Negation(n) => n.inner().is_unit(),
        }
    }

    /// Immediate sub-formulas. For a rule this is its body; the head is
    /// available through [`Rule::head`].
    pub fn sub_formulas(&self) -> Vec<&ClauseBody> {
        match self {
            Formula::Atom(_) => vec![],
            Formula::Conjunction(c) => vec![c.left(), c.right()],
            Formula::Negation(n) => vec![n.inner()],
            Formula::Rule(r) => vec![r.body()],
        }
    }

    /// Number of literals; a negation counts once whatever it wraps.
    pub fn atom_count(&self) -> usize {
        match self {
            Formula::Atom(_) | Formula::Negation(_) => 1,
            Formula::Conjunction(c) => c.left().atom_count() + c.right().atom_count(),
            Formula::Rule(r) => 1 + r.body().atom_count(),
        }
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Formula::Rule(_))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Formula::Atom(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Formula::Rule(r) => Some(r),
            _ => None,
        }
    }
}

impl From<ClauseBody> for Formula {
    fn from(body: ClauseBody) -> Self {
        match body {
            ClauseBody::Atom(a) => Formula::Atom(a),
            ClauseBody::Conjunction(c) => Formula::Conjunction(c),
            ClauseBody::Negation(n) => Formula::Negation(n),
        }
    }
}

impl From<Atom> for Formula {
    fn from(a: Atom) -> Self {
        Formula::Atom(a)
    }
}

impl From<Rule> for Formula {
    fn from(r: Rule) -> Self {
        Formula::Rule(r)
    }
}
