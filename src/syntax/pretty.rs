// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Canonical text for terms and formulas

use crate::ast::*;
use std::fmt;

// ============================================================================
// Terms
// ============================================================================

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Function(func) => write!(f, "{}", func),
            Term::List(l) => write!(f, "{}", l),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Constant::Boolean(b) => write!(f, "{}", b),
            Constant::Integer(n) => write!(f, "{}", n),
            Constant::Float(x) => {
                // Keep the decimal point so the text reads back as a float.
                let s = x.to_string();
                if x.is_finite() && !s.contains('.') {
                    write!(f, "{}.0", s)
                } else {
                    write!(f, "{}", s)
                }
            }
            Constant::String(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.symbol())?;
        write_separated(f, self.args())?;
        write!(f, ")")?;
        match self.values() {
            [] => Ok(()),
            // A lone tuple value keeps its own parentheses; `=(a, b)` means two values.
            [value @ Term::Function(t)] if t.is_tuple() => write!(f, "=({})", value),
            [value] => write!(f, "={}", value),
            values => {
                write!(f, "=(")?;
                write_separated(f, values)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write_separated(f, self.terms())?;
        write!(f, "]")
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ============================================================================
// Formulas
// ============================================================================

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())?;
        if self.arity() > 0 {
            write!(f, "(")?;
            write_separated(f, self.args())?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.left(), self.right())
    }
}

impl fmt::Display for Negation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "not({})", self.inner())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} :- {}.", self.head(), self.body())
    }
}

impl fmt::Display for ClauseBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClauseBody::Atom(a) => write!(f, "{}", a),
            ClauseBody::Conjunction(c) => write!(f, "{}", c),
            ClauseBody::Negation(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Formula::Atom(a) => write!(f, "{}", a),
            Formula::Conjunction(c) => write!(f, "{}", c),
            Formula::Negation(n) => write!(f, "{}", n),
            Formula::Rule(r) => write!(f, "{}", r),
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for IncludeFileExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "include('{}')", self.path())
    }
}

// ============================================================================
// Layout across lines
// ============================================================================

impl Rule {
    /// One literal per line under the head, indented by `indent` spaces.
    pub fn to_pretty_string(&self, indent: usize) -> String {
        format!("{}", PrettyRule { rule: self, indent })
    }
}

struct PrettyRule<'a> {
    rule: &'a Rule,
    indent: usize,
}

impl<'a> fmt::Display for PrettyRule<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} :-", self.rule.head())?;
        let literals = self.rule.body().literals();
        for (i, literal) in literals.iter().enumerate() {
            let sep = if i + 1 == literals.len() { "." } else { "," };
            write!(f, "{:width$}{}{}", "", literal, sep, width = self.indent)?;
            if i + 1 < literals.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
