// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast/signature.rs
// Name/arity identity of predicates and functions

use crate::error::AstError;
use std::fmt;
use std::str::FromStr;

/// `(name, arity)` pair distinguishing overloads of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomSignature {
    name: String,
    arity: usize,
}

impl AtomSignature {
    pub fn new(name: impl Into<String>, arity: usize) -> Result<Self, AstError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AstError::EmptyName);
        }
        if name.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(AstError::InvalidName(name));
        }
        Ok(AtomSignature { name, arity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Display for AtomSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// Parses the `name/arity` notation.
impl FromStr for AtomSignature {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arity) = s
            .trim()
            .rsplit_once('/')
            .ok_or_else(|| AstError::MalformedSignature(s.to_string()))?;
        let arity: i64 = arity
            .trim()
            .parse()
            .map_err(|_| AstError::MalformedSignature(s.to_string()))?;
        let arity = usize::try_from(arity).map_err(|_| AstError::NegativeArity(arity))?;
        AtomSignature::new(name.trim(), arity)
    }
}
