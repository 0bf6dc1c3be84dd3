// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/collect.rs
// Collection of variables, constants and functions reachable from terms

use crate::ast::{Constant, Function, Term, Variable};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

// ============================================================================
// Cached derived sets
// ============================================================================

/// Per-instance cache of the sets reachable from a node.
///
/// Filled on first access. It takes no part in equality or hashing, so
/// two nodes compare equal whether or not their caches have been populated.
#[derive(Clone, Default)]
pub(crate) struct DerivedSets {
    variables: OnceLock<HashSet<Variable>>,
    constants: OnceLock<HashSet<Constant>>,
    functions: OnceLock<HashSet<Function>>,
}

impl DerivedSets {
    pub(crate) fn variables(&self, init: impl FnOnce() -> HashSet<Variable>) -> &HashSet<Variable> {
        self.variables.get_or_init(init)
    }

    pub(crate) fn constants(&self, init: impl FnOnce() -> HashSet<Constant>) -> &HashSet<Constant> {
        self.constants.get_or_init(init)
    }

    pub(crate) fn functions(&self, init: impl FnOnce() -> HashSet<Function>) -> &HashSet<Function> {
        self.functions.get_or_init(init)
    }
}

impl PartialEq for DerivedSets {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DerivedSets {}

impl Hash for DerivedSets {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Debug for DerivedSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("..")
    }
}

// ============================================================================
// Collectors
// ============================================================================

/// Variables reachable from a sequence of terms.
///
/// A function's args and values form one sequence here:
/// `collect_variables(f.args().iter().chain(f.values()))`.
pub fn collect_variables<'a, I>(terms: I) -> HashSet<Variable>
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut out = HashSet::new();
    for term in terms {
        match term {
            Term::Variable(v) => {
                out.insert(v.clone());
            }
            Term::Function(f) => out.extend(f.variables().iter().cloned()),
            Term::List(l) => out.extend(l.variables().iter().cloned()),
            Term::Constant(_) => {}
        }
    }
    out
}

/// Constants reachable from a sequence of terms.
pub fn collect_constants<'a, I>(terms: I) -> HashSet<Constant>
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut out = HashSet::new();
    for term in terms {
        match term {
            Term::Constant(c) => {
                out.insert(c.clone());
            }
            Term::Function(f) => out.extend(f.constants().iter().cloned()),
            Term::List(l) => out.extend(l.constants().iter().cloned()),
            Term::Variable(_) => {}
        }
    }
    out
}

/// Functions reachable from a sequence of terms, nested ones included.
pub fn collect_functions<'a, I>(terms: I) -> HashSet<Function>
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut out = HashSet::new();
    for term in terms {
        match term {
            Term::Function(f) => {
                out.extend(f.functions().iter().cloned());
                out.insert(f.clone());
            }
            Term::List(l) => out.extend(l.functions().iter().cloned()),
            Term::Variable(_) | Term::Constant(_) => {}
        }
    }
    out
}

/// Collect over several term sequences at once (e.g. every atom of a body).
pub fn collect_variables_nested<'a, I, S>(sequences: I) -> HashSet<Variable>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = &'a Term>,
{
    sequences.into_iter().flat_map(collect_variables).collect()
}

pub(crate) fn union<T: Clone + Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.union(b).cloned().collect()
}
