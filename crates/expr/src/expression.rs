use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    hash::BuildHasher,
    str::FromStr,
};

use crate::{EvalError, ParseError, ast::Node, parser};

/// A lookup from variable name to value, supplied fresh for each evaluation.
///
/// Only the variables an expression actually references are looked up;
/// extra entries are ignored.
pub trait Bindings {
    /// Returns the value bound to `name`, if any.
    fn value(&self, name: &str) -> Option<f64>;
}

impl Bindings for [(&str, f64)] {
    fn value(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Bindings for [(&str, f64); N] {
    fn value(&self, name: &str) -> Option<f64> {
        self.as_slice().value(name)
    }
}

impl<S: BuildHasher> Bindings for HashMap<String, f64, S> {
    fn value(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Bindings for BTreeMap<String, f64> {
    fn value(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn value(&self, name: &str) -> Option<f64> {
        (**self).value(name)
    }
}

/// A parsed, immutable scalar formula.
///
/// Parsing happens once; [`Expression::eval`] walks the resolved tree and
/// never mutates it, so the same expression may be evaluated concurrently
/// from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Node,
    variables: Vec<String>,
}

impl Expression {
    /// Parses formula text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is empty or malformed, calls an
    /// unknown function, passes the wrong number of arguments, or nests or
    /// chains operators beyond the parser's limits.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        parser::parse(source).map(Self::from_node)
    }

    pub(crate) fn from_node(root: Node) -> Self {
        let mut variables = Vec::new();
        root.collect_variables(&mut variables);
        variables.sort_unstable();
        variables.dedup();
        Self { root, variables }
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the variable names the formula references, sorted and unique.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns true if the formula references the variable `name`.
    #[must_use]
    pub fn references(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }

    /// Evaluates the formula with the given variable bindings.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if a referenced variable is unbound or bound to
    /// a non-finite value, if a function receives an argument outside its
    /// domain, on division by zero, or if the result is not finite.
    pub fn eval<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, EvalError> {
        let value = self.root.eval(bindings)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { value })
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Prints the formula in a canonical form that parses back to the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
