use optima_core::Function;

use crate::{Bindings, EvalError, Expression};

/// An expression bound to an ordered list of solver variables.
///
/// `Bound<'_, N>` implements [`Function<N>`]: solver variable `x[i]` is
/// bound to the name `variables[i]`. Additional names can be held at
/// fixed values with [`Bound::with_fixed`], so a formula with extra
/// parameters can be driven as a function of fewer variables.
#[derive(Debug, Clone)]
pub struct Bound<'a, const N: usize> {
    expression: &'a Expression,
    variables: [&'a str; N],
    fixed: Vec<(&'a str, f64)>,
}

impl<'a, const N: usize> Bound<'a, N> {
    /// Binds `expression` to the given variable names, in solver order.
    #[must_use]
    pub fn new(expression: &'a Expression, variables: [&'a str; N]) -> Self {
        Self {
            expression,
            variables,
            fixed: Vec::new(),
        }
    }

    /// Holds an additional variable at a fixed value.
    #[must_use]
    pub fn with_fixed(mut self, name: &'a str, value: f64) -> Self {
        self.fixed.push((name, value));
        self
    }

    /// Returns the bound expression.
    #[must_use]
    pub fn expression(&self) -> &'a Expression {
        self.expression
    }
}

/// Solver variables first, then fixed values.
struct Env<'b, 'a, const N: usize> {
    names: &'b [&'a str; N],
    values: &'b [f64; N],
    fixed: &'b [(&'a str, f64)],
}

impl<const N: usize> Bindings for Env<'_, '_, N> {
    fn value(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
            .or_else(|| self.fixed.value(name))
    }
}

impl<const N: usize> Function<N> for Bound<'_, N> {
    type Error = EvalError;

    fn call(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        let env = Env {
            names: &self.variables,
            values: x,
            fixed: &self.fixed,
        };
        self.expression.eval(&env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Expression {
        text.parse().unwrap()
    }

    #[test]
    fn binds_solver_variables_in_order() {
        let expr = parse("x - 2*y");
        let f = Bound::new(&expr, ["y", "x"]);

        assert_eq!(f.call(&[1.0, 10.0]), Ok(8.0));
    }

    #[test]
    fn fixed_values_fill_remaining_variables() {
        let expr = parse("(x - 1)^2 + (y - 2)^2");
        let along_x = Bound::new(&expr, ["x"]).with_fixed("y", 2.0);

        assert_eq!(along_x.call(&[1.0]), Ok(0.0));
        assert_eq!(along_x.call(&[3.0]), Ok(4.0));
    }

    #[test]
    fn solver_variables_shadow_fixed_values() {
        let expr = parse("x");
        let f = Bound::new(&expr, ["x"]).with_fixed("x", 99.0);

        assert_eq!(f.call(&[1.0]), Ok(1.0));
    }

    #[test]
    fn missing_variables_surface_as_eval_errors() {
        let expr = parse("x + z");
        let f = Bound::new(&expr, ["x"]);

        assert_eq!(
            f.call(&[1.0]),
            Err(EvalError::UnboundVariable { name: "z".to_owned() })
        );
    }
}
