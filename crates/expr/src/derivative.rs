use thiserror::Error;

use crate::{
    Builtin, Expression,
    ast::{BinaryOp, Node},
};

/// Errors that can occur during symbolic differentiation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivativeError {
    #[error("'{function}' has no symbolic derivative")]
    Unsupported { function: &'static str },
}

impl Expression {
    /// Differentiates the formula with respect to `var`.
    ///
    /// Supports sums, differences, products, quotients, powers, and the
    /// chain rule through every single-argument builtin except that `abs`
    /// differentiates to `sign` and `sign` to zero. The result is simplified
    /// (constant folding and `0`/`1` identities) but not canonicalized.
    ///
    /// # Errors
    ///
    /// Returns [`DerivativeError::Unsupported`] if the formula calls `min` or
    /// `max` on an argument that depends on `var`.
    pub fn derivative(&self, var: &str) -> Result<Expression, DerivativeError> {
        let node = differentiate(self.root(), var)?;
        Ok(Expression::from_node(simplify(node)))
    }
}

fn num(value: f64) -> Node {
    Node::Number(value)
}

fn add(a: Node, b: Node) -> Node {
    Node::binary(BinaryOp::Add, a, b)
}

fn sub(a: Node, b: Node) -> Node {
    Node::binary(BinaryOp::Sub, a, b)
}

fn mul(a: Node, b: Node) -> Node {
    Node::binary(BinaryOp::Mul, a, b)
}

fn div(a: Node, b: Node) -> Node {
    Node::binary(BinaryOp::Div, a, b)
}

fn pow(a: Node, b: Node) -> Node {
    Node::binary(BinaryOp::Pow, a, b)
}

fn neg(a: Node) -> Node {
    Node::Neg(Box::new(a))
}

fn differentiate(node: &Node, var: &str) -> Result<Node, DerivativeError> {
    if !node.depends_on(var) {
        return Ok(num(0.0));
    }

    Ok(match node {
        Node::Number(_) | Node::Constant(_) => num(0.0),
        Node::Variable(_) => num(1.0),
        Node::Neg(u) => neg(differentiate(u, var)?),
        Node::Binary(op, u, v) => {
            let (u, v) = (u.as_ref(), v.as_ref());
            match op {
                BinaryOp::Add => add(differentiate(u, var)?, differentiate(v, var)?),
                BinaryOp::Sub => sub(differentiate(u, var)?, differentiate(v, var)?),
                BinaryOp::Mul => add(
                    mul(differentiate(u, var)?, v.clone()),
                    mul(u.clone(), differentiate(v, var)?),
                ),
                BinaryOp::Div => div(
                    sub(
                        mul(differentiate(u, var)?, v.clone()),
                        mul(u.clone(), differentiate(v, var)?),
                    ),
                    pow(v.clone(), num(2.0)),
                ),
                BinaryOp::Pow => power_rule(u, v, var)?,
            }
        }
        Node::Call(builtin, args) => match (builtin, args.as_slice()) {
            (Builtin::Pow, [u, v]) => power_rule(u, v, var)?,
            (Builtin::LogBase, [base, u]) => {
                // logb(b, u) = ln(u) / ln(b)
                let rewritten = div(
                    Node::call(Builtin::Ln, u.clone()),
                    Node::call(Builtin::Ln, base.clone()),
                );
                differentiate(&rewritten, var)?
            }
            (Builtin::Min | Builtin::Max, _) => {
                return Err(DerivativeError::Unsupported {
                    function: builtin.name(),
                });
            }
            (_, [u]) => mul(outer_derivative(*builtin, u), differentiate(u, var)?),
            _ => unreachable!("arity is checked when the call is built"),
        },
    })
}

/// d/dx u^v, specialized when either side is constant in `var`.
fn power_rule(u: &Node, v: &Node, var: &str) -> Result<Node, DerivativeError> {
    let du = differentiate(u, var)?;
    let dv = differentiate(v, var)?;

    Ok(if !v.depends_on(var) {
        // v * u^(v-1) * u'
        mul(mul(v.clone(), pow(u.clone(), sub(v.clone(), num(1.0)))), du)
    } else if !u.depends_on(var) {
        // u^v * ln(u) * v'
        mul(
            mul(pow(u.clone(), v.clone()), Node::call(Builtin::Ln, u.clone())),
            dv,
        )
    } else {
        // u^v * (v' * ln(u) + v * u' / u)
        mul(
            pow(u.clone(), v.clone()),
            add(
                mul(dv, Node::call(Builtin::Ln, u.clone())),
                div(mul(v.clone(), du), u.clone()),
            ),
        )
    })
}

/// Derivative of a single-argument builtin with respect to its argument `u`.
fn outer_derivative(builtin: Builtin, u: &Node) -> Node {
    let call = |b: Builtin| Node::call(b, u.clone());
    let u = u.clone();

    match builtin {
        Builtin::Sin => call(Builtin::Cos),
        Builtin::Cos => neg(call(Builtin::Sin)),
        Builtin::Tan => div(num(1.0), pow(call(Builtin::Cos), num(2.0))),
        Builtin::Cot => neg(div(num(1.0), pow(call(Builtin::Sin), num(2.0)))),
        Builtin::Asin => div(
            num(1.0),
            Node::call(Builtin::Sqrt, sub(num(1.0), pow(u, num(2.0)))),
        ),
        Builtin::Acos => neg(div(
            num(1.0),
            Node::call(Builtin::Sqrt, sub(num(1.0), pow(u, num(2.0)))),
        )),
        Builtin::Atan => div(num(1.0), add(num(1.0), pow(u, num(2.0)))),
        Builtin::Sinh => call(Builtin::Cosh),
        Builtin::Cosh => call(Builtin::Sinh),
        Builtin::Tanh => div(num(1.0), pow(call(Builtin::Cosh), num(2.0))),
        Builtin::Exp => call(Builtin::Exp),
        Builtin::Ln => div(num(1.0), u),
        Builtin::Log10 => div(num(1.0), mul(u, num(std::f64::consts::LN_10))),
        Builtin::Log2 => div(num(1.0), mul(u, num(std::f64::consts::LN_2))),
        Builtin::Sqrt => div(num(1.0), mul(num(2.0), call(Builtin::Sqrt))),
        Builtin::Cbrt => div(num(1.0), mul(num(3.0), pow(call(Builtin::Cbrt), num(2.0)))),
        Builtin::Abs => call(Builtin::Sign),
        Builtin::Sign => num(0.0),
        Builtin::Pow | Builtin::Min | Builtin::Max | Builtin::LogBase => {
            unreachable!("two-argument builtins are handled by the caller")
        }
    }
}

/// Bottom-up constant folding and identity removal.
fn simplify(node: Node) -> Node {
    match node {
        Node::Neg(inner) => match simplify(*inner) {
            Node::Number(value) => num(-value),
            Node::Neg(inner) => *inner,
            inner => neg(inner),
        },
        Node::Binary(op, lhs, rhs) => simplify_binary(op, simplify(*lhs), simplify(*rhs)),
        Node::Call(builtin, args) => Node::Call(builtin, args.into_iter().map(simplify).collect()),
        leaf => leaf,
    }
}

fn simplify_binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    let is = |node: &Node, value: f64| matches!(node, Node::Number(n) if *n == value);

    if let (Node::Number(a), Node::Number(b)) = (&lhs, &rhs) {
        if let Ok(value) = op.apply(*a, *b) {
            if value.is_finite() {
                return num(value);
            }
        }
    }

    match op {
        BinaryOp::Add if is(&lhs, 0.0) => rhs,
        BinaryOp::Add | BinaryOp::Sub if is(&rhs, 0.0) => lhs,
        BinaryOp::Sub if is(&lhs, 0.0) => simplify(neg(rhs)),
        BinaryOp::Mul if is(&lhs, 0.0) || is(&rhs, 0.0) => num(0.0),
        BinaryOp::Mul if is(&lhs, 1.0) => rhs,
        BinaryOp::Mul | BinaryOp::Div if is(&rhs, 1.0) => lhs,
        BinaryOp::Div if is(&lhs, 0.0) => num(0.0),
        BinaryOp::Pow if is(&rhs, 0.0) => num(1.0),
        BinaryOp::Pow if is(&rhs, 1.0) => lhs,
        _ => Node::binary(op, lhs, rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn d(text: &str) -> Expression {
        Expression::parse(text)
            .expect("valid formula")
            .derivative("x")
            .expect("differentiable")
    }

    fn at(expr: &Expression, x: f64) -> f64 {
        expr.eval(&[("x", x)]).expect("defined")
    }

    /// Central difference for cross-checking symbolic results.
    fn numeric(text: &str, x: f64) -> f64 {
        let expr = Expression::parse(text).unwrap();
        let h = 1e-6;
        (at(&expr, x + h) - at(&expr, x - h)) / (2.0 * h)
    }

    #[test]
    fn simplifies_polynomials() {
        assert_eq!(d("2*x + 1").to_string(), "2");
        assert_eq!(d("x^2").to_string(), "2*x");
        assert_eq!(d("x^2 - 4").to_string(), "2*x");
        assert_eq!(d("5").to_string(), "0");
    }

    #[test]
    fn treats_other_variables_as_constants() {
        assert_eq!(d("x*y").to_string(), "y");
        assert_eq!(d("y^2").to_string(), "0");
    }

    #[test]
    fn matches_numeric_derivative() {
        let cases = [
            ("x^3 - 2*x", 1.3),
            ("sin(x)*cos(x)", 0.4),
            ("exp(2*x)/x", 1.1),
            ("ln(x^2 + 1)", -0.8),
            ("sqrt(x)", 2.0),
            ("x^x", 1.5),
            ("2^x", 0.3),
            ("tan(x) + atan(x)", 0.2),
            ("asin(x/2) - acos(x/3)", 0.5),
            ("log10(x) + log2(x) + logb(3, x)", 2.5),
            ("cbrt(x) + tanh(x) + cot(x)", 0.9),
            ("pow(x, 3)", -1.2),
            ("abs(x - 1)", 0.25),
        ];

        for (text, x) in cases {
            let symbolic = at(&d(text), x);
            assert_relative_eq!(symbolic, numeric(text, x), max_relative = 1e-6);
        }
    }

    #[test]
    fn second_derivative_by_repeated_differentiation() {
        let second = d("x^3").derivative("x").unwrap();
        assert_relative_eq!(at(&second, 2.0), 12.0);
    }

    #[test]
    fn derivative_prints_reparseable_text() {
        let derived = d("sin(x^2)/x");
        let reparsed = Expression::parse(&derived.to_string()).unwrap();
        assert_relative_eq!(at(&reparsed, 0.7), at(&derived, 0.7));
    }

    #[test]
    fn min_and_max_are_unsupported() {
        let expr = Expression::parse("max(x, 0)").unwrap();
        assert_eq!(
            expr.derivative("x"),
            Err(DerivativeError::Unsupported { function: "max" })
        );
        // Independent of the variable: derivative is simply zero.
        assert_eq!(expr.derivative("y").unwrap().to_string(), "0");
    }
}
