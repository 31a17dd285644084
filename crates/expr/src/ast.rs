use std::fmt;

use crate::{Bindings, Builtin, EvalError, builtin::power};

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constant {
    Pi,
    E,
}

impl Constant {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    pub(crate) fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

/// Infix binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div if rhs == 0.0 => return Err(EvalError::DivisionByZero),
            Self::Div => lhs / rhs,
            Self::Pow => return power(lhs, rhs),
        };
        if value.is_nan() {
            return Err(EvalError::NonFinite { value });
        }
        Ok(value)
    }
}

/// A node of a resolved expression tree.
///
/// Function calls are already bound to a [`Builtin`] with the correct
/// number of arguments.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Constant(Constant),
    Variable(String),
    Neg(Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    Call(Builtin, Vec<Node>),
}

const NEG_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 5;

impl Node {
    pub(crate) fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub(crate) fn call(builtin: Builtin, arg: Node) -> Self {
        Self::Call(builtin, vec![arg])
    }

    pub(crate) fn eval<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, EvalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Constant(constant) => Ok(constant.value()),
            Self::Variable(name) => match bindings.value(name) {
                Some(value) if value.is_finite() => Ok(value),
                Some(value) => Err(EvalError::NonFiniteBinding {
                    name: name.clone(),
                    value,
                }),
                None => Err(EvalError::UnboundVariable { name: name.clone() }),
            },
            Self::Neg(inner) => inner.eval(bindings).map(|v| -v),
            Self::Binary(op, lhs, rhs) => op.apply(lhs.eval(bindings)?, rhs.eval(bindings)?),
            Self::Call(builtin, args) => match args.as_slice() {
                [a] => builtin.apply(&[a.eval(bindings)?]),
                [a, b] => builtin.apply(&[a.eval(bindings)?, b.eval(bindings)?]),
                _ => unreachable!("arity is checked when the call is built"),
            },
        }
    }

    /// Returns true if the subtree references the variable `name`.
    pub(crate) fn depends_on(&self, name: &str) -> bool {
        match self {
            Self::Number(_) | Self::Constant(_) => false,
            Self::Variable(v) => v == name,
            Self::Neg(inner) => inner.depends_on(name),
            Self::Binary(_, lhs, rhs) => lhs.depends_on(name) || rhs.depends_on(name),
            Self::Call(_, args) => args.iter().any(|arg| arg.depends_on(name)),
        }
    }

    /// Pushes every variable name referenced by the subtree.
    pub(crate) fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Self::Number(_) | Self::Constant(_) => {}
            Self::Variable(v) => out.push(v.clone()),
            Self::Neg(inner) => inner.collect_variables(out),
            Self::Binary(_, lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Self::Call(_, args) => args.iter().for_each(|arg| arg.collect_variables(out)),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Number(value) if value.is_sign_negative() => NEG_PRECEDENCE,
            Self::Neg(_) => NEG_PRECEDENCE,
            Self::Binary(op, _, _) => op.precedence(),
            _ => ATOM_PRECEDENCE,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Constant(constant) => f.write_str(constant.name()),
            Self::Variable(name) => f.write_str(name),
            Self::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_child(f, inner.precedence() < NEG_PRECEDENCE)
            }
            Self::Binary(op, lhs, rhs) => {
                let prec = op.precedence();
                let (left_parens, right_parens) = match op {
                    BinaryOp::Add | BinaryOp::Mul => (lhs.precedence() < prec, rhs.precedence() < prec),
                    BinaryOp::Sub | BinaryOp::Div => {
                        (lhs.precedence() < prec, rhs.precedence() <= prec)
                    }
                    // Right-associative, and the exponent may carry a sign.
                    BinaryOp::Pow => (lhs.precedence() <= prec, rhs.precedence() < NEG_PRECEDENCE),
                };
                lhs.fmt_child(f, left_parens)?;
                f.write_str(op.symbol())?;
                rhs.fmt_child(f, right_parens)
            }
            Self::Call(builtin, args) => {
                write!(f, "{builtin}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
