use std::fmt;

use crate::EvalError;

/// A function from the fixed registry available in formulas.
///
/// Names are resolved once at parse time; evaluation dispatches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Sign,
    Pow,
    Min,
    Max,
    LogBase,
}

impl Builtin {
    /// Resolves a function name, including aliases (`log` → `ln`, `lg` → `log10`).
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" | "tg" => Self::Tan,
            "cot" | "ctg" => Self::Cot,
            "asin" | "arcsin" => Self::Asin,
            "acos" | "arccos" => Self::Acos,
            "atan" | "arctan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "lg" | "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            "sign" | "sgn" => Self::Sign,
            "pow" => Self::Pow,
            "min" => Self::Min,
            "max" => Self::Max,
            "logb" => Self::LogBase,
            _ => return None,
        };
        Some(builtin)
    }

    /// Returns the canonical name used when printing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Sign => "sign",
            Self::Pow => "pow",
            Self::Min => "min",
            Self::Max => "max",
            Self::LogBase => "logb",
        }
    }

    /// Returns the number of arguments the function takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Pow | Self::Min | Self::Max | Self::LogBase => 2,
            _ => 1,
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// The caller guarantees `args.len() == self.arity()`; the parser enforces
    /// this when building an expression.
    pub(crate) fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        let x = args[0];
        let domain = |argument| EvalError::Domain {
            function: self.name(),
            argument,
        };

        let value = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Cot => {
                let s = x.sin();
                if s == 0.0 {
                    return Err(domain(x));
                }
                x.cos() / s
            }
            Self::Asin | Self::Acos if x.abs() > 1.0 => return Err(domain(x)),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Ln | Self::Log10 | Self::Log2 if x <= 0.0 => return Err(domain(x)),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Sqrt if x < 0.0 => return Err(domain(x)),
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Abs => x.abs(),
            Self::Sign if x == 0.0 => 0.0,
            Self::Sign => x.signum(),
            Self::Pow => return power(x, args[1]),
            Self::Min => x.min(args[1]),
            Self::Max => x.max(args[1]),
            Self::LogBase => {
                let base = x;
                let arg = args[1];
                if base <= 0.0 || base == 1.0 {
                    return Err(domain(base));
                }
                if arg <= 0.0 {
                    return Err(domain(arg));
                }
                arg.ln() / base.ln()
            }
        };

        if value.is_nan() {
            return Err(domain(x));
        }
        Ok(value)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raises `base` to `exponent`, rejecting undefined real results.
pub(crate) fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let value = base.powf(exponent);
    if value.is_nan() {
        return Err(EvalError::Domain {
            function: "pow",
            argument: base,
        });
    }
    Ok(value)
}
