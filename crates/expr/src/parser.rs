use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{map, map_res, opt, recognize},
    multi::{fold_many0, many0_count, separated_list1},
    sequence::{delimited, pair, preceded, tuple},
};

use crate::{
    Builtin, ParseError,
    ast::{BinaryOp, Constant, Node},
};

/// Deepest nesting of parentheses, signs, and powers accepted before parsing.
///
/// The grammar and the resulting tree are walked recursively, so unbounded
/// nesting would exhaust the stack.
pub(crate) const MAX_DEPTH: usize = 128;

/// Most binary operators accepted in one formula.
///
/// Sums and products fold into left-deep trees, so the operator count bounds
/// their depth.
pub(crate) const MAX_OPERATORS: usize = 256;

/// Syntax tree straight out of the grammar, before names are resolved.
#[derive(Debug, Clone, PartialEq)]
enum RawNode {
    Number(f64),
    Identifier(String),
    Call(String, Vec<RawNode>),
    Neg(Box<RawNode>),
    Binary(BinaryOp, Box<RawNode>, Box<RawNode>),
}

impl RawNode {
    fn binary(op: BinaryOp, lhs: RawNode, rhs: RawNode) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Resolves identifiers to constants or variables and calls to builtins.
    fn lower(self) -> Result<Node, ParseError> {
        Ok(match self {
            Self::Number(value) => Node::Number(value),
            Self::Identifier(name) => match Constant::lookup(&name) {
                Some(constant) => Node::Constant(constant),
                None => Node::Variable(name),
            },
            Self::Neg(inner) => Node::Neg(Box::new(inner.lower()?)),
            Self::Binary(op, lhs, rhs) => Node::binary(op, lhs.lower()?, rhs.lower()?),
            Self::Call(name, args) => {
                let builtin =
                    Builtin::lookup(&name).ok_or_else(|| ParseError::UnknownFunction {
                        name: name.clone(),
                    })?;
                if args.len() != builtin.arity() {
                    return Err(ParseError::Arity {
                        name,
                        expected: builtin.arity(),
                        found: args.len(),
                    });
                }
                let args = args
                    .into_iter()
                    .map(RawNode::lower)
                    .collect::<Result<Vec<_>, _>>()?;
                Node::Call(builtin, args)
            }
        })
    }
}

/// Parses formula text into a resolved expression tree.
pub(crate) fn parse(source: &str) -> Result<Node, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    check_size(source)?;

    let (rest, raw) = expr(source).map_err(|err| match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => ParseError::Syntax {
            position: source.len() - e.input.len(),
        },
        nom::Err::Incomplete(_) => ParseError::Syntax {
            position: source.len(),
        },
    })?;

    let rest = rest.trim_start();
    if let Some(found) = rest.chars().next() {
        return Err(ParseError::UnexpectedInput {
            position: source.len() - rest.len(),
            found,
        });
    }

    raw.lower()
}

/// Bounds the depth and size of the tree `source` would parse into.
///
/// Scans the text once, tracking how deeply parentheses, signs, and `^`
/// nest. A binary operator or comma ends a sign/power chain and returns to
/// the depth of the enclosing parenthesis.
fn check_size(source: &str) -> Result<(), ParseError> {
    let chars: Vec<char> = source.chars().filter(|c| !c.is_whitespace()).collect();

    // Depth outside each open parenthesis.
    let mut open: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut operators = 0usize;
    let mut expect_operand = true;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            c if c.is_ascii_alphabetic() || c == '_' => {
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                expect_operand = false;
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                i = skip_number(&chars, i);
                expect_operand = false;
                continue;
            }
            '(' => {
                open.push(depth);
                depth += 1;
                expect_operand = true;
            }
            ')' => {
                depth = open.pop().unwrap_or(0);
                expect_operand = false;
            }
            ',' => {
                depth = open.last().map_or(0, |outer| outer + 1);
                expect_operand = true;
            }
            '+' | '-' if expect_operand => depth += 1,
            '^' => {
                depth += 1;
                expect_operand = true;
            }
            '+' | '-' | '*' | '/' => {
                operators += 1;
                if operators > MAX_OPERATORS {
                    return Err(ParseError::TooLarge {
                        limit: MAX_OPERATORS,
                    });
                }
                depth = open.last().map_or(0, |outer| outer + 1);
                expect_operand = true;
            }
            _ => {}
        }
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
    }
    Ok(())
}

/// Returns the index just past the numeric literal whose first character
/// was at `start - 1`, including any exponent.
fn skip_number(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    if i < chars.len() && matches!(chars[i], 'e' | 'E') {
        let mut j = i + 1;
        if j < chars.len() && matches!(chars[j], '+' | '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

// Numeric literal: 12, 1.5, .5, 3., 1e-3
fn number(input: &str) -> IResult<&str, RawNode> {
    map_res(
        recognize(pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        )),
        |text: &str| text.parse::<f64>().map(RawNode::Number),
    )(input)
}

// Letter or underscore, then letters, digits, underscores
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        many0_count(satisfy(|c| c.is_ascii_alphanumeric() || c == '_')),
    ))(input)
}

fn call(input: &str) -> IResult<&str, RawNode> {
    let (input, name) = identifier(input)?;
    let (input, args) = delimited(
        preceded(multispace0, char('(')),
        separated_list1(preceded(multispace0, char(',')), expr),
        preceded(multispace0, char(')')),
    )(input)?;
    Ok((input, RawNode::Call(name.to_owned(), args)))
}

fn parens(input: &str) -> IResult<&str, RawNode> {
    delimited(char('('), expr, preceded(multispace0, char(')')))(input)
}

fn atom(input: &str) -> IResult<&str, RawNode> {
    preceded(
        multispace0,
        alt((
            number,
            call,
            map(identifier, |name| RawNode::Identifier(name.to_owned())),
            parens,
        )),
    )(input)
}

// Right-associative; the exponent may carry a sign: 2^-x, 2^3^2 = 2^(3^2)
fn power(input: &str) -> IResult<&str, RawNode> {
    let (input, base) = atom(input)?;
    let (input, exponent) = opt(preceded(preceded(multispace0, char('^')), unary))(input)?;
    Ok(match exponent {
        Some(exponent) => (input, RawNode::binary(BinaryOp::Pow, base, exponent)),
        None => (input, base),
    })
}

// Unary minus binds looser than '^': -x^2 = -(x^2)
fn unary(input: &str) -> IResult<&str, RawNode> {
    alt((
        map(preceded(preceded(multispace0, char('-')), unary), |inner| {
            RawNode::Neg(Box::new(inner))
        }),
        preceded(preceded(multispace0, char('+')), unary),
        power,
    ))(input)
}

fn term(input: &str) -> IResult<&str, RawNode> {
    let (input, init) = unary(input)?;
    fold_many0(
        pair(preceded(multispace0, one_of("*/")), unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => RawNode::binary(BinaryOp::Mul, acc, rhs),
            _ => RawNode::binary(BinaryOp::Div, acc, rhs),
        },
    )(input)
}

fn expr(input: &str) -> IResult<&str, RawNode> {
    let (input, init) = term(input)?;
    fold_many0(
        pair(preceded(multispace0, one_of("+-")), term),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => RawNode::binary(BinaryOp::Add, acc, rhs),
            _ => RawNode::binary(BinaryOp::Sub, acc, rhs),
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Node {
        Node::Number(value)
    }

    fn var(name: &str) -> Node {
        Node::Variable(name.to_owned())
    }

    #[test]
    fn parses_number_forms() {
        for (text, value) in [("12", 12.0), ("1.5", 1.5), (".5", 0.5), ("3.", 3.0), ("1e-3", 1e-3)] {
            assert_eq!(parse(text), Ok(num(value)), "{text}");
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let node = parse("2*x + 1").unwrap();
        assert_eq!(
            node,
            Node::binary(
                BinaryOp::Add,
                Node::binary(BinaryOp::Mul, num(2.0), var("x")),
                num(1.0)
            )
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        let node = parse("a - b - c").unwrap();
        assert_eq!(
            node,
            Node::binary(
                BinaryOp::Sub,
                Node::binary(BinaryOp::Sub, var("a"), var("b")),
                var("c")
            )
        );
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        assert_eq!(
            parse("2^3^2").unwrap(),
            Node::binary(
                BinaryOp::Pow,
                num(2.0),
                Node::binary(BinaryOp::Pow, num(3.0), num(2.0))
            )
        );
        assert_eq!(
            parse("-x^2").unwrap(),
            Node::Neg(Box::new(Node::binary(BinaryOp::Pow, var("x"), num(2.0))))
        );
        assert_eq!(
            parse("x^-1").unwrap(),
            Node::binary(BinaryOp::Pow, var("x"), Node::Neg(Box::new(num(1.0))))
        );
    }

    #[test]
    fn resolves_constants_and_calls() {
        assert_eq!(
            parse("sin(pi)").unwrap(),
            Node::call(Builtin::Sin, Node::Constant(Constant::Pi))
        );
        assert_eq!(
            parse("max(x, y)").unwrap(),
            Node::Call(Builtin::Max, vec![var("x"), var("y")])
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse(" ( x + 1 ) * 2 "), parse("(x+1)*2"));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn reports_trailing_input() {
        assert_eq!(
            parse("x + 1)"),
            Err(ParseError::UnexpectedInput {
                position: 5,
                found: ')'
            })
        );
        assert!(matches!(parse("2 +"), Err(ParseError::UnexpectedInput { .. })));
    }

    #[test]
    fn reports_syntax_errors() {
        assert!(matches!(parse("*x"), Err(ParseError::Syntax { .. })));
        assert!(matches!(parse("(x + 1"), Err(ParseError::Syntax { .. })));
    }

    #[test]
    fn rejects_unknown_functions_and_wrong_arity() {
        assert_eq!(
            parse("foo(x)"),
            Err(ParseError::UnknownFunction {
                name: "foo".to_owned()
            })
        );
        assert_eq!(
            parse("sin(x, y)"),
            Err(ParseError::Arity {
                name: "sin".to_owned(),
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_excessive_nesting() {
        let text = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse(&text), Err(ParseError::TooDeep { limit: MAX_DEPTH }));
    }

    #[test]
    fn rejects_long_sign_and_power_chains() {
        let too_deep = Err(ParseError::TooDeep { limit: MAX_DEPTH });
        for n in [MAX_DEPTH + 1, 3_000] {
            assert_eq!(parse(&format!("{}x", "-".repeat(n))), too_deep, "{n} signs");
            assert_eq!(parse(&format!("{}x", "+".repeat(n))), too_deep, "{n} signs");
        }
        for n in [MAX_DEPTH + 1, 20_000] {
            assert_eq!(parse(&format!("x{}", "^1".repeat(n))), too_deep, "{n} powers");
        }
        assert_eq!(parse(&format!("{}x", "-(".repeat(70))), too_deep);
    }

    #[test]
    fn rejects_too_many_operators() {
        let too_large = Err(ParseError::TooLarge {
            limit: MAX_OPERATORS,
        });
        for n in [MAX_OPERATORS + 1, 3_000] {
            assert_eq!(parse(&format!("x{}", "+0".repeat(n))), too_large, "{n} sums");
            assert_eq!(parse(&format!("x{}", " * x".repeat(n))), too_large, "{n} products");
        }
    }

    #[test]
    fn accepts_formulas_at_the_limits() {
        assert!(parse(&format!("{}x", "-".repeat(MAX_DEPTH))).is_ok());
        assert!(parse(&format!("x{}", "^1".repeat(MAX_DEPTH))).is_ok());
        assert!(parse(&format!("x{}", "+0".repeat(MAX_OPERATORS))).is_ok());

        // Signs in separate terms don't stack.
        assert!(parse(&format!("-x{}", " - -x".repeat(MAX_OPERATORS))).is_ok());
        // Nor do exponent signs in literals.
        assert!(parse(&format!("x{}", "+1e-3".repeat(MAX_OPERATORS))).is_ok());
    }
}
