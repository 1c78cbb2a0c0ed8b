//! Shunting-yard conversion from blank-separated infix to postfix order, and
//! evaluation of the postfix sequence over exact fractions.

use serde::{Deserialize, Serialize};

use super::operation::{precedence, Operation};
use super::token::{tokenize, Token};
use super::Fraction;
use crate::error::CalcError;

/// What to do with a parenthesis that has no partner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupingPolicy {
    /// Fail with `UnbalancedGroupingSymbols`.
    #[default]
    Strict,
    /// Silently drop the unmatched symbol.
    Lenient,
}

/// Converts with [`GroupingPolicy::Strict`].
pub fn infix_to_postfix(expression: &str) -> Result<Vec<Token>, CalcError> {
    infix_to_postfix_with(expression, GroupingPolicy::Strict)
}

/// Reorders a blank-separated infix expression into postfix order.
///
/// Operators are left-associative: an operator on the stack is emitted while
/// its precedence is greater than or equal to the incoming one. A `-` is
/// only ever binary here; negative numbers are written as signed literals
/// such as `-5` or `-3/4`.
pub fn infix_to_postfix_with(
    expression: &str,
    grouping: GroupingPolicy,
) -> Result<Vec<Token>, CalcError> {
    let tokens = tokenize(expression)?;
    let mut operators: Vec<Token> = Vec::new();
    let mut postfix = Vec::with_capacity(tokens.len());
    // true at the start, after '(' and after an operator
    let mut expect_operand = true;

    for (position, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Operand(text) => {
                if !expect_operand && text.starts_with('-') {
                    return Err(CalcError::InvalidUnaryMinus {
                        token: text,
                        position,
                        details: "a signed literal cannot follow an operand, put a blank after '-' to subtract"
                            .to_owned(),
                    });
                }
                postfix.push(Token::Operand(text));
                expect_operand = false;
            }
            Token::LeftParen => {
                operators.push(Token::LeftParen);
                expect_operand = true;
            }
            Token::RightParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LeftParen) => break,
                        Some(op) => postfix.push(op),
                        None if grouping == GroupingPolicy::Strict => {
                            return Err(CalcError::unbalanced(format!(
                                "')' at token {position} has no matching '('"
                            )));
                        }
                        None => break,
                    }
                }
                expect_operand = false;
            }
            Token::Operator(symbol) => {
                if expect_operand && symbol == "-" {
                    return Err(CalcError::InvalidUnaryMinus {
                        token: symbol,
                        position,
                        details: "no operand before '-', write negative numbers without a blank as in -5"
                            .to_owned(),
                    });
                }
                let current = precedence(&symbol);
                while let Some(Token::Operator(top)) = operators.last() {
                    if precedence(top) < current {
                        break;
                    }
                    postfix.extend(operators.pop());
                }
                operators.push(Token::Operator(symbol));
                expect_operand = true;
            }
        }
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LeftParen if grouping == GroupingPolicy::Strict => {
                return Err(CalcError::unbalanced("'(' is never closed"));
            }
            Token::LeftParen => {}
            _ => postfix.push(token),
        }
    }
    Ok(postfix)
}

/// Evaluates a postfix sequence with a stack of fractions.
///
/// Each operator pops `b` then `a` and pushes `a <op> b`. Exactly one value
/// must be left at the end.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<Fraction, CalcError> {
    let mut stack: Vec<Fraction> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand(literal) => stack.push(literal.parse()?),
            Token::Operator(symbol) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(CalcError::invalid_expression(format!(
                        "'{symbol}' needs two operands"
                    )));
                };
                let op = Operation::from_str(symbol)
                    .ok_or_else(|| CalcError::UnknownOperator { operator: symbol.clone() })?;
                stack.push(op.apply(&a, &b)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(CalcError::unbalanced(format!("'{token}' in a postfix sequence")));
            }
        }
    }

    let result = stack
        .pop()
        .ok_or_else(|| CalcError::invalid_expression("empty expression"))?;
    if !stack.is_empty() {
        return Err(CalcError::invalid_expression(format!(
            "{} values are left without an operator",
            stack.len() + 1
        )));
    }
    Ok(result)
}

/// Renders a token sequence separated by single blanks.
pub fn postfix_to_string(postfix: &[Token]) -> String {
    postfix.iter().map(Token::as_str).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
fn calc(expression: &str) -> Result<String, CalcError> {
    let postfix = infix_to_postfix(expression)?;
    evaluate_postfix(&postfix).map(|f| f.to_string())
}

#[cfg(test)]
fn kind_of(expression: &str) -> crate::error::ErrorKind {
    calc(expression).unwrap_err().kind()
}

#[test]
fn conversion_test() {
    let convert = |s: &str| postfix_to_string(&infix_to_postfix(s).unwrap());
    assert_eq!(convert("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(convert("( 2 + 3 ) * 4"), "2 3 + 4 *");
    assert_eq!(convert("8 - 3 - 2"), "8 3 - 2 -");
    assert_eq!(convert("8 / 2 / 2"), "8 2 / 2 /");
    assert_eq!(convert("1/2 * ( -3/4 - 1 )"), "1/2 -3/4 1 - *");
    assert_eq!(convert(""), "");
}

#[test]
fn evaluation_test() {
    assert_eq!(calc("2 + 3 * 4"), Ok("14/1".to_owned()));
    assert_eq!(calc("( 2 + 3 ) * 4"), Ok("20/1".to_owned()));
    assert_eq!(calc("-5 + 3"), Ok("-2/1".to_owned()));
    assert_eq!(calc("8 - 3 - 2"), Ok("3/1".to_owned()));
    assert_eq!(calc("8 / 2 / 2"), Ok("2/1".to_owned()));
    assert_eq!(calc("1/2 + 1/3"), Ok("5/6".to_owned()));
    assert_eq!(calc("6/8"), Ok("3/4".to_owned()));
    assert_eq!(calc("( ( 1 ) )"), Ok("1/1".to_owned()));
    assert_eq!(calc("1 / 3 * 3"), Ok("1/1".to_owned()));
    assert_eq!(
        calc("99999999999999999999 * 99999999999999999999"),
        Ok("9999999999999999999800000000000000000001/1".to_owned())
    );
}

#[test]
fn unary_minus_test() {
    use crate::error::ErrorKind;
    assert_eq!(kind_of("- 5 + 3"), ErrorKind::InvalidUnaryMinus);
    assert_eq!(kind_of("2 * - 5"), ErrorKind::InvalidUnaryMinus);
    assert_eq!(kind_of("( - 5 )"), ErrorKind::InvalidUnaryMinus);
    assert_eq!(kind_of("3 -5"), ErrorKind::InvalidUnaryMinus);
    assert_eq!(calc("2 * -5"), Ok("-10/1".to_owned()));
    assert_eq!(calc("3 - -5"), Ok("8/1".to_owned()));
}

#[test]
fn grouping_test() {
    use crate::error::ErrorKind;
    assert_eq!(kind_of("1 + 2 )"), ErrorKind::UnbalancedGroupingSymbols);
    assert_eq!(kind_of("( 1 + 2"), ErrorKind::UnbalancedGroupingSymbols);

    let lenient = |s: &str| {
        let postfix = infix_to_postfix_with(s, GroupingPolicy::Lenient).unwrap();
        evaluate_postfix(&postfix).unwrap().to_string()
    };
    assert_eq!(lenient("1 + 2 ) * 3"), "9/1");
    assert_eq!(lenient("( 1 + 2"), "3/1");
}

#[test]
fn failure_kinds_test() {
    use crate::error::ErrorKind;
    assert_eq!(kind_of("1 / 0"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("1/2 / 0/5"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("3/0 + 1"), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("5 % 3"), ErrorKind::UnknownOperator);
    assert_eq!(kind_of("3 4"), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("* 3"), ErrorKind::InvalidExpression);
    assert_eq!(kind_of(""), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("2+3"), ErrorKind::InvalidCharacter);
    assert_eq!(kind_of("1/2/3 + 1"), ErrorKind::InvalidFractionInput);
    assert_eq!(
        calc("5 % 3"),
        Err(CalcError::UnknownOperator { operator: "%".to_owned() })
    );
}

#[test]
fn stack_underflow_test() {
    let postfix = vec![Token::Operand("1".to_owned()), Token::Operator("+".to_owned())];
    assert_eq!(
        evaluate_postfix(&postfix).unwrap_err().kind(),
        crate::error::ErrorKind::InvalidExpression
    );
}
