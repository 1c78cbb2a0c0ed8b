use thiserror::Error;

/// Everything that can abort the evaluation of one expression.
///
/// Each variant carries the offending token, operator or literal where there
/// is one, so the message can point at the part of the input that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Integer division by zero, a zero denominator, or division by the
    /// fraction zero.
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// An operator token outside `+ - * /` reached the evaluator.
    #[error("Unknown operator: {operator}")]
    UnknownOperator { operator: String },

    /// Too few operands for an operator, or not exactly one value left over.
    #[error("Invalid expression: {details}")]
    InvalidExpression { details: String },

    /// A minus sign where neither subtraction nor a signed literal fits.
    #[error("Invalid unary minus at token {position} ('{token}'): {details}")]
    InvalidUnaryMinus {
        token: String,
        position: usize,
        details: String,
    },

    #[error("Invalid character '{character}' in token '{token}'")]
    InvalidCharacter { character: char, token: String },

    #[error("Unbalanced grouping symbols: {details}")]
    UnbalancedGroupingSymbols { details: String },

    /// A literal that is neither `integer` nor `integer/integer`.
    #[error("Invalid fraction input: '{literal}'")]
    InvalidFractionInput { literal: String },
}

/// The category of a [`CalcError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DivisionByZero,
    UnknownOperator,
    InvalidExpression,
    InvalidUnaryMinus,
    InvalidCharacter,
    UnbalancedGroupingSymbols,
    InvalidFractionInput,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::InvalidUnaryMinus { .. } => ErrorKind::InvalidUnaryMinus,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::UnbalancedGroupingSymbols { .. } => ErrorKind::UnbalancedGroupingSymbols,
            Self::InvalidFractionInput { .. } => ErrorKind::InvalidFractionInput,
        }
    }

    pub(crate) fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero { context: context.into() }
    }

    pub(crate) fn invalid_expression(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }

    pub(crate) fn unbalanced(details: impl Into<String>) -> Self {
        Self::UnbalancedGroupingSymbols { details: details.into() }
    }
}

/// Failure to read a decimal integer literal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
}

#[test]
fn messages_name_the_offending_input() {
    let e = CalcError::UnknownOperator { operator: "%".to_owned() };
    assert_eq!(e.to_string(), "Unknown operator: %");
    assert_eq!(e.kind(), ErrorKind::UnknownOperator);

    let e = CalcError::InvalidCharacter { character: '+', token: "2+3".to_owned() };
    assert_eq!(e.to_string(), "Invalid character '+' in token '2+3'");
}
