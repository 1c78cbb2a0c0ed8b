use std::fmt;

use crate::error::CalcError;

/// One blank-separated unit of an expression.
///
/// Operands and operators stay textual; literals are only turned into
/// fractions when the evaluator reaches them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An integer or `a/b` literal, possibly with a leading `-`.
    Operand(String),
    /// An operator symbol. Anything other than `+ - * /` fails at evaluation.
    Operator(String),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classifies a raw blank-free piece of input.
    pub fn classify(raw: &str) -> Result<Self, CalcError> {
        match raw {
            "(" => return Ok(Token::LeftParen),
            ")" => return Ok(Token::RightParen),
            _ => {}
        }
        if is_operand_shaped(raw) {
            check_operand_chars(raw)?;
            return Ok(Token::Operand(raw.to_owned()));
        }
        if let Some(character) = raw.chars().find(|c| !c.is_ascii_punctuation()) {
            return Err(CalcError::InvalidCharacter { character, token: raw.to_owned() });
        }
        Ok(Token::Operator(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::Operand(text) | Token::Operator(text) => text,
            Token::LeftParen => "(",
            Token::RightParen => ")",
        }
    }
}

// starts with a digit, or with '-' followed by at least one more character
fn is_operand_shaped(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some(),
        _ => false,
    }
}

fn check_operand_chars(raw: &str) -> Result<(), CalcError> {
    let body = raw.strip_prefix('-').unwrap_or(raw);
    match body.chars().find(|&c| !(c.is_ascii_digit() || c == '/')) {
        Some(character) => Err(CalcError::InvalidCharacter { character, token: raw.to_owned() }),
        None => Ok(()),
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits an expression on blanks and classifies every piece.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    expression.split_whitespace().map(Token::classify).collect()
}

#[test]
fn classify_test() {
    assert_eq!(Token::classify("42"), Ok(Token::Operand("42".to_owned())));
    assert_eq!(Token::classify("-3/4"), Ok(Token::Operand("-3/4".to_owned())));
    assert_eq!(Token::classify("-"), Ok(Token::Operator("-".to_owned())));
    assert_eq!(Token::classify("%"), Ok(Token::Operator("%".to_owned())));
    assert_eq!(Token::classify("**"), Ok(Token::Operator("**".to_owned())));
    assert_eq!(Token::classify("("), Ok(Token::LeftParen));
    assert_eq!(Token::classify(")"), Ok(Token::RightParen));
}

#[test]
fn invalid_character_test() {
    assert_eq!(
        Token::classify("2+3"),
        Err(CalcError::InvalidCharacter { character: '+', token: "2+3".to_owned() })
    );
    assert_eq!(
        Token::classify("3/-4"),
        Err(CalcError::InvalidCharacter { character: '-', token: "3/-4".to_owned() })
    );
    assert_eq!(
        Token::classify("x"),
        Err(CalcError::InvalidCharacter { character: 'x', token: "x".to_owned() })
    );
    assert_eq!(
        Token::classify("-x"),
        Err(CalcError::InvalidCharacter { character: 'x', token: "-x".to_owned() })
    );
}

#[test]
fn tokenize_test() {
    let tokens = tokenize("  ( 1/2 +\t-3 )  ").unwrap();
    let text: Vec<String> = tokens.iter().map(Token::to_string).collect();
    assert_eq!(text, ["(", "1/2", "+", "-3", ")"]);
}
