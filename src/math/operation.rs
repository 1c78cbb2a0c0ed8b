use super::Fraction;
use crate::error::CalcError;

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn char(&self) -> &str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Sub),
            "*" => Some(Operation::Mul),
            "/" => Some(Operation::Div),
            _ => None,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operation::Add | Operation::Sub => 1,
            Operation::Mul | Operation::Div => 2,
        }
    }

    pub fn apply(&self, a: &Fraction, b: &Fraction) -> Result<Fraction, CalcError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Sub => Ok(a - b),
            Operation::Mul => Ok(a * b),
            Operation::Div => a.checked_div(b),
        }
    }
}

/// Binding strength of an operator symbol. Unrecognised symbols get 0 and are
/// rejected later by the evaluator.
pub fn precedence(symbol: &str) -> u8 {
    Operation::from_str(symbol).map_or(0, |op| op.precedence())
}

#[test]
fn precedence_test() {
    assert_eq!(precedence("+"), 1);
    assert_eq!(precedence("-"), 1);
    assert_eq!(precedence("*"), 2);
    assert_eq!(precedence("/"), 2);
    assert_eq!(precedence("%"), 0);
    assert_eq!(Operation::from_str("*").map(|op| op.char().to_owned()), Some("*".to_owned()));
}
