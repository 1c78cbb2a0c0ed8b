pub mod bigint;
pub mod fraction;
pub mod operation;
pub mod postfix;
pub mod token;

#[cfg(test)]
mod proptests;

pub use bigint::BigInt;
pub use fraction::{gcd, Fraction};
pub use operation::Operation;
pub use postfix::{
    evaluate_postfix, infix_to_postfix, infix_to_postfix_with, postfix_to_string, GroupingPolicy,
};
pub use token::Token;
