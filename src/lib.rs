//! # fraccalc
//!
//! An exact fraction calculator. Blank-separated infix expressions over
//! integer and `a/b` literals are converted to postfix order and evaluated
//! with arbitrary-precision rationals, so results are always reduced
//! fractions and never rounded.
//!
//! ```
//! let result = fraccalc::evaluate("( 1/2 + 1/3 ) * -6").unwrap();
//! assert_eq!(result.to_string(), "-5/1");
//! ```

/// User configuration stored as RON in the platform config directory.
pub mod config;
/// The error taxonomy shared by every stage of evaluation.
pub mod error;
/// Big integers, fractions, and the infix/postfix machinery.
pub mod math;
/// State owned by one run of the application: history and menu commands.
pub mod session;
/// Interactive menu loop on the terminal.
pub mod term_frontend;

pub use error::{CalcError, ErrorKind};
pub use math::{BigInt, Fraction};

/// Evaluates one expression with strict parenthesis matching.
///
/// # Errors
/// Returns the first [`CalcError`] met while converting or evaluating.
pub fn evaluate(expression: &str) -> Result<Fraction, CalcError> {
    let postfix = math::infix_to_postfix(expression)?;
    math::evaluate_postfix(&postfix)
}
