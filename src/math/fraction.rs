use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use super::bigint::BigInt;
use crate::error::CalcError;

/// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
///
/// The result is never negative, and `gcd(0, 0)` is zero.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut x, mut y) = (a.abs(), b.abs());
    // checked_rem only fails once y is zero
    while let Some(r) = x.checked_rem(&y) {
        x = std::mem::replace(&mut y, r);
    }
    x
}

/// An exact rational number in canonical form.
///
/// The denominator is always positive and shares no factor with the
/// numerator, so two fractions are equal exactly when their parts are.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds `numerator / denominator` in lowest terms.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, CalcError> {
        if denominator.is_zero() {
            return Err(CalcError::division_by_zero(format!("{numerator}/0")));
        }
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_integer(n: BigInt) -> Self {
        Self { numerator: n, denominator: BigInt::one() }
    }

    // callers guarantee a nonzero denominator
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = gcd(&numerator, &denominator);
        let (numerator, denominator) =
            match (numerator.checked_div(&divisor), denominator.checked_div(&divisor)) {
                (Some(n), Some(d)) => (n, d),
                // gcd(0, 0): nothing to divide out
                _ => (numerator, denominator),
            };
        if denominator.is_negative() {
            Self { numerator: -numerator, denominator: -denominator }
        } else {
            Self { numerator, denominator }
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// `denominator / numerator`; the fraction zero has no reciprocal.
    pub fn recip(&self) -> Result<Self, CalcError> {
        if self.numerator.is_zero() {
            return Err(CalcError::division_by_zero(format!("reciprocal of {self}")));
        }
        Ok(Self::reduced(self.denominator.clone(), self.numerator.clone()))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::division_by_zero(format!("{self} / {rhs}")));
        }
        Ok(self * &rhs.recip()?)
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                (&self).$method(rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

impl Ord for Fraction {
    // denominators are positive, so cross-multiplying keeps the order
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl FromStr for Fraction {
    type Err = CalcError;

    /// Reads `integer` or `integer/integer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalcError::InvalidFractionInput { literal: s.to_owned() };
        let parse = |part: &str| part.parse::<BigInt>().map_err(|_| invalid());
        match s.split_once('/') {
            None => Ok(Self::from_integer(parse(s)?)),
            Some((_, denominator)) if denominator.contains('/') => Err(invalid()),
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({self})")
    }
}

#[cfg(test)]
macro_rules! frac {
    ($numer:expr, $denom:expr) => {
        Fraction::new(BigInt::from($numer as i64), BigInt::from($denom as i64)).unwrap()
    };
}

#[test]
fn gcd_test() {
    assert_eq!(gcd(&BigInt::from(12), &BigInt::from(18)), BigInt::from(6));
    assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(18)), BigInt::from(6));
    assert_eq!(gcd(&BigInt::from(0), &BigInt::from(-5)), BigInt::from(5));
    assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::zero());
}

#[test]
fn construction_reduces_test() {
    assert_eq!(frac!(2, 4), frac!(1, 2));
    assert_eq!(frac!(2, 4).to_string(), "1/2");
    assert_eq!(frac!(3, -6).to_string(), "-1/2");
    assert_eq!(frac!(-3, -6).to_string(), "1/2");
    assert_eq!(frac!(0, -6).to_string(), "0/1");
    assert_eq!(frac!(7, 1).to_string(), "7/1");
    assert_eq!(
        Fraction::new(BigInt::from(1), BigInt::zero()).unwrap_err().kind(),
        crate::error::ErrorKind::DivisionByZero
    );
}

#[test]
fn arithmetic_test() {
    assert_eq!(frac!(1, 2) + frac!(1, 3), frac!(5, 6));
    assert_eq!(frac!(1, 2) - frac!(1, 3), frac!(1, 6));
    assert_eq!(frac!(1, 3) - frac!(1, 2), frac!(-1, 6));
    assert_eq!(frac!(1, 2) * frac!(2, 1), Fraction::one());
    assert_eq!(frac!(-2, 3) * frac!(-3, 4), frac!(1, 2));
    assert_eq!(frac!(1, 2).checked_div(&frac!(-1, 4)), Ok(frac!(-2, 1)));
    assert_eq!(frac!(1, 2) - frac!(1, 2), Fraction::zero());
    assert_eq!(-frac!(1, 2), frac!(-1, 2));
}

#[test]
fn division_by_zero_fraction_test() {
    let e = frac!(1, 2).checked_div(&frac!(0, 1)).unwrap_err();
    assert_eq!(e.kind(), crate::error::ErrorKind::DivisionByZero);
    assert!(Fraction::zero().recip().is_err());
}

#[test]
fn ordering_test() {
    assert!(frac!(1, 3) < frac!(1, 2));
    assert!(frac!(-1, 2) < frac!(-1, 3));
    assert!(frac!(5, 1) > frac!(49, 10));
}

#[test]
fn parse_test() {
    assert_eq!("3/4".parse::<Fraction>().unwrap().to_string(), "3/4");
    assert_eq!("6/8".parse::<Fraction>().unwrap().to_string(), "3/4");
    assert_eq!("-3/4".parse::<Fraction>().unwrap().to_string(), "-3/4");
    assert_eq!("42".parse::<Fraction>().unwrap().to_string(), "42/1");
    for bad in ["3/", "/4", "1/2/3", "-", "", "abc"] {
        assert_eq!(
            bad.parse::<Fraction>().unwrap_err(),
            CalcError::InvalidFractionInput { literal: bad.to_owned() }
        );
    }
    assert_eq!(
        "3/0".parse::<Fraction>().unwrap_err().kind(),
        crate::error::ErrorKind::DivisionByZero
    );
}
