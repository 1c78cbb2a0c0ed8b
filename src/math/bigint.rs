use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{CalcError, ParseBigIntError};

// one limb holds nine decimal digits
const BASE: u64 = 1_000_000_000;
const BASE_DIGITS: usize = 9;

/// An arbitrary-precision signed integer.
///
/// The magnitude is kept in base 10^9, least significant limb first, with no
/// zero limbs at the top. Zero is the empty magnitude and is never negative,
/// so every value has exactly one representation and the derived equality
/// and hash are exact.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u32>,
}

impl BigInt {
    fn from_parts(negative: bool, mut magnitude: Vec<u32>) -> Self {
        trim(&mut magnitude);
        let negative = negative && !magnitude.is_empty();
        Self { negative, magnitude }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_empty()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.magnitude.is_empty() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> Self {
        Self { negative: false, magnitude: self.magnitude.clone() }
    }

    /// Truncated division: the quotient rounds toward zero and the remainder
    /// takes the sign of the dividend, so `self == q * divisor + r`.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), CalcError> {
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero(format!("{self} / 0")));
        }
        let (quotient, remainder) = divrem_magnitudes(&self.magnitude, &divisor.magnitude);
        Ok((
            Self::from_parts(self.negative != divisor.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    /// `None` only when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(quotient, _)| quotient)
    }

    /// `None` only when `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(_, remainder)| remainder)
    }
}

fn trim(magnitude: &mut Vec<u32>) {
    while magnitude.last() == Some(&0) {
        magnitude.pop();
    }
}

// both sides must be trimmed
fn cmp_magnitudes(a: &[u32], b: &[u32]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &limb) in long.iter().enumerate() {
        let sum = u64::from(limb) + u64::from(short.get(i).copied().unwrap_or(0)) + carry;
        out.push((sum % BASE) as u32);
        carry = sum / BASE;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    out
}

// requires a >= b
fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for (i, &limb) in a.iter().enumerate() {
        let mut diff = i64::from(limb) - i64::from(b.get(i).copied().unwrap_or(0)) - borrow;
        borrow = if diff < 0 {
            diff += BASE as i64;
            1
        } else {
            0
        };
        out.push(diff as u32);
    }
    trim(&mut out);
    out
}

fn mul_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let cur = u64::from(out[i + j]) + u64::from(x) * u64::from(y) + carry;
            out[i + j] = (cur % BASE) as u32;
            carry = cur / BASE;
        }
        out[i + b.len()] = carry as u32;
    }
    trim(&mut out);
    out
}

fn mul_small(a: &[u32], factor: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let cur = u64::from(limb) * u64::from(factor) + carry;
        out.push((cur % BASE) as u32);
        carry = cur / BASE;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

fn divrem_small(a: &[u32], divisor: u32) -> (Vec<u32>, Vec<u32>) {
    let divisor = u64::from(divisor);
    let mut quotient = vec![0u32; a.len()];
    let mut rem = 0u64;
    for (i, &limb) in a.iter().enumerate().rev() {
        let cur = rem * BASE + u64::from(limb);
        quotient[i] = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    trim(&mut quotient);
    let remainder = if rem == 0 { Vec::new() } else { vec![rem as u32] };
    (quotient, remainder)
}

/// Long division of magnitudes, one limb of quotient per step. `b` must be
/// non-empty.
fn divrem_magnitudes(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if cmp_magnitudes(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if let [divisor] = b {
        return divrem_small(a, *divisor);
    }

    let mut quotient = vec![0u32; a.len()];
    let mut remainder: Vec<u32> = Vec::with_capacity(b.len() + 1);
    for (i, &limb) in a.iter().enumerate().rev() {
        remainder.insert(0, limb);
        trim(&mut remainder);
        if cmp_magnitudes(&remainder, b) == Ordering::Less {
            continue;
        }
        // here b <= remainder < b * BASE, so the digit is in 1..BASE
        let (mut lo, mut hi) = (1u32, (BASE - 1) as u32);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if cmp_magnitudes(&mul_small(b, mid), &remainder) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        remainder = sub_magnitudes(&remainder, &mul_small(b, lo));
        quotient[i] = lo;
    }
    trim(&mut quotient);
    (quotient, remainder)
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_parts(self.negative, add_magnitudes(&self.magnitude, &rhs.magnitude));
        }
        // differing signs: the larger magnitude decides the sign
        match cmp_magnitudes(&self.magnitude, &rhs.magnitude) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_parts(
                self.negative,
                sub_magnitudes(&self.magnitude, &rhs.magnitude),
            ),
            Ordering::Less => BigInt::from_parts(
                rhs.negative,
                sub_magnitudes(&rhs.magnitude, &self.magnitude),
            ),
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.negative != rhs.negative,
            mul_magnitudes(&self.magnitude, &rhs.magnitude),
        )
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitudes(&self.magnitude, &other.magnitude),
            (true, true) => cmp_magnitudes(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::from(1u32)
    }
}

impl From<u64> for BigInt {
    fn from(mut value: u64) -> Self {
        let mut magnitude = Vec::new();
        while value > 0 {
            magnitude.push((value % BASE) as u32);
            value /= BASE;
        }
        Self { negative: false, magnitude }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs()).magnitude;
        Self::from_parts(value < 0, magnitude)
    }
}

macro_rules! from_primitive {
    ($via:ty: $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from(value as $via)
                }
            }
        )*
    };
}

from_primitive!(u64: u32, usize);
from_primitive!(i64: i32);

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Decimal literal with an optional leading `-` or `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit);
        }
        let magnitude = digits
            .as_bytes()
            .rchunks(BASE_DIGITS)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0')))
            .collect();
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.magnitude.len() * BASE_DIGITS);
        match self.magnitude.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                write!(digits, "{top}")?;
                for limb in rest.iter().rev() {
                    write!(digits, "{limb:09}")?;
                }
            }
        }
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

#[cfg(test)]
fn int(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn parse_fmt_test() {
    assert_eq!(int("0").to_string(), "0");
    assert_eq!(int("-0").to_string(), "0");
    assert_eq!(int("-0"), BigInt::zero());
    assert_eq!(int("007").to_string(), "7");
    assert_eq!(int("+42").to_string(), "42");
    assert_eq!(
        int("-123456789012345678901234567890").to_string(),
        "-123456789012345678901234567890"
    );
    assert_eq!(int("1000000000").to_string(), "1000000000");
    assert_eq!(int("1000000000000000001").to_string(), "1000000000000000001");
    assert_eq!(format!("{:>5}", int("-12")), "  -12");

    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("12a".parse::<BigInt>(), Err(ParseBigIntError::InvalidDigit));
    assert_eq!("--1".parse::<BigInt>(), Err(ParseBigIntError::InvalidDigit));
}

#[test]
fn add_sub_test() {
    assert_eq!(int("999999999") + int("1"), int("1000000000"));
    assert_eq!(int("-5") + int("3"), int("-2"));
    assert_eq!(int("5") + int("-8"), int("-3"));
    assert_eq!(int("-5") + int("-8"), int("-13"));
    assert_eq!(int("7") + int("-7"), BigInt::zero());
    assert!(!(int("7") - int("7")).is_negative());
    assert_eq!(int("1000000000000000000") - int("1"), int("999999999999999999"));
    assert_eq!(int("1") - int("1000000000000000000"), int("-999999999999999999"));
    assert_eq!(int("-3") - int("-10"), int("7"));
}

#[test]
fn mul_test() {
    assert_eq!(int("-3") * int("4"), int("-12"));
    assert_eq!(int("-3") * int("-4"), int("12"));
    assert_eq!(int("-3") * BigInt::zero(), BigInt::zero());
    assert!(!(int("-3") * BigInt::zero()).is_negative());
    assert_eq!(
        int("123456789123456789") * int("987654321987654321"),
        int("121932631356500531347203169112635269")
    );
}

#[test]
fn div_rem_test() {
    assert_eq!(int("7").div_rem(&int("2")), Ok((int("3"), int("1"))));
    assert_eq!(int("-7").div_rem(&int("2")), Ok((int("-3"), int("-1"))));
    assert_eq!(int("7").div_rem(&int("-2")), Ok((int("-3"), int("1"))));
    assert_eq!(int("-7").div_rem(&int("-2")), Ok((int("3"), int("-1"))));
    assert_eq!(int("3").div_rem(&int("5")), Ok((BigInt::zero(), int("3"))));

    let big = int("121932631356500531347203169112635269");
    let (q, r) = big.div_rem(&int("987654321987654321")).unwrap();
    assert_eq!(q, int("123456789123456789"));
    assert!(r.is_zero());

    let (q, r) = int("1000000000000000000000000000007").div_rem(&int("1000000000000")).unwrap();
    assert_eq!(q, int("1000000000000000000"));
    assert_eq!(r, int("7"));
}

#[test]
fn division_by_zero_test() {
    let e = int("5").div_rem(&BigInt::zero()).unwrap_err();
    assert_eq!(e.kind(), crate::error::ErrorKind::DivisionByZero);
    assert_eq!(int("5").checked_div(&BigInt::zero()), None);
    assert_eq!(int("5").checked_rem(&BigInt::zero()), None);
}

#[test]
fn ordering_test() {
    assert!(int("-10") < int("-2"));
    assert!(int("-2") < BigInt::zero());
    assert!(BigInt::zero() < int("1"));
    assert!(int("999999999") < int("1000000000"));
    assert_eq!(int("-7").abs(), int("7"));
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(int("-7").signum(), -1);
    assert_eq!(BigInt::from(-42i64), int("-42"));
    assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
}
