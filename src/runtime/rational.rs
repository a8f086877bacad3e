use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref RATIONAL_RE: Regex = Regex::new(r"^-?\d+(/\d+)?$").unwrap();
}

/// An exact fraction, the interpreter's sole numeric representation.
///
/// Kept in lowest terms after every operation; the denominator is
/// strictly positive, with the sign carried by the numerator.
///
/// Components are `i64`, but every operation does its intermediate
/// arithmetic in `i128`: cross-multiplied denominators exceed `i64`
/// long before the reduced result does. A result that still does not
/// fit after reduction fails with `NumericOverflow` instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    num: i64,
    denom: i64,
}

impl Rational {
    /// Creates a rational, failing with `DivisionByZero` when the
    /// denominator is zero
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Rational::reduced(numerator as i128, denominator as i128)
    }

    /// Creates a whole-number rational
    pub fn integer(n: i64) -> Self {
        Rational { num: n, denom: 1 }
    }

    /// The zero rational
    pub fn zero() -> Self {
        Rational::integer(0)
    }

    /// Numerator (carries the sign)
    pub fn numerator(&self) -> i64 {
        self.num
    }

    /// Denominator (always strictly positive)
    pub fn denominator(&self) -> i64 {
        self.denom
    }

    /// Returns true if the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Adds `other`
    pub fn add(self, other: Rational) -> Result<Rational> {
        let (a, b) = (self.widened(), other.widened());
        Rational::reduced(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    /// Subtracts `other`
    pub fn sub(self, other: Rational) -> Result<Rational> {
        let (a, b) = (self.widened(), other.widened());
        Rational::reduced(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    /// Multiplies by `other`
    pub fn mul(self, other: Rational) -> Result<Rational> {
        let (a, b) = (self.widened(), other.widened());
        Rational::reduced(a.0 * b.0, a.1 * b.1)
    }

    /// Divides by `other`, failing with `DivisionByZero` when `other`
    /// is the zero rational
    pub fn div(self, other: Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (a, b) = (self.widened(), other.widened());
        Rational::reduced(a.0 * b.1, a.1 * b.0)
    }

    /// Negates the value. Fails on the one unrepresentable case,
    /// the numerator `i64::MIN`.
    pub fn neg(self) -> Result<Rational> {
        let (n, d) = self.widened();
        Rational::reduced(-n, d)
    }

    /// Returns true if `text` has the shape of a rational literal:
    /// `-?\d+(/\d+)?`
    pub fn is_rational(text: &str) -> bool {
        RATIONAL_RE.is_match(text)
    }

    fn widened(self) -> (i128, i128) {
        (self.num as i128, self.denom as i128)
    }

    /// Reduces an `i128` fraction and narrows it back to components.
    /// Inputs are at most products/sums of `i64` pairs, which always
    /// fit in `i128`; the reduced result may still not fit in `i64`.
    fn reduced(num: i128, denom: i128) -> Result<Rational> {
        if denom == 0 {
            return Err(Error::DivisionByZero);
        }

        let g = gcd(num, denom);
        let mut num = num / g;
        let mut denom = denom / g;

        // Sign lives on the numerator only
        if denom < 0 {
            num = -num;
            denom = -denom;
        }

        let num = i64::try_from(num).map_err(|_| Error::NumericOverflow)?;
        let denom = i64::try_from(denom).map_err(|_| Error::NumericOverflow)?;
        Ok(Rational { num, denom })
    }
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        // Denominators are positive, so the sign of the difference's
        // numerator decides; cross-multiplying in i128 never overflows
        let (a, b) = (self.widened(), other.widened());
        (a.0 * b.1).cmp(&(b.0 * a.1))
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        if !Rational::is_rational(text) {
            return Err(Error::NotANumber {
                text: text.to_string(),
            });
        }

        let not_a_number = || Error::NotANumber {
            text: text.to_string(),
        };

        match text.split_once('/') {
            None => {
                let n: i64 = text.parse().map_err(|_| not_a_number())?;
                Ok(Rational::integer(n))
            }
            Some((num, denom)) => {
                let num: i64 = num.parse().map_err(|_| not_a_number())?;
                let denom: i64 = denom.parse().map_err(|_| not_a_number())?;
                Rational::new(num, denom)
            }
        }
    }
}

impl fmt::Display for Rational {
    /// Canonical form: bare integer when the denominator is 1,
    /// otherwise `num/denom` with the sign on the numerator
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.denom)
        }
    }
}
