//! # Fraction
//!
//! Exact rational numbers for coefficients, exponents and angles of the elementary function family.
//! A thin newtype over `num::BigRational`: values are always kept in lowest terms with a positive
//! denominator, so structural equality is exact equality.
//!
//! Rendering is LaTeX flavoured: integers print as `3`, proper fractions as `\frac{ 1 }{ 2 }`.
use crate::symbolic::calculus_errors::CalculusError;
use num::bigint::BigInt;
use num::rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// numerator/denominator pair, reduced to lowest terms
    pub fn new(numerator: i64, denominator: i64) -> Result<Fraction, CalculusError> {
        if denominator == 0 {
            return Err(CalculusError::InvalidArgument(
                "fraction denominator must be non-zero".to_string(),
            ));
        }
        Ok(Fraction(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        )))
    }

    pub fn from_integer(value: i64) -> Fraction {
        Fraction(BigRational::from_integer(BigInt::from(value)))
    }

    pub fn from_big(value: BigRational) -> Fraction {
        Fraction(value)
    }

    pub fn zero() -> Fraction {
        Fraction(BigRational::zero())
    }

    /// the canonical ONE
    pub fn one() -> Fraction {
        Fraction(BigRational::one())
    }

    pub fn half() -> Fraction {
        Fraction(BigRational::new(BigInt::one(), BigInt::from(2)))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn as_big(&self) -> &BigRational {
        &self.0
    }

    ////////////////////////////////////ARITHMETIC////////////////////////////////////////
    pub fn plus(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 + &other.0)
    }

    pub fn minus(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 - &other.0)
    }

    pub fn times(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 * &other.0)
    }

    pub fn divide(&self, other: &Fraction) -> Result<Fraction, CalculusError> {
        if other.is_zero() {
            return Err(CalculusError::InvalidArgument(format!(
                "division of {} by zero",
                self
            )));
        }
        Ok(Fraction(&self.0 / &other.0))
    }

    pub fn reciprocal(&self) -> Result<Fraction, CalculusError> {
        Fraction::one().divide(self)
    }

    /// integer power; negative exponents invert the base first
    pub fn pow(&self, exponent: i64) -> Result<Fraction, CalculusError> {
        if exponent >= 0 {
            return Ok(Fraction(num::pow(self.0.clone(), exponent as usize)));
        }
        let inverted = self.reciprocal()?;
        Ok(Fraction(num::pow(inverted.0, exponent.unsigned_abs() as usize)))
    }

    pub fn negative(&self) -> Fraction {
        Fraction(-&self.0)
    }

    pub fn abs(&self) -> Fraction {
        Fraction(self.0.abs())
    }

    /////////////////////////////////////QUERIES//////////////////////////////////////////
    pub fn is_equal(&self, other: impl Into<Fraction>) -> bool {
        *self == other.into()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Some(n) when the value is a non-negative integer that fits a machine exponent
    pub fn to_integer_exponent(&self) -> Option<u32> {
        if self.is_integer() && !self.is_negative() {
            self.0.numer().to_u32()
        } else {
            None
        }
    }

    /// Some(n) when the value is an integer that fits i64
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.0.numer().to_i64()
        } else {
            None
        }
    }

    /// lossy decimal cast
    pub fn value_of(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else if self.0.is_negative() {
            write!(
                f,
                "- \\frac{{ {} }}{{ {} }}",
                self.0.numer().abs(),
                self.0.denom()
            )
        } else {
            write!(f, "\\frac{{ {} }}{{ {} }}", self.0.numer(), self.0.denom())
        }
    }
}

///////////////////////////////////CONVERSIONS///////////////////////////////////////////
impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::from_integer(value as i64)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        Fraction(value)
    }
}

/// floats are taken at their shortest round-trip decimal text, so 0.1 becomes 1/10
/// rather than the nearest binary fraction
impl TryFrom<f64> for Fraction {
    type Error = CalculusError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(CalculusError::InvalidArgument(format!(
                "cannot convert {} to an exact fraction",
                value
            )));
        }
        parse_decimal(&value.to_string())
    }
}

impl FromStr for Fraction {
    type Err = CalculusError;

    /// accepts `p/q`, `-3`, `0.25`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((num, den)) = s.split_once('/') {
            let parse_int = |part: &str| {
                BigInt::from_str(part.trim()).map_err(|_| {
                    CalculusError::InvalidArgument(format!("'{}' is not a fraction", s))
                })
            };
            let numerator = parse_int(num)?;
            let denominator = parse_int(den)?;
            if denominator.is_zero() {
                return Err(CalculusError::InvalidArgument(format!(
                    "'{}' has a zero denominator",
                    s
                )));
            }
            return Ok(Fraction(BigRational::new(numerator, denominator)));
        }
        parse_decimal(s)
    }
}

fn parse_decimal(s: &str) -> Result<Fraction, CalculusError> {
    let invalid = || CalculusError::InvalidArgument(format!("'{}' is not a number", s));
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let digits = format!("{}{}", int_part, frac_part);
    if digits.is_empty() || digits == "-" || digits == "+" {
        return Err(invalid());
    }
    let numerator = BigInt::from_str(&digits).map_err(|_| invalid())?;
    let denominator = num::pow(BigInt::from(10), frac_part.len());
    Ok(Fraction(BigRational::new(numerator, denominator)))
}

///////////////////////////////////OPERATORS/////////////////////////////////////////////
impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Fraction> for &'a Fraction {
    type Output = Fraction;
    fn add(self, rhs: &'a Fraction) -> Fraction {
        self.plus(rhs)
    }
}

impl Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Fraction> for &'a Fraction {
    type Output = Fraction;
    fn sub(self, rhs: &'a Fraction) -> Fraction {
        self.minus(rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Fraction> for &'a Fraction {
    type Output = Fraction;
    fn mul(self, rhs: &'a Fraction) -> Fraction {
        self.times(rhs)
    }
}

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}
