//! Error taxonomy shared by the elementary function family.
//!
//! Every error is raised at the point of violation and handed straight back to the caller:
//! there is no partial result and no default substitution.
use crate::symbolic::fraction::Fraction;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CalculusError {
    /// bad construction input: zero linear coefficient, zero denominator, NaN, log of a non-positive value...
    InvalidArgument(String),
    /// `value_at`/`algebraic_value_at` on a power function whose exponent is not a non-negative integer
    UnsupportedExponent(Fraction),
    /// antiderivative is not available in closed form (power -1, logarithm) or the definite integral is improper
    IntegralUndefined(String),
    /// `ln_integral`/`ln_definite_integral` called while the exponent is not -1
    WrongVariantForOperation(Fraction),
    /// the exact trig oracle only knows multiples of 30 and 45 degrees
    UnsupportedAngle(Fraction),
    /// malformed task document
    TaskParse(String),
}

impl fmt::Display for CalculusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalculusError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CalculusError::UnsupportedExponent(n) => write!(
                f,
                "power n = {} not supported: n must be a non-negative integer",
                n
            ),
            CalculusError::IntegralUndefined(msg) => write!(f, "Integral undefined: {}", msg),
            CalculusError::WrongVariantForOperation(n) => {
                write!(f, "n must be -1 for this method. Current n: {}", n)
            }
            CalculusError::UnsupportedAngle(angle) => write!(
                f,
                "angle {} degrees is not a special angle, exact value unavailable",
                angle
            ),
            CalculusError::TaskParse(msg) => write!(f, "Task parsing error: {}", msg),
        }
    }
}

impl std::error::Error for CalculusError {}
