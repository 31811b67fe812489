//! renders the linear argument `ax + b` of the elementary functions
use crate::symbolic::fraction::Fraction;
use std::fmt;

/// symbol that is never wrapped in brackets, even though it renders with several characters
pub const BARE_ANGLE_SYMBOL: &str = "\\theta";

#[derive(Clone, Debug, PartialEq)]
pub struct LinearPolynomial {
    pub a: Fraction,
    pub b: Fraction,
    pub variable_atom: String,
}

impl LinearPolynomial {
    pub fn new(a: Fraction, b: Fraction, variable_atom: &str) -> LinearPolynomial {
        LinearPolynomial {
            a,
            b,
            variable_atom: variable_atom.to_string(),
        }
    }

    /// `a·x + b` evaluated exactly
    pub fn value_at(&self, x: &Fraction) -> Fraction {
        self.a.times(x).plus(&self.b)
    }

    pub fn is_single_character(&self) -> bool {
        self.to_string().chars().count() == 1
    }

    /// `( ax + b )` unless the rendering is a lone character or the bare angle symbol
    pub fn wrapped(&self) -> String {
        let rendered = self.to_string();
        if rendered.chars().count() == 1 || rendered == BARE_ANGLE_SYMBOL {
            rendered
        } else {
            format!("( {} )", rendered)
        }
    }
}

impl fmt::Display for LinearPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.a.is_zero() {
            return write!(f, "{}", self.b);
        }
        if self.a.is_one() {
            write!(f, "{}", self.variable_atom)?;
        } else if self.a.is_equal(-1) {
            write!(f, "-{}", self.variable_atom)?;
        } else {
            write!(f, "{}{}", self.a, self.variable_atom)?;
        }
        if self.b.is_positive() {
            write!(f, " + {}", self.b)?;
        } else if self.b.is_negative() {
            write!(f, " - {}", self.b.abs())?;
        }
        Ok(())
    }
}
