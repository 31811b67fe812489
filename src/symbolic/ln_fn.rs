//! logarithmic member of the family: `k ln| ax + b |`
//!
//! Produced by [`PowerFn::ln_integral`](crate::symbolic::power_fn::PowerFn::ln_integral); its derivative
//! goes back to the power member with exponent -1.
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::linear_polynomial::LinearPolynomial;
use crate::symbolic::logarithm::Ln;
use crate::symbolic::power_fn::PowerFn;
use crate::symbolic::term::Term;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct LnFn {
    a: Fraction,
    b: Fraction,
    coeff: Fraction,
    variable_atom: String,
}

impl LnFn {
    /// `n` of the options is ignored
    pub fn new(options: FunctionOptions) -> Result<LnFn, CalculusError> {
        if options.a.is_zero() {
            return Err(CalculusError::InvalidArgument(
                "lnFn ERROR: a must be non-zero".to_string(),
            ));
        }
        Ok(LnFn::from_parts(
            options.a,
            options.b,
            options.coeff,
            &options.variable_atom,
        ))
    }

    pub(crate) fn from_parts(a: Fraction, b: Fraction, coeff: Fraction, variable_atom: &str) -> LnFn {
        LnFn {
            a,
            b,
            coeff,
            variable_atom: variable_atom.to_string(),
        }
    }

    pub fn a(&self) -> &Fraction {
        &self.a
    }

    pub fn b(&self) -> &Fraction {
        &self.b
    }

    pub fn coeff(&self) -> &Fraction {
        &self.coeff
    }

    pub fn variable_atom(&self) -> &str {
        &self.variable_atom
    }

    fn linear(&self) -> LinearPolynomial {
        LinearPolynomial::new(self.a.clone(), self.b.clone(), &self.variable_atom)
    }

    pub fn to_term(&self) -> Term {
        Term::new(
            self.coeff.clone(),
            &format!("\\ln \\left| {} \\right|", self.linear()),
        )
    }

    /// `k ln|ax+b|` at an exact x
    pub fn value_at(&self, x: impl Into<Fraction>) -> Result<Ln, CalculusError> {
        let x = x.into();
        let argument = self.linear().value_at(&x);
        if argument.is_zero() {
            return Err(CalculusError::InvalidArgument(format!(
                "{} vanishes at x = {}, ln is undefined",
                self.linear(),
                x
            )));
        }
        Ln::new(argument.abs(), self.coeff.clone())
    }

    pub fn to_number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        let (a, b, k) = (self.a.value_of(), self.b.value_of(), self.coeff.value_of());
        Box::new(move |x: f64| k * (a * x + b).abs().ln())
    }

    /// d/dx k ln|ax+b| = k·a (ax+b)^{-1}
    pub fn derivative(&self) -> PowerFn {
        PowerFn::from_parts(
            self.a.clone(),
            self.b.clone(),
            Fraction::from(-1),
            self.coeff.times(&self.a),
            &self.variable_atom,
        )
    }
}

impl fmt::Display for LnFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        assert!(LnFn::new(FunctionOptions::new().a(0)).is_err());
        let f = LnFn::new(FunctionOptions::new().a(2).b(-1).coeff(3)).unwrap();
        assert_eq!(f.to_string(), "3\\ln \\left| 2x - 1 \\right|");
    }

    #[test]
    fn test_value_at() {
        let f = LnFn::new(FunctionOptions::new().b(2)).unwrap();
        assert_eq!(f.value_at(1).unwrap().to_string(), "\\ln 3");
        // |(-5) + 2| = 3
        assert_eq!(f.value_at(-5).unwrap().to_string(), "\\ln 3");
        assert!(f.value_at(-2).is_err());
    }

    #[test]
    fn test_derivative_returns_to_power() {
        let f = LnFn::new(FunctionOptions::new().a(3).b(2).coeff(Fraction::new(1, 3).unwrap())).unwrap();
        let df = f.derivative();
        assert_eq!(df.n(), &Fraction::from(-1));
        assert_eq!(df.coeff(), &Fraction::one());
        assert_eq!(df.ln_integral().unwrap(), f);
    }

    #[test]
    fn test_number_function() {
        let f = LnFn::new(FunctionOptions::new().b(2).coeff(2)).unwrap().to_number_function();
        assert_relative_eq!(f(1.0), 2.0 * 3f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(f(-5.0), 2.0 * 3f64.ln(), epsilon = 1e-12);
    }
}
