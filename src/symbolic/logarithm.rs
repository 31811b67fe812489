//! `coeff · ln(argument)` for an exact positive argument - the value a logarithmic antiderivative
//! takes at a numeric bound.
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::term::Term;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Ln {
    pub argument: Fraction,
    pub coeff: Fraction,
}

impl Ln {
    pub fn new(argument: Fraction, coeff: Fraction) -> Result<Ln, CalculusError> {
        if !argument.is_positive() {
            return Err(CalculusError::InvalidArgument(format!(
                "ln is only defined for positive arguments, got {}",
                argument
            )));
        }
        Ok(Ln { argument, coeff })
    }

    pub fn to_term(&self) -> Term {
        if self.argument.is_one() || self.coeff.is_zero() {
            Term::constant(Fraction::zero())
        } else {
            Term::new(self.coeff.clone(), &format!("\\ln {}", self.argument))
        }
    }

    /// k ln A - k ln B = k ln(A/B); different coefficients keep both logarithms
    pub fn minus(&self, other: &Ln) -> Term {
        if self.coeff == other.coeff {
            // both arguments are positive, so the ratio is too
            let ratio = Fraction::from_big(self.argument.as_big() / other.argument.as_big());
            return Ln {
                argument: ratio,
                coeff: self.coeff.clone(),
            }
            .to_term();
        }
        let difference = Expression::new(self.to_term()).subtract(other.to_term());
        match difference.terms() {
            [single] => single.clone(),
            _ => Term::new(Fraction::one(), &difference.to_string()),
        }
    }

    pub fn value_of(&self) -> f64 {
        self.coeff.value_of() * self.argument.value_of().ln()
    }
}

impl fmt::Display for Ln {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive() {
        assert!(Ln::new(Fraction::zero(), Fraction::one()).is_err());
        assert!(Ln::new(Fraction::from(-2), Fraction::one()).is_err());
    }

    #[test]
    fn test_render() {
        let ln3 = Ln::new(Fraction::from(3), Fraction::one()).unwrap();
        assert_eq!(ln3.to_string(), "\\ln 3");
        let ln1 = Ln::new(Fraction::one(), Fraction::from(5)).unwrap();
        assert_eq!(ln1.to_string(), "0");
        let half_ln = Ln::new(Fraction::new(3, 2).unwrap(), Fraction::new(1, 2).unwrap()).unwrap();
        assert_eq!(half_ln.to_string(), "\\frac{ 1 }{ 2 }\\ln \\frac{ 3 }{ 2 }");
    }

    #[test]
    fn test_minus_folds_equal_coefficients() {
        let upper = Ln::new(Fraction::from(6), Fraction::from(2)).unwrap();
        let lower = Ln::new(Fraction::from(2), Fraction::from(2)).unwrap();
        let diff = upper.minus(&lower);
        assert_eq!(diff.to_string(), "2\\ln 3");
        assert_relative_eq!(
            diff.coeff.value_of() * 3f64.ln(),
            upper.value_of() - lower.value_of(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_minus_with_different_coefficients() {
        let upper = Ln::new(Fraction::from(2), Fraction::from(3)).unwrap();
        let lower = Ln::new(Fraction::from(5), Fraction::one()).unwrap();
        assert_eq!(upper.minus(&lower).to_string(), "3\\ln 2 - \\ln 5");
    }
}
