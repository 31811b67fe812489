//! # Power function `k (ax + b)^n`
//!
//! Exact coefficients through any number of differentiations/integrations, with the notation kept minimal:
//! - `n = 1, b = 0` is folded into `(k·a) x` at construction (the stored `a` becomes 1),
//! - `n = 1, b ≠ 0` renders `k( ax + b )`, or just `ax + b` when `k = 1`,
//! - `n = 0` renders the bare coefficient,
//! - anything else renders `k( ax + b )^{ n }`, brackets dropped for a single character base.
//!
//! The integral of power -1 is not a power function: [`PowerFn::integral`] refuses it and
//! [`PowerFn::ln_integral`] hands off to the logarithmic member [`LnFn`].
//!
//! # Example
//! ```
//! use RustedCalculus::symbolic::power_fn::PowerFn;
//! use RustedCalculus::symbolic::function_options::FunctionOptions;
//! let f = PowerFn::new(FunctionOptions::new().a(2).b(1).n(3)).unwrap(); // (2x+1)^3
//! assert_eq!(f.to_string(), "( 2x + 1 )^{ 3 }");
//! assert_eq!(f.derivative().to_string(), "6( 2x + 1 )^{ 2 }");
//! ```
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::linear_polynomial::LinearPolynomial;
use crate::symbolic::ln_fn::LnFn;
use crate::symbolic::logarithm::Ln;
use crate::symbolic::term::Term;
use log::{debug, info, warn};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct PowerFn {
    a: Fraction,
    b: Fraction,
    n: Fraction,
    coeff: Fraction,
    variable_atom: String,
}

/// endpoint of a definite integral: an exact number or a symbolic term such as `2y`
#[derive(Clone, Debug, PartialEq)]
pub enum Bound {
    Value(Fraction),
    Symbolic(Term),
}

impl From<Fraction> for Bound {
    fn from(value: Fraction) -> Self {
        Bound::Value(value)
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Value(Fraction::from(value))
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Value(Fraction::from(value))
    }
}

impl From<Term> for Bound {
    fn from(value: Term) -> Self {
        Bound::Symbolic(value)
    }
}

impl Default for PowerFn {
    /// the identity function x
    fn default() -> Self {
        let options = FunctionOptions::default();
        PowerFn::from_parts(
            options.a,
            options.b,
            options.n,
            options.coeff,
            &options.variable_atom,
        )
    }
}

impl PowerFn {
    pub fn new(options: FunctionOptions) -> Result<PowerFn, CalculusError> {
        if options.a.is_zero() {
            warn!("powerFn rejected: a = 0");
            return Err(CalculusError::InvalidArgument(
                "powerFn ERROR: a must be non-zero".to_string(),
            ));
        }
        Ok(PowerFn::from_parts(
            options.a,
            options.b,
            options.n,
            options.coeff,
            &options.variable_atom,
        ))
    }

    /// `a` is known to be non-zero here
    pub(crate) fn from_parts(
        a: Fraction,
        b: Fraction,
        n: Fraction,
        coeff: Fraction,
        variable_atom: &str,
    ) -> PowerFn {
        let (a, coeff) = if n.is_one() && b.is_zero() {
            // k (ax) = (ka) x
            debug!("powerFn: folding a = {} into coefficient {}", a, coeff);
            (Fraction::one(), coeff.times(&a))
        } else {
            (a, coeff)
        };
        PowerFn {
            a,
            b,
            n,
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

    pub fn n(&self) -> &Fraction {
        &self.n
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

    /// the function as a rendered `coeff · symbol` term
    pub fn to_term(&self) -> Term {
        let linear = self.linear();
        if self.n.is_one() {
            if self.b.is_zero() {
                Term::new(self.coeff.clone(), &self.variable_atom)
            } else if self.coeff.is_one() {
                Term::new(self.coeff.clone(), &linear.to_string())
            } else {
                Term::new(self.coeff.clone(), &format!("( {} )", linear))
            }
        } else if self.n.is_zero() {
            Term::constant(self.coeff.clone())
        } else if linear.is_single_character() {
            Term::new(self.coeff.clone(), &format!("{}^{{ {} }}", linear, self.n))
        } else {
            Term::new(self.coeff.clone(), &format!("( {} )^{{ {} }}", linear, self.n))
        }
    }

    fn integer_exponent(&self) -> Result<u32, CalculusError> {
        self.n
            .to_integer_exponent()
            .ok_or_else(|| CalculusError::UnsupportedExponent(self.n.clone()))
    }

    /// `k (ax + b)^n` at an exact x; only non-negative integer n
    pub fn value_at(&self, x: impl Into<Fraction>) -> Result<Fraction, CalculusError> {
        let n = self.integer_exponent()?;
        let base = self.linear().value_at(&x.into());
        Ok(base.pow(n as i64)?.times(&self.coeff))
    }

    /// substitutes a symbolic term `c·y` for x, e.g. `(2x+1)^2` at `3y` gives `( 6y + 1 )^{ 2 }`
    pub fn algebraic_value_at(&self, x: &Term) -> Result<Term, CalculusError> {
        let n = self.integer_exponent()?;
        if x.is_constant() {
            return Ok(Term::constant(self.value_at(x.coeff.clone())?));
        }
        if n == 0 {
            return Ok(Term::constant(self.coeff.clone()));
        }
        if self.b.is_zero() {
            // k1 ( a(kx) )^n
            let new_coeff = self
                .coeff
                .times(&x.coeff.times(&self.a).pow(n as i64)?);
            return Ok(if n == 1 {
                Term::new(new_coeff, &x.variable)
            } else {
                Term::new(
                    new_coeff,
                    &format!("\\left( {} \\right)^{{ {} }}", x.variable, n),
                )
            });
        }
        let akx_plus_b = Expression::from_terms(vec![
            Term::new(self.a.times(&x.coeff), &x.variable),
            Term::constant(self.b.clone()),
        ]);
        Ok(if n == 1 {
            if self.coeff.is_one() {
                Term::new(self.coeff.clone(), &akx_plus_b.to_string())
            } else {
                Term::new(
                    self.coeff.clone(),
                    &format!("\\left( {} \\right)", akx_plus_b),
                )
            }
        } else {
            Term::new(
                self.coeff.clone(),
                &format!("\\left( {} \\right)^{{ {} }}", akx_plus_b, n),
            )
        })
    }

    /// lossy f64 closure for numerical methods (quadrature and the like)
    pub fn to_number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        let (a, b, n, k) = (
            self.a.value_of(),
            self.b.value_of(),
            self.n.value_of(),
            self.coeff.value_of(),
        );
        Box::new(move |x: f64| k * (a * x + b).powf(n))
    }

    /// d/dx k (ax+b)^n = k·n·a (ax+b)^{n-1}
    pub fn derivative(&self) -> PowerFn {
        PowerFn::from_parts(
            self.a.clone(),
            self.b.clone(),
            self.n.minus(&Fraction::one()),
            self.coeff.times(&self.n).times(&self.a),
            &self.variable_atom,
        )
    }

    /// ∫ k (ax+b)^n dx = k/(a(n+1)) (ax+b)^{n+1}
    ///
    /// fails for n = -1: use [`PowerFn::ln_integral`] for that case
    pub fn integral(&self) -> Result<PowerFn, CalculusError> {
        if self.n.is_equal(-1) {
            warn!("powerFn: integral requested for n = -1");
            return Err(CalculusError::IntegralUndefined(
                "power is -1: use the `.ln_integral()` method instead".to_string(),
            ));
        }
        let n_plus_one = self.n.plus(&Fraction::one());
        let new_coeff = self.coeff.divide(&self.a.times(&n_plus_one))?;
        Ok(PowerFn::from_parts(
            self.a.clone(),
            self.b.clone(),
            n_plus_one,
            new_coeff,
            &self.variable_atom,
        ))
    }

    /// F(upper) - F(lower); each bound may be a number or a symbolic term, mixed freely
    pub fn definite_integral(
        &self,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Expression, CalculusError> {
        let antiderivative = self.integral()?;
        let evaluate = |bound: Bound| -> Result<Expression, CalculusError> {
            match bound {
                Bound::Value(x) => Ok(Expression::from(antiderivative.value_at(x)?)),
                Bound::Symbolic(term) => {
                    Ok(Expression::new(antiderivative.algebraic_value_at(&term)?))
                }
            }
        };
        let lower_expression = evaluate(lower.into())?;
        let upper_expression = evaluate(upper.into())?;
        Ok(upper_expression.subtract(lower_expression))
    }

    /// ∫ k/(ax+b) dx = k/a ln| ax + b |
    pub fn ln_integral(&self) -> Result<LnFn, CalculusError> {
        if !self.n.is_equal(-1) {
            return Err(CalculusError::WrongVariantForOperation(self.n.clone()));
        }
        let new_coeff = self.coeff.divide(&self.a)?;
        info!("powerFn: n = -1, handing the integral off to the logarithm");
        Ok(LnFn::from_parts(
            self.a.clone(),
            self.b.clone(),
            new_coeff,
            &self.variable_atom,
        ))
    }

    /// k/a (ln|a·upper+b| - ln|a·lower+b|); the bounds must not enclose the singularity
    pub fn ln_definite_integral(
        &self,
        lower: impl Into<Fraction>,
        upper: impl Into<Fraction>,
    ) -> Result<Term, CalculusError> {
        if !self.n.is_equal(-1) {
            return Err(CalculusError::WrongVariantForOperation(self.n.clone()));
        }
        let linear = self.linear();
        let lower_x = linear.value_at(&lower.into());
        let upper_x = linear.value_at(&upper.into());
        if !lower_x.times(&upper_x).is_positive() {
            return Err(CalculusError::IntegralUndefined(format!(
                "{} vanishes between the bounds, the integral is improper",
                linear
            )));
        }
        let new_coeff = self.coeff.divide(&self.a)?;
        let ln_lower = Ln::new(lower_x.abs(), new_coeff.clone())?;
        let ln_upper = Ln::new(upper_x.abs(), new_coeff)?;
        Ok(ln_upper.minus(&ln_lower))
    }
}

impl fmt::Display for PowerFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_term())
    }
}
