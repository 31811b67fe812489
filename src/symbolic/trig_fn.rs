//! # Trigonometric functions `k cos(ax + b)` and `k sin(ax + b)`
//!
//! One struct covers both, tagged by [`TrigKind`]. Differentiation and integration cross between
//! the two kinds:
//! - cos → sin with coefficient `-k·a` (derivative), `k/a` (integral)
//! - sin → cos with coefficient `k·a` (derivative), `-k/a` (integral)
//!
//! Exact evaluation goes through the special-angle oracle, so the argument `ax + b` is read in
//! degrees and must land on a multiple of 30° or 45°. The numeric closure from
//! [`TrigFn::to_number_function`] works in radians, like the rest of `f64` maths.
//!
//! Unlike the power member, `a` is never folded into the coefficient: `3cos( 2x )` stays as written.
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::linear_polynomial::LinearPolynomial;
use crate::symbolic::term::Term;
use crate::symbolic::trig_values::{Angle, SquareRoot, exact_cos, exact_sin};
use log::warn;
use std::fmt;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TrigKind {
    Cos,
    Sin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrigFn {
    kind: TrigKind,
    a: Fraction,
    b: Fraction,
    coeff: Fraction,
    variable_atom: String,
}

impl TrigFn {
    /// `n` of the options is ignored
    pub fn new(kind: TrigKind, options: FunctionOptions) -> Result<TrigFn, CalculusError> {
        if options.a.is_zero() {
            warn!("{}Fn rejected: a = 0", kind);
            return Err(CalculusError::InvalidArgument(format!(
                "{}Fn ERROR: a must be non-zero",
                kind
            )));
        }
        Ok(TrigFn {
            kind,
            a: options.a,
            b: options.b,
            coeff: options.coeff,
            variable_atom: options.variable_atom,
        })
    }

    pub fn cos(options: FunctionOptions) -> Result<TrigFn, CalculusError> {
        TrigFn::new(TrigKind::Cos, options)
    }

    pub fn sin(options: FunctionOptions) -> Result<TrigFn, CalculusError> {
        TrigFn::new(TrigKind::Sin, options)
    }

    /// same argument, other kind, new coefficient
    fn sibling(&self, kind: TrigKind, coeff: Fraction) -> TrigFn {
        TrigFn {
            kind,
            a: self.a.clone(),
            b: self.b.clone(),
            coeff,
            variable_atom: self.variable_atom.clone(),
        }
    }

    pub fn kind(&self) -> TrigKind {
        self.kind
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
            &format!("\\{} {}", self.kind, self.linear().wrapped()),
        )
    }

    /// exact value at x degrees (a plain number or an [`Angle`]);
    /// fails with `UnsupportedAngle` unless `ax + b` is a special angle
    pub fn value_at(&self, x: impl Into<Angle>) -> Result<SquareRoot, CalculusError> {
        let x: Angle = x.into();
        let angle = self.linear().value_at(&x.degrees);
        let value = match self.kind {
            TrigKind::Cos => exact_cos(&angle)?,
            TrigKind::Sin => exact_sin(&angle)?,
        };
        Ok(value.times(&self.coeff))
    }

    /// lossy f64 closure, x in radians
    pub fn to_number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        let (a, b, k) = (self.a.value_of(), self.b.value_of(), self.coeff.value_of());
        match self.kind {
            TrigKind::Cos => Box::new(move |x: f64| k * (a * x + b).cos()),
            TrigKind::Sin => Box::new(move |x: f64| k * (a * x + b).sin()),
        }
    }

    pub fn derivative(&self) -> TrigFn {
        match self.kind {
            TrigKind::Cos => self.sibling(TrigKind::Sin, self.coeff.times(&self.a).negative()),
            TrigKind::Sin => self.sibling(TrigKind::Cos, self.coeff.times(&self.a)),
        }
    }

    pub fn integral(&self) -> TrigFn {
        // a is non-zero by construction
        let k_over_a = Fraction::from_big(self.coeff.as_big() / self.a.as_big());
        match self.kind {
            TrigKind::Cos => self.sibling(TrigKind::Sin, k_over_a),
            TrigKind::Sin => self.sibling(TrigKind::Cos, k_over_a.negative()),
        }
    }

    /// F(upper) - F(lower) with both bounds in degrees, kept exact (radicals included)
    pub fn definite_integral(
        &self,
        lower: impl Into<Angle>,
        upper: impl Into<Angle>,
    ) -> Result<Expression, CalculusError> {
        let antiderivative = self.integral();
        let lower_value = antiderivative.value_at(lower)?;
        let upper_expression = Expression::from(antiderivative.value_at(upper)?);
        Ok(upper_expression.subtract(lower_value))
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_term())
    }
}
