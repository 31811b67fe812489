//! # Elementary function family
//!
//! Closed sum type over the supported shapes plus the dispatch table of what each transformation
//! produces:
//!
//! | member | derivative | integral |
//! |---|---|---|
//! | `PowerFn(n)` | `PowerFn(n-1)` | `PowerFn(n+1)`, or `LnFn` when n = -1 |
//! | `TrigFn(cos)` | `TrigFn(sin)` | `TrigFn(sin)` |
//! | `TrigFn(sin)` | `TrigFn(cos)` | `TrigFn(cos)` |
//! | `LnFn` | `PowerFn(-1)` | not in the family |
//!
//! Unlike [`PowerFn::integral`], [`ElementaryOps::integrate`] performs the power -1 hand-off on its own.
//!
//! # Example
//! ```
//! use RustedCalculus::symbolic::elementary::{ElementaryFunction, ElementaryOps};
//! use RustedCalculus::symbolic::function_options::FunctionOptions;
//! use RustedCalculus::symbolic::power_fn::PowerFn;
//! let f: ElementaryFunction = PowerFn::new(FunctionOptions::new().b(2).n(-1)).unwrap().into();
//! assert_eq!(f.integrate().unwrap().latex(), "\\ln \\left| x + 2 \\right|");
//! ```
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::ln_fn::LnFn;
use crate::symbolic::power_fn::PowerFn;
use crate::symbolic::trig_fn::{TrigFn, TrigKind};
use enum_dispatch::enum_dispatch;
use log::info;
use std::fmt;

#[enum_dispatch]
#[derive(Clone, Debug, PartialEq)]
pub enum ElementaryFunction {
    PowerFn,
    TrigFn,
    LnFn,
}

/// capabilities shared by every member of the family
#[enum_dispatch(ElementaryFunction)]
pub trait ElementaryOps {
    fn differentiate(&self) -> ElementaryFunction;
    fn integrate(&self) -> Result<ElementaryFunction, CalculusError>;
    /// exact value at x (degrees for trig members) as a renderable expression
    fn evaluate(&self, x: &Fraction) -> Result<Expression, CalculusError>;
    fn definite_integrate(
        &self,
        lower: &Fraction,
        upper: &Fraction,
    ) -> Result<Expression, CalculusError>;
    fn number_function(&self) -> Box<dyn Fn(f64) -> f64>;
    fn latex(&self) -> String;
}

impl ElementaryOps for PowerFn {
    fn differentiate(&self) -> ElementaryFunction {
        self.derivative().into()
    }

    fn integrate(&self) -> Result<ElementaryFunction, CalculusError> {
        if self.n().is_equal(-1) {
            info!("integrating {}: power -1 hands off to ln", self);
            return Ok(self.ln_integral()?.into());
        }
        Ok(self.integral()?.into())
    }

    fn evaluate(&self, x: &Fraction) -> Result<Expression, CalculusError> {
        Ok(Expression::from(self.value_at(x)?))
    }

    fn definite_integrate(
        &self,
        lower: &Fraction,
        upper: &Fraction,
    ) -> Result<Expression, CalculusError> {
        if self.n().is_equal(-1) {
            return Ok(Expression::new(
                self.ln_definite_integral(lower, upper)?,
            ));
        }
        self.definite_integral(lower.clone(), upper.clone())
    }

    fn number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        self.to_number_function()
    }

    fn latex(&self) -> String {
        self.to_string()
    }
}

impl ElementaryOps for TrigFn {
    fn differentiate(&self) -> ElementaryFunction {
        self.derivative().into()
    }

    fn integrate(&self) -> Result<ElementaryFunction, CalculusError> {
        Ok(self.integral().into())
    }

    fn evaluate(&self, x: &Fraction) -> Result<Expression, CalculusError> {
        Ok(Expression::from(self.value_at(x.clone())?))
    }

    fn definite_integrate(
        &self,
        lower: &Fraction,
        upper: &Fraction,
    ) -> Result<Expression, CalculusError> {
        self.definite_integral(lower.clone(), upper.clone())
    }

    fn number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        self.to_number_function()
    }

    fn latex(&self) -> String {
        self.to_string()
    }
}

impl ElementaryOps for LnFn {
    fn differentiate(&self) -> ElementaryFunction {
        self.derivative().into()
    }

    fn integrate(&self) -> Result<ElementaryFunction, CalculusError> {
        Err(CalculusError::IntegralUndefined(format!(
            "the antiderivative of {} is outside the elementary family",
            self
        )))
    }

    fn evaluate(&self, x: &Fraction) -> Result<Expression, CalculusError> {
        Ok(Expression::new(self.value_at(x)?.to_term()))
    }

    fn definite_integrate(
        &self,
        _lower: &Fraction,
        _upper: &Fraction,
    ) -> Result<Expression, CalculusError> {
        Err(CalculusError::IntegralUndefined(format!(
            "no closed-form antiderivative of {} to evaluate between bounds",
            self
        )))
    }

    fn number_function(&self) -> Box<dyn Fn(f64) -> f64> {
        self.to_number_function()
    }

    fn latex(&self) -> String {
        self.to_string()
    }
}

impl ElementaryFunction {
    pub fn power(options: FunctionOptions) -> Result<ElementaryFunction, CalculusError> {
        Ok(PowerFn::new(options)?.into())
    }

    pub fn trig(kind: TrigKind, options: FunctionOptions) -> Result<ElementaryFunction, CalculusError> {
        Ok(TrigFn::new(kind, options)?.into())
    }

    pub fn ln(options: FunctionOptions) -> Result<ElementaryFunction, CalculusError> {
        Ok(LnFn::new(options)?.into())
    }

    /// short tag used in logs and task documents
    pub fn kind_name(&self) -> String {
        match self {
            ElementaryFunction::PowerFn(_) => "power".to_string(),
            ElementaryFunction::TrigFn(f) => f.kind().to_string(),
            ElementaryFunction::LnFn(_) => "ln".to_string(),
        }
    }

    pub fn coeff(&self) -> &Fraction {
        match self {
            ElementaryFunction::PowerFn(f) => f.coeff(),
            ElementaryFunction::TrigFn(f) => f.coeff(),
            ElementaryFunction::LnFn(f) => f.coeff(),
        }
    }

    /// k-th derivative
    pub fn nth_derivative(&self, k: usize) -> ElementaryFunction {
        (0..k).fold(self.clone(), |f, _| f.differentiate())
    }
}

impl fmt::Display for ElementaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.latex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        let power = ElementaryFunction::power(FunctionOptions::new().n(3)).unwrap();
        assert_eq!(power.differentiate().kind_name(), "power");
        assert_eq!(power.integrate().unwrap().kind_name(), "power");

        let singular = ElementaryFunction::power(FunctionOptions::new().b(2).n(-1)).unwrap();
        let log = singular.integrate().unwrap();
        assert_eq!(log.kind_name(), "ln");
        assert_eq!(log.differentiate(), singular);
        assert!(matches!(log.integrate(), Err(CalculusError::IntegralUndefined(_))));

        let cos = ElementaryFunction::trig(TrigKind::Cos, FunctionOptions::new()).unwrap();
        assert_eq!(cos.differentiate().kind_name(), "sin");
        assert_eq!(cos.integrate().unwrap().kind_name(), "sin");
        assert_eq!(cos.nth_derivative(2).kind_name(), "cos");
        assert_eq!(cos.nth_derivative(2).coeff(), &Fraction::from(-1));
    }

    #[test]
    fn test_evaluate_and_definite() {
        let power = ElementaryFunction::power(FunctionOptions::new().n(2).coeff(3)).unwrap();
        assert_eq!(power.evaluate(&Fraction::from(2)).unwrap().to_string(), "12");
        assert_eq!(
            power.definite_integrate(&Fraction::zero(), &Fraction::one()).unwrap().to_string(),
            "1"
        );

        let reciprocal = ElementaryFunction::power(FunctionOptions::new().b(2).n(-1)).unwrap();
        assert_eq!(
            reciprocal.definite_integrate(&Fraction::zero(), &Fraction::from(4)).unwrap().to_string(),
            "\\ln 3"
        );

        let sin = ElementaryFunction::trig(TrigKind::Sin, FunctionOptions::new()).unwrap();
        assert_eq!(sin.evaluate(&Fraction::from(30)).unwrap().to_string(), "\\frac{ 1 }{ 2 }");

        let log = ElementaryFunction::ln(FunctionOptions::new().b(2)).unwrap();
        assert_eq!(log.evaluate(&Fraction::one()).unwrap().to_string(), "\\ln 3");
        assert!(log.definite_integrate(&Fraction::zero(), &Fraction::one()).is_err());
    }

    #[test]
    fn test_display_and_number_function() {
        let cos = ElementaryFunction::trig(TrigKind::Cos, FunctionOptions::new().a(2)).unwrap();
        assert_eq!(cos.to_string(), "\\cos ( 2x )");
        let f = cos.number_function();
        assert!((f(0.0) - 1.0).abs() < 1e-12);
    }
}
