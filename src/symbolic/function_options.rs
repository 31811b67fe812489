//! Configuration record shared by every member of the elementary function family.
//!
//! Defaults: `a = 1, b = 0, n = 1, coeff = 1, variable_atom = "x"`. Trig and log members ignore `n`.
//! ```
//! use RustedCalculus::symbolic::function_options::FunctionOptions;
//! use RustedCalculus::symbolic::fraction::Fraction;
//! let options = FunctionOptions::new().a(2).b(1).n(3).coeff(Fraction::new(1, 2).unwrap());
//! assert_eq!(options.n, Fraction::from(3));
//! ```
use crate::symbolic::fraction::Fraction;

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionOptions {
    /// linear coefficient of the argument, must be non-zero
    pub a: Fraction,
    /// constant of the argument
    pub b: Fraction,
    /// exponent (power family only)
    pub n: Fraction,
    /// overall multiplicative constant
    pub coeff: Fraction,
    pub variable_atom: String,
}

impl Default for FunctionOptions {
    fn default() -> Self {
        FunctionOptions {
            a: Fraction::one(),
            b: Fraction::zero(),
            n: Fraction::one(),
            coeff: Fraction::one(),
            variable_atom: "x".to_string(),
        }
    }
}

impl FunctionOptions {
    pub fn new() -> FunctionOptions {
        FunctionOptions::default()
    }

    pub fn a(mut self, a: impl Into<Fraction>) -> Self {
        self.a = a.into();
        self
    }

    pub fn b(mut self, b: impl Into<Fraction>) -> Self {
        self.b = b.into();
        self
    }

    pub fn n(mut self, n: impl Into<Fraction>) -> Self {
        self.n = n.into();
        self
    }

    pub fn coeff(mut self, coeff: impl Into<Fraction>) -> Self {
        self.coeff = coeff.into();
        self
    }

    pub fn variable_atom(mut self, variable_atom: &str) -> Self {
        self.variable_atom = variable_atom.to_string();
        self
    }
}
