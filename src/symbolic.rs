//! # Symbolic calculus on elementary functions
//!
//! Exact rational arithmetic plus three function shapes, each a linear argument `ax + b` wrapped in
//! an outer function and scaled by a constant:
//! - [`power_fn::PowerFn`]: `k (ax + b)^n`
//! - [`trig_fn::TrigFn`]: `k cos(ax + b)`, `k sin(ax + b)`
//! - [`ln_fn::LnFn`]: `k ln|ax + b|`
//!
//! Every shape renders to LaTeX, differentiates, integrates, evaluates exactly and hands out an
//! `f64` closure. [`elementary::ElementaryFunction`] dispatches across the family.
//!
//! # Example
//! ```
//! use RustedCalculus::symbolic::function_options::FunctionOptions;
//! use RustedCalculus::symbolic::power_fn::PowerFn;
//! let f = PowerFn::new(FunctionOptions::new().a(2).b(1).n(3)).unwrap();
//! assert_eq!(f.to_string(), "( 2x + 1 )^{ 3 }");
//! assert_eq!(f.derivative().to_string(), "6( 2x + 1 )^{ 2 }");
//! assert_eq!(f.value_at(1).unwrap().to_string(), "27");
//! ```
/// errors shared by the whole calculus layer
pub mod calculus_errors;
/// exact rational numbers with LaTeX rendering
pub mod fraction;
/// `ax + b` and its notation
pub mod linear_polynomial;
/// `coeff · symbol` and sums of them
pub mod expression;
pub mod term;
/// exact cos/sin of special angles
pub mod trig_values;
/// symbolic natural logarithm of a rational
pub mod logarithm;
/// builder-style options for constructing functions
pub mod function_options;
pub mod ln_fn;
pub mod power_fn;
pub mod trig_fn;
/// the closed family and the trait dispatching over it
pub mod elementary;
