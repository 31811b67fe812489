//! Additive combination of [`Term`]s.
//!
//! Definite integrals are never collapsed to a bare number: both endpoint evaluations are wrapped
//! in an `Expression` and subtracted here, so radicals coming from the trig oracle and symbolic
//! bounds survive exactly. Like terms (same symbol text) are collected, zero terms dropped.
use crate::symbolic::fraction::Fraction;
use crate::symbolic::term::Term;
use crate::symbolic::trig_values::SquareRoot;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    pub fn new(term: Term) -> Expression {
        let mut expression = Expression { terms: Vec::new() };
        expression.add_term(term);
        expression
    }

    pub fn from_terms(terms: Vec<Term>) -> Expression {
        let mut expression = Expression { terms: Vec::new() };
        for term in terms {
            expression.add_term(term);
        }
        expression
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// collects into an existing like term, keeping first-appearance order
    pub fn add_term(&mut self, term: Term) {
        if let Some(existing) = self.terms.iter_mut().find(|t| t.is_like(&term)) {
            existing.coeff = existing.coeff.plus(&term.coeff);
        } else {
            self.terms.push(term);
        }
        self.terms.retain(|t| !t.is_zero());
    }

    pub fn add(&self, other: &Expression) -> Expression {
        let mut sum = self.clone();
        for term in &other.terms {
            sum.add_term(term.clone());
        }
        sum
    }

    pub fn subtract(&self, other: impl Into<Expression>) -> Expression {
        let other: Expression = other.into();
        let mut difference = self.clone();
        for term in &other.terms {
            difference.add_term(term.negative());
        }
        difference
    }

    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.is_constant())
    }

    /// Some(value) when no symbolic term is left
    pub fn constant_value(&self) -> Option<Fraction> {
        if !self.is_constant() {
            return None;
        }
        Some(
            self.terms
                .iter()
                .fold(Fraction::zero(), |acc, t| acc.plus(&t.coeff)),
        )
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.terms.iter();
        match terms.next() {
            None => return write!(f, "0"),
            Some(first) => write!(f, "{}", first)?,
        }
        // later sums go in brackets so the sign in front applies to all of them
        for term in terms {
            if term.coeff.is_negative() {
                write!(f, " - {}", term.negative().render(true))?;
            } else {
                write!(f, " + {}", term.render(true))?;
            }
        }
        Ok(())
    }
}

impl From<Term> for Expression {
    fn from(value: Term) -> Self {
        Expression::new(value)
    }
}

impl From<Fraction> for Expression {
    fn from(value: Fraction) -> Self {
        Expression::new(Term::constant(value))
    }
}

impl From<SquareRoot> for Expression {
    fn from(value: SquareRoot) -> Self {
        Expression::new(value.to_term())
    }
}
