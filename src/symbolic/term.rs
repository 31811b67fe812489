//! `coeff · symbol` atom. The symbol is already-rendered LaTeX text (`x`, `\sqrt{ 3 }`,
//! `\ln \left| x + 2 \right|` ...); an empty symbol makes the term a plain constant.
use crate::symbolic::fraction::Fraction;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub coeff: Fraction,
    pub variable: String,
}

impl Term {
    pub fn new(coeff: Fraction, variable: &str) -> Term {
        Term {
            coeff,
            variable: variable.to_string(),
        }
    }

    pub fn constant(coeff: Fraction) -> Term {
        Term {
            coeff,
            variable: String::new(),
        }
    }

    pub fn is_constant(&self) -> bool {
        self.variable.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn negative(&self) -> Term {
        Term {
            coeff: self.coeff.negative(),
            variable: self.variable.clone(),
        }
    }

    pub fn times(&self, k: &Fraction) -> Term {
        Term {
            coeff: self.coeff.times(k),
            variable: self.variable.clone(),
        }
    }

    /// same symbol, so the two terms can be collected
    pub fn is_like(&self, other: &Term) -> bool {
        self.variable == other.variable
    }

    /// the symbol is a sum or starts with a sign, e.g. `y + 2` or `3\ln 2 - \ln 5`;
    /// ` + `/` - ` inside brackets, braces or `\left … \right` pairs do not count
    pub fn is_compound(&self) -> bool {
        let symbol = self.variable.trim();
        if symbol.starts_with('-') {
            return true;
        }
        let bytes = symbol.as_bytes();
        let mut depth: i32 = 0;
        let mut i = 0;
        while i < bytes.len() {
            let rest = &bytes[i..];
            if rest.starts_with(b"\\left") {
                // skip the delimiter too
                depth += 1;
                i += 6;
                continue;
            }
            if rest.starts_with(b"\\right") {
                depth -= 1;
                i += 7;
                continue;
            }
            match bytes[i] {
                b'(' | b'{' | b'[' => depth += 1,
                b')' | b'}' | b']' => depth -= 1,
                b' ' if depth == 0 && (rest.starts_with(b" + ") || rest.starts_with(b" - ")) => {
                    return true;
                }
                _ => {}
            }
            i += 1;
        }
        false
    }

    /// rendering with a compound symbol put in `\left( … \right)` whenever a coefficient or an
    /// outer sign is attached to it (or always, with `force_brackets`)
    pub fn render(&self, force_brackets: bool) -> String {
        if self.coeff.is_zero() {
            return "0".to_string();
        }
        if self.is_constant() {
            return self.coeff.to_string();
        }
        let symbol = if self.is_compound() && (force_brackets || !self.coeff.is_one()) {
            format!("\\left( {} \\right)", self.variable)
        } else {
            self.variable.clone()
        };
        if self.coeff.is_one() {
            symbol
        } else if self.coeff.is_equal(-1) {
            format!("-{}", symbol)
        } else {
            format!("{}{}", self.coeff, symbol)
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl From<Fraction> for Term {
    fn from(value: Fraction) -> Self {
        Term::constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Term::new(Fraction::from(6), "x").to_string(), "6x");
        assert_eq!(Term::new(Fraction::one(), "x").to_string(), "x");
        assert_eq!(Term::new(Fraction::from(-1), "y").to_string(), "-y");
        assert_eq!(Term::new(Fraction::zero(), "y").to_string(), "0");
        assert_eq!(Term::constant(Fraction::from(7)).to_string(), "7");
        assert_eq!(
            Term::new(Fraction::new(1, 2).unwrap(), "\\sqrt{ 3 }").to_string(),
            "\\frac{ 1 }{ 2 }\\sqrt{ 3 }"
        );
    }

    #[test]
    fn test_compound_symbols() {
        let sum = Term::new(Fraction::one(), "y + 2");
        assert!(sum.is_compound());
        assert_eq!(sum.to_string(), "y + 2");
        assert_eq!(sum.negative().to_string(), "-\\left( y + 2 \\right)");
        assert_eq!(sum.times(&Fraction::from(3)).to_string(), "3\\left( y + 2 \\right)");
        assert_eq!(sum.render(true), "\\left( y + 2 \\right)");
        assert!(Term::new(Fraction::one(), "-y").is_compound());
        // sums hidden inside brackets stay atomic
        assert!(!Term::new(Fraction::one(), "\\left( y + 2 \\right)^{ 2 }").is_compound());
        assert!(!Term::new(Fraction::one(), "( x - 1 )^{ 3 }").is_compound());
        assert!(!Term::new(Fraction::one(), "\\ln \\left| x + 2 \\right|").is_compound());
        assert!(!Term::new(Fraction::one(), "\\sqrt{ 3 }").is_compound());
    }

    #[test]
    fn test_negative_and_times() {
        let t = Term::new(Fraction::from(2), "x");
        assert_eq!(t.negative().coeff, Fraction::from(-2));
        assert_eq!(t.times(&Fraction::from(3)).coeff, Fraction::from(6));
        assert!(t.is_like(&Term::new(Fraction::from(5), "x")));
        assert!(!t.is_like(&Term::constant(Fraction::from(5))));
    }
}
