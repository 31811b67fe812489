//! # Exact trigonometric values
//!
//! - [`Angle`] - a degree wrapper, so callers can hand either plain numbers or angles to the trig functions
//! - [`SquareRoot`] - exact value `coeff·√radicand`
//! - [`exact_cos`]/[`exact_sin`] - special-angle oracle
//!
//! Special angles are the integer multiples of 30° and 45°, taken modulo 360 (negative angles included).
//! For these the value is rational or a rational multiple of √2 or √3. Any other angle is rejected with
//! `CalculusError::UnsupportedAngle`; there is no floating point fallback.
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::term::Term;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Angle {
    pub degrees: Fraction,
}

impl Angle {
    pub fn from_degrees(degrees: impl Into<Fraction>) -> Angle {
        Angle {
            degrees: degrees.into(),
        }
    }

    /// q·π radians
    pub fn from_pi_multiple(q: impl Into<Fraction>) -> Angle {
        Angle {
            degrees: q.into().times(&Fraction::from(180)),
        }
    }

    pub fn to_radians(&self) -> f64 {
        self.degrees.value_of().to_radians()
    }
}

impl From<i64> for Angle {
    fn from(value: i64) -> Self {
        Angle::from_degrees(value)
    }
}

impl From<i32> for Angle {
    fn from(value: i32) -> Self {
        Angle::from_degrees(value)
    }
}

impl From<Fraction> for Angle {
    fn from(value: Fraction) -> Self {
        Angle::from_degrees(value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}^{{\\circ}}", self.degrees)
    }
}

/// `coeff · √radicand`; radicand 1 means a plain rational
#[derive(Clone, Debug, PartialEq)]
pub struct SquareRoot {
    pub coeff: Fraction,
    pub radicand: Fraction,
}

impl SquareRoot {
    pub fn new(coeff: Fraction, radicand: Fraction) -> SquareRoot {
        if coeff.is_zero() {
            return SquareRoot::rational(coeff);
        }
        SquareRoot { coeff, radicand }
    }

    pub fn rational(value: Fraction) -> SquareRoot {
        SquareRoot {
            coeff: value,
            radicand: Fraction::one(),
        }
    }

    pub fn is_rational(&self) -> bool {
        self.radicand.is_one()
    }

    pub fn times(&self, k: &Fraction) -> SquareRoot {
        SquareRoot::new(self.coeff.times(k), self.radicand.clone())
    }

    pub fn to_term(&self) -> Term {
        if self.is_rational() {
            Term::constant(self.coeff.clone())
        } else {
            Term::new(self.coeff.clone(), &format!("\\sqrt{{ {} }}", self.radicand))
        }
    }

    pub fn value_of(&self) -> f64 {
        self.coeff.value_of() * self.radicand.value_of().sqrt()
    }
}

impl fmt::Display for SquareRoot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_term())
    }
}

/// cos of a first-quadrant reference angle
fn reference_cos(reference: i64) -> SquareRoot {
    let half = Fraction::half();
    match reference {
        0 => SquareRoot::rational(Fraction::one()),
        30 => SquareRoot::new(half, Fraction::from(3)),
        45 => SquareRoot::new(half, Fraction::from(2)),
        60 => SquareRoot::rational(half),
        _ => SquareRoot::rational(Fraction::zero()),
    }
}

pub fn exact_cos(degrees: &Fraction) -> Result<SquareRoot, CalculusError> {
    let unsupported = || CalculusError::UnsupportedAngle(degrees.clone());
    let whole = degrees.to_i64().ok_or_else(unsupported)?;
    let r = whole.rem_euclid(360);
    if r % 30 != 0 && r % 45 != 0 {
        return Err(unsupported());
    }
    let value = match r {
        0..=90 => reference_cos(r),
        91..=180 => reference_cos(180 - r).times(&Fraction::from(-1)),
        181..=270 => reference_cos(r - 180).times(&Fraction::from(-1)),
        _ => reference_cos(360 - r),
    };
    Ok(value)
}

/// sin θ = cos(90° - θ)
pub fn exact_sin(degrees: &Fraction) -> Result<SquareRoot, CalculusError> {
    exact_cos(&Fraction::from(90).minus(degrees))
        .map_err(|_| CalculusError::UnsupportedAngle(degrees.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_matches_floats() {
        for deg in (-360..=720).step_by(15) {
            let d = Fraction::from(deg as i64);
            if deg % 30 != 0 && deg % 45 != 0 {
                assert!(exact_cos(&d).is_err());
                continue;
            }
            let rad = (deg as f64).to_radians();
            assert_relative_eq!(exact_cos(&d).unwrap().value_of(), rad.cos(), epsilon = 1e-12);
            assert_relative_eq!(exact_sin(&d).unwrap().value_of(), rad.sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rendering() {
        assert_eq!(exact_cos(&Fraction::from(30)).unwrap().to_string(), "\\frac{ 1 }{ 2 }\\sqrt{ 3 }");
        assert_eq!(exact_sin(&Fraction::from(90)).unwrap().to_string(), "1");
        assert_eq!(exact_cos(&Fraction::from(90)).unwrap().to_string(), "0");
        assert_eq!(exact_cos(&Fraction::from(135)).unwrap().to_string(), "- \\frac{ 1 }{ 2 }\\sqrt{ 2 }");
    }

    #[test]
    fn test_unsupported_angles() {
        assert_eq!(
            exact_cos(&Fraction::from(10)),
            Err(CalculusError::UnsupportedAngle(Fraction::from(10)))
        );
        let half_degree = Fraction::new(1, 2).unwrap();
        assert_eq!(
            exact_sin(&half_degree),
            Err(CalculusError::UnsupportedAngle(half_degree.clone()))
        );
    }

    #[test]
    fn test_angle_wrapper() {
        assert_eq!(Angle::from_pi_multiple(Fraction::new(1, 2).unwrap()).degrees, Fraction::from(90));
        assert_eq!(Angle::from(45).degrees, Fraction::from(45));
        assert_relative_eq!(Angle::from(180).to_radians(), std::f64::consts::PI);
    }
}
