//! One-dimensional polynomials with Horner evaluation.

use std::fmt;
use std::ops::{Add, Mul};

/// A polynomial with real coefficients stored in ascending power order:
/// `coefficients[i]` multiplies `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly1d {
    coefficients: Vec<f64>,
}

impl Poly1d {
    /// Construct a polynomial from coefficients in ascending power order.
    /// No coefficients yields the zero polynomial.
    pub fn new(coefficients: &[f64]) -> Poly1d {
        let coefficients = if coefficients.is_empty() {
            vec![0.0]
        } else {
            coefficients.to_vec()
        };
        Poly1d { coefficients }
    }

    /// Construct the monic polynomial whose roots are `roots`:
    /// the product of `(x - r)` over the given values.
    pub fn from_roots(roots: &[f64]) -> Poly1d {
        let mut poly = Poly1d::new(&[1.0]);
        for &root in roots {
            poly = &poly * &Poly1d::new(&[-root, 1.0]);
        }
        poly
    }

    /// Degree of the polynomial.
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients in ascending power order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate at `x` using Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// The first derivative.
    pub fn derivative(&self) -> Poly1d {
        if self.coefficients.len() == 1 {
            return Poly1d::new(&[0.0]);
        }
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &c)| c * power as f64)
            .collect();
        Poly1d { coefficients }
    }

    /// The antiderivative with integration constant zero.
    pub fn integral(&self) -> Poly1d {
        let mut coefficients = vec![0.0];
        coefficients.extend(
            self.coefficients
                .iter()
                .enumerate()
                .map(|(power, &c)| c / (power + 1) as f64),
        );
        Poly1d { coefficients }
    }
}

impl Add for &Poly1d {
    type Output = Poly1d;

    fn add(self, rhs: &Poly1d) -> Poly1d {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let coefficients = (0..len)
            .map(|i| {
                self.coefficients.get(i).copied().unwrap_or(0.0)
                    + rhs.coefficients.get(i).copied().unwrap_or(0.0)
            })
            .collect();
        Poly1d { coefficients }
    }
}

impl Add for Poly1d {
    type Output = Poly1d;

    fn add(self, rhs: Poly1d) -> Poly1d {
        &self + &rhs
    }
}

impl Mul for &Poly1d {
    type Output = Poly1d;

    fn mul(self, rhs: &Poly1d) -> Poly1d {
        let mut coefficients = vec![0.0; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Poly1d { coefficients }
    }
}

impl Mul for Poly1d {
    type Output = Poly1d;

    fn mul(self, rhs: Poly1d) -> Poly1d {
        &self * &rhs
    }
}

impl fmt::Display for Poly1d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (power, c) in self.coefficients.iter().enumerate() {
            if power > 0 {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{} x", c)?,
                _ => write!(f, "{} x^{}", c, power)?,
            }
        }
        Ok(())
    }
}
