//! Scalar root finders: bisection, secant, Newton, Dekker and Brent.
//!
//! Every solver is parameterized by an epsilon (the residual magnitude at
//! which a value counts as a root) and an iteration budget. Exhausting the
//! budget yields [`RootError::MaxIterations`] instead of a value.

use crate::errors::RootError;

const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Iteration bookkeeping shared by the solvers.
#[derive(Clone, Copy, Debug)]
struct Iteration {
    epsilon: f64,
    max_iterations: u32,
    count: u32,
}

impl Iteration {
    fn new(epsilon: f64, max_iterations: u32) -> Iteration {
        Iteration {
            epsilon,
            max_iterations,
            count: 0,
        }
    }

    fn reset(&mut self) {
        self.count = 0;
    }

    fn advance(&mut self) -> Result<(), RootError> {
        self.count += 1;
        if self.count > self.max_iterations {
            return Err(RootError::MaxIterations {
                max: self.max_iterations,
            });
        }
        Ok(())
    }
}

/// Keep `b` the endpoint with the smaller residual.
fn orient(a: &mut f64, b: &mut f64, fa: &mut f64, fb: &mut f64) {
    if fa.abs() < fb.abs() {
        std::mem::swap(a, b);
        std::mem::swap(fa, fb);
    }
}

fn essentially_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= a.abs().min(b.abs()) * f64::EPSILON
}

/// Bisection root finding method.
pub struct Bisection<F> {
    iteration: Iteration,
    f: F,
}

impl<F: Fn(f64) -> f64> Bisection<F> {
    pub fn new(epsilon: f64, f: F) -> Bisection<F> {
        Bisection::with_max_iterations(epsilon, DEFAULT_MAX_ITERATIONS, f)
    }

    pub fn with_max_iterations(epsilon: f64, max_iterations: u32, f: F) -> Bisection<F> {
        Bisection {
            iteration: Iteration::new(epsilon, max_iterations),
            f,
        }
    }

    /// Return the number of iterations the last solve used.
    pub fn num_iterations(&self) -> u32 {
        self.iteration.count
    }

    /// Solve for a root in the range `[a, b]`.
    ///
    /// The bound function values should bracket zero (`f(a)` and `f(b)` of
    /// opposite sign) for the halving to converge.
    pub fn solve(&mut self, mut a: f64, mut b: f64) -> Result<f64, RootError> {
        self.iteration.reset();

        // Orient the interval so f(a) >= f(b).
        if (self.f)(a) < (self.f)(b) {
            std::mem::swap(&mut a, &mut b);
        }

        let mut x = 0.5 * (a + b);
        let mut fx = (self.f)(x);

        while fx.abs() >= self.iteration.epsilon {
            if fx < 0.0 {
                b = x;
            } else {
                a = x;
            }
            x = 0.5 * (a + b);
            fx = (self.f)(x);

            self.iteration.advance()?;
        }

        Ok(x)
    }
}

/// Secant root finding method.
pub struct Secant<F> {
    iteration: Iteration,
    f: F,
}

impl<F: Fn(f64) -> f64> Secant<F> {
    pub fn new(epsilon: f64, f: F) -> Secant<F> {
        Secant::with_max_iterations(epsilon, DEFAULT_MAX_ITERATIONS, f)
    }

    pub fn with_max_iterations(epsilon: f64, max_iterations: u32, f: F) -> Secant<F> {
        Secant {
            iteration: Iteration::new(epsilon, max_iterations),
            f,
        }
    }

    pub fn num_iterations(&self) -> u32 {
        self.iteration.count
    }

    /// Solve for a root near the range `[a, b]`.
    pub fn solve(&mut self, mut a: f64, mut b: f64) -> Result<f64, RootError> {
        self.iteration.reset();

        if (self.f)(a) > (self.f)(b) {
            std::mem::swap(&mut a, &mut b);
        }

        let mut x = b;
        let mut last_x = a;
        let mut fx = (self.f)(b);
        let mut last_fx = (self.f)(a);

        while fx.abs() >= self.iteration.epsilon {
            let next = x - fx * (x - last_x) / (fx - last_fx);
            last_fx = fx;
            last_x = x;
            x = next;
            fx = (self.f)(x);

            self.iteration.advance()?;
        }

        Ok(x)
    }
}

/// Newton root finding method.
pub struct Newton<F, D> {
    iteration: Iteration,
    f: F,
    f_prime: D,
}

impl<F, D> Newton<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(epsilon: f64, f: F, f_prime: D) -> Newton<F, D> {
        Newton::with_max_iterations(epsilon, DEFAULT_MAX_ITERATIONS, f, f_prime)
    }

    pub fn with_max_iterations(
        epsilon: f64,
        max_iterations: u32,
        f: F,
        f_prime: D,
    ) -> Newton<F, D> {
        Newton {
            iteration: Iteration::new(epsilon, max_iterations),
            f,
            f_prime,
        }
    }

    pub fn num_iterations(&self) -> u32 {
        self.iteration.count
    }

    /// Solve for the root nearest the starting point `x`.
    pub fn solve(&mut self, mut x: f64) -> Result<f64, RootError> {
        self.iteration.reset();

        let mut fx = (self.f)(x);

        while fx.abs() >= self.iteration.epsilon {
            x -= fx / (self.f_prime)(x);
            fx = (self.f)(x);

            self.iteration.advance()?;
        }

        Ok(x)
    }
}

/// Dekker's root finding method: bisection with secant acceleration.
pub struct Dekker<F> {
    iteration: Iteration,
    f: F,
}

impl<F: Fn(f64) -> f64> Dekker<F> {
    pub fn new(epsilon: f64, f: F) -> Dekker<F> {
        Dekker::with_max_iterations(epsilon, DEFAULT_MAX_ITERATIONS, f)
    }

    pub fn with_max_iterations(epsilon: f64, max_iterations: u32, f: F) -> Dekker<F> {
        Dekker {
            iteration: Iteration::new(epsilon, max_iterations),
            f,
        }
    }

    pub fn num_iterations(&self) -> u32 {
        self.iteration.count
    }

    /// Solve for a root in the range `[a, b]`, where `f(a)` and `f(b)`
    /// bracket zero.
    pub fn solve(&mut self, mut a: f64, mut b: f64) -> Result<f64, RootError> {
        self.iteration.reset();

        let mut fa = (self.f)(a);
        let mut fb = (self.f)(b);
        orient(&mut a, &mut b, &mut fa, &mut fb);

        let mut last_b = a;
        let mut last_fb = fa;

        while fb.abs() > self.iteration.epsilon && (b - a).abs() > self.iteration.epsilon {
            // Secant estimate; a division by zero yields NaN, which the
            // acceptance test below rejects in favor of the midpoint.
            let s = b - fb * (b - last_b) / (fb - last_fb);
            let m = 0.5 * (a + b);

            last_b = b;
            b = if Self::secant_acceptable(b, s, m) { s } else { m };

            last_fb = fb;
            fb = (self.f)(b);

            if fa * fb > 0.0 && fb * last_fb < 0.0 {
                a = last_b;
            }

            fa = (self.f)(a);
            orient(&mut a, &mut b, &mut fa, &mut fb);

            self.iteration.advance()?;
        }

        Ok(b)
    }

    /// The secant estimate is only usable if it falls strictly between the
    /// midpoint and the current best endpoint.
    fn secant_acceptable(b: f64, s: f64, m: f64) -> bool {
        (b > m && s > m && s < b) || (b < m && s > b && s < m)
    }
}

/// Brent's root finding method: bisection, secant and inverse quadratic
/// interpolation.
pub struct Brent<F> {
    iteration: Iteration,
    f: F,
}

impl<F: Fn(f64) -> f64> Brent<F> {
    pub fn new(epsilon: f64, f: F) -> Brent<F> {
        Brent::with_max_iterations(epsilon, DEFAULT_MAX_ITERATIONS, f)
    }

    pub fn with_max_iterations(epsilon: f64, max_iterations: u32, f: F) -> Brent<F> {
        Brent {
            iteration: Iteration::new(epsilon, max_iterations),
            f,
        }
    }

    pub fn num_iterations(&self) -> u32 {
        self.iteration.count
    }

    /// Solve for a root in the range `[a, b]`, where `f(a)` and `f(b)`
    /// bracket zero.
    pub fn solve(&mut self, mut a: f64, mut b: f64) -> Result<f64, RootError> {
        self.iteration.reset();

        let mut fa = (self.f)(a);
        let mut fb = (self.f)(b);
        orient(&mut a, &mut b, &mut fa, &mut fb);

        let mut last_b = a;
        let mut penultimate_b = a;
        let mut last_fb = fa;
        let mut s = f64::MAX;
        let mut fs = f64::MAX;
        let mut bisected = true;

        let epsilon = self.iteration.epsilon;
        while fb.abs() > epsilon && fs.abs() > epsilon && (b - a).abs() > epsilon {
            s = if Self::use_inverse_quadratic(fa, fb, last_fb) {
                Self::inverse_quadratic(a, b, last_b, fa, fb, last_fb)
            } else {
                b - fb * (b - a) / (fb - fa)
            };

            if self.use_bisection(bisected, b, last_b, penultimate_b, s) {
                s = 0.5 * (a + b);
                bisected = true;
            } else {
                bisected = false;
            }

            fs = (self.f)(s);
            penultimate_b = last_b;
            last_b = b;

            if fa * fs < 0.0 {
                b = s;
            } else {
                a = s;
            }

            fa = (self.f)(a);
            last_fb = fb;
            fb = (self.f)(b);
            orient(&mut a, &mut b, &mut fa, &mut fb);

            self.iteration.advance()?;
        }

        Ok(if fb < fs { b } else { s })
    }

    fn use_inverse_quadratic(fa: f64, fb: f64, last_fb: f64) -> bool {
        !essentially_equal(fa, last_fb) && essentially_equal(fb, last_fb)
    }

    fn inverse_quadratic(a: f64, b: f64, last_b: f64, fa: f64, fb: f64, last_fb: f64) -> f64 {
        a * fb * last_fb / ((fa - fb) * (fa - last_fb))
            + b * fa * last_fb / ((fb - fa) * (fb - last_fb))
            + last_b * fa * fb / ((last_fb - fa) * (last_fb - fb))
    }

    /// Fall back to bisection when the interpolated step would be too
    /// rough, too small, or the interval has stopped shrinking.
    fn use_bisection(
        &self,
        bisected: bool,
        b: f64,
        last_b: f64,
        penultimate_b: f64,
        s: f64,
    ) -> bool {
        let delta = self.iteration.epsilon + f64::MIN_POSITIVE;

        (bisected && (s - b).abs() >= 0.5 * (b - last_b).abs())
            || (!bisected && (s - b).abs() >= 0.5 * (last_b - penultimate_b).abs())
            || (bisected && (b - last_b).abs() < delta)
            || (!bisected && (last_b - penultimate_b).abs() < delta)
    }
}
