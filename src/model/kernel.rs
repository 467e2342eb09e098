//! Goal-count probability kernels
//!
//! Both kernels map an expected-goals rate and a goal count to a probability
//! mass. The negative binomial drives the outcome model; the zero-inflated
//! Poisson drives the scoreline table.

use statrs::distribution::{Discrete, NegativeBinomial as NegBinomialDist, Poisson};

/// Probability mass of scoring exactly `k` goals given rate `lambda`
pub trait GoalCountKernel: Send + Sync {
    fn pmf(&self, lambda: f64, k: u32) -> f64;
}

/// Gamma-Poisson (negative binomial) goal counts with fixed dispersion
///
/// p = r / (r + lambda), P(k) = C(k + r - 1, k) * p^r * (1 - p)^k
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeBinomial {
    pub dispersion: u32,
}

impl NegativeBinomial {
    pub fn new(dispersion: u32) -> Self {
        Self { dispersion }
    }
}

impl Default for NegativeBinomial {
    fn default() -> Self {
        Self::new(3)
    }
}

impl GoalCountKernel for NegativeBinomial {
    fn pmf(&self, lambda: f64, k: u32) -> f64 {
        if lambda <= 0.0 {
            return point_mass_at_zero(k);
        }
        let r = f64::from(self.dispersion);
        match NegBinomialDist::new(r, r / (r + lambda)) {
            Ok(dist) => dist.pmf(u64::from(k)),
            Err(_) => point_mass_at_zero(k),
        }
    }
}

/// Poisson with an extra mass `zero_inflation` at zero goals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZeroInflatedPoisson {
    pub zero_inflation: f64,
}

impl ZeroInflatedPoisson {
    pub fn new(zero_inflation: f64) -> Self {
        Self { zero_inflation }
    }
}

impl GoalCountKernel for ZeroInflatedPoisson {
    fn pmf(&self, lambda: f64, k: u32) -> f64 {
        if lambda <= 0.0 {
            return point_mass_at_zero(k);
        }
        let p0 = self.zero_inflation;
        let poisson = match Poisson::new(lambda) {
            Ok(dist) => dist.pmf(u64::from(k)),
            Err(_) => point_mass_at_zero(k),
        };
        if k == 0 {
            p0 + (1.0 - p0) * poisson
        } else {
            (1.0 - p0) * poisson
        }
    }
}

fn point_mass_at_zero(k: u32) -> f64 {
    if k == 0 {
        1.0
    } else {
        0.0
    }
}
