use crate::FloatScalar;
use crate::special::{gamma_p, gamma_q, lgamma};
use super::{DiscreteDistribution, StatsError};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// The CDF and survival function are incomplete gamma ratios in the shape:
/// P(X ≤ k) = Q(k+1, λ) and P(X > k) = P(k+1, λ).
///
/// # Example
///
/// ```
/// use gamma_ratio::stats::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert!((p.variance() - 3.0).abs() < 1e-14);
/// assert!((p.cdf(2) - 0.42319008112684353).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`.
    /// Requires `lambda` finite and > 0.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if lambda.is_nan() || lambda <= T::zero() || lambda.is_infinite() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Rate λ.
    pub fn rate(&self) -> T {
        self.lambda
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        let one = T::one();
        let kf = T::lit(k as f64);
        kf * self.lambda.ln() - self.lambda - lgamma(kf + one)
    }

    fn cdf(&self, k: u64) -> T {
        gamma_q(T::lit(k as f64 + 1.0), self.lambda)
    }

    fn sf(&self, k: u64) -> T {
        gamma_p(T::lit(k as f64 + 1.0), self.lambda)
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }
}
