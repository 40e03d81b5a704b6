use crate::FloatScalar;
use crate::special::{gamma_p, gamma_q};
use super::{standard_gamma_ln_pdf, standard_gamma_quantile, ContinuousDistribution, StatsError};

/// Chi-squared distribution with k degrees of freedom.
///
/// Special case of Gamma(k/2, 1/2): the CDF is P(k/2, x/2) and the survival
/// function Q(k/2, x/2), so p-values far out in the tail stay accurate.
///
/// # Example
///
/// ```
/// use gamma_ratio::stats::{ChiSquared, ContinuousDistribution};
///
/// let chi2 = ChiSquared::new(3.0_f64).unwrap();
/// assert!((chi2.mean() - 3.0).abs() < 1e-14);
/// assert!((chi2.variance() - 6.0).abs() < 1e-14);
///
/// // p-value of a 1-dof statistic of 30
/// let pv = ChiSquared::new(1.0_f64).unwrap().sf(30.0);
/// assert!((pv / 4.320463057827497e-8 - 1.0).abs() < 1e-13);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared<T> {
    k: T, // degrees of freedom
}

impl<T: FloatScalar> ChiSquared<T> {
    /// Create a chi-squared distribution with `k` degrees of freedom.
    /// Requires `k` finite and > 0.
    pub fn new(k: T) -> Result<Self, StatsError> {
        if k.is_nan() || k <= T::zero() || k.is_infinite() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { k })
    }

    /// Degrees of freedom k.
    pub fn dof(&self) -> T {
        self.k
    }

    #[inline]
    fn half_k(&self) -> T {
        self.k * T::lit(0.5)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for ChiSquared<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        if x == T::zero() {
            let two = T::lit(2.0);
            if self.k == two {
                return T::lit(0.5);
            } else if self.k > two {
                return T::zero();
            } else {
                return T::infinity();
            }
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        if x == T::zero() {
            return self.pdf(x).ln();
        }
        standard_gamma_ln_pdf(self.half_k(), x * T::lit(0.5)) - T::lit(core::f64::consts::LN_2)
    }

    fn cdf(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        if x <= T::zero() {
            return T::zero();
        }
        gamma_p(self.half_k(), x * T::lit(0.5))
    }

    fn sf(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        if x <= T::zero() {
            return T::one();
        }
        gamma_q(self.half_k(), x * T::lit(0.5))
    }

    fn quantile(&self, p: T) -> T {
        T::lit(2.0) * standard_gamma_quantile(self.half_k(), p)
    }

    fn mean(&self) -> T {
        self.k
    }

    fn variance(&self) -> T {
        let two = T::one() + T::one();
        two * self.k
    }
}
